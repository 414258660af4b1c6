extern crate clap;
extern crate env_logger;
extern crate exitcode;
extern crate failure;
extern crate league_table;

use clap::{App, Arg};
use failure::Error;
use league_table::{Policy, Season};
use std::{io, process};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(exit_code(&err));
    }
}

fn run() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
    let matches = App::new("league-table")
        .about("Ranks teams from a file of match results")
        .arg(
            Arg::with_name("INFILE")
                .help("Sets the input scores file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("format")
                .help("Sets the output format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["table", "csv"])
                .default_value("table"),
        )
        .arg(
            Arg::with_name("skip-invalid")
                .help("Skips malformed lines instead of stopping at the first one")
                .long("skip-invalid"),
        )
        .get_matches();
    let infile = matches.value_of("INFILE").unwrap();
    let policy = if matches.is_present("skip-invalid") {
        Policy::SkipInvalid
    } else {
        Policy::FailFast
    };
    let season = Season::from_path(infile, policy)?;
    let standings = season.standings()?;
    let stdout = io::stdout();
    match matches.value_of("format") {
        Some("csv") => league_table::write_csv(&standings, stdout.lock()),
        _ => league_table::write_table(&standings, stdout.lock()),
    }
}

fn exit_code(err: &Error) -> i32 {
    match err.downcast_ref::<league_table::Error>() {
        Some(league_table::Error::FileAccess { .. }) => exitcode::NOINPUT,
        Some(league_table::Error::PointsOverflow(_)) => exitcode::SOFTWARE,
        Some(_) => exitcode::DATAERR,
        None => exitcode::IOERR,
    }
}
