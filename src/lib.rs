//! A library to compute league standings from plain-text match results.
//!
//! Each line of a scores file holds one game, e.g. `Lions 3, Snakes 3`. Games are parsed into
//! [Game]s, folded into points per team (win 3, draw 1, loss 0), and ranked into [Standing]s.
//!
//! # Examples
//!
//! ```
//! use league_table::{Policy, Season};
//! let season = Season::from_path("tests/data/scores.txt", Policy::FailFast).unwrap();
//! let standings = season.standings().unwrap();
//! assert_eq!("Tarantulas", standings[0].team());
//! ```

extern crate csv;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod game;
mod season;
mod standing;

pub use game::{parse_game, parse_team_score, Game, Outcome, TeamScore};
pub use season::{Policy, Season};
pub use standing::{
    merge, points, rank, standings, write_csv, write_table, Standing, DRAW_POINTS, LOSS_POINTS,
    WIN_POINTS,
};

use std::io;

/// Crate-specific errors.
#[derive(Debug, Fail)]
pub enum Error {
    /// This line did not split into exactly two team scores.
    #[fail(display = "invalid game line: {}", _0)]
    InvalidGameLine(String),

    /// Both sides of this line name the same team.
    #[fail(display = "team cannot play itself: {}", _0)]
    SelfPlay(String),

    /// This team score has no trailing score token.
    #[fail(display = "missing score: {}", _0)]
    MissingScore(String),

    /// The trailing token of this team score is not a non-negative integer.
    #[fail(display = "invalid score: {}", _0)]
    InvalidScore(String),

    /// This team score is only a number.
    #[fail(display = "missing team name: {}", _0)]
    MissingTeamName(String),

    /// The scores file could not be opened or read.
    #[fail(display = "could not read {}: {}", path, cause)]
    FileAccess {
        path: String,
        #[cause]
        cause: io::Error,
    },

    /// Adding this team's points would overflow.
    #[fail(display = "points overflow for team: {}", _0)]
    PointsOverflow(String),
}
