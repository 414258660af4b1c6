use super::{parse_game, points, standings, Error, Game, Standing};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do when a line of a scores file cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Stop at the first bad line and return its error.
    FailFast,
    /// Log a warning for each bad line and keep going.
    SkipInvalid,
}

impl Default for Policy {
    fn default() -> Policy {
        Policy::FailFast
    }
}

/// A season of games, read from a scores file.
#[derive(Debug)]
pub struct Season {
    games: Vec<Game>,
    skipped: usize,
}

impl Season {
    /// Reads a season from a path on the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::{Policy, Season};
    /// let season = Season::from_path("tests/data/scores.txt", Policy::FailFast).unwrap();
    /// assert_eq!(5, season.games().len());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P, policy: Policy) -> Result<Season, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|cause| Error::FileAccess {
            path: path.display().to_string(),
            cause: cause,
        })?;
        read(BufReader::new(file), policy, &path.display().to_string())
    }

    /// Reads a season from anything that yields lines.
    ///
    /// Blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::{Policy, Season};
    /// let input = "Lions 3, Snakes 3\n\nnot a game\nLions 4, Grouches 0\n";
    /// let season = Season::from_reader(input.as_bytes(), Policy::SkipInvalid).unwrap();
    /// assert_eq!(2, season.games().len());
    /// assert_eq!(1, season.skipped());
    /// assert!(Season::from_reader(input.as_bytes(), Policy::FailFast).is_err());
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, policy: Policy) -> Result<Season, Error> {
        read(reader, policy, "<input>")
    }

    /// Returns this season's games as a slice.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Returns the number of bad lines that were skipped while reading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns each team's points over the season.
    pub fn points(&self) -> Result<HashMap<String, u32>, Error> {
        points(&self.games)
    }

    /// Returns this season's ranked standings.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::{Policy, Season};
    /// let season = Season::from_path("tests/data/scores.txt", Policy::FailFast).unwrap();
    /// let standings = season.standings().unwrap();
    /// assert_eq!(("Lions", 5), (standings[1].team(), standings[1].points()));
    /// ```
    pub fn standings(&self) -> Result<Vec<Standing>, Error> {
        standings(&self.games)
    }
}

fn read<R: BufRead>(reader: R, policy: Policy, source: &str) -> Result<Season, Error> {
    let mut games = Vec::new();
    let mut skipped = 0;
    for (i, result) in reader.lines().enumerate() {
        let line = result.map_err(|cause| Error::FileAccess {
            path: source.to_string(),
            cause: cause,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_game(&line) {
            Ok(game) => {
                debug!("{}:{}: {:?}", source, i + 1, game);
                games.push(game);
            }
            Err(err) => match policy {
                Policy::FailFast => {
                    debug!("{}:{}: stopping: {}", source, i + 1, err);
                    return Err(err);
                }
                Policy::SkipInvalid => {
                    warn!("{}:{}: skipping: {}", source, i + 1, err);
                    skipped += 1;
                }
            },
        }
    }
    info!(
        "read {} games from {} ({} skipped)",
        games.len(),
        source,
        skipped
    );
    Ok(Season {
        games: games,
        skipped: skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_games() {
        let season = Season::from_path("tests/data/scores.txt", Policy::FailFast).unwrap();
        assert_eq!(5, season.games().len());
        assert_eq!(0, season.skipped());
        let first = &season.games()[0];
        assert_eq!("Lions", first.home().name());
        assert_eq!("Snakes", first.away().name());
    }

    #[test]
    fn standings() {
        let season = Season::from_path("tests/data/scores.txt", Policy::FailFast).unwrap();
        let standings = season.standings().unwrap();
        let table: Vec<(&str, u32)> = standings
            .iter()
            .map(|standing| (standing.team(), standing.points()))
            .collect();
        assert_eq!(
            vec![
                ("Tarantulas", 6),
                ("Lions", 5),
                ("FC Awesome", 1),
                ("Snakes", 1),
                ("Grouches", 0)
            ],
            table
        );
    }

    #[test]
    fn missing_file() {
        match Season::from_path("file/path/doesnt/exist", Policy::FailFast) {
            Err(Error::FileAccess { path, .. }) => assert_eq!("file/path/doesnt/exist", path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn fail_fast_returns_first_error() {
        let input = "Lions 3, Snakes 3\nLions 1, Lions 1\nA 1, B 2, C 3\n";
        match Season::from_reader(input.as_bytes(), Policy::FailFast) {
            Err(Error::SelfPlay(line)) => assert_eq!("Lions 1, Lions 1", line),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            Season::from_path("tests/data/invalid.txt", Policy::default()),
            Err(Error::SelfPlay(_))
        ));
    }

    #[test]
    fn skip_invalid_keeps_good_lines() {
        let season = Season::from_path("tests/data/invalid.txt", Policy::SkipInvalid).unwrap();
        assert_eq!(3, season.games().len());
        assert_eq!(1, season.skipped());
        let points = season.points().unwrap();
        assert_eq!(6, points["Tarantulas"]);
        assert!(!points.contains_key("Grouches"));
    }

    #[test]
    fn blank_lines() {
        let season =
            Season::from_reader("\n  \nLions 3, Snakes 3\n\n".as_bytes(), Policy::FailFast)
                .unwrap();
        assert_eq!(1, season.games().len());
    }
}
