use super::Error;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// One team's side of a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TeamScore {
    name: String,
    score: u32,
}

/// A football game, as read from one line of a scores file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    home: TeamScore,
    away: TeamScore,
}

/// The result of a game from one team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// Parses one line of a scores file into a game.
///
/// The line holds two team scores separated by a comma. Whitespace around the comma is ignored.
///
/// # Examples
///
/// ```
/// use league_table::parse_game;
/// let game = parse_game("FC Awesome 2 , SecondTeam 3").unwrap();
/// assert_eq!("FC Awesome", game.home().name());
/// assert_eq!(3, game.away().score());
/// assert!(parse_game("FirstTeam 4, FirstTeam 2").is_err());
/// ```
pub fn parse_game(line: &str) -> Result<Game, Error> {
    let segments: Vec<&str> = separator().split(line.trim()).collect();
    if segments.len() != 2 || segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(Error::InvalidGameLine(line.to_string()));
    }
    let home = parse_team_score(segments[0])?;
    let away = parse_team_score(segments[1])?;
    Game::new(home, away).map_err(|_| Error::SelfPlay(line.to_string()))
}

/// Parses a team name followed by its score, e.g. `My very good team 10`.
///
/// The last whitespace-delimited token is the score, everything before it is the name. Runs of
/// whitespace inside the name collapse to single spaces.
///
/// # Examples
///
/// ```
/// use league_table::parse_team_score;
/// let team_score = parse_team_score("  My   Team 5 ").unwrap();
/// assert_eq!("My Team", team_score.name());
/// assert_eq!(5, team_score.score());
/// assert!(parse_team_score("1 FirstTeam").is_err());
/// ```
pub fn parse_team_score(segment: &str) -> Result<TeamScore, Error> {
    let mut tokens: Vec<&str> = segment.split_whitespace().collect();
    let score = match tokens.pop() {
        Some(score) => score,
        None => return Err(Error::MissingScore(segment.to_string())),
    };
    if tokens.is_empty() {
        return if is_integer(score) {
            Err(Error::MissingTeamName(segment.to_string()))
        } else {
            Err(Error::MissingScore(segment.to_string()))
        };
    }
    let score = score
        .parse::<u32>()
        .map_err(|_| Error::InvalidScore(segment.to_string()))?;
    Ok(TeamScore {
        name: tokens.join(" "),
        score: score,
    })
}

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\s*,\s*").unwrap())
}

fn is_integer(token: &str) -> bool {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl TeamScore {
    /// Creates a new team score.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::TeamScore;
    /// let team_score = TeamScore::new("Lions", 3);
    /// assert_eq!("Lions", team_score.name());
    /// ```
    pub fn new(name: &str, score: u32) -> TeamScore {
        TeamScore {
            name: name.to_string(),
            score: score,
        }
    }

    /// Returns the team's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the goals this team scored.
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl FromStr for TeamScore {
    type Err = Error;

    fn from_str(s: &str) -> Result<TeamScore, Error> {
        parse_team_score(s)
    }
}

impl Game {
    /// Creates a new game between two different teams.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::{Game, TeamScore};
    /// let game = Game::new(TeamScore::new("Lions", 4), TeamScore::new("Grouches", 0)).unwrap();
    /// assert_eq!("Grouches", game.away().name());
    /// assert!(Game::new(TeamScore::new("Lions", 4), TeamScore::new("Lions", 0)).is_err());
    /// ```
    pub fn new(home: TeamScore, away: TeamScore) -> Result<Game, Error> {
        if home.name == away.name {
            return Err(Error::SelfPlay(home.name));
        }
        Ok(Game {
            home: home,
            away: away,
        })
    }

    /// Returns the first team on the line.
    pub fn home(&self) -> &TeamScore {
        &self.home
    }

    /// Returns the second team on the line.
    pub fn away(&self) -> &TeamScore {
        &self.away
    }

    /// Returns the home and away outcomes of this game.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_table::{Game, Outcome, TeamScore};
    /// let game = Game::new(TeamScore::new("Tarantulas", 1), TeamScore::new("FC Awesome", 0)).unwrap();
    /// assert_eq!((Outcome::Win, Outcome::Loss), game.outcomes());
    /// ```
    pub fn outcomes(&self) -> (Outcome, Outcome) {
        use std::cmp::Ordering;
        match self.home.score.cmp(&self.away.score) {
            Ordering::Greater => (Outcome::Win, Outcome::Loss),
            Ordering::Less => (Outcome::Loss, Outcome::Win),
            Ordering::Equal => (Outcome::Draw, Outcome::Draw),
        }
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Game, Error> {
        parse_game(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_team_scores() {
        for (segment, name, score) in &[
            ("MyTeam 10", "MyTeam", 10),
            ("My Team 5", "My Team", 5),
            ("My very good team 10", "My very good team", 10),
            ("\tSpaced   Out  7  ", "Spaced Out", 7),
            ("Team 7 10", "Team 7", 10),
        ] {
            let team_score = parse_team_score(segment).unwrap();
            assert_eq!(*name, team_score.name());
            assert_eq!(*score, team_score.score());
        }
    }

    #[test]
    fn invalid_team_scores() {
        match parse_team_score("FirstTeam One") {
            Err(Error::InvalidScore(segment)) => assert_eq!("FirstTeam One", segment),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_team_score("FirstTeam 10.7"),
            Err(Error::InvalidScore(_))
        ));
        assert!(matches!(
            parse_team_score("1 FirstTeam"),
            Err(Error::InvalidScore(_))
        ));
        assert!(matches!(
            parse_team_score("FirstTeam -2"),
            Err(Error::InvalidScore(_))
        ));
        assert!(matches!(
            parse_team_score("FirstTeam"),
            Err(Error::MissingScore(_))
        ));
        assert!(matches!(parse_team_score("   "), Err(Error::MissingScore(_))));
        assert!(matches!(
            parse_team_score(" 6 "),
            Err(Error::MissingTeamName(_))
        ));
    }

    #[test]
    fn valid_games() {
        for line in &[
            "FirstTeam 3, SecondTeam 5",
            "FirstTeam 2 , SecondTeam 3",
            "FirstTeam 4,SecondTeam 2",
            "FirstTeam 4 ,SecondTeam 2",
        ] {
            let game: Game = line.parse().unwrap();
            assert_eq!("FirstTeam", game.home().name());
            assert_eq!("SecondTeam", game.away().name());
        }
    }

    #[test]
    fn invalid_games() {
        match parse_game("FirstTeam 4, SecondTeam 2, ThirdTeam 6") {
            Err(Error::InvalidGameLine(line)) => {
                assert_eq!("FirstTeam 4, SecondTeam 2, ThirdTeam 6", line)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_game("SecondTeam 6"),
            Err(Error::InvalidGameLine(_))
        ));
        assert!(matches!(
            parse_game("FirstTeam 10.7"),
            Err(Error::InvalidGameLine(_))
        ));
        assert!(matches!(
            parse_game("FirstTeam 4, "),
            Err(Error::InvalidGameLine(_))
        ));
        assert!(matches!(
            parse_game("FirstTeam 4, FirstTeam 2"),
            Err(Error::SelfPlay(_))
        ));
        assert!(matches!(
            parse_game("FirstTeam 4, SecondTeam"),
            Err(Error::MissingScore(_))
        ));
    }

    #[test]
    fn self_play_is_case_sensitive() {
        assert!(parse_game("Lions 1, lions 1").is_ok());
    }

    #[test]
    fn outcomes() {
        let game = |home, away| {
            Game::new(TeamScore::new("A", home), TeamScore::new("B", away)).unwrap()
        };
        assert_eq!((Outcome::Win, Outcome::Loss), game(2, 1).outcomes());
        assert_eq!((Outcome::Loss, Outcome::Win), game(0, 3).outcomes());
        assert_eq!((Outcome::Draw, Outcome::Draw), game(4, 4).outcomes());
    }
}
