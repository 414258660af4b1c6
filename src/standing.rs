use super::{Error, Game, Outcome};
use std::collections::HashMap;
use std::io::Write;

/// Points awarded for a win.
pub const WIN_POINTS: u32 = 3;
/// Points awarded for a draw.
pub const DRAW_POINTS: u32 = 1;
/// Points awarded for a loss.
pub const LOSS_POINTS: u32 = 0;

/// A team's place in the league table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    team: String,
    points: u32,
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    rank: usize,
    team: &'a str,
    points: u32,
}

impl Outcome {
    /// Returns the league points this outcome is worth.
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => WIN_POINTS,
            Outcome::Draw => DRAW_POINTS,
            Outcome::Loss => LOSS_POINTS,
        }
    }
}

impl Standing {
    /// Creates a new standing.
    pub fn new(team: &str, points: u32) -> Standing {
        Standing {
            team: team.to_string(),
            points: points,
        }
    }

    /// Returns the team's name.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Returns the team's accumulated points.
    pub fn points(&self) -> u32 {
        self.points
    }
}

/// Sums league points per team over some games.
///
/// Only teams that played at least one game appear in the result.
///
/// # Examples
///
/// ```
/// use league_table::{points, parse_game};
/// let games = vec![
///     parse_game("Lions 3, Snakes 3").unwrap(),
///     parse_game("Lions 4, Grouches 0").unwrap(),
/// ];
/// let points = points(&games).unwrap();
/// assert_eq!(4, points["Lions"]);
/// assert_eq!(0, points["Grouches"]);
/// ```
pub fn points(games: &[Game]) -> Result<HashMap<String, u32>, Error> {
    let mut points = HashMap::new();
    for game in games {
        let (home, away) = game.outcomes();
        award(&mut points, game.home().name(), home.points())?;
        award(&mut points, game.away().name(), away.points())?;
    }
    Ok(points)
}

/// Adds the points in `from` to the points in `into`, team by team.
///
/// # Examples
///
/// ```
/// use league_table::{merge, points, parse_game};
/// let mut first = points(&[parse_game("Lions 3, Snakes 3").unwrap()]).unwrap();
/// let second = points(&[parse_game("Lions 4, Grouches 0").unwrap()]).unwrap();
/// merge(&mut first, second).unwrap();
/// assert_eq!(4, first["Lions"]);
/// ```
pub fn merge(into: &mut HashMap<String, u32>, from: HashMap<String, u32>) -> Result<(), Error> {
    for (team, added) in from {
        award(into, &team, added)?;
    }
    Ok(())
}

fn award(points: &mut HashMap<String, u32>, team: &str, added: u32) -> Result<(), Error> {
    let total = points.entry(team.to_string()).or_insert(0);
    *total = total
        .checked_add(added)
        .ok_or_else(|| Error::PointsOverflow(team.to_string()))?;
    Ok(())
}

/// Orders teams by points, highest first, breaking ties by team name.
///
/// Names compare by their characters, so the ordering is case-sensitive.
pub fn rank(points: HashMap<String, u32>) -> Vec<Standing> {
    let mut standings: Vec<Standing> = points
        .into_iter()
        .map(|(team, points)| Standing { team, points })
        .collect();
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.team.cmp(&b.team))
    });
    standings
}

/// Returns the ranked standings for some games.
pub fn standings(games: &[Game]) -> Result<Vec<Standing>, Error> {
    points(games).map(rank)
}

/// Writes standings as a text table, one `1. Tarantulas, 6 pts` line per team.
///
/// # Examples
///
/// ```
/// use league_table::{write_table, Standing};
/// let mut buf = Vec::new();
/// write_table(&[Standing::new("Tarantulas", 6), Standing::new("Lions", 5)], &mut buf).unwrap();
/// assert_eq!("1. Tarantulas, 6 pts\n2. Lions, 5 pts\n", String::from_utf8(buf).unwrap());
/// ```
pub fn write_table<W: Write>(standings: &[Standing], mut writer: W) -> Result<(), failure::Error> {
    for (i, standing) in standings.iter().enumerate() {
        writeln!(writer, "{}. {}, {} pts", i + 1, standing.team, standing.points)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes standings as CSV with a `rank,team,points` header.
pub fn write_csv<W: Write>(standings: &[Standing], writer: W) -> Result<(), failure::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for (i, standing) in standings.iter().enumerate() {
        writer.serialize(Record {
            rank: i + 1,
            team: &standing.team,
            points: standing.points,
        })?;
    }
    writer.flush()?;
    Ok(())
}
