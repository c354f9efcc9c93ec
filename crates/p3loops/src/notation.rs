//! Text notation for points, edges, and paths.
//!
//! - generator: a side name (`n`, `north`, ... case-insensitive) with an optional zone
//!   number (`n1`, `north1`; zone 0 when omitted);
//! - boundary point: `generator@percent`, percent in `0..=100`;
//! - interior point: `(south, east)`, both in percent;
//! - edge: `point -> point`;
//! - path: edges separated by `;` or newlines.

use std::fmt;

use crate::domain::{Domain, GeneratorId, Side};
use crate::error::StructuralError;
use crate::point::{Edge, Point};

#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    UnknownSide(String),
    UnknownZone { side: Side, zone: usize },
    BadNumber(String),
    /// A token lacked its separator (`@` in a point, `->` in an edge).
    Malformed(String),
    Structural(StructuralError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSide(s) => write!(f, "unknown side: {s:?}"),
            Self::UnknownZone { side, zone } => write!(f, "no zone {zone} on the {side} side"),
            Self::BadNumber(s) => write!(f, "not a number: {s:?}"),
            Self::Malformed(s) => write!(f, "malformed token: {s:?}"),
            Self::Structural(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<StructuralError> for ParseError {
    fn from(e: StructuralError) -> Self {
        Self::Structural(e)
    }
}

pub fn parse_side(s: &str) -> Result<Side, ParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "n" | "north" => Ok(Side::North),
        "e" | "east" => Ok(Side::East),
        "s" | "south" => Ok(Side::South),
        "w" | "west" => Ok(Side::West),
        _ => Err(ParseError::UnknownSide(s.trim().to_string())),
    }
}

pub fn parse_generator(domain: &Domain, s: &str) -> Result<GeneratorId, ParseError> {
    let s = s.trim();
    let split = s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let side = parse_side(&s[..split])?;
    let zone = match &s[split..] {
        "" => 0,
        digits => digits
            .parse::<usize>()
            .map_err(|_| ParseError::BadNumber(digits.to_string()))?,
    };
    domain
        .find(side, zone)
        .ok_or(ParseError::UnknownZone { side, zone })
}

fn parse_percent(s: &str) -> Result<f64, ParseError> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|_| ParseError::BadNumber(s.to_string()))
}

pub fn parse_point(domain: &Domain, s: &str) -> Result<Point<f64>, ParseError> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        let (south, east) = inner
            .split_once(',')
            .ok_or_else(|| ParseError::Malformed(s.to_string()))?;
        let (south, east) = (parse_percent(south)? / 100.0, parse_percent(east)? / 100.0);
        let open = |x: f64| x > 0.0 && x < 1.0;
        if !open(south) || !open(east) {
            return Err(StructuralError::InteriorOutOfRange { south, east }.into());
        }
        return Ok(Point::interior(south, east));
    }
    let (g, pct) = s
        .split_once('@')
        .ok_or_else(|| ParseError::Malformed(s.to_string()))?;
    let generator = parse_generator(domain, g)?;
    let param = parse_percent(pct)? / 100.0;
    if !(0.0..=1.0).contains(&param) {
        return Err(StructuralError::ParamOutOfRange { generator, param }.into());
    }
    Ok(Point::boundary(generator, param))
}

pub fn parse_edge(domain: &Domain, s: &str) -> Result<Edge<f64>, ParseError> {
    let (a, b) = s
        .split_once("->")
        .ok_or_else(|| ParseError::Malformed(s.trim().to_string()))?;
    Ok(Edge::new(parse_point(domain, a)?, parse_point(domain, b)?))
}

pub fn parse_path(domain: &Domain, s: &str) -> Result<Vec<Edge<f64>>, ParseError> {
    s.split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_edge(domain, t))
        .collect()
}

/// Generator name; the zone is only spelled out when sides are subdivided.
pub fn generator_name(domain: &Domain, g: GeneratorId) -> String {
    match domain.generator(g) {
        Ok(gen) if domain.zones() > 1 => format!("{}{}", gen.side, gen.zone),
        Ok(gen) => gen.side.to_string(),
        Err(_) => format!("g{}", g.0),
    }
}

pub fn format_point(domain: &Domain, p: &Point<f64>) -> String {
    match p {
        Point::Boundary(b) => format!("{}@{}", generator_name(domain, b.generator), b.pos * 100.0),
        Point::Interior(ip) => format!("({}, {})", ip.south * 100.0, ip.east * 100.0),
    }
}

pub fn format_edge(domain: &Domain, e: &Edge<f64>) -> String {
    format!("{} -> {}", format_point(domain, &e.from), format_point(domain, &e.to))
}

pub fn format_path(domain: &Domain, edges: &[Edge<f64>]) -> String {
    edges
        .iter()
        .map(|e| format_edge(domain, e))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_parse_like_the_short_and_long_names() {
        assert_eq!(parse_side("n").unwrap(), Side::North);
        assert_eq!(parse_side("NORTH").unwrap(), Side::North);
        assert_eq!(parse_side(" East ").unwrap(), Side::East);
        assert_eq!(parse_side("s").unwrap(), Side::South);
        assert_eq!(parse_side("West").unwrap(), Side::West);
        assert!(matches!(parse_side("up"), Err(ParseError::UnknownSide(_))));
    }

    #[test]
    fn points_edges_and_paths() {
        let d = Domain::quarter_turn_square().unwrap();
        assert_eq!(
            parse_point(&d, "north@25").unwrap(),
            Point::boundary(GeneratorId(0), 0.25)
        );
        assert_eq!(
            parse_point(&d, "(50, 25)").unwrap(),
            Point::interior(0.5, 0.25)
        );
        let path = parse_path(&d, "south@10 -> east@30; n@30 -> w@10\n").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[1].to, Point::boundary(GeneratorId(3), 0.1));
        assert_eq!(
            format_path(&d, &path),
            "south@10 -> east@30; north@30 -> west@10"
        );
    }

    #[test]
    fn rejects_bad_input() {
        let d = Domain::quarter_turn_square().unwrap();
        assert!(matches!(
            parse_point(&d, "north@101"),
            Err(ParseError::Structural(StructuralError::ParamOutOfRange { .. }))
        ));
        assert!(matches!(
            parse_point(&d, "north@-1"),
            Err(ParseError::Structural(_))
        ));
        assert!(matches!(parse_point(&d, "north"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse_point(&d, "north@x"), Err(ParseError::BadNumber(_))));
        assert!(matches!(
            parse_point(&d, "n1@10"),
            Err(ParseError::UnknownZone { zone: 1, .. })
        ));
        assert!(matches!(parse_edge(&d, "n@10 e@20"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse_point(&d, "(0, 50)"), Err(ParseError::Structural(_))));
    }

    #[test]
    fn zones_are_named_when_sides_are_split() {
        let d = Domain::half_turn_square().unwrap();
        let p = parse_point(&d, "east1@50").unwrap();
        assert_eq!(p.generator(), d.find(Side::East, 1));
        assert_eq!(format_point(&d, &p), "east1@50");
    }
}
