//! World data and the text map loader.
//!
//! Format, one record per line:
//! ```text
//! victory_point x y z
//! obstacle_aabb min_x min_y min_z max_x max_y max_z
//! ```
//! The victory point must come first. Blank lines and `#` comments are
//! ignored; other unrecognized lines are logged and skipped.

use std::fs;
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::config::FALLBACK_VICTORY_POINT;
use crate::math::Aabb;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map file is empty")]
    Empty,
    #[error("expected 'victory_point x y z' on the first line, got: {0}")]
    MissingVictoryPoint(String),
    #[error("line {line}: {reason}")]
    BadRecord { line: usize, reason: String },
}

/// Static level data. Obstacle order is load order; the collision
/// resolver walks the list sequentially, so reordering obstacles can
/// change contact resolution in corner cases.
#[derive(Clone, Debug)]
pub struct World {
    pub obstacles: Vec<Aabb>,
    pub victory_point: Vec3,
    /// False only for the fallback world; the win check is skipped
    /// when the map never loaded.
    pub loaded: bool,
}

impl World {
    pub fn new(obstacles: Vec<Aabb>, victory_point: Vec3) -> Self {
        Self {
            obstacles,
            victory_point,
            loaded: true,
        }
    }

    /// Empty world used when the map file cannot be loaded. The
    /// simulation runs normally against it; only the win check is
    /// disabled.
    pub fn fallback() -> Self {
        Self {
            obstacles: Vec::new(),
            victory_point: FALLBACK_VICTORY_POINT,
            loaded: false,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (first_no, first) = lines.next().ok_or(MapError::Empty)?;
        let victory_point = parse_victory_point(first_no, first)?;

        let mut obstacles = Vec::new();
        for (line_no, line) in lines {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("obstacle_aabb") => {
                    let v = parse_floats(line_no, fields, 6)?;
                    let min = Vec3::new(v[0], v[1], v[2]);
                    let max = Vec3::new(v[3], v[4], v[5]);
                    if min.x > max.x || min.y > max.y || min.z > max.z {
                        return Err(MapError::BadRecord {
                            line: line_no,
                            reason: "obstacle min exceeds max".to_string(),
                        });
                    }
                    obstacles.push(Aabb::new(min, max));
                }
                _ => {
                    log::warn!("skipping invalid map line {}: {}", line_no, line);
                }
            }
        }

        Ok(Self::new(obstacles, victory_point))
    }
}

fn parse_victory_point(line_no: usize, line: &str) -> Result<Vec3, MapError> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("victory_point") {
        return Err(MapError::MissingVictoryPoint(line.to_string()));
    }
    let v = parse_floats(line_no, fields, 3)?;
    Ok(Vec3::new(v[0], v[1], v[2]))
}

fn parse_floats<'a>(
    line_no: usize,
    fields: impl Iterator<Item = &'a str>,
    expected: usize,
) -> Result<Vec<f32>, MapError> {
    let values: Vec<f32> = fields
        .map(|f| {
            f.parse::<f32>().map_err(|_| MapError::BadRecord {
                line: line_no,
                reason: format!("not a number: {}", f),
            })
        })
        .collect::<Result<_, _>>()?;
    if values.len() != expected {
        return Err(MapError::BadRecord {
            line: line_no,
            reason: format!("expected {} values, got {}", expected, values.len()),
        });
    }
    Ok(values)
}
