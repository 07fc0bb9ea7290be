use std::path::{Path, PathBuf};

use pathfinder_routing::{
    error::GridError, grid_map::GridMap, position::GridPosition, types::Cost,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapFileError {
    #[error("Failed to read map file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: missing {field}")]
    MissingLine { line: usize, field: &'static str },
    #[error("Line {line}: invalid {field}: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Line {line}: expected {expected} costs, found {actual}")]
    RowLength {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Line {line}: cost {value:?} is not a single digit")]
    InvalidCost { line: usize, value: String },
    #[error("The {point} point ({x}, {y}) is outside of the {width}x{height} map")]
    PointOutOfBounds {
        point: &'static str,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    MalformedGrid(#[from] GridError),
}

/// A map definition: the cost grid plus the requested start and goal cells.
///
/// The text format holds one value per line: width, height, start x, start y,
/// goal x and goal y, followed by `height` rows of `width` single digit costs
/// separated by whitespace. A cost of 0 marks a cell that cannot be entered.
#[derive(Debug, Clone)]
pub struct MapFile {
    pub grid: GridMap,
    pub start: GridPosition,
    pub goal: GridPosition,
}

struct Lines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            lines: text.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_line(&mut self, field: &'static str) -> Result<(usize, &'a str), MapFileError> {
        match self.lines.next() {
            Some((index, line)) => {
                self.last_line = index + 1;
                Ok((index + 1, line.trim()))
            }
            None => Err(MapFileError::MissingLine {
                line: self.last_line + 1,
                field,
            }),
        }
    }

    fn next_number<T: std::str::FromStr>(
        &mut self,
        field: &'static str,
    ) -> Result<T, MapFileError> {
        let (line, value) = self.next_line(field)?;
        value.parse().map_err(|_| MapFileError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        })
    }
}

impl MapFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapFileError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| MapFileError::Read {
                path: path.as_ref().to_path_buf(),
                source,
            })?;

        Self::parse(&content)
    }

    pub fn parse(text: &str) -> Result<Self, MapFileError> {
        let mut lines = Lines::new(text);

        let width: usize = lines.next_number("width")?;
        let height: usize = lines.next_number("height")?;
        let start = GridPosition::new(lines.next_number("start x")?, lines.next_number("start y")?);
        let goal = GridPosition::new(lines.next_number("goal x")?, lines.next_number("goal y")?);

        GridMap::cell_count(width, height)?;

        // Sized by the rows actually read
        let mut cells: Vec<Cost> = Vec::new();
        for _ in 0..height {
            let (line, row) = lines.next_line("map row")?;
            let costs: Vec<&str> = row.split_whitespace().collect();

            if costs.len() != width {
                return Err(MapFileError::RowLength {
                    line,
                    expected: width,
                    actual: costs.len(),
                });
            }

            for value in costs {
                cells.push(parse_cost(line, value)?);
            }
        }

        let grid = GridMap::new(width, height, cells)?;

        for (point, position) in [("start", start), ("goal", goal)] {
            if !grid.contains(position.x(), position.y()) {
                return Err(MapFileError::PointOutOfBounds {
                    point,
                    x: position.x(),
                    y: position.y(),
                    width,
                    height,
                });
            }
        }

        Ok(MapFile { grid, start, goal })
    }
}

fn parse_cost(line: usize, value: &str) -> Result<Cost, MapFileError> {
    let mut chars = value.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(cost), None) => Ok(cost),
        _ => Err(MapFileError::InvalidCost {
            line,
            value: value.to_string(),
        }),
    }
}
