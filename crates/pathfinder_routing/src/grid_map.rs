use crate::{error::GridError, types::Cost};

/// Rectangular grid of cell costs where 0 marks an impassable cell.
///
/// Cells are stored row-major, `cells[y * width + x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cost>,
}

impl GridMap {
    pub fn new(width: usize, height: usize, cells: Vec<Cost>) -> Result<Self, GridError> {
        let expected = Self::cell_count(width, height)?;

        if cells.len() != expected {
            return Err(GridError::MalformedGrid {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }

        Ok(GridMap {
            width,
            height,
            cells,
        })
    }

    /// Number of cells of a `width` x `height` grid, rejecting empty grids and
    /// dimensions whose coordinates do not fit in an `i32`.
    pub fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridError::TooLarge { width, height });
        }

        width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })
    }

    /// Builds a grid from rows of equal length, the first row being `y = 0`.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        GridMap::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Cost of moving into the cell, `None` outside of the grid.
    pub fn cost(&self, x: i32, y: i32) -> Option<Cost> {
        self.index(x, y).map(|index| self.cells[index])
    }

    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.cost(x, y).is_some_and(|cost| cost > 0)
    }

    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&cost| cost > 0).count()
    }
}
