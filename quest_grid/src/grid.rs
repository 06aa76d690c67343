//! The rectangular tile grid and its validation rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by grid construction, replacement, and restore.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid had no rows or no columns.
    #[error("grid must contain at least one row and one column")]
    Empty,

    /// A row did not match the width of the first row.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Restore was called before any snapshot was taken.
    #[error("no snapshot has been taken")]
    NoSnapshot,
}

/// A rectangular grid of cells addressed by (x, y) coordinates.
///
/// The origin is the top-left cell; x grows rightward along a row and y
/// grows downward across rows. `get` and `set` address the same cell for
/// the same coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
    width: usize,
    height: usize,
    saved: Option<Vec<Vec<T>>>,
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Build a grid from rows of cells.
    ///
    /// The input must have at least one row and one column, and every row
    /// must be the same length. Nothing is constructed on failure.
    pub fn new(cells: Vec<Vec<T>>) -> Result<Self, GridError> {
        Self::validate(&cells)?;
        let width = cells[0].len();
        let height = cells.len();
        Ok(Self {
            cells,
            width,
            height,
            saved: None,
        })
    }

    fn validate(cells: &[Vec<T>]) -> Result<(), GridError> {
        let Some(first) = cells.first() else {
            return Err(GridError::Empty);
        };
        if first.is_empty() {
            return Err(GridError::Empty);
        }

        let expected = first.len();
        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    len: row_cells.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height), cached at construction or the last replacement.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether (x, y) lies within the grid.
    ///
    /// Coordinates are signed so callers can probe past an edge without
    /// underflow gymnastics.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// The cell at (x, y), or None when out of bounds.
    ///
    /// Out of range is an expected probe result during placement and
    /// pathfinding checks, not a fault.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if self.contains(x, y) {
            Some(&self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Write the cell at (x, y). Returns whether the write happened.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        if self.contains(x, y) {
            self.cells[y as usize][x as usize] = value;
            true
        } else {
            false
        }
    }

    /// Swap in a new cell buffer after validating it like `new`.
    ///
    /// On failure the current grid is left untouched and the validation
    /// error is returned.
    pub fn replace(&mut self, cells: Vec<Vec<T>>) -> Result<(), GridError> {
        Self::validate(&cells)?;
        self.width = cells[0].len();
        self.height = cells.len();
        self.cells = cells;
        Ok(())
    }

    /// Capture the current cells as the restore point, overwriting any
    /// previous snapshot.
    pub fn snapshot(&mut self) {
        self.saved = Some(self.cells.clone());
    }

    /// Replace the current cells with the last snapshot.
    ///
    /// Dimensions revert to those in effect when the snapshot was taken.
    pub fn restore(&mut self) -> Result<(), GridError> {
        let saved = self.saved.as_ref().ok_or(GridError::NoSnapshot)?;
        self.cells = saved.clone();
        self.width = self.cells[0].len();
        self.height = self.cells.len();
        Ok(())
    }

    /// Coordinates of every cell equal to `value`, scanning rows top to
    /// bottom and columns left to right.
    pub fn find(&self, value: &T) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, cell)| {
                    if cell == value {
                        Some((x as i32, y as i32))
                    } else {
                        None
                    }
                })
            })
            .collect()
    }

    /// Read-only view of the rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(Grid::<i32>::new(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![Vec::<i32>::new()]), Err(GridError::Empty));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Grid::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(sample().dimensions(), (2, 2));

        let wide = Grid::new(vec![vec![0; 4]; 3]).unwrap();
        assert_eq!(wide.dimensions(), (4, 3));
        assert_eq!(wide.width(), 4);
        assert_eq!(wide.height(), 3);
    }

    #[test]
    fn test_contains_handles_boundary_probes() {
        let grid = sample();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(1, 1));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(2, 0));
        assert!(!grid.contains(0, 2));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = sample();
        assert_eq!(grid.get(1, 0), Some(&2));
        assert_eq!(grid.get(0, 1), Some(&3));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(-1, -1), None);
    }

    #[test]
    fn test_set_and_get_address_the_same_cell() {
        // 3 wide, 2 tall, so a transposed address falls out of bounds
        let mut grid = Grid::new(vec![vec![0; 3], vec![0; 3]]).unwrap();

        assert!(grid.set(2, 1, 9));
        assert_eq!(grid.get(2, 1), Some(&9));
        assert_eq!(grid.get(1, 2), None);
        assert!(!grid.set(0, 5, 7));
    }

    #[test]
    fn test_replace_revalidates() {
        let mut grid = sample();

        let err = grid.replace(vec![vec![1], vec![2, 3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                len: 2,
                expected: 1
            }
        );
        // prior state untouched
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.get(0, 0), Some(&1));

        grid.replace(vec![vec![7, 8, 9]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 1));
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut grid = sample();
        grid.snapshot();
        grid.set(0, 0, 99);
        grid.set(1, 1, 99);

        grid.restore().unwrap();
        assert_eq!(grid.rows().to_vec(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_snapshot_is_a_deep_copy() {
        let mut grid = sample();
        grid.snapshot();
        grid.set(0, 0, 42);
        grid.snapshot();
        grid.set(0, 0, 7);

        grid.restore().unwrap();
        assert_eq!(grid.get(0, 0), Some(&42));
    }

    #[test]
    fn test_restore_without_snapshot_fails() {
        let mut grid = sample();
        assert_eq!(grid.restore(), Err(GridError::NoSnapshot));
    }

    #[test]
    fn test_restore_recovers_pre_replace_dimensions() {
        let mut grid = sample();
        grid.snapshot();
        grid.replace(vec![vec![9, 9, 9]]).unwrap();

        grid.restore().unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.get(1, 1), Some(&4));
    }

    #[test]
    fn test_find_scans_in_row_major_order() {
        let grid = Grid::new(vec![vec!["a", "b"], vec!["b", "a"]]).unwrap();
        assert_eq!(grid.find(&"b"), vec![(1, 0), (0, 1)]);
        assert_eq!(grid.find(&"z"), Vec::<(i32, i32)>::new());
    }

    #[test]
    fn test_find_reports_every_occurrence() {
        let grid = Grid::new(vec![vec![5, 5], vec![5, 1]]).unwrap();
        assert_eq!(grid.find(&5), vec![(0, 0), (1, 0), (0, 1)]);
    }
}
