// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Floor-plan grid model and parser.
//!
//! A [`Grid`] is the validated `H×W` array of cell codes describing the
//! datacenter floor: free space, physical obstructions, and the duct
//! entry and exit points. Construction goes through validating
//! constructors only, so downstream components (graph construction, the
//! search) can assume every `Grid` is rectangular and carries exactly
//! one entry and one exit cell.
//!
//! # Input format
//!
//! The wire format is a header line `W H` (width, then height) followed
//! by `H` rows of `W` whitespace-separated integers:
//!
//! ```text
//! 0 = free space
//! 1 = obstruction
//! 2 = duct entry point
//! 3 = duct exit point
//! ```
//!
//! Blank lines between rows are tolerated; anything else malformed is a
//! fatal [`GridError`].

use std::io::BufRead;
use thiserror::Error;

/// One cell of the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Free space the duct must pass through.
    Free,
    /// Physical obstruction; never part of any route.
    Blocked,
    /// The duct entry point (exactly one per grid).
    Start,
    /// The duct exit point (exactly one per grid).
    End,
}

impl Cell {
    /// Decode a wire-format cell code.
    ///
    /// Returns `None` for codes outside `0..=3`.
    pub fn from_code(code: u32) -> Option<Cell> {
        match code {
            0 => Some(Cell::Free),
            1 => Some(Cell::Blocked),
            2 => Some(Cell::Start),
            3 => Some(Cell::End),
            _ => None,
        }
    }

    /// Whether a route can occupy this cell.
    ///
    /// Every traversable cell must appear on a valid route exactly once.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Cell::Blocked)
    }
}

/// Errors raised while reading or validating a floor plan.
///
/// All of these are fatal precondition violations: the caller gets no
/// partially constructed grid, and no recovery is attempted.
#[derive(Debug, Error)]
pub enum GridError {
    /// Underlying I/O failure while reading the input stream.
    #[error("failed to read grid input")]
    Io(#[from] std::io::Error),

    /// The input ended before the `W H` header line.
    #[error("missing grid header (expected \"W H\")")]
    MissingHeader,

    /// The header line did not contain exactly two integers.
    #[error("malformed grid header {0:?} (expected \"W H\")")]
    MalformedHeader(String),

    /// Zero-width or zero-height grids are rejected outright.
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// The input ended before all declared rows were read.
    #[error("missing row {row}: header declared {expected} rows")]
    MissingRow { row: usize, expected: usize },

    /// A row carried the wrong number of cells.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token in a row was not an integer at all.
    #[error("row {row} contains {token:?}, expected an integer cell code")]
    InvalidToken { row: usize, token: String },

    /// An integer cell code outside `0..=3`.
    #[error("invalid cell code {code} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, code: u32 },

    /// No entry-point cell in the grid.
    #[error("grid has no entry point (cell code 2)")]
    MissingStart,

    /// A second entry-point cell was found.
    #[error("duplicate entry point at row {row}, column {col}")]
    DuplicateStart { row: usize, col: usize },

    /// No exit-point cell in the grid.
    #[error("grid has no exit point (cell code 3)")]
    MissingEnd,

    /// A second exit-point cell was found.
    #[error("duplicate exit point at row {row}, column {col}")]
    DuplicateEnd { row: usize, col: usize },
}

/// A validated rectangular floor plan.
///
/// Immutable after construction. Cells are stored row-major; `(row, col)`
/// indices satisfy `row < height()`, `col < width()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Grid {
    /// Read and validate a grid from the wire format.
    ///
    /// See the module documentation for the format. Any malformation is
    /// reported as a [`GridError`] naming the offending row/column.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Grid, GridError> {
        let header = match next_nonblank_line(&mut reader)? {
            Some(line) => line,
            None => return Err(GridError::MissingHeader),
        };
        let dims: Vec<&str> = header.split_whitespace().collect();
        let (width, height) = match dims.as_slice() {
            [w, h] => match (w.parse::<usize>(), h.parse::<usize>()) {
                (Ok(w), Ok(h)) => (w, h),
                _ => return Err(GridError::MalformedHeader(header.clone())),
            },
            _ => return Err(GridError::MalformedHeader(header.clone())),
        };
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let line = match next_nonblank_line(&mut reader)? {
                Some(line) => line,
                None => {
                    return Err(GridError::MissingRow {
                        row,
                        expected: height,
                    })
                }
            };
            rows.push(parse_row(row, width, &line)?);
        }

        Grid::from_rows(rows)
    }

    /// Build a grid from already-decoded rows.
    ///
    /// Validates rectangularity and the exactly-one entry / exactly-one
    /// exit requirement. The expected row width is taken from the first
    /// row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut end = None;
        for (row, row_cells) in rows.iter().enumerate() {
            if row_cells.len() != width {
                return Err(GridError::RowLength {
                    row,
                    expected: width,
                    found: row_cells.len(),
                });
            }
            for (col, &cell) in row_cells.iter().enumerate() {
                match cell {
                    Cell::Start if start.is_some() => {
                        return Err(GridError::DuplicateStart { row, col })
                    }
                    Cell::Start => start = Some((row, col)),
                    Cell::End if end.is_some() => {
                        return Err(GridError::DuplicateEnd { row, col })
                    }
                    Cell::End => end = Some((row, col)),
                    _ => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        Ok(Grid {
            width,
            height,
            cells,
            start,
            end,
        })
    }

    /// Grid width (cells per row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Position of the duct entry point.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Position of the duct exit point.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Number of traversable cells.
    ///
    /// Every valid route must occupy exactly this many cells, so a
    /// traversable cell sealed off by obstructions makes the count of
    /// valid routes zero.
    pub fn traversable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_traversable()).count()
    }
}

/// Read lines until a non-blank one appears; `None` at end of input.
fn next_nonblank_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, GridError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return Ok(Some(line.trim_end().to_string()));
        }
    }
}

/// Decode one row line into cells, enforcing the declared width.
fn parse_row(row: usize, width: usize, line: &str) -> Result<Vec<Cell>, GridError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != width {
        return Err(GridError::RowLength {
            row,
            expected: width,
            found: tokens.len(),
        });
    }
    tokens
        .iter()
        .enumerate()
        .map(|(col, token)| {
            let code = token.parse::<u32>().map_err(|_| GridError::InvalidToken {
                row,
                token: token.to_string(),
            })?;
            Cell::from_code(code).ok_or(GridError::InvalidCell { row, col, code })
        })
        .collect()
}
