//! Row-major 2-D grid backed by a flat Vec

use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid from text rows, converting every character with `cell`.
    ///
    /// All rows must have the same number of characters.
    pub fn parse<'s, I, F>(rows: I, mut cell: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'s str>,
        F: FnMut(char) -> Result<T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            for (col_idx, c) in row.chars().enumerate() {
                let value = cell(c).map_err(|e| {
                    anyhow::anyhow!("(line {}, column {}) {}", row_idx + 1, col_idx + 1, e)
                })?;
                cells.push(value);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    bail!("(line {}) expected {} columns, found {}", row_idx + 1, w, row_width)
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.height && col < self.width).then(|| &self.cells[row * self.width + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.height && col < self.width, "({row}, {col}) outside grid");
        self.cells[row * self.width + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |r| self.row(r))
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        (0..self.height).map(move |r| &self.cells[r * self.width + col])
    }

    /// Every cell with its `(row, col)` position, row by row
    pub fn positions(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / self.width, i % self.width), v))
    }

    /// In-bounds 8-connected neighbours of `(row, col)`
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Like [`Grid::parse`], but short rows are padded with `fill` up to the widest row
    pub fn parse_padded<'s, I, F>(rows: I, fill: T, mut cell: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'s str>,
        F: FnMut(char) -> Result<T>,
    {
        let mut parsed: Vec<Vec<T>> = Vec::new();
        for (row_idx, row) in rows.into_iter().enumerate() {
            let values = row
                .chars()
                .enumerate()
                .map(|(col_idx, c)| {
                    cell(c).map_err(|e| {
                        anyhow::anyhow!("(line {}, column {}) {}", row_idx + 1, col_idx + 1, e)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            parsed.push(values);
        }

        let width = parsed.iter().map(Vec::len).max().unwrap_or(0);
        let height = parsed.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in parsed {
            row.resize(width, fill.clone());
            cells.extend(row);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }
}
