//! Cell-record sinks

use std::fmt;

use crate::registry::StyleHandle;

/// Zero-based cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoordinate {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellCoordinate {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA)
    pub fn column_letters(col: u16) -> String {
        let mut letters = Vec::new();
        let mut n = col as u32 + 1;
        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }
        letters.iter().rev().map(|&b| b as char).collect()
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row as u64 + 1)
    }
}

impl From<(u32, u16)> for CellCoordinate {
    fn from((row, col): (u32, u16)) -> Self {
        Self::new(row, col)
    }
}

/// Receives the style handle chosen for each cell
pub trait CellStyleSink {
    fn accept(&mut self, cell: CellCoordinate, handle: StyleHandle);
}

impl CellStyleSink for Vec<(CellCoordinate, StyleHandle)> {
    fn accept(&mut self, cell: CellCoordinate, handle: StyleHandle) {
        self.push((cell, handle));
    }
}

impl<S: CellStyleSink + ?Sized> CellStyleSink for &mut S {
    fn accept(&mut self, cell: CellCoordinate, handle: StyleHandle) {
        (**self).accept(cell, handle);
    }
}
