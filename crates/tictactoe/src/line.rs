//! The eight winning lines and their scan order.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Index of a row or column. Only three exist, so every [`Line`] is on the
/// board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum LineIndex {
    /// Top row or left column.
    #[display("0")]
    Zero,
    /// Middle row or column.
    #[display("1")]
    One,
    /// Bottom row or right column.
    #[display("2")]
    Two,
}

impl LineIndex {
    /// Numeric value, 0 to 2.
    pub fn value(self) -> usize {
        match self {
            LineIndex::Zero => 0,
            LineIndex::One => 1,
            LineIndex::Two => 2,
        }
    }
}

/// A straight line of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Horizontal line at the given row.
    #[display("row {}", _0)]
    Row(LineIndex),
    /// Vertical line at the given column.
    #[display("column {}", _0)]
    Column(LineIndex),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Bottom-left to top-right.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order: rows, then columns, then diagonals.
    ///
    /// When several lines complete at once, the first one here wins.
    pub const SCAN_ORDER: [Line; 8] = [
        Line::Row(LineIndex::Zero),
        Line::Row(LineIndex::One),
        Line::Row(LineIndex::Two),
        Line::Column(LineIndex::Zero),
        Line::Column(LineIndex::One),
        Line::Column(LineIndex::Two),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The (row, column) coordinates of the line, first cell first.
    ///
    /// The anti-diagonal starts at the bottom-left cell.
    pub fn coordinates(self) -> [(usize, usize); 3] {
        match self {
            Line::Row(r) => {
                let r = r.value();
                [(r, 0), (r, 1), (r, 2)]
            }
            Line::Column(c) => {
                let c = c.value();
                [(0, c), (1, c), (2, c)]
            }
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(2, 0), (1, 1), (0, 2)],
        }
    }

    /// Checks if the line passes through the given cell.
    pub fn contains(self, row: usize, column: usize) -> bool {
        self.coordinates().contains(&(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scan_order_rows_then_columns_then_diagonals() {
        let kinds: Vec<u8> = Line::SCAN_ORDER
            .iter()
            .map(|line| match line {
                Line::Row(_) => 0,
                Line::Column(_) => 1,
                Line::MainDiagonal | Line::AntiDiagonal => 2,
            })
            .collect();
        assert!(kinds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_center_is_on_four_lines() {
        let through_center = Line::SCAN_ORDER
            .iter()
            .filter(|line| line.contains(1, 1))
            .count();
        assert_eq!(through_center, 4);
    }

    #[test]
    fn test_every_line_stays_on_the_board() {
        for line in Line::SCAN_ORDER {
            assert!(line.coordinates().iter().all(|&(r, c)| r < 3 && c < 3));
        }
        let values: Vec<usize> = LineIndex::iter().map(LineIndex::value).collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_display_uses_numeric_index() {
        assert_eq!(Line::Row(LineIndex::Zero).to_string(), "row 0");
        assert_eq!(Line::Column(LineIndex::Two).to_string(), "column 2");
    }
}
