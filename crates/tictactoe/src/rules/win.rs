//! Line detection for tic-tac-toe.

use super::super::{Board, Cell, Line, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A line holding three equal markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletedLine {
    /// Which line completed.
    pub line: Line,
    /// The marker filling it.
    pub marker: Marker,
}

/// Returns the marker filling `cells` if the line is complete.
///
/// The first cell must be non-empty, so three empty cells never count.
fn complete(cells: [Cell; 3]) -> Option<Marker> {
    let [first, second, third] = cells;
    match first {
        Cell::Marked(marker) if first == second && first == third => Some(marker),
        _ => None,
    }
}

/// Finds the first completed line in [`Line::SCAN_ORDER`].
///
/// Returns `None` when no line is complete, including on a full board;
/// draws are the caller's concern.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<CompletedLine> {
    for line in Line::SCAN_ORDER {
        if let Some(marker) = complete(board.line(line)) {
            debug!(%line, %marker, "Line found");
            return Some(CompletedLine { line, marker });
        }
    }

    debug!("No winning line detected");
    None
}
