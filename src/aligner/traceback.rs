use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aligner::alignment::AlignedPair;
use crate::aligner::matrix::DpMatrix;
use crate::errors::NwError;

/// The predecessor cell that produced the optimal score of a cell in the score matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Origin of the matrix, only valid for cell (0, 0)
    #[default]
    Start,

    /// Came from (row - 1, col - 1): both elements are aligned to each other
    Diag,

    /// Came from (row - 1, col): the left element is aligned to a gap
    Up,

    /// Came from (row, col - 1): the top element is aligned to a gap
    Left,
}

impl Direction {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Start => "x",
            Self::Diag => "⬉",
            Self::Up => "↑",
            Self::Left => "←",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.symbol())
    }
}

/// Follow the traceback matrix from the bottom-right cell back to the origin.
///
/// Returns the aligned pairs in sequence order. A direction that is not valid for the cell it is
/// stored in means the matrix was built incorrectly, and is reported as an error instead of
/// returning a truncated alignment.
pub fn backtrace(traceback: &DpMatrix<Direction>) -> Result<Vec<AlignedPair>, NwError> {
    let (Some(mut row), Some(mut col)) = (traceback.rows().checked_sub(1), traceback.cols().checked_sub(1)) else {
        return Err(NwError::EmptyTraceback);
    };

    let mut pairs = Vec::with_capacity(row + col);
    while row > 0 || col > 0 {
        let direction = traceback[(row, col)];

        match direction {
            Direction::Diag if row > 0 && col > 0 => {
                pairs.push(AlignedPair::new(Some(row - 1), Some(col - 1)));
                row -= 1;
                col -= 1;
            },
            Direction::Left if col > 0 => {
                pairs.push(AlignedPair::new(None, Some(col - 1)));
                col -= 1;
            },
            Direction::Up if row > 0 => {
                pairs.push(AlignedPair::new(Some(row - 1), None));
                row -= 1;
            },
            _ => return Err(NwError::InvalidTraceback { row, col, direction })
        }
    }

    trace!(steps = pairs.len(), "traceback reached origin");

    pairs.reverse();
    Ok(pairs)
}
