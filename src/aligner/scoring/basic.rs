use super::{AlignmentScore, ScoringStrategy};

/// Score elements by equality only.
///
/// Elements are wrapped in an `Option`, and `None` marks a gap in the aligned sequences. The
/// default scores are +1 for a match, -3 for a mismatch and -1 for each gap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BasicScoring<S = i32> {
    score_match: S,
    score_mismatch: S,
    gap_penalty: S,
}

impl<S> BasicScoring<S>
where
    S: AlignmentScore,
{
    pub fn new(score_match: S, score_mismatch: S, gap_penalty: S) -> Self {
        Self {
            score_match,
            score_mismatch,
            gap_penalty,
        }
    }

    #[inline]
    pub fn score_match(&self) -> S {
        self.score_match
    }

    #[inline]
    pub fn score_mismatch(&self) -> S {
        self.score_mismatch
    }
}

impl Default for BasicScoring<i32> {
    fn default() -> Self {
        Self::new(1, -3, -1)
    }
}

impl<T, S> ScoringStrategy<Option<T>> for BasicScoring<S>
where
    T: PartialEq,
    S: AlignmentScore,
{
    type Score = S;

    #[inline]
    fn score(&self, left: &Option<T>, top: &Option<T>) -> S {
        if left == top {
            self.score_match
        } else {
            self.score_mismatch
        }
    }

    #[inline(always)]
    fn gap_penalty(&self) -> S {
        self.gap_penalty
    }

    #[inline(always)]
    fn gap_marker(&self) -> Option<T> {
        None
    }
}
