pub mod basic;
pub mod custom;
pub mod paragraph;

use std::fmt::{Debug, Display};

pub use basic::BasicScoring;
pub use custom::ScoringFn;
pub use paragraph::{ParagraphSentenceScoring, TextElement};

/// Numeric type used for the cells of the score matrix.
pub trait AlignmentScore: num::Num + Copy + PartialOrd + Debug + Display {}

impl<T> AlignmentScore for T where T: num::Num + Copy + PartialOrd + Debug + Display {}

/// Scoring model used by the aligner.
///
/// `score` should be a pure function of its two arguments. `gap_penalty` is added once for every
/// element aligned to a gap, and `gap_marker` is the value put in the aligned sequences at gap
/// positions.
pub trait ScoringStrategy<E> {
    type Score: AlignmentScore;

    fn score(&self, left: &E, top: &E) -> Self::Score;

    fn gap_penalty(&self) -> Self::Score;

    fn gap_marker(&self) -> E;
}

impl<E, T> ScoringStrategy<E> for &T
where
    T: ScoringStrategy<E> + ?Sized,
{
    type Score = T::Score;

    #[inline(always)]
    fn score(&self, left: &E, top: &E) -> Self::Score {
        (**self).score(left, top)
    }

    #[inline(always)]
    fn gap_penalty(&self) -> Self::Score {
        (**self).gap_penalty()
    }

    #[inline(always)]
    fn gap_marker(&self) -> E {
        (**self).gap_marker()
    }
}
