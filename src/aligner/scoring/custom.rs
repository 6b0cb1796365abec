use super::{AlignmentScore, ScoringStrategy};

/// A scoring strategy assembled from a closure, a gap penalty and a gap marker.
pub struct ScoringFn<F, E, S> {
    score_fn: F,
    gap_penalty: S,
    gap_marker: E,
}

impl<F, E, S> ScoringFn<F, E, S>
where
    F: Fn(&E, &E) -> S,
    E: Clone,
    S: AlignmentScore,
{
    pub fn new(score_fn: F, gap_penalty: S, gap_marker: E) -> Self {
        Self {
            score_fn,
            gap_penalty,
            gap_marker,
        }
    }
}

impl<F, E, S> ScoringStrategy<E> for ScoringFn<F, E, S>
where
    F: Fn(&E, &E) -> S,
    E: Clone,
    S: AlignmentScore,
{
    type Score = S;

    #[inline(always)]
    fn score(&self, left: &E, top: &E) -> S {
        (self.score_fn)(left, top)
    }

    #[inline(always)]
    fn gap_penalty(&self) -> S {
        self.gap_penalty
    }

    fn gap_marker(&self) -> E {
        self.gap_marker.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::aligner::scoring::ScoringStrategy;

    use super::ScoringFn;

    #[test]
    fn test_closure_strategy() {
        let scoring = ScoringFn::new(
            |a: &u8, b: &u8| if a.eq_ignore_ascii_case(b) { 2 } else { -1 },
            -2,
            b'-',
        );

        assert_eq!(scoring.score(&b'a', &b'A'), 2);
        assert_eq!(scoring.score(&b'a', &b'c'), -1);
        assert_eq!(scoring.gap_penalty(), -2);
        assert_eq!(scoring.gap_marker(), b'-');
    }
}
