pub mod alignment;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod utils;

use num::Zero;
use tracing::{debug, debug_span};

use crate::errors::NwError;
pub use alignment::{AlignedPair, Alignment};
use matrix::DpMatrix;
use scoring::ScoringStrategy;
use traceback::{backtrace, Direction};

/// Which of the two dynamic programming matrices to render
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixKind {
    Score,
    Traceback,
}

struct ComputedAlignment<E, S> {
    scores: DpMatrix<S>,
    traceback: DpMatrix<Direction>,
    alignment: Alignment<E, S>,
}

/// Global aligner for two sequences of arbitrary elements.
///
/// The sequence given as `left` is drawn along the rows of the dynamic programming matrices,
/// the `top` sequence along the columns. The alignment is computed on the first request and
/// cached afterwards; the score and traceback matrices stay available for inspection.
pub struct NeedlemanWunschAligner<E, C>
where
    C: ScoringStrategy<E>,
{
    left: Vec<E>,
    top: Vec<E>,
    scoring: C,
    computed: Option<ComputedAlignment<E, C::Score>>,
}

impl<E, C> NeedlemanWunschAligner<E, C>
where
    C: ScoringStrategy<E>,
{
    pub fn new<L, T>(left: L, top: T, scoring: C) -> Self
    where
        L: IntoIterator<Item = E>,
        T: IntoIterator<Item = E>,
    {
        Self {
            left: left.into_iter().collect(),
            top: top.into_iter().collect(),
            scoring,
            computed: None,
        }
    }

    pub fn left(&self) -> &[E] {
        &self.left
    }

    pub fn top(&self) -> &[E] {
        &self.top
    }

    pub fn scoring(&self) -> &C {
        &self.scoring
    }

    pub fn is_computed(&self) -> bool {
        self.computed.is_some()
    }

    /// The cached optimal alignment, available once it has been computed
    pub fn alignment(&self) -> Option<&Alignment<E, C::Score>> {
        self.computed.as_ref().map(|c| &c.alignment)
    }

    /// The score matrix, available once the alignment has been computed
    pub fn score_matrix(&self) -> Option<&DpMatrix<C::Score>> {
        self.computed.as_ref().map(|c| &c.scores)
    }

    /// The traceback matrix, available once the alignment has been computed
    pub fn traceback_matrix(&self) -> Option<&DpMatrix<Direction>> {
        self.computed.as_ref().map(|c| &c.traceback)
    }

    /// Build the score and traceback matrices.
    ///
    /// When multiple predecessors give the same maximum score, a diagonal move is preferred over
    /// a move from above, and a move from above over a move from the left.
    fn fill_matrices(&self) -> (DpMatrix<C::Score>, DpMatrix<Direction>) {
        let rows = self.left.len() + 1;
        let cols = self.top.len() + 1;
        let gap = self.scoring.gap_penalty();

        let mut scores = DpMatrix::new(rows, cols, C::Score::zero());
        let mut traceback = DpMatrix::new(rows, cols, Direction::Start);

        for col in 1..cols {
            scores.set(0, col, scores[(0, col - 1)] + gap);
            traceback.set(0, col, Direction::Left);
        }

        for row in 1..rows {
            scores.set(row, 0, scores[(row - 1, 0)] + gap);
            traceback.set(row, 0, Direction::Up);

            let left_elem = &self.left[row - 1];
            for col in 1..cols {
                let from_diag = scores[(row - 1, col - 1)] + self.scoring.score(left_elem, &self.top[col - 1]);
                let from_up = scores[(row - 1, col)] + gap;
                let from_left = scores[(row, col - 1)] + gap;

                let (mut max, mut direction) = (from_diag, Direction::Diag);
                if from_up > max {
                    (max, direction) = (from_up, Direction::Up);
                }
                if from_left > max {
                    (max, direction) = (from_left, Direction::Left);
                }

                scores.set(row, col, max);
                traceback.set(row, col, direction);
            }
        }

        (scores, traceback)
    }

    fn compute(&self) -> Result<ComputedAlignment<E, C::Score>, NwError>
    where
        E: Clone,
    {
        let span = debug_span!("needleman_wunsch", left_len = self.left.len(), top_len = self.top.len());
        let _enter = span.enter();

        let (scores, traceback) = self.fill_matrices();
        let pairs = backtrace(&traceback)?;

        let score = scores[(self.left.len(), self.top.len())];
        let alignment = Alignment::from_pairs(&self.left, &self.top, pairs, score, &self.scoring.gap_marker());

        debug!(%score, length = alignment.len(), indels = alignment.num_indels(), "Computed optimal alignment");

        Ok(ComputedAlignment { scores, traceback, alignment })
    }

    fn ensure_computed(&mut self) -> Result<&ComputedAlignment<E, C::Score>, NwError>
    where
        E: Clone,
    {
        let computed = match self.computed.take() {
            Some(computed) => computed,
            None => self.compute()?,
        };

        Ok(&*self.computed.insert(computed))
    }

    /// Returns the optimal global alignment, computing it on the first call.
    pub fn optimal_alignment(&mut self) -> Result<&Alignment<E, C::Score>, NwError>
    where
        E: Clone,
    {
        self.ensure_computed().map(|c| &c.alignment)
    }

    /// Consume the aligner and return the optimal alignment.
    pub fn into_alignment(mut self) -> Result<Alignment<E, C::Score>, NwError>
    where
        E: Clone,
    {
        match self.computed.take() {
            Some(computed) => Ok(computed.alignment),
            None => self.compute().map(|c| c.alignment),
        }
    }

    /// Two column rendering of the optimal alignment, see [`utils::print_alignment`].
    pub fn inspect_alignment<F>(&mut self, col_width: usize, display: F) -> Result<String, NwError>
    where
        E: Clone + PartialEq,
        F: Fn(&E) -> String,
    {
        let aln = self.optimal_alignment()?;

        Ok(utils::print_alignment(aln, col_width, display))
    }

    /// Like [`Self::inspect_alignment`], with `eq` deciding which aligned pairs are shown as equal.
    pub fn inspect_alignment_by<F, Q>(&mut self, col_width: usize, display: F, eq: Q) -> Result<String, NwError>
    where
        E: Clone,
        F: Fn(&E) -> String,
        Q: Fn(&E, &E) -> bool,
    {
        let aln = self.optimal_alignment()?;

        Ok(utils::print_alignment_by(aln, col_width, display, eq))
    }

    /// Rendering of the score or traceback matrix, see [`utils::print_matrix`].
    pub fn inspect_matrix<F>(&mut self, kind: MatrixKind, col_width: usize, display: F) -> Result<String, NwError>
    where
        E: Clone,
        F: Fn(&E) -> String,
    {
        let computed = match self.computed.take() {
            Some(computed) => computed,
            None => self.compute()?,
        };

        let rendered = match kind {
            MatrixKind::Score => utils::print_matrix(&self.left, &self.top, &computed.scores, col_width, display),
            MatrixKind::Traceback => utils::print_matrix(&self.left, &self.top, &computed.traceback, col_width, display),
        };
        self.computed = Some(computed);

        Ok(rendered)
    }
}

/// Compute the optimal global alignment of `left` and `top` in one go.
pub fn align<E, C, L, T>(left: L, top: T, scoring: C) -> Result<Alignment<E, C::Score>, NwError>
where
    E: Clone,
    C: ScoringStrategy<E>,
    L: IntoIterator<Item = E>,
    T: IntoIterator<Item = E>,
{
    NeedlemanWunschAligner::new(left, top, scoring).into_alignment()
}
