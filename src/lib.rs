extern crate num;

pub mod errors;
pub mod aligner;
pub mod io;

pub use aligner::{align, NeedlemanWunschAligner};
pub use aligner::alignment::{AlignedPair, Alignment};
pub use aligner::scoring::ScoringStrategy;
pub use errors::NwError;
