//! Two-sample statistical tests used by the drift detector.

pub mod chi_square;
pub(crate) mod gamma;
pub mod ks;

pub use chi_square::{goodness_of_fit, ChiSquareResult};
pub use ks::{two_sample, KsResult};
