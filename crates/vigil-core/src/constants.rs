/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of terms evaluated in the Kolmogorov distribution series.
pub const KOLMOGOROV_SERIES_TERMS: usize = 100;
