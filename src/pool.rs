use std::ops::Range;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::error::Result;
use crate::riemann::{integrand, midpoint};

/// Parallel fold over a dedicated rayon pool. Each rayon job folds into its
/// own accumulator and the accumulators are tree-reduced by `sum`.
pub fn sum_rayon(indices: Range<u64>, a: f64, h: f64, num_workers: usize) -> Result<f64> {
    let pool = ThreadPoolBuilder::new().num_threads(num_workers).build()?;
    debug!(num_threads = pool.current_num_threads(), "built rayon pool");

    let total = pool.install(|| {
        indices
            .into_par_iter()
            .fold(|| 0.0, |acc: f64, i| acc + integrand(midpoint(a, i, h)))
            .sum::<f64>()
    });

    Ok(total)
}
