use std::ops::Range;
use std::thread;

use tracing::debug;

use crate::error::{IntegrateError, Result};
use crate::partition::partition;
use crate::riemann::partial_sum;

/// Fork-join over OS threads: one thread per contiguous chunk, each keeping a
/// private accumulator, joined and summed in worker order.
pub fn sum_threads(indices: Range<u64>, a: f64, h: f64, num_workers: usize) -> Result<f64> {
    let mut handles = vec![];

    for (worker_id, chunk) in partition(indices, num_workers).into_iter().enumerate() {
        debug!(worker_id, start = chunk.start, end = chunk.end, "spawning worker thread");
        let handle = thread::Builder::new()
            .name(format!("pi-worker-{worker_id}"))
            .spawn(move || partial_sum(chunk, a, h))?;
        handles.push(handle);
    }

    let mut total = 0.0;
    for (worker_id, handle) in handles.into_iter().enumerate() {
        total += handle
            .join()
            .map_err(|_| IntegrateError::WorkerPanicked(worker_id))?;
    }

    Ok(total)
}
