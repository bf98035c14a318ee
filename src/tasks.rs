use std::ops::Range;

use tokio::runtime::Builder;
use tokio::task;
use tracing::debug;

use crate::error::Result;
use crate::partition::partition;
use crate::riemann::partial_sum;

/// Same fork-join as the thread backend, but each chunk runs on tokio's
/// blocking pool. Must be awaited inside a tokio runtime.
pub async fn sum_tasks(indices: Range<u64>, a: f64, h: f64, num_tasks: usize) -> Result<f64> {
    let mut handles = vec![];

    for (task_id, chunk) in partition(indices, num_tasks).into_iter().enumerate() {
        debug!(task_id, start = chunk.start, end = chunk.end, "spawning blocking task");
        let handle = task::spawn_blocking(move || partial_sum(chunk, a, h));
        handles.push(handle);
    }

    let mut total = 0.0;
    for handle in handles {
        total += handle.await?;
    }

    Ok(total)
}

/// Runs [`sum_tasks`] on a private current-thread runtime whose blocking pool
/// is capped at `num_tasks` threads.
pub fn sum_tasks_blocking(indices: Range<u64>, a: f64, h: f64, num_tasks: usize) -> Result<f64> {
    let runtime = Builder::new_current_thread()
        .max_blocking_threads(num_tasks)
        .build()?;
    runtime.block_on(sum_tasks(indices, a, h, num_tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn agrees_with_sequential() {
        let h = 1.0 / 50_000.0;
        let sequential = partial_sum(1..50_000, 0.0, h);
        let parallel = sum_tasks(1..50_000, 0.0, h, 4).await.unwrap();
        assert!(((parallel - sequential) / sequential).abs() < 1e-10);
    }

    #[test]
    fn blocking_wrapper_builds_its_own_runtime() {
        let h = 1.0 / 1_000.0;
        let total = sum_tasks_blocking(0..1_000, 0.0, h, 3).unwrap();
        assert!((total * h - std::f64::consts::PI).abs() < 1e-5);
    }
}
