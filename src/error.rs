use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntegrateError>;

#[derive(Error, Debug)]
pub enum IntegrateError {
    #[error("invalid sample count: {0} (must be at least 1)")]
    InvalidSampleCount(u64),

    #[error("degenerate interval: a == b == {0}")]
    DegenerateInterval(f64),

    #[error("invalid bounds: a = {a}, b = {b} (need finite a < b)")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    #[error("unknown backend: {0:?}")]
    UnknownBackend(String),

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to start workers: {0}")]
    Io(#[from] std::io::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_errors_keep_their_source() {
        let err = IntegrateError::from(std::io::Error::new(
            std::io::ErrorKind::WouldBlock,
            "thread limit reached",
        ));
        assert!(matches!(&err, IntegrateError::Io(io) if io.kind() == std::io::ErrorKind::WouldBlock));
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("thread limit reached")
        );
    }

    #[tokio::test]
    async fn join_errors_keep_their_source() {
        let join_err = tokio::task::spawn_blocking(|| -> u64 { panic!("boom") })
            .await
            .unwrap_err();
        let err = IntegrateError::from(join_err);
        assert!(matches!(&err, IntegrateError::Join(join) if join.is_panic()));
        assert!(err.source().is_some());
    }
}
