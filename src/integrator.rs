use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{IntegrateError, Result};
use crate::riemann::partial_sum;
use crate::{pool, tasks, threads};

/// Which sample indices enter the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexRange {
    /// `[1, n)`: skips the first midpoint, reproducing the reference output.
    #[default]
    FromOne,
    /// `[0, n)`: the textbook midpoint rule.
    FromZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Threads,
    Rayon,
    Tasks,
    Sequential,
}

impl FromStr for Backend {
    type Err = IntegrateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threads" => Ok(Backend::Threads),
            "rayon" => Ok(Backend::Rayon),
            "tasks" => Ok(Backend::Tasks),
            "sequential" => Ok(Backend::Sequential),
            _ => Err(IntegrateError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Threads => "threads",
            Backend::Rayon => "rayon",
            Backend::Tasks => "tasks",
            Backend::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub a: f64,
    pub b: f64,
}

/// Number of threads the platform reports, or 1 if it cannot tell.
pub fn hardware_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Midpoint-rule integrator for 4/(1+x²), split across parallel workers.
#[derive(Debug, Clone)]
pub struct Integrator {
    bounds: Bounds,
    samples: u64,
    num_workers: usize,
    index_range: IndexRange,
    backend: Backend,
}

impl Integrator {
    pub fn new(a: f64, b: f64, samples: u64) -> Self {
        Integrator {
            bounds: Bounds { a, b },
            samples,
            num_workers: hardware_workers(),
            index_range: IndexRange::default(),
            backend: Backend::default(),
        }
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn with_index_range(mut self, index_range: IndexRange) -> Self {
        self.index_range = index_range;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// `h = (b - a) / n`.
    pub fn step(&self) -> f64 {
        (self.bounds.b - self.bounds.a) / self.samples as f64
    }

    pub fn indices(&self) -> Range<u64> {
        match self.index_range {
            IndexRange::FromOne => 1..self.samples,
            IndexRange::FromZero => 0..self.samples,
        }
    }

    fn validate(&self) -> Result<()> {
        let Bounds { a, b } = self.bounds;
        if self.samples == 0 {
            return Err(IntegrateError::InvalidSampleCount(self.samples));
        }
        if !a.is_finite() || !b.is_finite() || a > b {
            return Err(IntegrateError::InvalidBounds { a, b });
        }
        if a == b {
            return Err(IntegrateError::DegenerateInterval(a));
        }
        if self.num_workers == 0 {
            return Err(IntegrateError::InvalidWorkerCount(self.num_workers));
        }
        Ok(())
    }

    /// Runs the configured backend and returns `total * h`.
    pub fn estimate(&self) -> Result<f64> {
        self.validate()?;
        let a = self.bounds.a;
        let h = self.step();
        let indices = self.indices();
        debug!(
            samples = self.samples,
            workers = self.num_workers,
            backend = %self.backend,
            ?indices,
            h,
            "starting integration"
        );

        let start = Instant::now();
        let total = match self.backend {
            Backend::Threads => threads::sum_threads(indices, a, h, self.num_workers)?,
            Backend::Rayon => pool::sum_rayon(indices, a, h, self.num_workers)?,
            Backend::Tasks => tasks::sum_tasks_blocking(indices, a, h, self.num_workers)?,
            Backend::Sequential => partial_sum(indices, a, h),
        };
        let estimate = total * h;

        info!(
            estimate,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "integration finished"
        );
        Ok(estimate)
    }

    /// Like [`estimate`](Self::estimate) but always on the tasks backend of
    /// the caller's tokio runtime.
    pub async fn estimate_async(&self) -> Result<f64> {
        self.validate()?;
        let h = self.step();
        let total = tasks::sum_tasks(self.indices(), self.bounds.a, h, self.num_workers).await?;
        Ok(total * h)
    }
}
