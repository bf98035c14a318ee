use std::env;

use tracing::warn;

use crate::integrator::{hardware_workers, Backend};

/// Upper bound on workers per hardware thread accepted from the environment.
pub const MAX_WORKERS_PER_CORE: usize = 16;

/// Runtime settings read from the environment. Everything has a default, so
/// an empty environment reproduces the plain `Pi = ...` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub num_workers: usize,
    pub backend: Backend,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("PI_NUM_THREADS").ok(),
            env::var("PI_BACKEND").ok(),
        )
    }

    fn from_vars(num_threads: Option<String>, backend: Option<String>) -> Self {
        let num_workers = match num_threads.as_deref().map(|s| s.trim().parse::<usize>()) {
            None => hardware_workers(),
            Some(Ok(n)) if n > max_workers() => {
                let cap = max_workers();
                warn!(requested = n, cap, "capping PI_NUM_THREADS");
                cap
            }
            Some(Ok(n)) if n > 0 => n,
            Some(_) => {
                let fallback = hardware_workers();
                warn!(value = ?num_threads, fallback, "ignoring invalid PI_NUM_THREADS");
                fallback
            }
        };

        let backend = match backend.as_deref().map(str::parse::<Backend>) {
            None => Backend::default(),
            Some(Ok(backend)) => backend,
            Some(Err(err)) => {
                warn!(%err, fallback = %Backend::default(), "ignoring PI_BACKEND");
                Backend::default()
            }
        };

        Config {
            num_workers,
            backend,
        }
    }
}

fn max_workers() -> usize {
    hardware_workers().saturating_mul(MAX_WORKERS_PER_CORE)
}
