//! Parallel midpoint-rule estimate of π, integrating 4/(1+x²) over [0, 1].
//!
//! ```no_run
//! use pi_integrate::{Backend, Integrator};
//!
//! let pi = Integrator::new(0.0, 1.0, 100_000_000)
//!     .with_workers(8)
//!     .with_backend(Backend::Rayon)
//!     .estimate()?;
//! println!("Pi = {pi:.6}");
//! # Ok::<(), pi_integrate::IntegrateError>(())
//! ```

pub mod config;
pub mod error;
pub mod integrator;
pub mod partition;
pub mod pool;
pub mod riemann;
pub mod tasks;
pub mod threads;

pub use config::Config;
pub use error::{IntegrateError, Result};
pub use integrator::{hardware_workers, Backend, Bounds, IndexRange, Integrator};
