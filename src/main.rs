use std::process::ExitCode;

use pi_integrate::{Config, Integrator};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SAMPLES: u64 = 100_000_000;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays a single result line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!(workers = config.num_workers, backend = %config.backend, "configuration loaded");

    let integrator = Integrator::new(0.0, 1.0, SAMPLES)
        .with_workers(config.num_workers)
        .with_backend(config.backend);

    match integrator.estimate() {
        Ok(pi) => {
            println!("Pi = {:.6}", pi);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
