//! Diagnostics setup.
//!
//! Logs are written to stderr and filtered by `RUST_LOG` (default `warn`).
//! An optional `.env` file is loaded first so `RUST_LOG` can live there.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    dotenvy::dotenv().ok();

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();

    // A subscriber may already be installed (e.g. by an embedding test harness).
    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already set");
    }
}
