//! Client entry-point: loads settings, opens draft storage, and runs one command.

use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use client::config::ClientSettings;
use client::domain::ScreenLifetime;
use client::domain::ports::TokioSleeper;
use client::inbound::cli::{Cli, CliApp};
use client::outbound::mock_backend::{FixtureSet, MockBackend};
use client::outbound::storage::FileKeyValueStore;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    // Settings come from the environment and config files; argv belongs to clap.
    let settings = ClientSettings::load_from_iter([OsString::from("client")])
        .map_err(|err| eyre!("failed to load settings: {err}"))?;

    let storage_dir = Utf8PathBuf::from_path_buf(settings.storage_dir())
        .map_err(|path| eyre!("storage directory is not UTF-8: {}", path.display()))?;
    let storage = Arc::new(FileKeyValueStore::open(&storage_dir)?);

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let catalogue = settings.catalogue(clock.utc())?;
    let fixtures = FixtureSet::from_catalogue(&catalogue)?;
    let backend = Arc::new(MockBackend::new(
        fixtures,
        settings.latency(),
        Arc::new(TokioSleeper),
    ));

    let lifetime = ScreenLifetime::new();
    let app = CliApp::new(backend, storage, clock, lifetime.handle());
    let mut stdout = std::io::stdout().lock();
    let outcome = {
        let run = app.run(cli.command, &mut stdout);
        tokio::pin!(run);
        tokio::select! {
            outcome = &mut run => outcome,
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => lifetime.close(),
                    Err(e) => warn!(error = %e, "failed to listen for ctrl-c"),
                }
                run.await
            }
        }
    };
    outcome.wrap_err("command failed")?;
    stdout.flush()?;
    Ok(())
}
