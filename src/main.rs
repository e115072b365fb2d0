use anyhow::{anyhow, Result};
use is_terminal::IsTerminal;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::oneshot;
use toolcrab::{Config, DynRunner, ProcessRunner, SharedConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let mut args = std::env::args().take(3);
    let (program_name, config_file, extra) = (
        args.next().unwrap_or("toolcrab".to_string()),
        args.next(),
        args.next(),
    );
    if extra.is_some() {
        return Err(anyhow!("usage: {program_name} [/path/to/config.json]"));
    }

    let config = config_init(config_file)?;
    let runner: DynRunner = Arc::new(ProcessRunner::new(config.max_concurrent_processes));

    if std::io::stdout().is_terminal() {
        println!("{}", toolcrab::banner::BANNER);
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let api_server = toolcrab::api::new(config.clone(), runner, async move {
        shutdown_rx.await.ok();
    })?;
    tracing::info!("API listening on {}", &config.api_bind_addr);
    let mut api_handle = tokio::spawn(api_server);

    let interrupted = tokio::select! {
        _ = signal::ctrl_c() => true,
        api_res = &mut api_handle => {
            api_res??;
            false
        }
    };

    if interrupted {
        tracing::info!(
            "quitting from signal, waiting up to {}s for in-flight requests",
            config.shutdown_grace.as_secs()
        );
        if shutdown_tx.send(()).is_err() {
            tracing::debug!("API server already stopped");
        }
        match tokio::time::timeout(config.shutdown_grace, &mut api_handle).await {
            Ok(api_res) => api_res??,
            Err(_) => {
                tracing::warn!("in-flight requests still running after grace period, aborting");
                api_handle.abort();
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolcrab=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<SharedConfig> {
    match config_file {
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(Arc::new(Config::default()))
        }
        Some(config_file) => {
            let config = Config::try_from_file(&config_file)?;
            tracing::debug!("loaded config from {config_file}");
            Ok(Arc::new(config))
        }
    }
}
