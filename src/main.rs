use std::fs::File;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use virtual_tryon::config::{Settings, SettingsOverrides};
use virtual_tryon::server::{self, AppState};
use virtual_tryon::ui::Route;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Virtual makeup try-on demo server")]
struct Args {
    /// Path to a JSON settings file; flags given here override its values
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Address to listen on, defaults to 127.0.0.1
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Port to listen on, defaults to 23380
    #[arg(short, long)]
    port: Option<u16>,

    /// How long the processing screen is shown before the try-on screen, defaults to 2000
    #[arg(long)]
    processing_delay_ms: Option<u64>,

    /// Largest accepted photo in KiB, defaults to 8192
    #[arg(long)]
    max_image_kb: Option<usize>,

    /// Drop sessions idle for this many minutes (at least 1), defaults to 30
    #[arg(long)]
    session_idle_minutes: Option<u64>,

    /// Where the "View Products" button leads, defaults to /demo/recommendations
    #[arg(long)]
    recommendations_url: Option<String>,

    /// Open the capture page in the default browser once the server is up
    #[arg(long)]
    open: bool,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to write a JSON log to; if this is a directory a timestamped file is created in it
    #[arg(short, long)]
    log_path: Option<PathBuf>,
}

impl From<&Args> for SettingsOverrides {
    fn from(args: &Args) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            processing_delay_ms: args.processing_delay_ms,
            max_image_kb: args.max_image_kb,
            session_idle_minutes: args.session_idle_minutes,
            recommendations_url: args.recommendations_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_file = tracing_init(&args)?;

    debug!(?args);

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .apply(SettingsOverrides::from(&args));
    debug!(?settings);

    let listener = server::bind(&settings)
        .await
        .wrap_err_with(|| format!("failed to listen on {}", settings.socket_addr()))?;
    let addr = listener.local_addr()?;

    let url = format!("http://{}{}", browsable(addr), Route::Capture.path());
    info!("try-on demo available at {}", url);
    if args.open {
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }

    let state = AppState::new(settings);
    let janitor = state
        .sessions
        .spawn_janitor(state.settings.session_idle(), Duration::from_secs(60));

    server::serve(listener, state, shutdown_signal()).await?;
    janitor.abort();

    info!("server stopped");
    if let Some(log_file) = log_file {
        info!("wrote logs to {}", log_file.display());
    }

    Ok(())
}

/// Unspecified bind addresses are reachable through loopback.
fn browsable(addr: SocketAddr) -> SocketAddr {
    if addr.ip().is_unspecified() {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), addr.port())
    } else {
        addr
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down"),
        Err(e) => {
            warn!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn log_file_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(Local::now().format("virtual-tryon-%Y-%m-%dT%H-%M-%S.log").to_string())
    } else {
        path.to_path_buf()
    }
}

/// Sets up stdout logging plus the optional JSON log file, returning the
/// path of that file.
fn tracing_init(args: &Args) -> Result<Option<PathBuf>> {
    tracing_log::LogTracer::init()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(
            match args.verbose {
                0 => "virtual_tryon=info",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
            .parse()?,
        )
        .from_env_lossy();

    let stdout_log = tracing_subscriber::fmt::layer().with_filter(env_filter);

    let (file_log, log_file) = match &args.log_path {
        Some(path) => {
            let path = log_file_path(path);
            let file = File::create(&path).wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_filter(tracing::level_filters::LevelFilter::TRACE);
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry().with(stdout_log).with(file_log);
    tracing::subscriber::set_global_default(subscriber).wrap_err("unable to set up logging")?;

    Ok(log_file)
}
