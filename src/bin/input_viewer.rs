//! Opens a window and logs every input event the tracker sees

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use pixelkit::app::App;
use pixelkit::build_info;
use pixelkit::config::AppConfig;
use pixelkit::health;

#[derive(Parser, Debug)]
#[command(name = "input_viewer", about, version, long_version = build_info::LONG_VERSION)]
struct Cli {
    /// Configuration profile to load (config/{profile}.toml)
    #[arg(short, long, default_value = "debug")]
    profile: String,

    /// Run health checks and exit instead of opening a window
    #[arg(long)]
    check: bool,

    /// Log filter directive, used when RUST_LOG is unset (e.g. "pixelkit=trace")
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.profile);
    let fallback_filter = match (&cli.log, &config) {
        (Some(filter), _) => filter.clone(),
        (None, Ok(config)) => config.log.filter.clone(),
        (None, Err(_)) => "info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback_filter))
        .with_context(|| format!("invalid log filter {fallback_filter:?}"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config.unwrap_or_else(|e| {
        warn!(error = %e, profile = %cli.profile, "Failed to load config, using defaults");
        AppConfig {
            profile: cli.profile.clone(),
            ..AppConfig::default()
        }
    });

    if cli.check {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    Ok(())
}
