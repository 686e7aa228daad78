//! Nose keyboard: replay a recorded perception trace through the input engine.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use nose_keyboard::{
    app::{InputSession, LogFrameSink},
    buffer::LogSpeech,
    config::{Config, EXAMPLE_CONFIG},
    replay::ReplayTrace,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Perception trace to replay (JSON lines)
    #[arg(required_unless_present = "print_config")]
    trace: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Calibration record to load and save
    #[arg(long)]
    calibration: Option<PathBuf>,

    /// Run the calibration wizard even if a record exists
    #[arg(short, long)]
    recalibrate: bool,

    /// Screen width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Screen height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Pointer smoothing (none, exponential[:alpha], moving_average[:window])
    #[arg(short, long)]
    filter: Option<String>,

    /// Use the layout's own row count for the hit grid instead of 5 rows
    #[arg(long)]
    fit_grid: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Nose Keyboard");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(path) = args.calibration {
        config.calibration.file = path;
    }
    config.calibration.recalibrate |= args.recalibrate;
    if let Some(width) = args.width {
        config.screen.width = width;
    }
    if let Some(height) = args.height {
        config.screen.height = height;
    }
    if let Some(filter) = args.filter {
        config.smoothing.filter = filter;
    }
    if args.fit_grid {
        config.keyboard.grid_rows = 0;
    }

    let trace = args.trace.context("No perception trace given")?;
    let (mut source, mut controls) =
        ReplayTrace::load(&trace).with_context(|| format!("Failed to load trace {}", trace.display()))?;

    let mut session = InputSession::new(config)?;
    session
        .ensure_calibrated(&mut source, &mut controls, &mut LogFrameSink)
        .context("Calibration did not complete")?;

    let text = session.run(&mut source, &mut controls, &mut LogFrameSink, &mut LogSpeech)?;
    println!("{text}");

    Ok(())
}
