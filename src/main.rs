use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use muse::core::config;
use muse::tui;

#[derive(Parser)]
#[command(name = "muse", about = "Terminal prompt composer for image generation")]
struct Args {
    /// Generation backend to use (only "noop" exists today)
    #[arg(short, long)]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to muse.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("muse.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config_file = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&config_file, args.backend.as_deref());
    log::info!(
        "Muse starting up (backend: {}, platform: {})",
        resolved.backend,
        resolved.platform
    );

    tui::run(resolved)
}
