use anyhow::Result;
use clap::Parser;
use innerbloom::config::Config;
use innerbloom::logger::Logger;
use innerbloom::ui;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "innerbloom", version, about = "A terminal journal and goal tracker")]
struct Cli {
    /// Write the default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Use this configuration file instead of the default search path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::init(&config.logging)?;
    log::info!("InnerBloom {} starting", env!("CARGO_PKG_VERSION"));

    ui::run_app(config, logger).await
}
