use anyhow::{Context, Result};
use craftui::config::Config;
use craftui::logger::Logger;
use craftui::ui::{self, core::AppContext};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: craftui [OPTIONS]

Options:
  --config <path>   Load configuration from <path>
  --init-config     Write a default configuration file and exit
  -h, --help        Print help
  -V, --version     Print version";

enum Command {
    Run { config_path: Option<PathBuf> },
    InitConfig { config_path: Option<PathBuf> },
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut config_path = None;
    let mut init_config = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--init-config" => init_config = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            other => anyhow::bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(if init_config {
        Command::InitConfig { config_path }
    } else {
        Command::Run { config_path }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("craftui {}", env!("CARGO_PKG_VERSION")),
        Command::InitConfig { config_path } => {
            let path = match config_path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
        }
        Command::Run { config_path } => {
            let config = match config_path {
                Some(path) => Config::load_from_file(&path)?,
                None => Config::load()?,
            };
            let logger = Logger::from_config(config.logging.enabled)?;
            log::info!("Starting craftui {}", env!("CARGO_PKG_VERSION"));

            // Run the TUI application
            let context = AppContext::from_config(config, logger);
            ui::run_app(context).await?;
        }
    }

    Ok(())
}
