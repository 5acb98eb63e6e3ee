use clap::Parser;
use tempo_shim::app::commands;
use tempo_shim::utils::logger;
use tempo_shim::{CliConfig, Command};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    }

    tracing::debug!("Starting tempo: {:?}", config.command);
    tracing::debug!("Resolved settings: {:?}", settings);

    match &config.command {
        Command::Now => {
            let clock = settings.clock();
            println!("{}", commands::render_now(clock.as_ref(), settings.format)?);
        }
        Command::Parse { timestamps } => {
            let report = commands::render_parse(timestamps, settings.format)?;
            println!("{}", report.output);

            if report.failures > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
