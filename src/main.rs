use anyhow::Result;
use clap::Parser;
use std::path::Path;

use premium_predictor::{
    cli, config, init_tracing,
    model::{LinearModel, Predictor},
    server,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.get_command() {
        cli::Commands::Start => {
            let cfg = config::load_config(&args.config)?;
            server::start_server(cfg).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => {
                let cfg = config::load_config(&args.config)?;
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
            cli::ConfigCommands::Validate => {
                let cfg = config::load_config(&args.config)?;
                let model = LinearModel::load(Path::new(&cfg.model.path))?;
                println!(
                    "Configuration OK; model '{}' v{} loads cleanly",
                    model.name(),
                    model.version()
                );
            }
        },
        cli::Commands::Version => {
            println!("premium-predictor v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
