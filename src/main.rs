use clap::Parser;
use gamedex::adapter::inbound::cli::{self, command::Cli, output};
use gamedex::infrastructure::config::settings::Config;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging(cli.verbose);
    debug!(config = %cli.config.display(), "gamedex starting");

    if let Err(e) = cli::run(cli, config).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
