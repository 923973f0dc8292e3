//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod favorites;
pub mod games;
pub mod login;
pub mod output;
pub mod paths;
pub mod render;

use command::{Cli, Commands, ConfigCommand, FavoritesCommand, GamesCommand};

use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::AppContext;
use crate::infrastructure::config::settings::Config;

/// Run a parsed command against the loaded configuration.
///
/// Must be called inside a tokio runtime.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Config(ConfigCommand::Init { force }) => config::execute_init(&cli.config, force),
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&cli.config, &config);
            Ok(())
        }
        command => {
            let ctx = AppContext::build(&config, paths::storage_path(&config))?;
            dispatch(&ctx, command).await
        }
    }
}

/// Dispatch session, catalog and favorites commands.
pub async fn dispatch(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::execute_login(&ctx.session, args).await,
        Commands::Logout => login::execute_logout(&ctx.session).await,
        Commands::Games(command) => {
            require_login(ctx).await?;
            match command {
                GamesCommand::List { search } => games::execute_list(ctx, search.as_deref()).await,
                GamesCommand::Show { id } => games::execute_show(ctx, &id).await,
            }
            Ok(())
        }
        Commands::Favorites(command) => {
            require_login(ctx).await?;
            match command {
                FavoritesCommand::List => {
                    favorites::execute_list(ctx).await;
                    Ok(())
                }
                FavoritesCommand::Add { id } => favorites::execute_add(ctx, &id).await,
                FavoritesCommand::Remove { id } => favorites::execute_remove(ctx, &id).await,
                FavoritesCommand::Clear => favorites::execute_clear(ctx).await,
            }
        }
        Commands::Config(_) => Ok(()),
    }
}

async fn require_login(ctx: &AppContext) -> Result<()> {
    if ctx.session.is_logged_in().await {
        return Ok(());
    }
    output::hint("run `gamedex login` first");
    Err(Error::NotLoggedIn)
}
