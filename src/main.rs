use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use broadsheet::app::AppContext;
use broadsheet::cli::{commands, Cli, Commands};
use broadsheet::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the front page
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(workers) = cli.workers {
        config.http.workers = workers;
    }
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Show { source, top, json } => {
            let selector = commands::resolve_selector(&ctx.config, source.as_deref(), top);
            commands::show(&ctx, selector, json).await?;
        }
        Commands::Sources => {
            commands::list_sources(&ctx)?;
        }
        Commands::Tui { source } => {
            let selector = commands::resolve_selector(&ctx.config, source.as_deref(), false);
            broadsheet::tui::run(Arc::new(ctx), selector).await?;
        }
    }

    Ok(())
}
