use clap::Parser;
use color_eyre::{Result, eyre::WrapErr};
use product_editor::{
    cli::{Cli, Cmd},
    config::Config,
    core::app::{EditorApp, health},
    errors, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    errors::init()?;
    let config = Config::new(&cli).wrap_err("failed to load configuration")?;
    let _guard = logging::init(&config.config.data_dir)?;
    tracing::info!(base_url = %config.api.base_url, "starting {}", env!("CARGO_PKG_NAME"));

    match cli.command() {
        Cmd::Run => {
            let mut app = EditorApp::new(config)?;
            app.run().await?;
        }
        Cmd::Health => {
            let count = health(&config).await?;
            println!("ok: {count} categories");
        }
    }
    Ok(())
}
