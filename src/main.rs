//! Mural CLI binary entry point.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use mural::cli::Cli;
use mural::error::Result;
use mural::source::{http, select, RegistryBuilder};
use mural::{desktop, download};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.clear {
        download::clear_cache(&cli.dir)?;
    }
    download::ensure_cache_dir(&cli.dir)?;

    let client = http::shared_client();
    let providers = RegistryBuilder::default().build(&cli.source, client).await?;

    // Seeded once per process; the selector and the feed offsets both
    // draw from it.
    let mut rng = StdRng::from_os_rng();
    let provider = select::pick(&providers, &mut rng)?;
    let url = provider.resolve(client, &mut rng).await?;

    let path = download::fetch_image(client, &url, &cli.dir).await?;
    desktop::set_wallpaper(&path)?;

    if !cli.cache {
        std::fs::remove_file(&path)?;
    }
    Ok(())
}
