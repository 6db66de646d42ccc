use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;

use catalogo::app::routes::router;
use catalogo::assets::resolve_asset_urls;
use catalogo::loader::load_snapshot;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct ServerArgs {
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Tab-delimited book table (one header row).
    #[arg(long, default_value = "books.tsv")]
    books: PathBuf,

    /// JSON list of home groups.
    #[arg(long, default_value = "frontpage_categories.json")]
    home: PathBuf,

    /// Base URL for cover and synopsis assets.
    #[arg(long)]
    asset_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    catalogo::logging::init("info")?;

    let args = ServerArgs::parse();
    tracing::info!(?args, "starting catalogo-server");

    let assets = resolve_asset_urls(args.asset_base_url.as_deref())?;
    tracing::info!(asset_base_url = assets.base(), "using asset host");
    let snapshot = load_snapshot(&args.books, &args.home, assets).context("load dataset")?;
    let app = router(Arc::new(snapshot));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.addr))?;
    tracing::info!(addr = %args.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
