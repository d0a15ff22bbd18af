// crates/server/src/main.rs
//! Expo-lens server binary.
//!
//! Loads the reference corpus at startup (a missing corpus is fatal — this
//! is the one precondition the engine does not degrade around), then serves
//! the analysis API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use expo_lens_core::{exclude_type_zero, load_corpus};
use expo_lens_server::{create_app, AppState};

/// Default port for the server.
const DEFAULT_PORT: u16 = 47311;

#[derive(Debug, Parser)]
#[command(name = "expo-lens", version, about = "Comparative analytics for exhibition evaluations")]
struct Args {
    /// Path to the reference corpus CSV.
    #[arg(long, env = "EXPO_LENS_CORPUS")]
    corpus: PathBuf,

    /// Port to listen on.
    #[arg(long, env = "EXPO_LENS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();

    let args = Args::parse();

    // Fatal precondition: without the corpus there is nothing to compare
    // against, so this is surfaced instead of recovered from.
    let corpus = load_corpus(&args.corpus)
        .with_context(|| format!("failed to load reference corpus from {}", args.corpus.display()))?;
    let comparable = exclude_type_zero(&corpus).len();

    eprintln!("\n\u{1f3db} expo-lens v{}\n", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  \u{2713} Reference corpus loaded \u{2014} {} exhibitions ({} comparable)",
        corpus.len(),
        comparable,
    );

    let state = AppState::new(corpus, args.corpus.clone());
    let app = create_app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    eprintln!("  \u{2192} http://localhost:{}\n", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
