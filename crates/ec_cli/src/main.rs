use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;

use clap::Parser;
use ec_core::{AnalysisModel, Document, Result};
use ec_web::{create_app, serve, summarize_document, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{upload_limit_bytes, Cli, Commands};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Summarize the file at `path` and write the JSON result to `out`.
async fn analyze_file(
    model: &dyn AnalysisModel,
    path: &Path,
    compact: bool,
    out: &mut impl Write,
) -> Result<()> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("📄 Analyzing {} ({} bytes)", filename, bytes.len());

    let summary = summarize_document(model, Document::new(filename, bytes)).await?;
    if compact {
        serde_json::to_writer(&mut *out, &summary)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
    }
    writeln!(out)?;
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.model.to_config();
    let model = ec_inference::create_model(&cli.model.model, &config)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
            no_static,
            max_upload_mb,
        } => {
            let state =
                AppState::new(model).with_max_upload_bytes(upload_limit_bytes(max_upload_mb));
            let static_dir = (!no_static).then_some(static_dir.as_path());
            let app = create_app(state, static_dir);
            serve(SocketAddr::new(host, port), app).await
        }
        Commands::Analyze { file, compact } => {
            let mut stdout = std::io::stdout().lock();
            analyze_file(model.as_ref(), &file, compact, &mut stdout).await
        }
    }
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
