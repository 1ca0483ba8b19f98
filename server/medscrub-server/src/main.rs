use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use medscrub_server::{create_app, MedscrubServer};

/// MedScrub Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "medscrub-server")]
#[command(about = "Medical note transcription and anonymization HTTP API server")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(args.verbose);
    print_startup_banner();

    info!("{}", "Starting MedScrub Engine HTTP Server".bright_cyan());
    info!("Version: {}", env!("CARGO_PKG_VERSION").bright_white());

    // Startup fails here on a missing transcription credential or a
    // recognizer that cannot be built; nothing can be served without them.
    let server = MedscrubServer::new().context("Failed to initialize MedScrub services")?;
    info!(
        "Transcription provider: {}",
        server.transcription.provider_name().bright_yellow()
    );
    info!(
        "Entity recognizer: {}",
        server.anonymizer.recognizer_name().bright_yellow()
    );

    let app = create_app(server);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        "{}",
        format!("MedScrub Engine running on http://{}", addr).bright_green()
    );
    info!(
        "{}",
        format!("Pages available at: http://{}/", addr).bright_blue()
    );
    info!(
        "{}",
        format!("API v1 available at: http://{}/api/v1", addr).bright_blue()
    );
    info!(
        "{}",
        format!("OpenAPI docs at: http://{}/docs", addr).bright_blue()
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let is_development =
        std::env::var("MEDSCRUB_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "medscrub_server={level},transcription_service={level},anonymization_service={level},tower_http=info,reqwest=info"
        )
        .into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(true),
            )
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                MEDSCRUB ENGINE               ║".bright_cyan());
    println!("{}", "║     Medical Note Anonymization Platform      ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════╝".bright_cyan());
    println!();
}
