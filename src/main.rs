use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use speech_coach::{
    create_router, AnalysisSession, AppState, Config, NatsTranscriber, SessionConfig,
};

#[derive(Parser)]
#[command(name = "speech-coach", about = "Speech proficiency analysis service")]
struct Cli {
    /// Path to the configuration file (without extension)
    #[arg(short, long, default_value = "config/speech-coach")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP analysis service
    Serve,

    /// Analyze one input and print the report as JSON
    Analyze {
        /// Transcript text to analyze directly
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Recorded WAV file to transcribe and analyze
        #[arg(long)]
        file: Option<String>,
    },
}

fn session_config(cfg: &Config) -> SessionConfig {
    SessionConfig {
        sample_rate: cfg.audio.sample_rate,
        channels: cfg.audio.channels,
        frame_duration_ms: cfg.audio.frame_duration_ms,
        transcript_timeout: Duration::from_secs(cfg.stt.transcript_timeout_secs),
        ..Default::default()
    }
}

async fn connect_transcriber(cfg: &Config, session: &SessionConfig) -> Result<NatsTranscriber> {
    NatsTranscriber::connect(
        &cfg.stt.nats_url,
        session.session_id.clone(),
        session.transcript_timeout,
    )
    .await
    .context("Failed to connect to the STT service")
}

async fn serve(cfg: Config) -> Result<()> {
    let session_cfg = session_config(&cfg);
    let mut session = AnalysisSession::new(session_cfg.clone());

    // The service still answers text analysis when STT is down
    match connect_transcriber(&cfg, &session_cfg).await {
        Ok(transcriber) => {
            session = session.with_transcriber(Arc::new(transcriber));
        }
        Err(e) => {
            warn!("STT service unavailable, file analysis disabled: {:#}", e);
        }
    }

    let state = AppState::new(Arc::new(session));
    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("{} listening on {}", cfg.service.name, addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn analyze_once(cfg: Config, text: Option<String>, file: Option<String>) -> Result<()> {
    let session_cfg = session_config(&cfg);

    let report = match (text, file) {
        (Some(text), _) => {
            let session = AnalysisSession::new(session_cfg);
            session.analyze_text(&text)?
        }
        (None, Some(path)) => {
            let transcriber = connect_transcriber(&cfg, &session_cfg).await?;
            let session =
                AnalysisSession::new(session_cfg).with_transcriber(Arc::new(transcriber));
            session.analyze_file(&path).await?
        }
        (None, None) => {
            anyhow::bail!("Nothing to analyze: pass --text or --file")
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Serve => serve(cfg).await,
        Command::Analyze { text, file } => analyze_once(cfg, text, file).await,
    }
}
