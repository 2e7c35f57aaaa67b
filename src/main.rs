use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use noteflow::config;
use noteflow::enhance::{EnhanceError, NoteEnhancer, OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use noteflow::pipeline::NotePipeline;

/// Transform a casual counselor narrative into a 245G-compliant progress note.
#[derive(Parser)]
#[command(name = "noteflow", version, about)]
struct Cli {
    /// File containing the session narrative; stdin when omitted.
    input: Option<PathBuf>,

    /// Session narrative passed directly on the command line.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Ask the configured completion service for the note first, falling
    /// back to the deterministic pipeline if it fails.
    #[arg(long)]
    enhance: bool,

    /// API key for the completion service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Completion service base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Completion model used with --enhance.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Emit the full result (sections, note, compliance) as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let raw_text = read_input(&cli)?;

    if cli.enhance {
        match try_enhance(&cli, &raw_text) {
            Ok(note) => {
                println!("{note}");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Completion service failed, falling back to deterministic pipeline"
                );
            }
        }
    }

    let pipeline = NotePipeline::new()?;
    let result = pipeline.process_input(&raw_text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.formatted_note);
        report_compliance(&result.compliance);
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn try_enhance(cli: &Cli, raw_text: &str) -> Result<String, EnhanceError> {
    let api_key = cli.api_key.as_deref().unwrap_or_default();
    let client = OpenAiClient::new(
        &cli.base_url,
        api_key,
        &cli.model,
        config::COMPLETION_TIMEOUT_SECS,
    )?;
    tracing::info!(key = %client.masked_api_key(), model = %cli.model, "Using completion service");
    NoteEnhancer::new(Box::new(client)).enhance(raw_text)
}

fn report_compliance(report: &noteflow::ValidationReport) {
    if report.is_valid {
        eprintln!("Compliance: PASS ({:.0}%)", report.completeness_percent);
        return;
    }
    eprintln!("Compliance: FAIL ({:.0}%)", report.completeness_percent);
    for error in &report.errors {
        eprintln!("  - {error}");
    }
}
