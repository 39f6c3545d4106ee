//! docsplit CLI application
//!
//! Command-line interface for the docsplit-rs library.

use clap::{Parser, Subcommand};
use docsplit_rs::pdf::PageTextSource;
use docsplit_rs::{Config, DocumentSegmenter, LopdfTextSource, PdfSplitter, utils};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docsplit")]
#[command(about = "Split a multi-page PDF into classified per-document files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a PDF and classify each resulting document
    Split {
        /// Input PDF file
        input: PathBuf,

        /// Output directory for split PDFs (defaults to the configured
        /// output directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// API key (overrides config and OPENAI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Base URL for OpenAI-compatible APIs (e.g. an Ollama endpoint)
        #[arg(long)]
        base_url: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,
    },

    /// Show how a PDF would be segmented, without classifying or writing
    Inspect {
        /// Input PDF file
        input: PathBuf,

        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output_dir,
            config,
            api_key,
            base_url,
            model,
        } => {
            split_command(input, output_dir, config, api_key, base_url, model).await?;
        }
        Commands::Inspect { input, json } => {
            inspect_command(input, json)?;
        }
    }

    Ok(())
}

async fn split_command(
    input: PathBuf,
    output_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        eprintln!("❌ File not found: {}", input.display());
        return Ok(());
    }
    if !utils::is_pdf_file(&input) {
        log::warn!("{} does not have a .pdf extension", input.display());
    }

    let mut config = match config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI flags win over config file values
    if api_key.is_some() {
        config.classifier.api_key = api_key;
    }
    if base_url.is_some() {
        config.classifier.base_url = base_url;
    }
    if let Some(model) = model {
        config.classifier.model = model;
    }

    let output_dir = resolve_output_dir(output_dir, &config);

    println!("📄 Splitting: {}", input.display());

    let splitter = PdfSplitter::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Extracting, segmenting, and classifying...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let stats = splitter.split(&input, &output_dir).await?;

    spinner.finish_and_clear();

    println!("✅ Splitting complete!");
    println!("   📑 Pages: {}", stats.total_pages);
    println!("   📚 Documents: {}", stats.total_segments);
    println!("   ⏱️  Time: {:.2}s", stats.processing_time);

    for output in &stats.outputs {
        println!(
            "   💾 Saved {} ({} pages, {})",
            output.path.display(),
            output.pages.len(),
            output.category
        );
    }

    if stats.failed_writes > 0 {
        eprintln!("⚠️  {} document(s) could not be written", stats.failed_writes);
    }

    Ok(())
}

/// The --output-dir flag wins; otherwise the configured output directory
/// applies
fn resolve_output_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(&config.output.directory))
}

fn inspect_command(input: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        eprintln!("❌ File not found: {}", input.display());
        return Ok(());
    }

    let page_texts = LopdfTextSource::new().page_texts(&input)?;
    let segments = DocumentSegmenter::new().segment(&page_texts);

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    println!("📄 {}: {} pages, {} documents", input.display(), page_texts.len(), segments.len());
    println!();

    for (i, segment) in segments.iter().enumerate() {
        let preview: String = segment.text.chars().take(80).collect();
        println!("{}. pages {:?}", i + 1, segment.pages);
        println!("   {}", preview.replace('\n', " "));
        println!();
    }

    Ok(())
}
