mod api;
mod keyword_client;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use social_optimizer::analyzers::{KeywordExtractor, LexiconScorer};
use social_optimizer::config::AnalyzerConfig;
use social_optimizer::{AnalysisEngine, PostInput};

#[derive(Parser)]
#[command(
    name = "social-optimizer",
    about = "Content scoring and competitive gap analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    transcript: Option<String>,
    #[arg(long, default_value_t = 10)]
    keywords: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            text: None,
            transcript: None,
            keywords: 10,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Analyze(AnalyzeArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Serve(args) => server::serve(args).await,
    }
}

fn build_engine() -> Result<AnalysisEngine, String> {
    let (config, _) = AnalyzerConfig::load(None)?;
    let keywords = keyword_client::KeywordClient::from_env()
        .map(|client| Box::new(client) as Box<dyn KeywordExtractor>);
    if keywords.is_none() {
        tracing::debug!("KEYWORD_SERVICE_URL not set; keyword extraction disabled");
    }
    Ok(AnalysisEngine::with_dependencies(
        config,
        Box::new(LexiconScorer),
        keywords,
    ))
}

async fn run_analyze(args: AnalyzeArgs) -> Result<(), String> {
    let caption = read_text(args.text)?;
    let engine = build_engine()?;
    let post = PostInput {
        id: "cli".to_string(),
        caption: Some(caption),
        transcript: args.transcript,
        media_url: None,
    };
    let top_n = args.keywords;

    // The engine may call the blocking keyword client, so keep it off the
    // async runtime threads.
    let (hook, cta_detected, sentiment_score, sentiment_label, hashtags, density, keywords) =
        tokio::task::spawn_blocking(move || {
            let text = post.analysis_text();
            let hook = engine.content().analyze_hook(post.hook_source());
            let cta_detected = engine.content().detect_cta(&text);
            let sentiment_score = engine.sentiment().analyze(&text);
            let sentiment_label = engine.sentiment().label(sentiment_score);
            let hashtags: Vec<(String, &'static str)> = engine
                .hashtags()
                .extract(&text)
                .into_iter()
                .map(|tag| {
                    let category = engine.hashtags().classify(&tag).label();
                    (tag, category)
                })
                .collect();
            let density = engine.hashtags().hashtag_density(&text);
            let keywords = engine.content().extract_keywords(&text, top_n);
            (
                hook,
                cta_detected,
                sentiment_score,
                sentiment_label,
                hashtags,
                density,
                keywords,
            )
        })
        .await
        .map_err(|err| format!("analysis task failed: {}", err))?;

    println!(
        "Hook score: {:.3} ({})",
        hook.score,
        hook.hook_type.label()
    );
    if !hook.hook_text.is_empty() {
        println!("Hook text: {}", hook.hook_text);
    }
    println!("Feedback: {}", hook.feedback);
    println!("CTA detected: {}", if cta_detected { "yes" } else { "no" });
    println!(
        "Sentiment: {:.4} ({})",
        sentiment_score,
        sentiment_label.label()
    );
    println!("Hashtag density: {:.3}", density);

    if !hashtags.is_empty() {
        println!("\nHashtags:");
        for (tag, category) in hashtags {
            println!("  #{} ({})", tag, category);
        }
    }

    if !keywords.is_empty() {
        println!("\nKeywords:");
        for keyword in keywords {
            println!("- {}", keyword);
        }
    }

    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing caption text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
