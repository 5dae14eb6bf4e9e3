use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use wyr_core::{
    application::{
        score_predictions::dto::ScorePredictionRequest,
        submit_question::dto::ModerateQuestionRequest,
    },
    config::Settings,
    domain::moderation::{ModerationDecision, PriorityLevel},
    infrastructure::moderation::{ModerationEngine, PriorityRanker, compute_similarity},
};

#[derive(Parser, Debug)]
#[command(name = "wyr-moderate", version, about = "Question moderation and prediction scoring")]
struct Cli {
    /// Settings file (defaults to ./moderation.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scans a single text.
    Classify { text: String },
    /// Similarity of two texts in [0, 1].
    Similarity { a: String, b: String },
    /// Structural checks on an option pair.
    Validate { a: String, b: String },
    /// Full moderation decision for an option pair.
    Moderate {
        a: String,
        b: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        flagged_count: i64,
    },
    /// Admin queue tier for a flag count.
    Priority {
        #[arg(allow_negative_numbers = true)]
        flagged_count: i64,
    },
    /// Accuracy of a prediction against a final tally.
    Score {
        #[arg(long, allow_negative_numbers = true)]
        predicted_a: i64,
        #[arg(long, allow_negative_numbers = true)]
        votes_a: i64,
        #[arg(long, allow_negative_numbers = true)]
        total_votes: i64,
    },
    /// Moderates a JSON array of `{text_a, text_b, flagged_count}` objects.
    Batch { file: PathBuf },
}

#[derive(Serialize)]
struct PriorityOutput {
    flagged_count: u32,
    priority: PriorityLevel,
    needs_review: bool,
}

#[derive(Serialize)]
struct SimilarityOutput {
    similarity: f64,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,wyr_core=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let engine = ModerationEngine::from_settings(&settings);
    let ranker = PriorityRanker::new(&settings.thresholds);

    match cli.command {
        Commands::Classify { text } => print_json(&engine.classify(&text)),
        Commands::Similarity { a, b } => print_json(&SimilarityOutput {
            similarity: compute_similarity(&a, &b),
        }),
        Commands::Validate { a, b } => print_json(&engine.validate(&a, &b)),
        Commands::Moderate {
            a,
            b,
            flagged_count,
        } => {
            let request = ModerateQuestionRequest {
                text_a: a,
                text_b: b,
                flagged_count,
            };
            print_json(&moderate(&engine, &request)?)
        }
        Commands::Priority { flagged_count } => {
            let flagged_count = u32::try_from(flagged_count).with_context(|| {
                format!("flagged_count must be non-negative, got {flagged_count}")
            })?;
            print_json(&PriorityOutput {
                flagged_count,
                priority: ranker.priority(flagged_count),
                needs_review: ranker.needs_review(flagged_count),
            })
        }
        Commands::Score {
            predicted_a,
            votes_a,
            total_votes,
        } => {
            let request = ScorePredictionRequest {
                predicted_a,
                votes_a,
                total_votes,
            };
            print_json(&request.score()?)
        }
        Commands::Batch { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let requests: Vec<ModerateQuestionRequest> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let decisions = requests
                .iter()
                .map(|request| moderate(&engine, request))
                .collect::<anyhow::Result<Vec<_>>>()?;
            tracing::info!(count = decisions.len(), "batch moderated");
            print_json(&decisions)
        }
    }
}

fn moderate(
    engine: &ModerationEngine,
    request: &ModerateQuestionRequest,
) -> anyhow::Result<ModerationDecision> {
    let flagged_count = request.checked_flagged_count()?;
    Ok(engine.moderate(&request.text_a, &request.text_b, flagged_count))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
