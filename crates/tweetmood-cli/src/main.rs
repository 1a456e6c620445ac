use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tweetmood_analyzer::{Analyzer, Score, Sentiment, Tally};
use tweetmood_core::AppConfig;
use tweetmood_timeline::{TimelineClient, TimelineError};

#[derive(Debug, Parser)]
#[command(name = "tweetmood-cli")]
#[command(about = "Score text and timelines against positive/negative word lists")]
struct Cli {
    /// Positive word list (overrides `TWEETMOOD_POSITIVE_WORDS`)
    #[arg(long, global = true)]
    positive_words: Option<PathBuf>,

    /// Negative word list (overrides `TWEETMOOD_NEGATIVE_WORDS`)
    #[arg(long, global = true)]
    negative_words: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a face and score for a piece of text
    Smile {
        /// Text to score; multiple arguments are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Score each of a user's recent posts
    Tweets {
        /// Screen name, with or without a leading `@`
        screen_name: String,

        /// Number of posts to fetch (defaults to `TWEETMOOD_TIMELINE_COUNT`)
        #[arg(long, short = 'n')]
        count: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tweetmood_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.log_level)?)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let analyzer = load_analyzer(&cli, &config)?;

    match cli.command {
        Commands::Smile { text } => {
            let text = text.join(" ");
            let score = analyzer.score(&text);
            println!("{}", smile_line(score));
        }
        Commands::Tweets { screen_name, count } => {
            run_tweets(&analyzer, &config, &screen_name, count).await?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level applies. Logs go to
/// stderr so stdout stays parseable.
fn log_filter(default_level: &str) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?)
}

fn load_analyzer(cli: &Cli, config: &AppConfig) -> anyhow::Result<Analyzer> {
    let positive = cli
        .positive_words
        .as_ref()
        .unwrap_or(&config.positive_words_path);
    let negative = cli
        .negative_words
        .as_ref()
        .unwrap_or(&config.negative_words_path);
    Ok(Analyzer::from_paths(positive, negative)?)
}

async fn run_tweets(
    analyzer: &Analyzer,
    config: &AppConfig,
    screen_name: &str,
    count: Option<u32>,
) -> anyhow::Result<()> {
    let client = TimelineClient::with_base_url(
        config.require_twitter_bearer_token()?,
        config.request_timeout_secs,
        &config.twitter_api_base_url,
    )?;

    let posts = match client
        .fetch_user_timeline(screen_name, count.unwrap_or(config.timeline_count))
        .await
    {
        Ok(posts) => posts,
        Err(TimelineError::UserNotFound { .. }) => {
            anyhow::bail!("no results for {screen_name}");
        }
        Err(e) => return Err(e.into()),
    };

    let mut tally = Tally::default();
    for post in &posts {
        let score = analyzer.score(&post.text);
        tally.record(score);
        println!("{}", post_line(score, &post.text));
    }
    println!("{}", tally_line(&tally));

    Ok(())
}

fn smile_line(score: Score) -> String {
    format!("{} {score}", Sentiment::from_score(score).emoticon())
}

/// One post per line: right-aligned score, then the text with line breaks
/// flattened.
fn post_line(score: Score, text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{score:>3} {flat}")
}

fn tally_line(tally: &Tally) -> String {
    format!(
        "positive: {}  negative: {}  neutral: {}  total: {}",
        tally.positive,
        tally.negative,
        tally.neutral,
        tally.total()
    )
}
