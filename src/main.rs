mod dispatch;
mod gateway;
mod pipeline;
mod replies;

use chuck_channels::telegram::TelegramChannel;
use chuck_core::{
    config::{self, BotConfig},
    language::{self, LANGUAGES},
    message::IncomingMessage,
    traits::{Channel, SessionStore},
    Session,
};
use chuck_jokes::{JokeCatalog, JokeFetcher};
use chuck_memory::MemorySessions;
use chuck_translate::AzureTranslator;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "chuckbot",
    version,
    about = "Chuck Norris jokes, numbered and translated"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check configuration health.
    Status,
    /// Print one joke, the same way the bot would reply.
    Joke {
        /// Joke number, 1-based.
        number: String,
        /// Language name, e.g. "french" or "Español".
        #[arg(short, long)]
        language: Option<String>,
    },
    /// List supported languages.
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg.bot)?;

    match cli.command {
        Commands::Start => {
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.bot_token.is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or the BOT_TOKEN env var."
                        );
                    }
                    let channel = TelegramChannel::new(tg.clone());
                    channels.insert("telegram".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Set BOT_TOKEN or enable [channel.telegram].");
            }

            if cfg.translator.api_key.is_empty() {
                anyhow::bail!(
                    "Translator api_key is empty. Set it in config.toml or the TRANSLATOR_KEY env var."
                );
            }

            let sessions = chuck_memory::open(&cfg.memory).await?;
            let translator = Arc::new(AzureTranslator::from_config(&cfg.translator));
            let catalog = Arc::new(JokeCatalog::new());
            let pipeline = pipeline::Pipeline::new(
                sessions,
                translator,
                dispatch::Dispatcher::new(catalog.clone()),
            );

            println!("{} starting...", cfg.bot.name);
            let gw = Arc::new(gateway::Gateway::new(channels, pipeline, catalog));
            gw.run(JokeFetcher::new(cfg.jokes.clone())).await?;
        }
        Commands::Status => {
            println!("{} status\n", cfg.bot.name);
            println!("Config: {}", cli.config);
            println!();

            if let Some(ref tg) = cfg.channel.telegram {
                println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.bot_token.is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  telegram: not configured");
            }
            println!(
                "  translator: {} ({})",
                if cfg.translator.api_key.is_empty() {
                    "missing api_key"
                } else {
                    "configured"
                },
                cfg.translator.endpoint
            );
            println!("  memory: {} ({})", cfg.memory.backend, cfg.memory.db_path);
            println!("  jokes: {}", cfg.jokes.url);
        }
        Commands::Joke { number, language } => {
            let target = match language {
                Some(name) => language::resolve(&name)
                    .ok_or_else(|| anyhow::anyhow!("{}", replies::INVALID_LANGUAGE))?,
                None => chuck_core::LanguageCode::default(),
            };

            let jokes = JokeFetcher::new(cfg.jokes.clone()).fetch().await?;
            let catalog = Arc::new(JokeCatalog::from_jokes(jokes)?);

            let sessions = Arc::new(MemorySessions::new());
            sessions
                .save(&Session::new("cli").with_language(target))
                .await?;

            let pipeline = pipeline::Pipeline::new(
                sessions,
                Arc::new(AzureTranslator::from_config(&cfg.translator)),
                dispatch::Dispatcher::new(catalog),
            );
            let reply = pipeline
                .respond(&IncomingMessage::new("cli", "cli", &number))
                .await;
            println!("{reply}");
        }
        Commands::Languages => {
            for lang in LANGUAGES {
                println!("{:<4}{:<28}{}", lang.code, lang.name, lang.native_name);
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `bot.log_level`. The returned guard must live as long
/// as the process so the file writer flushes.
fn init_logging(bot: &BotConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&bot.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if !bot.log_to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
        return Ok(None);
    }

    let log_dir = format!("{}/logs", config::shellexpand(&bot.data_dir));
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::never(&log_dir, "chuckbot.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}
