use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use wortgenerator::io_utils::{simple_cli_error, wort_cli_error};
use wortgenerator::server::{self, AppState};
use wortgenerator::{sample, validate_count, Config, DudenClient, Resolver, WordList};

#[derive(Parser)]
#[command(name = "wortgen", about = "Random German nouns with Duden definitions")]
struct Args {
    /// CSV file with `pos` and `lemma` columns
    #[arg(long, global = true)]
    words: Option<PathBuf>,
    /// Base URL of the Duden site
    #[arg(long, global = true)]
    dictionary_url: Option<String>,
    /// Timeout for each dictionary request
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a batch of words with definitions
    Sample {
        /// Number of words to draw
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Skip dictionary lookups
        #[arg(long)]
        no_definitions: bool,
        /// Emit JSON instead of tab separated lines
        #[arg(long)]
        json: bool,
    },
    /// Run the web interface
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wortgenerator=info,wortgen=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::from_env().map_err(|e| wort_cli_error("reading environment", e))?;
    if let Some(path) = args.words {
        config.words.path = path;
    }
    if let Some(url) = args.dictionary_url {
        config.dictionary.base_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.dictionary.timeout = Duration::from_secs(secs);
    }

    let words = WordList::load(&config.words).map_err(|e| wort_cli_error("loading words", e))?;
    if words.is_empty() {
        return Err(simple_cli_error(&format!(
            "No nouns tagged '{}' found in '{}'",
            config.words.noun_tag,
            config.words.path.display()
        ))
        .into());
    }

    match args.command {
        Command::Sample {
            count,
            seed,
            no_definitions,
            json,
        } => {
            let n = validate_count(count.unwrap_or(config.default_count), config.max_count)
                .map_err(|e| wort_cli_error("invalid count", e))?;
            let drawn = {
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(s),
                    None => StdRng::from_entropy(),
                };
                sample(words.as_slice(), n, &mut rng).map_err(|e| wort_cli_error("sampling", e))?
            };

            let resolver = if no_definitions {
                Resolver::without_definitions()
            } else {
                let client = DudenClient::new(&config.dictionary)
                    .map_err(|e| wort_cli_error("creating dictionary client", e))?;
                Resolver::new(Arc::new(client))
            };
            let items = resolver.annotate(drawn).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    println!("{}\t{}", item.word, item.definition);
                }
            }
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(config.bind);
            let client = DudenClient::new(&config.dictionary)
                .map_err(|e| wort_cli_error("creating dictionary client", e))?;
            let state = AppState {
                words: Arc::new(words),
                resolver: Resolver::new(Arc::new(client)),
                max_count: config.max_count,
                default_count: config.default_count,
            };
            server::serve(&bind, state)
                .await
                .map_err(|e| wort_cli_error("running server", e))?;
        }
    }

    Ok(())
}
