use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use favprimes::config::Config;
use favprimes::logging::init_tracing;
use favprimes::prefs::FileStore;
use favprimes::store::{decode_pair, AppStore};
use favprimes::ui::counter::{CounterIntent, CounterState, CounterView};

#[derive(Debug, Parser)]
#[command(name = "favprimes", version, about = "Counter with persisted favourite primes")]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the counter screen (default)
    Show,
    /// Add one to the counter
    Increment,
    /// Subtract one from the counter
    Decrement,
    /// Mark or unmark the current count as a favourite
    #[command(subcommand)]
    Favourite(FavouriteCommand),
    /// Answer "Is this prime?" for the current count
    Prime,
    /// Answer "What is the nth prime?" for the current count
    NthPrime,
    /// Print the state as a `[count, [favourites...]]` pair
    Export,
    /// Replace the state with a pair produced by `export`
    Import {
        /// Encoded pair, e.g. '[3,[2,3]]'
        encoded: String,
    },
    /// Restore count 0 with no favourites
    Reset,
}

#[derive(Debug, Subcommand)]
enum FavouriteCommand {
    Add,
    Remove,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config from {}", Config::config_path().display())
        })?,
    };
    init_tracing(&config.logging);

    let prefs = FileStore::new(config.preferences_path());
    let mut store = AppStore::load(prefs, config.storage.record_key.as_str());
    tracing::debug!(path = %store.prefs().path().display(), "Using preference file");

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Increment => store.increment()?,
        Command::Decrement => store.decrement()?,
        Command::Favourite(FavouriteCommand::Add) => store.add_to_favourites()?,
        Command::Favourite(FavouriteCommand::Remove) => store.remove_from_favourites()?,
        Command::Prime => {
            println!("{}", CounterView::from_state(store.state()).prime_verdict());
            return Ok(());
        }
        Command::NthPrime => {
            let prime = store.nth_prime()?;
            println!("{prime}");
            return Ok(());
        }
        Command::Export => {
            println!("{}", store.encode()?);
            return Ok(());
        }
        Command::Import { encoded } => {
            let state = decode_pair(&encoded)?;
            store.dispatch(CounterIntent::Replace { state })?;
        }
        Command::Reset => store.dispatch(CounterIntent::Replace {
            state: CounterState::default(),
        })?,
    }

    print!("{}", CounterView::from_state(store.state()));
    Ok(())
}
