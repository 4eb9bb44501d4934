//! Terminal front end for QuoteDeck.
//!
//! # Responsibility
//! - Wire core operations to subcommands and status-line notifications.
//! - Keep all rendering out of `quotedeck_core`; the CLI is the external
//!   collaborator that invokes operations and shows their results.

use clap::{Parser, Subcommand};
use quotedeck_core::db::open_db;
use quotedeck_core::{
    core_version, default_log_level, derive_categories, export_quotes, import_quotes,
    init_logging, HttpRemoteSource, QuotePicker, QuoteStore, SqliteStateStore, SyncEngine,
    ThreadRngSource, DEFAULT_ENDPOINT, EXPORT_FILE_NAME,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "quotedeck")]
#[command(about = "Category-tagged quote list with random display and server sync")]
#[command(version = core_version())]
struct Cli {
    /// SQLite database holding the persisted quote list.
    #[arg(long, global = true, default_value = "quotedeck.db3")]
    db: PathBuf,
    /// Absolute directory for rolling log files; logging is off when absent.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random quote, optionally restricted to one category.
    Show {
        /// Category filter; defaults to the persisted selection.
        #[arg(long)]
        category: Option<String>,
    },
    /// Persist the category filter used by `show`.
    Filter { category: String },
    /// Add a quote to the list.
    Add { text: String, category: String },
    /// Print all quotes in insertion order.
    List,
    /// Print the derived category index.
    Categories,
    /// Write the quote list as pretty-printed JSON.
    Export {
        /// Output file, `quotes.json` when omitted.
        file: Option<PathBuf>,
    },
    /// Merge quotes from a JSON file into the list.
    Import { file: PathBuf },
    /// Fetch remote quotes, merge them, and push the full list back.
    Sync {
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            notify("error", &err);
            return ExitCode::FAILURE;
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            notify("error", &message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let conn = open_db(&cli.db).map_err(|err| err.to_string())?;
    let mut store =
        QuoteStore::load(SqliteStateStore::new(&conn)).map_err(|err| err.to_string())?;

    match &cli.command {
        Commands::Show { category } => {
            let filter = match category {
                Some(category) => category.clone(),
                None => store.selected_category().map_err(|err| err.to_string())?,
            };
            let mut picker = QuotePicker::new(ThreadRngSource);
            let quote = picker
                .pick(store.all(), &filter)
                .map_err(|err| err.to_string())?;
            println!("\"{}\" - {}", quote.text, quote.category);
        }
        Commands::Filter { category } => {
            store
                .set_selected_category(category)
                .map_err(|err| err.to_string())?;
            notify("info", &format!("Showing quotes from: {category}"));
        }
        Commands::Add { text, category } => {
            let quote = store.add(text, category).map_err(|err| err.to_string())?;
            notify(
                "success",
                &format!("Quote added to \"{}\" category!", quote.category),
            );
        }
        Commands::List => {
            for quote in store.all() {
                println!("[{}] {}", quote.category, quote.text);
            }
        }
        Commands::Categories => {
            for category in derive_categories(store.all()) {
                println!("{category}");
            }
        }
        Commands::Export { file } => {
            let payload = export_quotes(store.all()).map_err(|err| err.to_string())?;
            let path = file
                .clone()
                .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            fs::write(&path, payload)
                .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
            notify(
                "success",
                &format!("Quotes exported to {}!", path.display()),
            );
        }
        Commands::Import { file } => {
            let payload = fs::read_to_string(file)
                .map_err(|err| format!("failed to read {}: {err}", file.display()))?;
            let appended =
                import_quotes(&payload, &mut store).map_err(|err| err.to_string())?;
            notify(
                "success",
                &format!("Imported {appended} quotes successfully!"),
            );
        }
        Commands::Sync { endpoint } => {
            notify("info", "Syncing with server...");
            let remote = HttpRemoteSource::new(endpoint).map_err(|err| err.to_string())?;
            let outcome = SyncEngine::new(remote)
                .sync(&mut store)
                .map_err(|err| err.to_string())?;
            let message = if outcome.added_count > 0 {
                format!("Synced {} new quotes from server!", outcome.added_count)
            } else {
                "All server quotes already exist locally.".to_string()
            };
            notify("success", &message);
            if !outcome.push_succeeded {
                notify("info", "Push to server failed; local quotes were kept.");
            }
        }
    }

    Ok(())
}

/// Status-line notification in place of the widget's transient banner.
fn notify(kind: &str, message: &str) {
    if kind == "error" {
        eprintln!("[{kind}] {message}");
    } else {
        println!("[{kind}] {message}");
    }
}
