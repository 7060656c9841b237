use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;

use txn_analyzer::cli::{
    handle_add_command, handle_export_command, handle_query_command, AddArgs, ExportArgs, Menu,
    QueryCommands,
};
use txn_analyzer::config::{AnalyzerPaths, Settings};
use txn_analyzer::logging::init_logger;
use txn_analyzer::storage::TransactionStore;

#[derive(Parser, Debug)]
#[command(
    name = "txn-analyzer",
    version,
    about = "Query and summarize a list of financial transactions",
    long_about = "txn-analyzer loads transactions from a JSON or CSV file and answers \
                  questions about them: totals, averages, filters by date, type, merchant \
                  or amount, and the busiest month. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    /// Transaction data file (.json or .csv)
    #[arg(long, global = true, env = "TXN_ANALYZER_DATA_FILE")]
    data: Option<PathBuf>,

    /// Log verbosity, overridden by RUST_LOG
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive numbered menu
    Menu,

    /// Run a single query and print the result
    #[command(subcommand, alias = "q")]
    Query(QueryCommands),

    /// Add a transaction for this session and show the register
    Add(AddArgs),

    /// Write the loaded transactions as JSON, CSV or YAML
    Export(ExportArgs),

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    trace!("{cli:?}");

    let paths = AnalyzerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let data_file = settings.resolve_data_file(&paths, cli.data.as_deref());
    debug!(path = %data_file.display(), "resolved data file");

    if let Some(Commands::Config) = cli.command {
        println!("txn-analyzer Configuration");
        println!("==========================");
        println!("Base directory: {}", paths.base_dir().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!("Data file:      {}", data_file.display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Date format:     {}", settings.date_format);
        match settings.register_limit {
            Some(limit) => println!("  Register limit:  {}", limit),
            None => println!("  Register limit:  none"),
        }
        return Ok(());
    }

    let mut store = TransactionStore::from_file(&data_file)
        .with_context(|| format!("Failed to load transactions from {}", data_file.display()))?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let interactive = stdout.is_terminal();
            Menu::new(&mut store, &settings, stdin.lock(), stdout.lock())
                .clear_screen(interactive)
                .run()?;
        }
        Some(Commands::Query(cmd)) => handle_query_command(&store, &settings, cmd)?,
        Some(Commands::Add(args)) => handle_add_command(&mut store, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&store, args)?,
        Some(Commands::Config) => {}
    }

    Ok(())
}
