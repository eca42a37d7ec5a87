//! quartermap — UW time-schedule retrieval and course offering-frequency
//! reports.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use quartermap::cli;
use quartermap::dawgpath::DAWGPATH_ROOT;
use quartermap::frequency::DEFAULT_CHECK_YEARS;
use quartermap::serve::DEFAULT_PORT;

#[derive(Parser)]
#[command(
    name = "quartermap",
    about = "UW time-schedule retrieval and course offering-frequency reports",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw schedule page for a department and term
    Schedule {
        /// Department code (e.g. "cse")
        department: String,
        /// Quarter symbol (WIN, SPR, SUM, AUT)
        quarter: String,
        /// Four-digit year, 2003 or later
        year: String,
    },
    /// Report how often a course was offered in recent years
    Frequency {
        /// Course code (e.g. "CSE143", "cse 143")
        course_code: String,
        /// Number of years to check, counting back from today
        #[arg(long, default_value_t = DEFAULT_CHECK_YEARS)]
        years: u32,
    },
    /// Serve a JSON file at /data for ad-hoc inspection
    Serve {
        /// Path to the JSON file
        json_path: String,
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Sign in to DawgPath in a browser and save the session cookies
    Login {
        /// DawgPath root URL
        #[arg(long, default_value = DAWGPATH_ROOT)]
        root: String,
    },
    /// Search DawgPath with a saved session
    Search {
        /// Search string
        query: String,
        /// DawgPath root URL
        #[arg(long, default_value = DAWGPATH_ROOT)]
        root: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Schedule {
            department,
            quarter,
            year,
        } => cli::schedule_cmd::run(&department, &quarter, &year).await,
        Commands::Frequency { course_code, years } => {
            cli::frequency_cmd::run(&course_code, years).await
        }
        Commands::Serve { json_path, port } => cli::serve_cmd::run(&json_path, port).await,
        Commands::Login { root } => cli::login_cmd::run(&root).await,
        Commands::Search { query, root } => cli::search_cmd::run(&query, &root).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "quartermap", &mut std::io::stdout());
            Ok(())
        }
    };

    // Errors surface as one user-facing line, never a panic or backtrace.
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
