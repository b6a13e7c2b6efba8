//! CLI definition, tracing setup, and the scan run.

use std::path::Path;

use clap::Parser;
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use similarscan_scanner::{
    HttpFetcher, ScanObserver, ScanOutcome, Scanner, report,
};
use similarscan_shared::{AppId, ScanConfig, TraversalMode, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// similarscan — discover similar games through the store's recommendation graph.
#[derive(Parser)]
#[command(
    name = "similarscan",
    version,
    about = "Crawl Steam's \"more like this\" pages from a seed appid and report similar games.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Seed appid to start scanning from.
    pub appid: AppId,

    /// Write results to a file instead of stdout
    /// (bare -o uses the configured default, out.txt).
    #[arg(short, long, num_args = 0..=1)]
    pub output: Option<Option<String>>,

    /// Maximum number of page fetches (default 50).
    #[arg(short = 'm', long)]
    pub max_calls: Option<u32>,

    /// Maximum number of games to accept (default 200).
    #[arg(short = 'g', long)]
    pub max_games: Option<u32>,

    /// Categories to keep in the report
    /// (default: released topselling newreleases freegames).
    #[arg(short, long, num_args = 1..)]
    pub categories: Option<Vec<String>>,

    /// Pop the frontier at random instead of FIFO
    /// (can lead to less similar results).
    #[arg(short, long)]
    pub random: bool,

    /// Keep enqueuing discovered games after the game budget fills.
    #[arg(long)]
    pub enqueue_after_full: bool,

    /// Print accepted games as JSON instead of name/URL lines.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "similarscan=info",
        1 => "similarscan=debug",
        _ => "similarscan=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Scan run
// ---------------------------------------------------------------------------

/// Run the scan described by the CLI flags.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let app_config = load_config()?;
    let mut config = ScanConfig::from(&app_config);

    if let Some(max_calls) = cli.max_calls {
        config.max_calls = max_calls;
    }
    if let Some(max_games) = cli.max_games {
        config.max_games = max_games;
    }
    if let Some(categories) = &cli.categories {
        config.categories = categories.clone();
    }
    if cli.random {
        config.mode = TraversalMode::Random;
    }
    config.enqueue_after_full = cli.enqueue_after_full;

    let output = resolve_output(cli.output.clone(), &app_config.defaults.output_file);

    info!(
        appid = %cli.appid,
        max_calls = config.max_calls,
        max_games = config.max_games,
        mode = ?config.mode,
        "starting scan"
    );

    let fetcher = HttpFetcher::new()?;
    let scanner = Scanner::new(cli.appid, config.clone(), fetcher);

    // Progress bar sized to the game budget; verbose runs log per page
    // through tracing instead.
    let observer: Box<dyn ScanObserver> = if cli.verbose > 0 {
        Box::new(VerboseProgress)
    } else {
        Box::new(BarProgress::new(u64::from(config.max_games)))
    };

    let outcome = scanner.run(observer.as_ref()).await;

    println!();
    println!("{}", report::summary(&outcome));

    if cli.json {
        println!("{}", report::games_json(&outcome.games)?);
    } else if let Some(path) = &output {
        report::write_games(&outcome.games, Path::new(path))?;
        println!("Written {} games to {path}", outcome.games.len());
    } else {
        report::print_games(&outcome.games);
    }

    Ok(())
}

/// Resolve `-o` into a result-file path: an explicit filename wins, a bare
/// flag falls back to the config file's `output_file`, no flag means stdout.
fn resolve_output(output: Option<Option<String>>, default_file: &str) -> Option<String> {
    match output {
        Some(Some(path)) => Some(path),
        Some(None) => Some(default_file.to_string()),
        None => None,
    }
}

// ---------------------------------------------------------------------------
// Progress observers
// ---------------------------------------------------------------------------

/// Scan progress as an indicatif bar filling toward the game budget.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new(max_games: u64) -> Self {
        let bar = ProgressBar::new(max_games);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {bar:40.cyan/blue} {pos}/{len} games {msg}",
            )
            .unwrap(),
        );
        Self { bar }
    }
}

impl ScanObserver for BarProgress {
    fn page_scanned(&self, appid: AppId, depth: u32, _found: usize, kept: usize, _total: usize) {
        // With enqueue_after_full a page can keep more items than the
        // budget has room left; never push the bar past its length.
        let remaining = self
            .bar
            .length()
            .unwrap_or(0)
            .saturating_sub(self.bar.position());
        self.bar.inc((kept as u64).min(remaining));
        self.bar.set_message(format!("appid {appid} (depth {depth})"));
    }

    fn done(&self, _outcome: &ScanOutcome) {
        self.bar.finish_and_clear();
    }
}

/// Per-page progress lines through tracing, for verbose runs.
struct VerboseProgress;

impl ScanObserver for VerboseProgress {
    fn page_scanned(&self, appid: AppId, depth: u32, found: usize, kept: usize, total: usize) {
        info!(%appid, depth, found, kept, total, "page scanned");
    }

    fn done(&self, outcome: &ScanOutcome) {
        info!(
            accepted = outcome.games.len(),
            calls = outcome.calls,
            queued = outcome.queued,
            "scan complete"
        );
    }
}
