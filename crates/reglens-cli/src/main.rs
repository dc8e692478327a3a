//! RegLens CLI
//!
//! Command-line interface for the RegLens metrics service and the agency
//! grid browser.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use reglens_api::{ApiConfig, Server};
use reglens_client::RegLensClient;
use reglens_storage::MetricsStore;
use reglens_view::{AgencyBrowser, SortDirection, SortKey, format_count};

/// RegLens - federal regulation metrics
#[derive(Parser, Debug)]
#[command(name = "reglens")]
#[command(about = "Federal regulation metrics service and browser", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the metrics API server
    Serve {
        /// Socket address to bind
        #[arg(long, env = "REGLENS_BIND_ADDR", default_value = "0.0.0.0:8000")]
        bind_addr: String,

        /// SQLite database URL
        #[arg(
            long,
            env = "REGLENS_DATABASE_URL",
            default_value = "sqlite:data/reglens.db"
        )]
        database_url: String,
    },

    /// Fetch the snapshot and render one page of the agency grid
    Browse {
        /// Base URL of the metrics API
        #[arg(long, env = "REGLENS_BASE_URL", default_value = "http://localhost:8000")]
        base_url: String,

        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,

        /// Sort column
        #[arg(long, value_enum, default_value_t = SortArg::Words)]
        sort: SortArg,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = DirectionArg::Desc)]
        direction: DirectionArg,

        /// Page to display, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Print aggregate statistics straight from the store
    Stats {
        /// SQLite database URL
        #[arg(
            long,
            env = "REGLENS_DATABASE_URL",
            default_value = "sqlite:data/reglens.db"
        )]
        database_url: String,
    },

    /// Check API health
    Health {
        /// Base URL of the metrics API
        #[arg(long, env = "REGLENS_BASE_URL", default_value = "http://localhost:8000")]
        base_url: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Words,
    Regulations,
    Agency,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Words => SortKey::Words,
            SortArg::Regulations => SortKey::Regulations,
            SortArg::Agency => SortKey::Agency,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reglens=debug".into()),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Serve {
            bind_addr,
            database_url,
        } => {
            let server = Server::new(ApiConfig {
                bind_addr,
                database_url,
            });
            server.run().await?;
        }
        Command::Browse {
            base_url,
            search,
            sort,
            direction,
            page,
        } => browse(&base_url, &search, sort.into(), direction.into(), page).await?,
        Command::Stats { database_url } => stats(&database_url).await?,
        Command::Health { base_url } => {
            let client = RegLensClient::new(base_url);
            let report = client.health().await?;
            println!("{} at {}", report.status, report.timestamp);
        }
    }
    Ok(())
}

/// One-shot render of the agency grid: fetch, derive, print.
async fn browse(
    base_url: &str,
    search: &str,
    sort: SortKey,
    direction: SortDirection,
    page: usize,
) -> Result<()> {
    let client = RegLensClient::new(base_url);

    let mut browser = AgencyBrowser::new();
    browser.begin_fetch();
    browser.complete_fetch(client.list_agencies().await);

    if let Some(message) = browser.fetch_state().error_message() {
        eprintln!("Could not load agency data: {message}");
        eprintln!("Run the command again to retry.");
        anyhow::bail!("fetch failed");
    }

    browser.set_sort(sort, direction);
    browser.set_search_term(search);
    browser.set_page(page);

    let total = browser.filtered_len();
    if total == 0 {
        println!("No agencies match \"{search}\".");
        return Ok(());
    }

    println!(
        "{total} agencies — sorted by {} ({}), page {}/{}",
        browser.sort_key(),
        browser.sort_direction(),
        browser.current_page(),
        browser.page_count()
    );
    for metrics in browser.visible_page() {
        println!(
            "  {:<48} {:>10} words  {:>8} sections",
            metrics.name,
            format_count(metrics.word_count),
            format_count(metrics.section_count)
        );
    }
    if browser.pagination_visible() {
        println!("  (use --page to move between pages)");
    }
    Ok(())
}

/// Snapshot summary computed directly against the store.
async fn stats(database_url: &str) -> Result<()> {
    let store = MetricsStore::open(database_url).await?;

    let agencies = store.agency_count().await?;
    let snapshot = store.list_agencies().await?;
    let total_words: u64 = snapshot.as_slice().iter().map(|m| m.word_count).sum();
    let total_sections: u64 = snapshot.as_slice().iter().map(|m| m.section_count).sum();
    let avg = store.average_section_length().await?;

    println!("agencies:            {agencies}");
    println!("total words:         {}", format_count(total_words));
    println!("total sections:      {}", format_count(total_sections));
    println!("avg words / section: {avg:.1}");
    Ok(())
}
