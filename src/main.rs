//! reposcout CLI
//!
//! Command-line interface for GitHub repository search.
//! Provides both one-shot and interactive search modes.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use reposcout::pager::total_pages_for;
use reposcout::{format_count, AppConfig, SearchClient};
use std::time::Duration;

/// reposcout - Interactive GitHub repository search
///
/// Without a subcommand, opens the interactive terminal UI with
/// search-as-you-type and paginated results.
#[derive(Parser)]
#[command(name = "reposcout")]
#[command(author = "Reposcout Contributors")]
#[command(version)]
#[command(about = "Search GitHub repositories from the terminal", long_about = None)]
struct Cli {
    /// GitHub API token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// Search query (use -- before the query if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Result page to fetch (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() {
    reposcout::logging::init();
    reposcout::logging::info("MAIN", "reposcout starting up");

    let cli = Cli::parse();

    let token = cli.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let result = match cli.command {
        Some(Commands::Search {
            query,
            page,
            output,
        }) => cmd_search(&query, page, &output, token),

        None => {
            let config = AppConfig {
                token,
                ..Default::default()
            };
            reposcout::tui::run(&config)
        }
    };

    reposcout::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// One-shot search command implementation
fn cmd_search(
    query: &str,
    page: u32,
    output_format: &str,
    token: Option<String>,
) -> reposcout::Result<()> {
    let client = SearchClient::new()?.with_token(token);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Searching for '{}'...", query));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let response = client.search(query, page);
    spinner.finish_and_clear();

    let response = response?;

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let total_pages = total_pages_for(response.total_count);
    println!(
        "{} {} repositories match '{}'",
        style("→").cyan().bold(),
        style(format_count(response.total_count)).green(),
        style(query).yellow()
    );

    if response.items.is_empty() {
        println!();
        println!("  No repositories found.");
        return Ok(());
    }

    println!(
        "  Page {} of {}",
        style(page).bold(),
        style(total_pages).bold()
    );
    println!();

    for (i, repo) in response.items.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            style(format!("{:3}.", page.saturating_sub(1) * 30 + i as u32 + 1)).dim(),
            style(&repo.full_name).cyan().bold(),
            style(format!("★ {}", format_count(repo.stargazers_count))).yellow(),
            style(repo.language.as_deref().unwrap_or("-")).magenta()
        );
        if let Some(description) = &repo.description {
            println!("       {}", style(description).dim());
        }
        println!("       {}", style(&repo.html_url).blue().underlined());
    }

    if response.incomplete_results {
        println!();
        println!(
            "  {}",
            style("Search timed out on GitHub's side; results may be incomplete.").dim()
        );
    }

    Ok(())
}
