//! Ripple-Robots main entry point
//!
//! A small command-line front end that checks URLs against a local robots.txt file.

use anyhow::Context;
use clap::Parser;
use ripple_robots::config::{load_config, load_robots_text, Config};
use ripple_robots::RobotsDocument;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ripple-Robots: robots.txt rules for a single origin
///
/// Parses the robots.txt file named in the configuration and reports, for every
/// configured or given URL, whether the crawler may fetch it and which line decided.
#[derive(Parser, Debug)]
#[command(name = "ripple-robots")]
#[command(version = "1.0.0")]
#[command(about = "Check URLs against a robots.txt file", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Additional URLs to check
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Check as this user agent instead of the configured crawler
    #[arg(short, long)]
    agent: Option<String>,

    /// Fail on an invalid base URL or path pattern instead of degrading
    #[arg(long)]
    strict: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let text = load_robots_text(&config)
        .with_context(|| format!("failed to read robots file {}", config.robots.file))?;

    let robots = if cli.strict {
        RobotsDocument::parse_strict(&config.robots.base_url, Some(&text))
            .with_context(|| format!("{} is not a valid robots.txt", config.robots.file))?
    } else {
        RobotsDocument::parse(&config.robots.base_url, Some(&text))
    };
    let agent = cli
        .agent
        .clone()
        .unwrap_or_else(|| config.user_agent.product_token());

    report(&config, &robots, &agent, &cli.urls);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ripple_robots=info,warn"),
            1 => EnvFilter::new("ripple_robots=debug,info"),
            2 => EnvFilter::new("ripple_robots=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints verdicts for every URL followed by the document-wide settings
fn report(config: &Config, robots: &RobotsDocument, agent: &str, extra_urls: &[String]) {
    println!("=== Ripple-Robots ===\n");
    println!("Base URL: {}", config.robots.base_url);
    println!("User agent: {}\n", agent);

    let urls = config
        .check
        .iter()
        .map(|entry| entry.url.as_str())
        .chain(extra_urls.iter().map(String::as_str));

    for url in urls {
        let verdict = robots.is_allowed(url, agent);
        match robots.matching_line_number(url, agent) {
            Some(line) if line > 0 => println!("  {:<13} {} (line {})", verdict, url, line),
            _ => println!("  {:<13} {}", verdict, url),
        }
    }

    println!();
    match robots.crawl_delay(agent) {
        Some(delay) => println!("Crawl delay: {}s", delay),
        None => println!("Crawl delay: none"),
    }
    println!(
        "Preferred host: {}",
        robots.preferred_host().unwrap_or("none")
    );

    let sitemaps = robots.sitemaps();
    println!("Sitemaps ({}):", sitemaps.len());
    for sitemap in &sitemaps {
        println!("  - {}", sitemap);
    }
}
