use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tickforge::config::{AppConfig, fetch_config};
use tickforge::format::{format_percent, format_price, format_volume_abbrev, or_placeholder};
use tickforge::generator::SeriesGenerator;
use tickforge::random::{RandomSource, SeededRandom, ThreadRandom};
use tickforge::stats::{compute_change, compute_range_summary};
use tickforge::tui::{self, App};
use tickforge::{Result, TickforgeError};

const USAGE: &str = "usage: tickforge [--json <SYMBOL> [COUNT] | --summary]";

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so the dashboard and JSON output stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = fetch_config()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--json") => print_json(&config, &args[1..]),
        Some("--summary") => print_summary(&config),
        Some(other) => Err(usage_error(other)),
        None if !tui::is_interactive() => {
            warn!("stdout is not a terminal; printing summary instead");
            print_summary(&config)
        }
        None => run_dashboard(&config).await,
    }
}

fn usage_error(arg: &str) -> TickforgeError {
    TickforgeError::InvalidInput(format!("unexpected argument {arg:?}\n{USAGE}"))
}

/// Picks the seeded source when a seed is configured.
fn random_source(config: &AppConfig) -> Box<dyn RandomSource> {
    match config.market.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

fn print_json(config: &AppConfig, args: &[String]) -> Result<()> {
    let symbol = args.first().ok_or_else(|| usage_error("--json"))?;
    let count = match args.get(1) {
        Some(raw) => raw.parse::<usize>().map_err(|_| usage_error(raw))?,
        None => config.market.bar_count,
    };

    let series = SeriesGenerator::from_config(config).generate(
        symbol,
        count,
        random_source(config).as_mut(),
    )?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

fn print_summary(config: &AppConfig) -> Result<()> {
    let generator = SeriesGenerator::from_config(config);
    let mut rng = random_source(config);
    let window = config.market.range_window;

    println!(
        "{:<10} {:>12} {:>10} {:>9} {:>12} {:>12} {:>9}",
        "SYMBOL", "LAST", "CHG", "CHG %", "HIGH", "LOW", "VOLUME"
    );
    for symbol in &config.market.symbols {
        let series = generator.generate(symbol, config.market.bar_count, rng.as_mut())?;
        let change = compute_change(&series);
        let range = compute_range_summary(&series, Some(window));

        println!(
            "{:<10} {:>12} {:>10} {:>9} {:>12} {:>12} {:>9}",
            symbol,
            or_placeholder(series.last().map(|b| b.close).ok_or("empty"), format_price),
            or_placeholder(change.as_ref(), |c| format_price(c.absolute_change)),
            or_placeholder(change.as_ref(), |c| format_percent(c.percent_change)),
            or_placeholder(range.as_ref(), |r| format_price(r.high)),
            or_placeholder(range.as_ref(), |r| format_price(r.low)),
            or_placeholder(range.as_ref(), |r| format_volume_abbrev(r.volume)),
        );
    }
    Ok(())
}

async fn run_dashboard(config: &AppConfig) -> Result<()> {
    let mut app = App::new(&config.market, random_source(config));
    let mut terminal = tui::setup_terminal()?;

    let outcome = tui::run(&mut terminal, &mut app, config.market.refresh_secs).await;

    // Restore even when the loop failed, then report the loop's error first.
    let restored = tui::restore_terminal(&mut terminal);
    outcome?;
    restored?;

    info!("dashboard closed");
    Ok(())
}
