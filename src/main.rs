use clap::Parser;
use kindersmart::core::config::{self, CliOverrides, KinderConfig};
use kindersmart::core::registry::ACTIVITIES;
use kindersmart::core::types::CategoryType;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "kindersmart", about = "Learning games for kids, in the terminal")]
struct Args {
    /// Start in this category's activity list
    #[arg(short, long, value_enum)]
    category: Option<CategoryType>,

    /// Show generated content without the artificial delay
    #[arg(long)]
    instant: bool,

    /// Print every activity as JSON and exit
    #[arg(long)]
    list_activities: bool,
}

fn log_level() -> LevelFilter {
    std::env::var("KINDERSMART_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.list_activities {
        let json = serde_json::to_string_pretty(ACTIVITIES).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    // Initialize file logger - writes to kindersmart.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("kindersmart.log") {
        let _ = WriteLogger::init(log_level(), log_config, log_file);
    }

    log::info!("KinderSmart starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        KinderConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            category: args.category,
            instant: args.instant,
        },
    );
    log::info!(
        "Start category: {:?}, content delays: {:?}",
        resolved.start_category,
        resolved.delays
    );

    kindersmart::tui::run(resolved)
}
