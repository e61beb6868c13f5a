use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::{env, io};

use tape_loop::model::{
    LoopInputs, DEFAULT_BARS, DEFAULT_BEATS, DEFAULT_BEATS_PER_MINUTE, DEFAULT_TAPE_SPEED,
};
use tape_loop::{form, start, OutputFormat, SessionConfig};

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const LOG_LEVEL_FILTER_DEFAULT: LevelFilter = LevelFilter::Warn;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_BARS)]
    bars: f64,
    /// Beats per bar
    #[arg(long, default_value_t = DEFAULT_BEATS)]
    beats: f64,
    #[arg(long, default_value_t = DEFAULT_BEATS_PER_MINUTE)]
    bpm: f64,
    /// Inches per second
    #[arg(long, default_value_t = DEFAULT_TAPE_SPEED)]
    tape_speed: f64,
    /// Overrides --bpm with 60 / value
    #[arg(long)]
    seconds_per_beat: Option<f64>,
    #[arg(long)]
    show_intermediate: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print once and exit instead of reading edits from stdin
    #[arg(long)]
    once: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_log_level_filter(log_level: &str) -> Option<LevelFilter> {
    match log_level.to_lowercase().trim() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => {
            if !log_level.is_empty() {
                eprintln!("Invalid log level: '{}'", log_level);
            }
            None
        }
    }
}

fn init_logging(verbosity: u8) {
    let log_level_filter = match verbosity {
        0 => env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|log_level| parse_log_level_filter(&log_level))
            .unwrap_or(LOG_LEVEL_FILTER_DEFAULT),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter(None, log_level_filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // 1. Build the configuration from the arguments
    let config = SessionConfig {
        inputs: LoopInputs {
            bars: args.bars,
            beats: args.beats,
            beats_per_minute: args.bpm,
            tape_speed: args.tape_speed,
        },
        seconds_per_beat: args.seconds_per_beat,
        show_intermediate: args.show_intermediate,
        format: args.format,
    };

    // 2. Start the session
    let mut session = start(&config);

    // 3. Print once, or hand the session to the form
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.once {
        form::present(&session, config.format, &mut out)?;
    } else {
        form::run_form(&mut session, config.format, io::stdin().lock(), &mut out)?;
    }

    Ok(())
}
