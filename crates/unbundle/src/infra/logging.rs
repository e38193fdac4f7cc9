//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;

/// Map a config/env level name onto a filter, falling back to WARN.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "warn" | "warning" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

/// Adjust a base level by `-v`/`-q` counts.
pub fn adjust_level(base: LevelFilter, verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let position = LEVELS.iter().position(|level| *level == base).unwrap_or(2) as i32;
    let shifted = (position + i32::from(verbose) - i32::from(quiet)).clamp(0, 5);
    LEVELS[shifted as usize]
}

/// Install a stderr fmt subscriber so stdout carries only command output.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
