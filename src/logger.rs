use crate::Result;
use colorful::core::color_string::CString;
use colorful::Colorful;
use core::fmt::Arguments;
use dashmap::DashMap;
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Record};
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

lazy_static! {
    static ref TRACKING: DashMap<String, Instant> = DashMap::new();
}

fn get_time_and_update(name: &str) -> Duration {
    let now = Instant::now();
    let duration = match TRACKING.get(name) {
        Some(time) => now.duration_since(*time),
        None => Duration::from_millis(0),
    };

    TRACKING.insert(name.to_owned(), now);

    duration
}

/// Everything goes to stderr, stdout is kept for the results.
/// With a `dir`, warnings and our own logs also land in `dir/opi-YYYY-MM-DD.log`
pub fn init(level: LevelFilter, dir: Option<&Path>) -> Result<()> {
    let console = fern::Dispatch::new()
        .format(console_format)
        .level(LevelFilter::Warn)
        .level_for("opi", level)
        .level_for("requester", level)
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new().chain(console);

    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;

        let file = fern::Dispatch::new()
            .format(file_format)
            .level(LevelFilter::Warn)
            .level_for("opi", LevelFilter::Debug)
            .level_for("requester", LevelFilter::Debug)
            .chain(fern::DateBased::new(dir.join("opi-"), "%F.log"));

        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;

    Ok(())
}

fn console_format(callback: fern::FormatCallback, message: &Arguments, record: &Record) {
    let mut name = record.target().to_owned();

    if let Some(line) = record.line() {
        name.push_str(&format!(":{}", line));
    }

    let duration = get_time_and_update(&name);

    callback.finish(format_args!(
        "{}{} {}{} {} ({}ms)",
        "[".dark_gray(),
        level_style(record.level()),
        name,
        "]".dark_gray(),
        message,
        duration.as_millis(),
    ))
}

fn file_format(callback: fern::FormatCallback, message: &Arguments, record: &Record) {
    callback.finish(format_args!(
        "{} {:<5} {} {}",
        chrono::Local::now().format("%F %T%.3f"),
        record.level(),
        record.target(),
        message,
    ))
}

fn level_style(level: Level) -> CString {
    match level {
        Level::Trace => "TRACE".dark_gray(),
        Level::Debug => "DEBUG".white(),
        Level::Info => "INFO".green(),
        Level::Warn => "WARN".yellow(),
        Level::Error => "ERROR".red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_time_per_target() {
        assert_eq!(get_time_and_update("logger::tests"), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(get_time_and_update("logger::tests") >= Duration::from_millis(5));
    }
}
