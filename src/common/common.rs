use std::time::{Duration, SystemTime};
use chrono::{DateTime, Utc};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter>
{
    match level.to_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" | "warning" => Some(log::LevelFilter::Warn),
        "error" | "critical" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            eprintln!("Unknown log level encountered: '{}', falling back to 'info'", config.log_level);
            log::LevelFilter::Info
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Failed to initialize logging: {err}");
        return;
    }
    info!("logging initialized.");
}

/// Sleeps for `duration`, returning `true` early if shutdown was signalled
/// (or the shutdown sender is gone).
pub async fn shutdown_waiting(duration: Duration, mut shutdown: watch::Receiver<bool>) -> bool
{
    if *shutdown.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(duration) => *shutdown.borrow(),
        changed = shutdown.changed() => {
            match changed {
                Ok(_) => *shutdown.borrow(),
                Err(_) => true
            }
        }
    }
}

pub fn system_time_to_timestamp(time: SystemTime) -> i64 {
    let datetime: DateTime<Utc> = time.into();
    datetime.timestamp()
}

pub fn hexrep(data: &[u8]) -> String {
    hex::encode(data)
}

/// Renders a hash the way Reticulum tools print destinations: `<0123abcd...>`.
pub fn prettyhexrep(data: &[u8]) -> String {
    format!("<{}>", hex::encode(data))
}
