use chrono::Local;
use colored::{ColoredString, Colorize};
use log::Level;
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// Installs the global logger. The level comes from `RUST_LOG` and defaults
/// to info.
///
/// # Panics
/// Panics if `RUST_LOG` holds an invalid level or a logger is already
/// installed.
pub fn init_logging() {
    let level = match std::env::var(RUST_LOG_ENV) {
        Ok(raw) => log::LevelFilter::from_str(&raw).unwrap_or_else(|_| {
            panic!("Invalid log level set with `{RUST_LOG_ENV}`, got: {raw}")
        }),
        Err(_) => log::LevelFilter::Info,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let tag = level_tag(record.level());
            out.finish(format_args!("{time} {tag} > {message}"));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .expect("Failed to initialize logging");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tags_are_colored_by_severity() {
        assert_eq!(level_tag(Level::Error).to_string(), "ERROR".red().to_string());
        assert_eq!(level_tag(Level::Warn).to_string(), "WARN".yellow().to_string());
        assert_eq!(level_tag(Level::Info).to_string(), "INFO".green().to_string());
    }
}
