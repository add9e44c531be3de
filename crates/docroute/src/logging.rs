use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions {
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            millis_yellow_threshold: Some(5),
            millis_red_threshold: Some(50),
        }
    }
}

/// Installs the `env_logger` backend used by the docroute binaries.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Passing `--quiet` on the command line silences every line.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    let quiet = std::env::args().any(|arg| arg == "--quiet");

    Builder::from_env(logging_env)
        .format(move |buf, record| {
            if quiet {
                return Ok(());
            }

            if record.target() == "SKIP_FORMAT" {
                return writeln!(buf, "{}", record.args());
            }

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .init();
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    if elapsed.as_secs() > 0 {
        return format!("{}s", elapsed.as_secs()).red();
    }

    match elapsed.as_millis() {
        millis
            if options
                .millis_red_threshold
                .is_some_and(|threshold| millis > threshold) =>
        {
            format!("{}ms", millis).red()
        }
        millis
            if options
                .millis_yellow_threshold
                .is_some_and(|threshold| millis > threshold) =>
        {
            format!("{}ms", millis).yellow()
        }
        millis if millis > 0 => format!("{}ms", millis).normal(),
        _ => format!("{}μs", elapsed.as_micros()).normal(),
    }
}

pub fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_micros() {
        colored::control::set_override(false);
        let formatted = format_elapsed_time(
            Duration::from_micros(250),
            &FormatElapsedTimeOptions::default(),
        );
        assert_eq!(formatted.to_string(), "250μs");
    }

    #[test]
    fn test_format_millis() {
        colored::control::set_override(false);
        let formatted = format_elapsed_time(
            Duration::from_millis(3),
            &FormatElapsedTimeOptions::default(),
        );
        assert_eq!(formatted.to_string(), "3ms");
    }

    #[test]
    fn test_format_seconds() {
        colored::control::set_override(false);
        let formatted =
            format_elapsed_time(Duration::from_secs(2), &FormatElapsedTimeOptions::default());
        assert_eq!(formatted.to_string(), "2s");
    }
}
