//! Live log rendering and end-of-run messages

use colored::*;
use mapscout_core::domain::log::{LogLevel, LogLine};
use mapscout_monitor::{Outcome, TerminalEvent};

/// Formats a log line as `HH:MM:SS [LEVEL] message`
pub fn format_log_line(line: &LogLine) -> String {
    let level_str = format!("{:?}", line.level).to_uppercase();
    let level_colored = match line.level {
        LogLevel::Debug => level_str.dimmed(),
        LogLevel::Info => level_str.cyan(),
        LogLevel::Success => level_str.green(),
        LogLevel::Warning => level_str.yellow(),
        LogLevel::Error => level_str.red(),
    };

    format!(
        "{} [{}] {}",
        line.timestamp.format("%H:%M:%S").to_string().dimmed(),
        level_colored,
        line.message
    )
}

/// Messages shown once a run ends
pub fn terminal_messages(event: &TerminalEvent) -> Vec<LogLine> {
    let mut lines = vec![match event.outcome() {
        Outcome::CompletedWithResults(count) => {
            LogLine::success(format!("Scraping completed! Found {} businesses.", count))
        }
        Outcome::CompletedEmpty => LogLine::warning(
            "Scraping completed but no results found. Try different keywords or check logs.",
        ),
        Outcome::Stopped(count) => {
            LogLine::info(format!("Scraping stopped. Found {} businesses.", count))
        }
    }];

    if event.has_failures() {
        lines.push(LogLine::error(format!(
            "{} queries failed. Check proxy configuration or try again.",
            event.failure_count
        )));
    }

    lines
}
