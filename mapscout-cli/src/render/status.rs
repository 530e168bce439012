//! One-line status panel

use colored::*;
use mapscout_core::domain::job::JobStatus;
use mapscout_monitor::StatusPanel;

pub fn format_panel(panel: &StatusPanel) -> String {
    format!(
        "{} {}/{} ({}%)  ok {}  failed {}  query: {}  proxy: {}",
        colorize_status(panel.status),
        panel.processed,
        panel.total_queries,
        panel.percent,
        panel.success_count.to_string().green(),
        failure_count(panel.failure_count),
        panel.current_query,
        panel.current_proxy.dimmed(),
    )
}

fn failure_count(count: u64) -> ColoredString {
    if count > 0 {
        count.to_string().red()
    } else {
        count.to_string().normal()
    }
}

/// Colorize job status for display
fn colorize_status(status: JobStatus) -> ColoredString {
    let label = format!("[{}]", status.label());
    match status {
        JobStatus::Idle => label.dimmed(),
        JobStatus::Running => label.cyan(),
        JobStatus::Completed => label.green(),
        JobStatus::Stopped => label.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapscout_core::domain::snapshot::StatusSnapshot;

    #[test]
    fn test_panel_line() {
        colored::control::set_override(false);
        let snapshot = StatusSnapshot {
            status: JobStatus::Running,
            processed: 3,
            total_queries: 10,
            success_count: 3,
            current_query: Some("cafe - 10001".into()),
            current_proxy: Some("203.0.113.45:8080".into()),
            ..Default::default()
        };
        let panel = StatusPanel::from_snapshot(&snapshot, true);

        assert_eq!(
            format_panel(&panel),
            "[Running] 3/10 (30%)  ok 3  failed 0  query: cafe - 10001  proxy: 203.0.xx.xx:xxxx"
        );
    }
}
