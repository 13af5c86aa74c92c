use crate::domain::stats::{
    current_streak, daily_tip, format_minutes, last_seven_days, sessions_on, summarize,
};
use crate::domain::{TaskTag, TaskStore};
use crate::persistence::{atomic_write, PersistedState};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Build a markdown progress report as of `today`
pub fn build_report(state: &PersistedState, today: NaiveDate) -> String {
    let summary = summarize(&state.stats);
    let week = last_seven_days(&state.stats, today);
    let week_minutes = week.iter().fold(0u32, |acc, d| acc.saturating_add(d.minutes));

    let mut report = String::new();

    // Header
    report.push_str(&format!("# Lumina Report - {}\n\n", today));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Today:** {} sessions\n",
        sessions_on(&state.stats, today)
    ));
    report.push_str(&format!(
        "- **Day Streak:** {}\n",
        current_streak(&state.stats, today)
    ));
    report.push_str(&format!(
        "- **Total Focus:** {} across {} sessions\n",
        format_minutes(summary.total_minutes),
        summary.total_sessions
    ));
    report.push_str(&format!(
        "- **This Week:** {}\n\n",
        format_minutes(week_minutes)
    ));

    // Last 7 Days Section
    report.push_str("## Last 7 Days\n\n");
    report.push_str("| Day | Date | Focus |\n");
    report.push_str("|-----|------|-------|\n");
    for day in &week {
        let marker = if day.is_today { " (today)" } else { "" };
        report.push_str(&format!(
            "| {}{} | {} | {} |\n",
            day.day,
            marker,
            day.date,
            format_minutes(day.minutes)
        ));
    }
    report.push('\n');

    // Tasks Section
    let tasks = TaskStore::new(state.tasks.clone());
    if !tasks.is_empty() {
        let done = tasks.tasks().iter().filter(|t| t.completed).count();
        report.push_str("## Tasks\n\n");
        report.push_str(&format!(
            "- **Completed:** {}/{} tasks\n",
            done,
            tasks.len()
        ));

        for tag in [TaskTag::Work, TaskTag::Study, TaskTag::Personal, TaskTag::Creative] {
            let tagged: Vec<_> = tasks.tasks().iter().filter(|t| t.tag == tag).collect();
            if tagged.is_empty() {
                continue;
            }
            let pomos = tagged.iter().fold(0u32, |acc, t| acc.saturating_add(t.completed_pomos));
            let estimated = tagged.iter().fold(0u32, |acc, t| acc.saturating_add(t.estimated_pomos));
            report.push_str(&format!(
                "- **{}:** {} tasks, {}/{} pomodoros\n",
                tag.name(),
                tagged.len(),
                pomos,
                estimated
            ));
        }

        let over: Vec<_> = tasks
            .tasks()
            .iter()
            .filter(|t| t.is_over_estimate())
            .collect();
        for task in over {
            report.push_str(&format!(
                "- Over estimate: \"{}\" ({})\n",
                task.title,
                task.pomo_progress()
            ));
        }
        report.push('\n');
    }

    report.push_str(&format!("> {}\n", daily_tip(today)));
    report
}

/// Write the report to `output`, creating parent directories as needed
pub fn write_report(report: &str, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    atomic_write(output, report)
        .with_context(|| format!("Failed to write report to {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyStat, Task};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_state() -> PersistedState {
        let mut report_task = Task::new("Write report".to_string(), 2, TaskTag::Work);
        report_task.completed_pomos = 3;
        let mut reading = Task::new("Read paper".to_string(), 1, TaskTag::Study);
        reading.completed = true;

        PersistedState {
            tasks: vec![report_task, reading],
            stats: vec![
                DailyStat {
                    date: "2024-03-09".to_string(),
                    minutes: 50,
                    sessions: 2,
                },
                DailyStat {
                    date: "2024-03-10".to_string(),
                    minutes: 25,
                    sessions: 1,
                },
                DailyStat {
                    date: "2024-02-01".to_string(),
                    minutes: 90,
                    sessions: 3,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_report_summary() {
        let report = build_report(&sample_state(), day(2024, 3, 10));

        assert!(report.starts_with("# Lumina Report - 2024-03-10"));
        assert!(report.contains("- **Today:** 1 sessions"));
        assert!(report.contains("- **Day Streak:** 2"));
        assert!(report.contains("- **Total Focus:** 2h 45m across 6 sessions"));
        assert!(report.contains("- **This Week:** 1h 15m"));
        assert!(report.contains("| Sun (today) | 2024-03-10 | 25m |"));
    }

    #[test]
    fn test_build_report_tasks() {
        let report = build_report(&sample_state(), day(2024, 3, 10));

        assert!(report.contains("- **Completed:** 1/2 tasks"));
        assert!(report.contains("- **Work:** 1 tasks, 3/2 pomodoros"));
        assert!(report.contains("- **Study:** 1 tasks, 0/1 pomodoros"));
        assert!(!report.contains("**Personal:**"));
        assert!(report.contains("Over estimate: \"Write report\" (3/2)"));
    }

    #[test]
    fn test_build_report_empty_state() {
        let report = build_report(&PersistedState::default(), day(2024, 3, 10));
        assert!(report.contains("- **Day Streak:** 0"));
        assert!(!report.contains("## Tasks"));
    }

    #[test]
    fn test_build_report_with_huge_stored_values() {
        let mut state = sample_state();
        state.stats[0].minutes = u32::MAX;
        state.tasks[0].completed_pomos = u32::MAX;

        let report = build_report(&state, day(2024, 3, 10));
        assert!(report.contains(&format!("- **This Week:** {}", format_minutes(u32::MAX))));
        assert!(report.contains(&format!("- **Work:** 1 tasks, {}/2 pomodoros", u32::MAX)));
    }

    #[test]
    fn test_write_report_creates_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("reports").join("week.md");
        write_report("# hi\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hi\n");
    }
}
