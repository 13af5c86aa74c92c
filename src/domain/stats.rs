use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum top of the weekly chart, in minutes
pub const CHART_FLOOR_MINUTES: u32 = 60;

const DAILY_TIPS: [&str; 7] = [
    "Take a 5 min break after every 25 mins. Your brain needs it! 🧠",
    "Hydrate! Drinking water boosts focus by 20%. 💧",
    "Multitasking kills productivity. Focus on one thing. 🎯",
    "Clean space, clear mind. Tidy up your desk! 🧹",
    "The 2-minute rule: If it takes < 2 mins, do it now. ⚡",
    "Sleep is the best productivity app. Get 8 hours. 😴",
    "Write down your top 3 goals before starting the day. 📝",
];

/// Focus totals for one calendar day, stored in stats.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    /// YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub sessions: u32,
}

impl DailyStat {
    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Storage key for a calendar date
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Fold one finished focus session into the entry for `date`
pub fn record_focus_session(stats: &mut Vec<DailyStat>, date: NaiveDate, minutes: u32) {
    let key = date_key(date);
    match stats.iter_mut().find(|s| s.date == key) {
        Some(entry) => {
            entry.minutes = entry.minutes.saturating_add(minutes);
            entry.sessions = entry.sessions.saturating_add(1);
        }
        None => stats.push(DailyStat {
            date: key,
            minutes,
            sessions: 1,
        }),
    }
}

/// Consecutive days with a recorded session, ending today or yesterday
pub fn current_streak(stats: &[DailyStat], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = stats.iter().filter_map(DailyStat::parsed_date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&latest) = dates.first() else {
        return 0;
    };
    if latest != today && latest != today - Duration::days(1) {
        return 0;
    }

    let mut streak = 0;
    let mut expected = latest;
    for date in dates {
        if date != expected {
            break;
        }
        streak += 1;
        expected = expected - Duration::days(1);
    }
    streak
}

/// Sessions finished on `date`
pub fn sessions_on(stats: &[DailyStat], date: NaiveDate) -> u32 {
    let key = date_key(date);
    stats
        .iter()
        .find(|s| s.date == key)
        .map(|s| s.sessions)
        .unwrap_or(0)
}

/// All-time totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_minutes: u32,
    pub total_sessions: u32,
}

pub fn summarize(stats: &[DailyStat]) -> Summary {
    stats.iter().fold(Summary::default(), |acc, s| Summary {
        total_minutes: acc.total_minutes.saturating_add(s.minutes),
        total_sessions: acc.total_sessions.saturating_add(s.sessions),
    })
}

/// One bar of the weekly chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBar {
    pub date: NaiveDate,
    /// Short weekday name ("Mon")
    pub day: String,
    pub minutes: u32,
    pub is_today: bool,
}

/// The seven days ending today, oldest first, with missing days as zero
pub fn last_seven_days(stats: &[DailyStat], today: NaiveDate) -> Vec<DayBar> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let key = date_key(date);
            let minutes = stats
                .iter()
                .find(|s| s.date == key)
                .map(|s| s.minutes)
                .unwrap_or(0);
            DayBar {
                date,
                day: date.format("%a").to_string(),
                minutes,
                is_today: offset == 0,
            }
        })
        .collect()
}

/// Top of the chart and its axis labels (100%, 66%, 33%, 0)
pub fn chart_scale(bars: &[DayBar]) -> (u32, [u32; 4]) {
    let max = bars
        .iter()
        .map(|b| b.minutes)
        .max()
        .unwrap_or(0)
        .max(CHART_FLOOR_MINUTES);
    // Widened so a hand-edited stats.json can't overflow the scale
    let at = |percent: u64| (u64::from(max) * percent).div_ceil(100) as u32;
    (max, [max, at(66), at(33), 0])
}

/// Minutes as "2h 05m" or "45m"
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Tip of the day, rotating through the list by day of year
pub fn daily_tip(today: NaiveDate) -> &'static str {
    DAILY_TIPS[today.ordinal() as usize % DAILY_TIPS.len()]
}
