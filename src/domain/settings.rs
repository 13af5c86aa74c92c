use super::enums::{CompletionKind, TimerMode, WhiteNoise};
use serde::{Deserialize, Serialize};

/// Focus lengths offered on the settings tab, in minutes
pub const FOCUS_PRESETS: [u32; 6] = [1, 25, 30, 45, 60, 90];

/// Longest session the settings tab lets you dial in
pub const MAX_DURATION_MINUTES: u32 = 180;

/// Session length per mode, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Durations {
    #[serde(rename = "POMODORO")]
    pub focus: u32,
    #[serde(rename = "SHORT_BREAK")]
    pub short_break: u32,
    #[serde(rename = "LONG_BREAK")]
    pub long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

impl Durations {
    pub fn minutes(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }

    pub fn seconds(&self, mode: TimerMode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }

    /// Copy with one mode's length replaced (clamped to 1..=MAX_DURATION_MINUTES)
    pub fn with(mut self, mode: TimerMode, minutes: u32) -> Self {
        let minutes = minutes.clamp(1, MAX_DURATION_MINUTES);
        match mode {
            TimerMode::Focus => self.focus = minutes,
            TimerMode::ShortBreak => self.short_break = minutes,
            TimerMode::LongBreak => self.long_break = minutes,
        }
        self
    }

    /// Zero falls back to the default; anything else is held to 1..=MAX_DURATION_MINUTES
    fn sanitized(self) -> Self {
        let d = Self::default();
        let repair = |minutes: u32, fallback: u32| match minutes {
            0 => fallback,
            m => m.min(MAX_DURATION_MINUTES),
        };
        Self {
            focus: repair(self.focus, d.focus),
            short_break: repair(self.short_break, d.short_break),
            long_break: repair(self.long_break, d.long_break),
        }
    }
}

/// User preferences, stored in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub durations: Durations,
    pub auto_start_breaks: bool,
    pub auto_start_pomos: bool,
    pub white_noise: WhiteNoise,
    pub volume: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            auto_start_breaks: false,
            auto_start_pomos: false,
            white_noise: WhiteNoise::None,
            volume: 0.5,
        }
    }
}

/// Partial update to AppSettings; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub durations: Option<Durations>,
    pub auto_start_breaks: Option<bool>,
    pub auto_start_pomos: Option<bool>,
    pub white_noise: Option<WhiteNoise>,
    pub volume: Option<f32>,
}

impl AppSettings {
    /// Merge a patch. Returns true when any duration changed.
    pub fn apply(&mut self, patch: SettingsPatch) -> bool {
        let mut durations_changed = false;
        if let Some(durations) = patch.durations {
            let durations = durations.sanitized();
            durations_changed = durations != self.durations;
            self.durations = durations;
        }
        if let Some(value) = patch.auto_start_breaks {
            self.auto_start_breaks = value;
        }
        if let Some(value) = patch.auto_start_pomos {
            self.auto_start_pomos = value;
        }
        if let Some(noise) = patch.white_noise {
            self.white_noise = noise;
        }
        if let Some(volume) = patch.volume {
            self.volume = clamp_volume(volume);
        }
        durations_changed
    }

    /// Repair values a hand-edited or older settings file may carry
    pub fn sanitized(mut self) -> Self {
        self.durations = self.durations.sanitized();
        self.volume = clamp_volume(self.volume);
        self
    }

    /// Whether the session after this completion should start on its own
    pub fn auto_start_after(&self, kind: CompletionKind) -> bool {
        match kind {
            CompletionKind::FocusDone => self.auto_start_breaks,
            CompletionKind::BreakDone => self.auto_start_pomos,
        }
    }

    /// Next focus preset after the current focus length
    pub fn next_focus_preset(&self) -> u32 {
        FOCUS_PRESETS
            .iter()
            .copied()
            .find(|&preset| preset > self.durations.focus)
            .unwrap_or(FOCUS_PRESETS[0])
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return 0.5;
    }
    // Keep to one decimal so repeated steps don't drift
    ((volume.clamp(0.0, 1.0)) * 10.0).round() / 10.0
}

/// Rows on the settings tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingRow {
    Focus,
    ShortBreak,
    LongBreak,
    AutoStartBreaks,
    AutoStartPomos,
    WhiteNoise,
    Volume,
}

impl SettingRow {
    pub fn all() -> &'static [SettingRow] {
        &[
            SettingRow::Focus,
            SettingRow::ShortBreak,
            SettingRow::LongBreak,
            SettingRow::AutoStartBreaks,
            SettingRow::AutoStartPomos,
            SettingRow::WhiteNoise,
            SettingRow::Volume,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingRow::Focus => "Focus length",
            SettingRow::ShortBreak => "Short break",
            SettingRow::LongBreak => "Long break",
            SettingRow::AutoStartBreaks => "Auto-start breaks",
            SettingRow::AutoStartPomos => "Auto-start focus",
            SettingRow::WhiteNoise => "White noise",
            SettingRow::Volume => "Volume",
        }
    }

    /// Current value rendered for display
    pub fn value(&self, settings: &AppSettings) -> String {
        let on_off = |flag: bool| if flag { "On" } else { "Off" }.to_string();
        match self {
            SettingRow::Focus => format!("{} min", settings.durations.focus),
            SettingRow::ShortBreak => format!("{} min", settings.durations.short_break),
            SettingRow::LongBreak => format!("{} min", settings.durations.long_break),
            SettingRow::AutoStartBreaks => on_off(settings.auto_start_breaks),
            SettingRow::AutoStartPomos => on_off(settings.auto_start_pomos),
            SettingRow::WhiteNoise => settings.white_noise.name().to_string(),
            SettingRow::Volume => format!("{:.0}%", settings.volume * 100.0),
        }
    }

    /// Patch produced by nudging this row left (`-1`) or right (`+1`)
    pub fn adjust(&self, settings: &AppSettings, delta: i32) -> SettingsPatch {
        let nudge = |minutes: u32| (minutes as i64 + delta as i64).max(1) as u32;
        let durations = settings.durations;
        match self {
            SettingRow::Focus => SettingsPatch {
                durations: Some(durations.with(TimerMode::Focus, nudge(durations.focus))),
                ..Default::default()
            },
            SettingRow::ShortBreak => SettingsPatch {
                durations: Some(durations.with(TimerMode::ShortBreak, nudge(durations.short_break))),
                ..Default::default()
            },
            SettingRow::LongBreak => SettingsPatch {
                durations: Some(durations.with(TimerMode::LongBreak, nudge(durations.long_break))),
                ..Default::default()
            },
            SettingRow::Volume => SettingsPatch {
                volume: Some(settings.volume + 0.1 * delta as f32),
                ..Default::default()
            },
            SettingRow::AutoStartBreaks | SettingRow::AutoStartPomos | SettingRow::WhiteNoise => {
                self.activate(settings)
            }
        }
    }

    /// Patch produced by pressing Enter/Space on this row
    pub fn activate(&self, settings: &AppSettings) -> SettingsPatch {
        match self {
            SettingRow::Focus => SettingsPatch {
                durations: Some(
                    settings
                        .durations
                        .with(TimerMode::Focus, settings.next_focus_preset()),
                ),
                ..Default::default()
            },
            SettingRow::AutoStartBreaks => SettingsPatch {
                auto_start_breaks: Some(!settings.auto_start_breaks),
                ..Default::default()
            },
            SettingRow::AutoStartPomos => SettingsPatch {
                auto_start_pomos: Some(!settings.auto_start_pomos),
                ..Default::default()
            },
            SettingRow::WhiteNoise => SettingsPatch {
                white_noise: Some(settings.white_noise.cycle()),
                ..Default::default()
            },
            SettingRow::ShortBreak | SettingRow::LongBreak | SettingRow::Volume => {
                SettingsPatch::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.durations.seconds(TimerMode::Focus), 1500);
        assert_eq!(settings.durations.seconds(TimerMode::ShortBreak), 300);
        assert_eq!(settings.durations.seconds(TimerMode::LongBreak), 900);
        assert!(!settings.auto_start_breaks);
        assert_eq!(settings.volume, 0.5);
    }

    #[test]
    fn test_storage_shape() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "durations": {"POMODORO": 25, "SHORT_BREAK": 5, "LONG_BREAK": 15},
                "autoStartBreaks": false,
                "autoStartPomos": false,
                "whiteNoise": "NONE",
                "volume": 0.5
            })
        );
    }

    #[test]
    fn test_missing_and_unknown_fields() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"autoStartBreaks": true, "theme": "dark"}"#).unwrap();
        assert!(settings.auto_start_breaks);
        assert_eq!(settings.durations, Durations::default());
    }

    #[test]
    fn test_apply_patch() {
        let mut settings = AppSettings::default();
        let changed = settings.apply(SettingsPatch {
            volume: Some(1.7),
            white_noise: Some(WhiteNoise::Rain),
            ..Default::default()
        });
        assert!(!changed);
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.white_noise, WhiteNoise::Rain);

        let changed = settings.apply(SettingsPatch {
            durations: Some(settings.durations.with(TimerMode::Focus, 50)),
            ..Default::default()
        });
        assert!(changed);
        assert_eq!(settings.durations.focus, 50);
    }

    #[test]
    fn test_sanitized_repairs_zero_durations() {
        let settings = AppSettings {
            durations: Durations {
                focus: 0,
                short_break: 7,
                long_break: 0,
            },
            volume: -3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.durations.focus, 25);
        assert_eq!(settings.durations.short_break, 7);
        assert_eq!(settings.durations.long_break, 15);
        assert_eq!(settings.volume, 0.0);
    }

    #[test]
    fn test_sanitized_clamps_oversized_durations() {
        let durations = Durations {
            focus: 80_000_000,
            short_break: 181,
            long_break: 180,
        }
        .sanitized();
        assert_eq!(durations.focus, MAX_DURATION_MINUTES);
        assert_eq!(durations.short_break, MAX_DURATION_MINUTES);
        assert_eq!(durations.long_break, MAX_DURATION_MINUTES);
    }

    #[test]
    fn test_seconds_saturates() {
        let durations = Durations {
            focus: u32::MAX,
            ..Default::default()
        };
        assert_eq!(durations.seconds(TimerMode::Focus), u32::MAX);
    }

    #[test]
    fn test_focus_presets_wrap() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.next_focus_preset(), 30);
        settings.durations.focus = 90;
        assert_eq!(settings.next_focus_preset(), 1);
        settings.durations.focus = 40;
        assert_eq!(settings.next_focus_preset(), 45);
    }

    #[test]
    fn test_setting_row_adjust() {
        let settings = AppSettings::default();
        let patch = SettingRow::ShortBreak.adjust(&settings, -1);
        assert_eq!(patch.durations.unwrap().short_break, 4);

        let patch = SettingRow::AutoStartPomos.adjust(&settings, 1);
        assert_eq!(patch.auto_start_pomos, Some(true));

        let mut tiny = settings.clone();
        tiny.durations.long_break = 1;
        let patch = SettingRow::LongBreak.adjust(&tiny, -1);
        assert_eq!(patch.durations.unwrap().long_break, 1);
    }
}
