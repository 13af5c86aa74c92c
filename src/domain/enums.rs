use serde::{Deserialize, Serialize};

/// Timer mode of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerMode {
    #[serde(rename = "POMODORO")]
    Focus,
    #[serde(rename = "SHORT_BREAK")]
    ShortBreak,
    #[serde(rename = "LONG_BREAK")]
    LongBreak,
}

impl TimerMode {
    /// Upper-case label shown above the clock and in the window title
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Focus => "FOCUS TIME",
            TimerMode::ShortBreak => "SHORT BREAK",
            TimerMode::LongBreak => "LONG BREAK",
        }
    }

    /// Friendly heading for the timer pane
    pub fn title(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Let's Focus",
            TimerMode::ShortBreak => "Time to Chill",
            TimerMode::LongBreak => "Deep Recharge",
        }
    }

    /// Verb used in the start/pause hint
    pub fn action(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Break",
            TimerMode::LongBreak => "Rest",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub fn is_focus(&self) -> bool {
        matches!(self, TimerMode::Focus)
    }

    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Focus, TimerMode::ShortBreak, TimerMode::LongBreak]
    }
}

/// What kind of session just ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    FocusDone,
    BreakDone,
}

impl CompletionKind {
    pub fn for_mode(mode: TimerMode) -> Self {
        if mode.is_focus() {
            CompletionKind::FocusDone
        } else {
            CompletionKind::BreakDone
        }
    }

    /// Mode offered after this completion. Long breaks are never chosen automatically.
    pub fn next_mode(&self) -> TimerMode {
        match self {
            CompletionKind::FocusDone => TimerMode::ShortBreak,
            CompletionKind::BreakDone => TimerMode::Focus,
        }
    }

    /// Desktop notification (title, body)
    pub fn notification(&self) -> (&'static str, &'static str) {
        match self {
            CompletionKind::FocusDone => ("Session Complete! 🎉", "Great job! Time to take a break."),
            CompletionKind::BreakDone => ("Break is Over! ⏰", "Ready to focus again?"),
        }
    }
}

/// Ambient sound played during focus sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WhiteNoise {
    #[default]
    None,
    Rain,
    Brown,
}

impl WhiteNoise {
    pub fn name(&self) -> &'static str {
        match self {
            WhiteNoise::None => "Off",
            WhiteNoise::Rain => "Rain",
            WhiteNoise::Brown => "Brown noise",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            WhiteNoise::None => WhiteNoise::Rain,
            WhiteNoise::Rain => WhiteNoise::Brown,
            WhiteNoise::Brown => WhiteNoise::None,
        }
    }
}

/// Category tag attached to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskTag {
    #[default]
    Work,
    Study,
    Personal,
    Creative,
}

impl TaskTag {
    pub fn name(&self) -> &'static str {
        match self {
            TaskTag::Work => "Work",
            TaskTag::Study => "Study",
            TaskTag::Personal => "Personal",
            TaskTag::Creative => "Creative",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            TaskTag::Work => TaskTag::Study,
            TaskTag::Study => TaskTag::Personal,
            TaskTag::Personal => TaskTag::Creative,
            TaskTag::Creative => TaskTag::Work,
        }
    }
}

/// Top-level tab of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Timer,
    Tasks,
    Stats,
    Settings,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timer => "Timer",
            Tab::Tasks => "Tasks",
            Tab::Stats => "Stats",
            Tab::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Timer => Tab::Tasks,
            Tab::Tasks => Tab::Stats,
            Tab::Stats => Tab::Settings,
            Tab::Settings => Tab::Timer,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Timer => Tab::Settings,
            Tab::Tasks => Tab::Timer,
            Tab::Stats => Tab::Tasks,
            Tab::Settings => Tab::Stats,
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Timer, Tab::Tasks, Tab::Stats, Tab::Settings]
    }
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
}
