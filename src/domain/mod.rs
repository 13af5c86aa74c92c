pub mod enums;
pub mod settings;
pub mod stats;
pub mod task;

pub use enums::{CompletionKind, Tab, TaskTag, TimerMode, UiMode, WhiteNoise};
pub use settings::{AppSettings, Durations, SettingRow, SettingsPatch};
pub use stats::DailyStat;
pub use task::{Task, TaskStore};
