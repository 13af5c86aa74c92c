use super::countdown::{Countdown, Poll};
use crate::domain::{AppSettings, CompletionKind, Durations, TimerMode};
use chrono::{DateTime, Duration, Local};

/// Delay before an enabled auto-start kicks in after a completion
pub const AUTO_ADVANCE_DELAY_MS: i64 = 3500;

/// Where the current session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    /// A mode change was requested mid-session; the countdown is frozen until answered
    PendingSwitch { target: TimerMode },
    /// The countdown ran out; waiting for the user or for `auto_advance_at`
    Completed {
        kind: CompletionKind,
        auto_advance_at: Option<DateTime<Local>>,
    },
}

/// A session that should be credited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub mode: TimerMode,
    pub kind: CompletionKind,
}

impl Completion {
    fn of(mode: TimerMode) -> Self {
        Self {
            mode,
            kind: CompletionKind::for_mode(mode),
        }
    }
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Nothing,
    Completed(Completion),
    AutoAdvanced(TimerMode),
}

/// How a mode selection was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequest {
    Switched,
    Pending,
}

/// Timer mode plus phase plus countdown
#[derive(Debug, Clone)]
pub struct Session {
    mode: TimerMode,
    phase: Phase,
    countdown: Countdown,
}

impl Session {
    pub fn new(mode: TimerMode, durations: &Durations) -> Self {
        Self {
            mode,
            phase: Phase::Idle,
            countdown: Countdown::new(durations.seconds(mode)),
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn progress(&self, durations: &Durations) -> f64 {
        self.countdown.progress(durations.seconds(self.mode))
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn pending_target(&self) -> Option<TimerMode> {
        match self.phase {
            Phase::PendingSwitch { target } => Some(target),
            _ => None,
        }
    }

    pub fn completion_kind(&self) -> Option<CompletionKind> {
        match self.phase {
            Phase::Completed { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Idle → Running
    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.countdown.start(now);
        self.phase = Phase::Running;
        true
    }

    /// Running → Paused
    pub fn pause(&mut self, now: DateTime<Local>) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.countdown.pause(now);
        self.phase = Phase::Paused;
        true
    }

    /// Paused → Running
    pub fn resume(&mut self, now: DateTime<Local>) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.countdown.resume(now);
        self.phase = Phase::Running;
        true
    }

    /// Start, pause or resume depending on the phase
    pub fn toggle(&mut self, now: DateTime<Local>) -> bool {
        match self.phase {
            Phase::Idle => self.start(now),
            Phase::Running => self.pause(now),
            Phase::Paused => self.resume(now),
            Phase::PendingSwitch { .. } | Phase::Completed { .. } => false,
        }
    }

    /// Back to Idle with the full duration for the current mode
    pub fn reset(&mut self, durations: &Durations) -> bool {
        match self.phase {
            Phase::Idle | Phase::Running | Phase::Paused => {
                self.countdown.reset(durations.seconds(self.mode));
                self.phase = Phase::Idle;
                true
            }
            Phase::PendingSwitch { .. } | Phase::Completed { .. } => false,
        }
    }

    /// Ask for another mode. A running session needs confirmation first.
    pub fn request_mode_change(
        &mut self,
        target: TimerMode,
        durations: &Durations,
        now: DateTime<Local>,
    ) -> ModeRequest {
        match self.phase {
            Phase::Running => {
                self.countdown.pause(now);
                self.phase = Phase::PendingSwitch { target };
                ModeRequest::Pending
            }
            Phase::PendingSwitch { .. } => {
                self.phase = Phase::PendingSwitch { target };
                ModeRequest::Pending
            }
            Phase::Idle | Phase::Paused | Phase::Completed { .. } => {
                self.switch_to(target, durations, None);
                ModeRequest::Switched
            }
        }
    }

    /// Credit the interrupted session, then switch. Returns the completion to apply.
    pub fn confirm_finish(&mut self, durations: &Durations) -> Option<Completion> {
        let target = self.pending_target()?;
        let completion = Completion::of(self.mode);
        self.switch_to(target, durations, None);
        Some(completion)
    }

    /// Switch without crediting the interrupted session
    pub fn confirm_abandon(&mut self, durations: &Durations) -> bool {
        match self.pending_target() {
            Some(target) => {
                self.switch_to(target, durations, None);
                true
            }
            None => false,
        }
    }

    /// Keep the current session; the countdown gets a fresh deadline
    pub fn cancel_switch(&mut self, now: DateTime<Local>) -> bool {
        if self.pending_target().is_none() {
            return false;
        }
        self.countdown.resume(now);
        self.phase = Phase::Running;
        true
    }

    /// Leave the completion screen for the suggested next mode
    pub fn manual_advance(&mut self, durations: &Durations) -> bool {
        match self.completion_kind() {
            Some(kind) => {
                self.switch_to(kind.next_mode(), durations, None);
                true
            }
            None => false,
        }
    }

    /// Configured durations changed; an idle session picks up the new length
    pub fn durations_changed(&mut self, durations: &Durations) {
        if self.phase == Phase::Idle {
            self.countdown.reset(durations.seconds(self.mode));
        }
    }

    /// Advance the session against the wall clock
    pub fn tick(&mut self, settings: &AppSettings, now: DateTime<Local>) -> TickOutcome {
        match self.phase {
            Phase::Running => match self.countdown.poll(now) {
                Poll::Expired => {
                    let completion = Completion::of(self.mode);
                    let auto_advance_at = settings
                        .auto_start_after(completion.kind)
                        .then(|| now + Duration::milliseconds(AUTO_ADVANCE_DELAY_MS));
                    self.phase = Phase::Completed {
                        kind: completion.kind,
                        auto_advance_at,
                    };
                    TickOutcome::Completed(completion)
                }
                Poll::Ticking(_) | Poll::Stopped => TickOutcome::Nothing,
            },
            Phase::Completed {
                kind,
                auto_advance_at: Some(at),
            } if now >= at => {
                let next = kind.next_mode();
                self.switch_to(next, &settings.durations, Some(now));
                TickOutcome::AutoAdvanced(next)
            }
            _ => TickOutcome::Nothing,
        }
    }

    fn switch_to(&mut self, mode: TimerMode, durations: &Durations, start_at: Option<DateTime<Local>>) {
        self.mode = mode;
        self.countdown.reset(durations.seconds(mode));
        self.phase = Phase::Idle;
        if let Some(now) = start_at {
            self.start(now);
        }
    }
}
