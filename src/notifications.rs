//! Desktop notification and alarm for finished sessions.
//! Best effort: failures are logged at debug level and otherwise ignored.

use crate::domain::CompletionKind;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Platform helper that shows a notification, if there is one
fn notification_command(title: &str, body: &str) -> Option<Command> {
    if cfg!(target_os = "macos") {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            body.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );
        let mut command = Command::new("osascript");
        command.arg("-e").arg(script);
        Some(command)
    } else if cfg!(target_os = "linux") {
        let mut command = Command::new("notify-send");
        command.arg("--app-name=Lumina").arg(title).arg(body);
        Some(command)
    } else {
        None
    }
}

/// Post a one-shot notification for a finished session. The helper process
/// is spawned detached from the terminal and never waited on.
pub fn notify_session_complete(kind: CompletionKind) {
    let (title, body) = kind.notification();

    let Some(mut command) = notification_command(title, body) else {
        debug!(title, body, "notifications unsupported on this platform");
        return;
    };

    let spawned = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(err) = spawned {
        debug!(error = %err, program = ?command.get_program(), "notification helper failed to start");
    }
}

/// Ring the terminal bell
pub fn ring_alarm() {
    let mut stdout = std::io::stdout();
    if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        debug!(error = %err, "could not ring terminal bell");
    }
}
