//! Transient user notices via the platform notifier.
//!
//! Notices are informational: failures to display are logged and
//! swallowed, never propagated.

use popview_common::Notice;
use tracing::{info, warn};

pub fn show(notice: &Notice) {
    info!(title = %notice.title, body = %notice.body, "user notice");
    if let Err(e) = platform_notify(&notice.title, &notice.body) {
        warn!(error = %e, "failed to display native notice");
    }
}

#[cfg(target_os = "macos")]
fn platform_notify(title: &str, body: &str) -> Result<(), std::io::Error> {
    let escape = |s: &str| {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\'', "\\'")
    };
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape(body),
        escape(title)
    );

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("osascript failed: {stderr}"),
        ));
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn platform_notify(title: &str, body: &str) -> Result<(), std::io::Error> {
    std::process::Command::new("notify-send")
        .arg(title)
        .arg(body)
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn platform_notify(_title: &str, _body: &str) -> Result<(), std::io::Error> {
    // Log-only stub; the tracing line above already carries the text.
    Ok(())
}
