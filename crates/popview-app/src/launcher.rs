//! The host-OS collaborator: resolving a URI to an application handler
//! and launching it.
//!
//! - Linux: resolution asks `xdg-mime` for the scheme's default
//!   handler; launching goes through `xdg-open`.
//! - macOS: there is no reliable pre-flight query, so resolution is
//!   optimistic and a failed `open` surfaces as a launch error.
//! - Windows: resolution checks the scheme's registry class; launching
//!   goes through `cmd /C start`.

use std::process::Command;

use popview_common::LaunchError;
use popview_webview::{HandlerResolver, NavigationRequest};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Launch the external handler for a URI. Single synchronous
    /// attempt; no retries.
    pub fn launch(&self, target: &str) -> Result<(), LaunchError> {
        spawn_opener(target)
    }
}

impl HandlerResolver for SystemLauncher {
    fn resolves(&self, request: &NavigationRequest) -> bool {
        // Query the scheme launch() would open. For intent URIs that
        // is the declared target scheme, not "intent".
        if request.handler_scheme.is_empty() {
            return false;
        }
        scheme_has_handler(&request.handler_scheme)
    }
}

#[cfg(target_os = "linux")]
fn scheme_has_handler(scheme: &str) -> bool {
    let output = Command::new("xdg-mime")
        .args(["query", "default", &format!("x-scheme-handler/{scheme}")])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let handler = String::from_utf8_lossy(&out.stdout);
            let handler = handler.trim();
            debug!(scheme, handler, "scheme handler query");
            !handler.is_empty()
        }
        _ => false,
    }
}

#[cfg(target_os = "windows")]
fn scheme_has_handler(scheme: &str) -> bool {
    let output = Command::new("reg")
        .args(["query", &format!("HKEY_CLASSES_ROOT\\{scheme}")])
        .output();
    match output {
        Ok(out) => {
            debug!(scheme, found = out.status.success(), "scheme handler query");
            out.status.success()
        }
        Err(_) => false,
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn scheme_has_handler(scheme: &str) -> bool {
    debug!(scheme, "no pre-flight handler query on this platform");
    true
}

#[cfg(target_os = "linux")]
fn spawn_opener(target: &str) -> Result<(), LaunchError> {
    Command::new("xdg-open")
        .arg(target)
        .spawn()
        .map(|_| ())
        .map_err(|e| LaunchError::Spawn(format!("xdg-open: {e}")))
}

#[cfg(target_os = "macos")]
fn spawn_opener(target: &str) -> Result<(), LaunchError> {
    let status = Command::new("open")
        .arg(target)
        .status()
        .map_err(|e| LaunchError::Spawn(format!("open: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::Unresolvable(target.to_string()))
    }
}

#[cfg(target_os = "windows")]
fn spawn_opener(target: &str) -> Result<(), LaunchError> {
    Command::new("cmd")
        .args(["/C", "start", "", target])
        .spawn()
        .map(|_| ())
        .map_err(|e| LaunchError::Spawn(format!("cmd start: {e}")))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn spawn_opener(target: &str) -> Result<(), LaunchError> {
    Err(LaunchError::Unresolvable(target.to_string()))
}
