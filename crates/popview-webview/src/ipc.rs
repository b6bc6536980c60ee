//! The window bridge: pop-up transport over IPC.
//!
//! wry has no native equivalent of a pop-up transport object, so an
//! initialization script rewrites `window.open` / `window.close` in
//! every surface. `window.open` posts an open request carrying a
//! script-minted transport token and synchronously returns a proxy
//! whose `close()` posts the token back. The token is the handshake
//! value binding the proxy to the surface the shell creates.
//! `window.close` posts with no token, meaning "the sending surface".

use serde::{Deserialize, Serialize};

/// A message posted by the window bridge (JS -> Rust).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BridgeMessage {
    /// `window.open(url)` was called.
    OpenWindow { url: String, token: String },
    /// `window.close()` (no token) or `proxy.close()` (with token).
    CloseWindow {
        #[serde(default)]
        token: Option<String>,
    },
}

impl BridgeMessage {
    /// Parse a raw IPC body. Anything that is not a bridge message
    /// yields `None` and is dropped by the handler.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Injected into every surface before any page script runs.
pub const WINDOW_BRIDGE_SCRIPT: &str = r#"
(function () {
    if (window.__popviewBridge) { return; }
    window.__popviewBridge = true;
    var counter = 0;
    function post(msg) {
        window.ipc.postMessage(JSON.stringify(msg));
    }
    window.open = function (url) {
        counter += 1;
        var token = 'popup-' + Date.now().toString(36) + '-' + counter;
        post({ kind: 'open-window', url: String(url || 'about:blank'), token: token });
        return {
            closed: false,
            close: function () {
                if (!this.closed) {
                    this.closed = true;
                    post({ kind: 'close-window', token: token });
                }
            }
        };
    };
    window.close = function () {
        post({ kind: 'close-window', token: null });
    };
})();
"#;
