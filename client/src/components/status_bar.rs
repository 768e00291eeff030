//! Bottom status line: connection state, viewer count, update counter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders low-frequency session telemetry so users can see the
//! connection lifecycle without any canvas coupling. Terminal states keep
//! their message permanently; there is no retry affordance beyond reload.

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, Session};

/// Status line under the canvas.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let status_text = move || {
        let s = session.get();
        match s.status {
            ConnectionStatus::Connecting => "Connecting…".to_owned(),
            ConnectionStatus::Open => format!("{} painting now", s.client_count),
            ConnectionStatus::Closed => "Connection closed. Reload to rejoin.".to_owned(),
            ConnectionStatus::Errored => {
                "Error connecting to server. Refresh and try again.".to_owned()
            }
            ConnectionStatus::Blocked => {
                "Client limit exceeded. Please try again later.".to_owned()
            }
        }
    };

    let status_class = move || {
        if session.get().status.is_terminal() {
            "status-bar__state status-bar__state--ended"
        } else {
            "status-bar__state"
        }
    };

    let pixel_count = move || format!("You've updated {} pixels", session.get().updates_sent);

    view! {
        <footer class="status-bar">
            <span class=status_class>{status_text}</span>
            <span class="status-bar__pixels">{pixel_count}</span>
        </footer>
    }
}
