//! Root application component and shared context wiring.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::color_counters::ColorCounters;
use crate::components::color_picker::ColorPicker;
use crate::components::connect_gate::ConnectGate;
use crate::components::status_bar::StatusBar;
use crate::net::SyncConfig;
use crate::state::session::Session;
use crate::util::persist;

/// Outbound channel handle stored in context once the session connects.
#[cfg(feature = "web")]
pub type AppSender = crate::net::socket::WsSender;

/// Outbound stand-in outside the browser; always reports a dead channel.
#[cfg(not(feature = "web"))]
#[derive(Clone)]
pub struct NullSender;

#[cfg(not(feature = "web"))]
impl crate::net::sync::UpdateSink for NullSender {
    fn send(&mut self, _msg: &wire::ClientMessage) -> bool {
        false
    }
}

#[cfg(not(feature = "web"))]
pub type AppSender = NullSender;

/// Root application component.
///
/// Builds the one [`Session`] for this page load — seeded from persisted
/// preferences and sized from the available viewport width — and provides
/// it, the sender slot, and the endpoint config as contexts for every
/// child component.
#[component]
pub fn App() -> impl IntoView {
    let config = SyncConfig::default();

    let mut initial = Session::new(initial_canvas_size());
    if let Some(color) = persist::load_selected_color() {
        initial.selected_color = color;
    }
    initial.updates_sent = persist::load_pixel_count();

    let session = RwSignal::new(initial);
    let sender: RwSignal<Option<AppSender>> = RwSignal::new(None);

    provide_context(session);
    provide_context(sender);
    provide_context(config);

    view! {
        <main class="app">
            <header class="app__header">
                <h1>"ten thousand pixels"</h1>
                <p class="app__tagline">
                    "One shared 100 × 100 canvas. Paint a cell; everyone sees it."
                </p>
            </header>
            <ConnectGate/>
            <section class="board">
                <CanvasHost/>
                <ColorPicker/>
            </section>
            <StatusBar/>
            <ColorCounters/>
        </main>
    }
}

/// Square canvas size for this page load; fixed for the session lifetime.
fn initial_canvas_size() -> f64 {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(canvas::consts::CANVAS_MAX_SIZE_PX, canvas::camera::fit_canvas_size)
    }
    #[cfg(not(feature = "web"))]
    {
        canvas::consts::CANVAS_MAX_SIZE_PX
    }
}
