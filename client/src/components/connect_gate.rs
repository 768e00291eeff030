//! Pre-connection overlay: human verification and the session entry point.
//!
//! ARCHITECTURE
//! ============
//! The session begins when a verification token is available; the gate is
//! the only place that calls [`crate::net::socket::connect`]. With a site
//! key configured, the CAPTCHA widget drives the callback this component
//! registers on `window`; without one (local development), a plain button
//! connects with an empty token. Either way the token reaches an explicit
//! entry point — there is no global socket handle anywhere.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::AppSender;
use crate::net::SyncConfig;
use crate::state::session::Session;

/// Name of the `window` callback invoked by the verification widget.
#[cfg(feature = "web")]
const VERIFIED_CALLBACK: &str = "onVerified";

/// Overlay shown until the first snapshot reveals the canvas.
#[component]
pub fn ConnectGate() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let _sender = expect_context::<RwSignal<Option<AppSender>>>();
    let config = expect_context::<SyncConfig>();
    let sitekey = config.captcha_sitekey.clone();

    #[cfg(feature = "web")]
    {
        if !sitekey.is_empty() {
            // The widget calls `window.onVerified(token)` on completion.
            let widget_config = config.clone();
            let on_verified =
                wasm_bindgen::closure::Closure::<dyn Fn(String)>::new(move |token: String| {
                    let ws = crate::net::socket::connect(session, &token, widget_config.clone());
                    _sender.set(Some(ws));
                });
            if let Some(window) = web_sys::window() {
                let _ = js_sys::Reflect::set(
                    &window,
                    &wasm_bindgen::JsValue::from_str(VERIFIED_CALLBACK),
                    on_verified.as_ref(),
                );
            }
            on_verified.forget();
        }
    }

    let on_connect = {
        #[cfg(feature = "web")]
        {
            let button_config = config.clone();
            move |_ev: leptos::ev::MouseEvent| {
                let ws = crate::net::socket::connect(session, "", button_config.clone());
                _sender.set(Some(ws));
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let visible = move || {
        let s = session.get();
        !s.canvas_revealed && !s.status.is_terminal()
    };

    view! {
        <div class="connect-gate" style:display=move || if visible() { "flex" } else { "none" }>
            <p class="connect-gate__message">"Verify you are human to start painting."</p>
            {if sitekey.is_empty() {
                view! {
                    <button class="connect-gate__button" on:click=on_connect>
                        "Connect"
                    </button>
                }
                    .into_any()
            } else {
                view! {
                    <div
                        class="h-captcha"
                        attr:data-sitekey=sitekey.clone()
                        attr:data-callback="onVerified"
                    ></div>
                }
                    .into_any()
            }}
        </div>
    }
}
