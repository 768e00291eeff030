//! Bridge component between Leptos state and the imperative canvas.
//!
//! ARCHITECTURE
//! ============
//! The host maps raw DOM events into the gesture tracker, applies the
//! resulting actions to the session (viewport for pan/zoom, protocol for
//! paints), and redraws imperatively whenever the session's scene
//! revision moves. The `canvas` crate owns all geometry; nothing here
//! computes coordinates beyond subtracting the element's bounding rect.

use leptos::prelude::*;

use canvas::camera::Point;
use canvas::consts::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT};
use canvas::input::GestureTracker;

use crate::app::AppSender;
use crate::state::session::Session;

#[cfg(feature = "web")]
use canvas::input::GestureAction;
#[cfg(feature = "web")]
use crate::net::sync;
#[cfg(feature = "web")]
use crate::util::persist;
#[cfg(feature = "web")]
use crate::util::time::now_ms;
#[cfg(feature = "web")]
use wasm_bindgen::JsCast;

/// The shared canvas plus its zoom controls.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let _sender = expect_context::<RwSignal<Option<AppSender>>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let _tracker = RwSignal::new(GestureTracker::new());

    #[cfg(feature = "web")]
    {
        // Size the backing store once; the canvas size is fixed for the
        // session lifetime.
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let size = session.with_untracked(|s| s.viewport.canvas_size());
            canvas.set_width(size as u32);
            canvas.set_height(size as u32);
        });

        // Full redraw whenever drawable state changes.
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            session.with(|s| {
                if !s.canvas_revealed {
                    return;
                }
                let Ok(Some(ctx)) = canvas.get_context("2d") else {
                    return;
                };
                let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
                    return;
                };
                let mut surface = canvas::render::Canvas2dSurface::new(&ctx);
                canvas::render::draw(&mut surface, &s.grid, &s.viewport);
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(at) = mouse_position(canvas_ref, &ev) else {
                    return;
                };
                _tracker.update(|t| t.on_pointer_down(at));
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(at) = mouse_position(canvas_ref, &ev) else {
                    return;
                };
                if let Some(action) = _tracker.try_update(|t| t.on_pointer_move(at)).flatten() {
                    apply_action(session, _sender, action);
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(at) = mouse_position(canvas_ref, &ev) else {
                    return;
                };
                if let Some(action) = _tracker.try_update(|t| t.on_pointer_up(at)).flatten() {
                    apply_action(session, _sender, action);
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "web")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                _tracker.update(canvas::input::GestureTracker::on_pointer_leave);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let Some(at) = mouse_position(canvas_ref, &ev) else {
                    return;
                };
                let action = _tracker.with_untracked(|t| t.on_wheel(at, ev.delta_y()));
                apply_action(session, _sender, action);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let touches = touch_positions(canvas_ref, &ev);
                _tracker.update(|t| t.on_touch_start(&touches, now_ms()));
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let touches = touch_positions(canvas_ref, &ev);
                if let Some(action) = _tracker.try_update(|t| t.on_touch_move(&touches)).flatten() {
                    apply_action(session, _sender, action);
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "web")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let remaining = ev.touches().length() as usize;
                if let Some(action) =
                    _tracker.try_update(|t| t.on_touch_end(remaining, now_ms())).flatten()
                {
                    apply_action(session, _sender, action);
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    // Button zoom anchors at the canvas center, so it needs no DOM access.
    let zoom_step = move |factor: f64| {
        session.update(|s| {
            let center = s.viewport.canvas_size() / 2.0;
            s.viewport.zoom(factor, Point::new(center, center));
            s.bump_scene_rev();
        });
    };

    view! {
        <div class="canvas-shell">
            <canvas
                class="pixel-canvas"
                node_ref=canvas_ref
                style:display=move || if session.get().canvas_revealed { "block" } else { "none" }
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="zoom-controls">
                <button class="zoom-button" title="Zoom in" on:click=move |_| zoom_step(BUTTON_ZOOM_IN)>
                    "+"
                </button>
                <button class="zoom-button" title="Zoom out" on:click=move |_| zoom_step(BUTTON_ZOOM_OUT)>
                    "−"
                </button>
            </div>
        </div>
    }
}

/// Apply a recognized gesture to the session: pan/zoom mutate the
/// viewport, a paint goes through the synchronization protocol.
#[cfg(feature = "web")]
fn apply_action(
    session: RwSignal<Session>,
    sender: RwSignal<Option<AppSender>>,
    action: GestureAction,
) {
    match action {
        GestureAction::Pan { delta_x, delta_y } => session.update(|s| {
            s.viewport.pan(delta_x, delta_y);
            s.bump_scene_rev();
        }),
        GestureAction::Zoom { factor, anchor } => session.update(|s| {
            let inset = s.viewport.inset_px();
            s.viewport.zoom(factor, Point::new(anchor.x - inset, anchor.y - inset));
            s.bump_scene_rev();
        }),
        GestureAction::Paint(at) => paint_cell(session, sender, at),
    }
}

/// Paint the cell under `at` with the selected color, optimistically and
/// over the channel. Persists the update counter when accepted.
#[cfg(feature = "web")]
fn paint_cell(session: RwSignal<Session>, sender: RwSignal<Option<AppSender>>, at: Point) {
    let Some(mut sink) = sender.get_untracked() else {
        return;
    };
    let now = now_ms();
    let accepted = session
        .try_update(|s| {
            let Some(index) = s.viewport.screen_to_cell(at) else {
                return false;
            };
            let color = s.selected_color;
            sync::request_update(s, &mut sink, index, color, now)
        })
        .unwrap_or(false);
    if accepted {
        persist::save_pixel_count(session.with_untracked(|s| s.updates_sent));
    }
}

/// Mouse-class event position relative to the canvas element.
#[cfg(feature = "web")]
fn mouse_position(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    ev: &web_sys::MouseEvent,
) -> Option<Point> {
    let canvas = canvas_ref.get()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Point::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    ))
}

/// All active touch positions relative to the canvas element.
#[cfg(feature = "web")]
fn touch_positions(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    ev: &web_sys::TouchEvent,
) -> Vec<Point> {
    let Some(canvas) = canvas_ref.get() else {
        return Vec::new();
    };
    let rect = canvas.get_bounding_client_rect();
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            Point::new(f64::from(t.client_x()) - rect.left(), f64::from(t.client_y()) - rect.top())
        })
        .collect()
}
