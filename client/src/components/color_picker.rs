//! Color palette swatches for choosing the paint color.

use leptos::prelude::*;

use canvas::consts::COLOR_COUNT;
use canvas::palette::css_color;

use crate::state::session::Session;
use crate::util::persist;

/// Ten swatch buttons; the selection is highlighted and persisted.
#[component]
pub fn ColorPicker() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let swatches = (0..COLOR_COUNT)
        .map(|color| {
            view! {
                <button
                    class="color-button"
                    class:selected=move || session.get().selected_color == color
                    style:background-color=css_color(color)
                    on:click=move |_| {
                        session.update(|s| s.selected_color = color);
                        persist::save_selected_color(color);
                    }
                ></button>
            }
        })
        .collect_view();

    view! { <div class="color-picker">{swatches}</div> }
}
