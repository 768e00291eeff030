//! Color leaderboard: per-color cell counts as proportional bars.

use leptos::prelude::*;

use canvas::consts::COLOR_COUNT;
use canvas::palette::css_color;

use crate::state::session::Session;

/// Medal colors for the three most-used palette entries.
const MEDAL_COLORS: [&str; 3] = ["#FFD700", "#C0C0C0", "#CD7F32"];

/// Bars sized by each color's share of the grid, sorted descending; the
/// top three carry a medal star. Hidden until the canvas is revealed.
#[component]
pub fn ColorCounters() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let ranked = move || {
        let counts = session.with(|s| s.grid.color_counts());
        let mut rows: Vec<(u8, u32)> =
            (0..COLOR_COUNT).zip(counts).filter(|&(_, count)| count > 0).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    };

    view! {
        <div
            class="color-counter-container"
            style:display=move || if session.get().canvas_revealed { "block" } else { "none" }
        >
            {move || {
                ranked()
                    .into_iter()
                    .enumerate()
                    .map(|(rank, (color, count))| {
                        let share = f64::from(count) / 100.0;
                        view! {
                            <div
                                class="color-counter"
                                style:background-color=css_color(color)
                                style:width=format!("{share}%")
                            >
                                {count}
                                {MEDAL_COLORS.get(rank).copied().map(|medal| {
                                    view! {
                                        <span class="color-counter__medal" style:color=medal>
                                            "★"
                                        </span>
                                    }
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
