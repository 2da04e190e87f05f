//! モード切替ボタン

use leptos::prelude::*;
use spec_extractor_common::Mode;

#[component]
pub fn ModeTabs<F>(mode: Memo<Mode>, on_select: F) -> impl IntoView
where
    F: Fn(Mode) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="mode-tabs">
            <button
                class="btn btn-secondary"
                disabled=move || mode.get() == Mode::Extraction
                on:click={
                    let on_select = on_select.clone();
                    move |_| on_select(Mode::Extraction)
                }
            >
                "🔍 Extract Specs"
            </button>
            <button
                class="btn btn-secondary"
                disabled=move || mode.get() == Mode::Database
                on:click={
                    let on_select = on_select.clone();
                    move |_| on_select(Mode::Database)
                }
            >
                "📁 View Database"
            </button>
        </div>
    }
}
