//! 抽出パネル（URL入力と仕様テーブル）

use leptos::prelude::*;
use spec_extractor_common::ViewState;

#[component]
pub fn ExtractionPanel<FU, FS>(
    state: RwSignal<ViewState>,
    on_url: FU,
    on_submit: FS,
) -> impl IntoView
where
    FU: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let url = Memo::new(move |_| state.with(|s| s.url.clone()));
    let in_flight = Memo::new(move |_| state.with(|s| s.extraction_in_flight));

    view! {
        <div class="extraction-panel">
            <div class="form-row">
                <input
                    type="text"
                    class="url-input"
                    placeholder="Paste URL here..."
                    prop:value=move || url.get()
                    on:input=move |ev| on_url(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_submit = on_submit.clone();
                        move |_| on_submit(())
                    }
                >
                    "Get Specs"
                </button>
            </div>

            <Show when=move || in_flight.get()>
                <p class="loading">"🔄 Fetching specs..."</p>
            </Show>

            <table class="spec-table">
                <thead>
                    <tr>
                        <th>"Specification"</th>
                        <th>"Value"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(|s| {
                            s.spec_entries
                                .iter()
                                .map(|entry| {
                                    let name = entry.name.clone();
                                    let value = entry.value.clone();
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{value}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </div>
    }
}
