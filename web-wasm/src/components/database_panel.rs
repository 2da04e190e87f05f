//! データベースパネル（検索・一覧・削除・ダウンロード）

use leptos::prelude::*;
use spec_extractor_common::ViewState;

#[component]
pub fn DatabasePanel<FS, FD, FO, FA>(
    state: RwSignal<ViewState>,
    on_search: FS,
    on_delete: FD,
    on_download: FO,
    on_download_all: FA,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
    FO: Fn(String) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    let search = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let error = Memo::new(move |_| state.with(|s| s.database_error.clone()));

    // 行は毎回 filtered_records から組み直す
    let rows = move || {
        let on_delete = on_delete.clone();
        let on_download = on_download.clone();
        state.with(|s| {
            s.filtered_records()
                .into_iter()
                .enumerate()
                .map(|(i, record)| {
                    let model = record.model.clone();
                    let date = record.date_display().to_string();
                    let on_delete = on_delete.clone();
                    let on_download = on_download.clone();
                    let delete_model = model.clone();
                    let download_model = model.clone();
                    view! {
                        <tr>
                            <td>{i + 1}</td>
                            <td>{model}</td>
                            <td>{date}</td>
                            <td class="row-actions">
                                <button
                                    class="btn btn-small btn-secondary"
                                    on:click=move |_| on_download(download_model.clone())
                                >
                                    "📄 Download XLSX"
                                </button>
                                <button
                                    class="btn btn-small btn-danger"
                                    on:click=move |_| on_delete(delete_model.clone())
                                >
                                    "❌ Delete"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="database-panel">
            <div class="form-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search model..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_download_all = on_download_all.clone();
                        move |_| on_download_all(())
                    }
                >
                    "⬇️ Download All"
                </button>
            </div>

            {move || error.get().map(|message| view! { <p class="db-error">{message}</p> })}

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Model"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
