//! メインアプリケーションコンポーネント
//!
//! 状態は `ViewState` 1つにまとめ、操作ごとに遷移メソッドを呼ぶ。
//! 遷移が返した `Effect` はここで非同期に実行し、応答も遷移として戻す。

use leptos::prelude::*;
use spec_extractor_common::{
    DownloadTarget, Effect, Mode, Opener, SpecApi, ViewState, DEFAULT_API_BASE,
};
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchApi;
use crate::components::{
    database_panel::DatabasePanel,
    extraction_panel::ExtractionPanel,
    header::Header,
    mode_tabs::ModeTabs,
};

/// APIベースURL（ビルド時の `SPEC_EXTRACTOR_API_BASE` で上書き可）
pub fn api_base() -> &'static str {
    option_env!("SPEC_EXTRACTOR_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// 対象のダウンロードURL
pub fn download_url(api: &FetchApi, target: &DownloadTarget) -> String {
    api.endpoints().download(target)
}

/// 新しいウィンドウでダウンロードを開く（保存はブラウザ任せ）
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOpener;

impl Opener for WindowOpener {
    type Opened = bool;

    async fn open(&self, url: &str, _target: &DownloadTarget) -> bool {
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
            .flatten();
        if opened.is_none() {
            gloo::console::warn!(format!("could not open {}", url));
        }
        opened.is_some()
    }
}

/// Effect を実行する。各リクエストは独立して走り、古い応答は遷移側で捨てる。
fn run_effects(state: RwSignal<ViewState>, api: FetchApi, effects: Vec<Effect>) {
    for effect in effects {
        let api = api.clone();
        match effect {
            Effect::Extract { generation, url } => spawn_local(async move {
                let result = api.extract(&url).await;
                if let Err(e) = &result {
                    gloo::console::warn!(format!("extraction failed: {}", e));
                }
                state.update(|s| s.extraction_settled(generation, result));
            }),
            Effect::ListRecords { generation } => spawn_local(async move {
                let result = api.list_records().await;
                if let Err(e) = &result {
                    gloo::console::warn!(format!("record list failed: {}", e));
                }
                state.update(|s| s.records_loaded(generation, result));
            }),
            Effect::DeleteRecord { model } => spawn_local(async move {
                let result = api.delete_record(&model).await;
                if let Err(e) = &result {
                    gloo::console::warn!(format!("delete failed: {}", e));
                }
                let next = state.try_update(|s| s.delete_settled(&model, result));
                run_effects(state, api, next.into_iter().collect());
            }),
            Effect::Open(target) => spawn_local(async move {
                WindowOpener.open(&download_url(&api, &target), &target).await;
            }),
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let api = FetchApi::new(api_base());
    let mode = Memo::new(move |_| state.with(|s| s.mode));

    let dispatch = move |effects: Vec<Effect>| run_effects(state, api.clone(), effects);

    // モード切替ハンドラ
    let on_mode = {
        let dispatch = dispatch.clone();
        move |next: Mode| {
            let effects = state.try_update(|s| s.set_mode(next)).unwrap_or_default();
            dispatch(effects);
        }
    };

    // 抽出ハンドラ
    let on_url = move |url: String| state.update(|s| s.set_url(url));
    let on_submit = {
        let dispatch = dispatch.clone();
        move |_: ()| {
            let effect = state.try_update(|s| s.submit_extraction()).flatten();
            dispatch(effect.into_iter().collect());
        }
    };

    // データベースハンドラ
    let on_search = move |term: String| state.update(|s| s.set_search(term));
    let on_delete = {
        let dispatch = dispatch.clone();
        move |model: String| {
            let effect = state.try_update(|s| s.delete_record(&model));
            dispatch(effect.into_iter().collect());
        }
    };
    let on_download = {
        let dispatch = dispatch.clone();
        move |model: String| dispatch(vec![state.with_untracked(|s| s.download_one(&model))])
    };
    let on_download_all = {
        let dispatch = dispatch.clone();
        move |_: ()| dispatch(vec![state.with_untracked(|s| s.download_all())])
    };

    view! {
        <div class="container">
            <Header />

            <ModeTabs mode=mode on_select=on_mode />

            {move || match mode.get() {
                Mode::Extraction => view! {
                    <ExtractionPanel
                        state=state
                        on_url=on_url
                        on_submit=on_submit.clone()
                    />
                }
                .into_any(),
                Mode::Database => view! {
                    <DatabasePanel
                        state=state
                        on_search=on_search
                        on_delete=on_delete.clone()
                        on_download=on_download.clone()
                        on_download_all=on_download_all.clone()
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_defaults_without_build_override() {
        if option_env!("SPEC_EXTRACTOR_API_BASE").is_none() {
            assert_eq!(api_base(), DEFAULT_API_BASE);
        } else {
            assert!(!api_base().is_empty());
        }
    }

    #[wasm_bindgen_test]
    fn test_download_one_opens_encoded_url() {
        let api = FetchApi::new("http://localhost:5000/api");
        let state = ViewState::new();
        let Effect::Open(target) = state.download_one("a b") else {
            panic!("download must open a target");
        };
        assert_eq!(download_url(&api, &target), "http://localhost:5000/api/download/a%20b");
    }

    #[wasm_bindgen_test]
    fn test_download_all_url() {
        let api = FetchApi::new("http://localhost:5000/api");
        assert_eq!(
            download_url(&api, &DownloadTarget::All),
            "http://localhost:5000/api/download-all"
        );
    }
}
