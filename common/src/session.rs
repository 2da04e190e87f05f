//! 遷移とリモート操作をつなぐドライバ
//!
//! ユーザー操作を `Action` として受け取り、`ViewState` の遷移を適用し、
//! 返ってきた `Effect` を順に実行して応答を状態へ戻す。
//! ダウンロードを開く処理は環境ごとに違うため `Opener` に任せる。

use std::collections::VecDeque;

use crate::api::{Opener, SpecApi};
use crate::state::{Effect, Mode, ViewState};

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetMode(Mode),
    SetUrl(String),
    Extract,
    SetSearch(String),
    Refresh,
    Delete(String),
    DownloadOne(String),
    DownloadAll,
}

pub struct Session<A, O> {
    api: A,
    opener: O,
    state: ViewState,
}

impl<A: SpecApi, O: Opener> Session<A, O> {
    pub fn new(api: A, opener: O) -> Self {
        Self { api, opener, state: ViewState::new() }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// 操作を適用し、発生したリモート操作を完了まで実行する
    ///
    /// 戻り値はダウンロードを開いた結果。
    pub async fn dispatch(&mut self, action: Action) -> Vec<O::Opened> {
        tracing::debug!(action = ?action, "dispatch");

        let effects: Vec<Effect> = match action {
            Action::SetMode(mode) => self.state.set_mode(mode),
            Action::SetUrl(url) => {
                self.state.set_url(url);
                vec![]
            }
            Action::Extract => self.state.submit_extraction().into_iter().collect(),
            Action::SetSearch(term) => {
                self.state.set_search(term);
                vec![]
            }
            Action::Refresh => vec![self.state.reload()],
            Action::Delete(model) => vec![self.state.delete_record(&model)],
            Action::DownloadOne(model) => vec![self.state.download_one(&model)],
            Action::DownloadAll => vec![self.state.download_all()],
        };

        self.run(effects).await
    }

    async fn run(&mut self, effects: Vec<Effect>) -> Vec<O::Opened> {
        let mut queue: VecDeque<Effect> = effects.into();
        let mut opened = Vec::new();

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Extract { generation, url } => {
                    let result = self.api.extract(&url).await;
                    self.state.extraction_settled(generation, result);
                }
                Effect::ListRecords { generation } => {
                    let result = self.api.list_records().await;
                    self.state.records_loaded(generation, result);
                }
                Effect::DeleteRecord { model } => {
                    let result = self.api.delete_record(&model).await;
                    queue.push_back(self.state.delete_settled(&model, result));
                }
                Effect::Open(target) => {
                    let url = self.api.endpoints().download(&target);
                    opened.push(self.opener.open(&url, &target).await);
                }
            }
        }

        opened
    }
}
