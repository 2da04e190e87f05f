//! reqwest によるAPI実装

use crate::download::save_download;
use crate::error::Result;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Response, StatusCode};
use spec_extractor_common::types::ExtractRequest;
use spec_extractor_common::{
    file_name_from_disposition, ApiEndpoints, ApiError, DatabaseRecord, Download, DownloadTarget,
    Opener, SpecApi, SpecMap,
};
use std::path::{Path, PathBuf};

/// HTTPクライアント
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints: ApiEndpoints::new(base),
        }
    }
}

/// ダウンロードURLを取得して保存先ディレクトリへ書き出す
#[derive(Debug, Clone)]
pub struct SaveToDir {
    client: reqwest::Client,
    dir: PathBuf,
}

impl SaveToDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { client: reqwest::Client::new(), dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// 200以外は失敗として本文をエラーにする
async fn expect_ok(resp: Response) -> std::result::Result<Response, ApiError> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

impl SpecApi for HttpApi {
    fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn extract(&self, url: &str) -> std::result::Result<SpecMap, ApiError> {
        tracing::debug!(url, "POST /specs");
        let resp = self
            .client
            .post(self.endpoints.specs())
            .json(&ExtractRequest { url })
            .send()
            .await
            .map_err(network)?;

        let body = expect_ok(resp).await?.text().await.map_err(network)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list_records(&self) -> std::result::Result<Vec<DatabaseRecord>, ApiError> {
        tracing::debug!("GET /database");
        let resp = self
            .client
            .get(self.endpoints.database())
            .send()
            .await
            .map_err(network)?;

        let body = expect_ok(resp).await?.text().await.map_err(network)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_record(&self, model: &str) -> std::result::Result<(), ApiError> {
        tracing::debug!(model, "DELETE /delete");
        let resp = self
            .client
            .delete(self.endpoints.delete(model))
            .send()
            .await
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(())
    }
}

/// ファイル名は `Content-Disposition` から、無ければ対象の既定名
pub async fn fetch_download(
    client: &reqwest::Client,
    url: &str,
    target: &DownloadTarget,
) -> std::result::Result<Download, ApiError> {
    tracing::debug!(url, "GET download");
    let resp = client.get(url).send().await.map_err(network)?;
    let resp = expect_ok(resp).await?;

    let file_name = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(file_name_from_disposition)
        .unwrap_or_else(|| target.default_file_name());
    let bytes = resp.bytes().await.map_err(network)?.to_vec();

    Ok(Download { file_name, bytes })
}

impl Opener for SaveToDir {
    type Opened = Result<PathBuf>;

    async fn open(&self, url: &str, target: &DownloadTarget) -> Self::Opened {
        let download = fetch_download(&self.client, url, target).await?;
        save_download(&download, &self.dir)
    }
}
