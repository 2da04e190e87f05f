//! fetch によるAPI呼び出し
//!
//! 認証ヘッダ・リトライ・タイムアウトなし。

use spec_extractor_common::types::ExtractRequest;
use spec_extractor_common::{ApiEndpoints, ApiError, DatabaseRecord, SpecApi, SpecMap};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone)]
pub struct FetchApi {
    endpoints: ApiEndpoints,
}

impl FetchApi {
    pub fn new(base: &str) -> Self {
        Self { endpoints: ApiEndpoints::new(base) }
    }
}

/// JS例外をネットワークエラーに変換（TypeError の message を優先）
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}

/// リクエスト送信（共通処理）
async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    resp_value.dyn_into().map_err(js_error)
}

async fn text(resp: &Response) -> Result<String, ApiError> {
    let value = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| ApiError::Parse("body is not text".into()))
}

/// 200以外は本文付きのエラーにする
async fn ok_text(resp: Response) -> Result<String, ApiError> {
    let body = text(&resp).await?;
    if resp.status() != 200 {
        return Err(ApiError::from_status(resp.status(), &body));
    }
    Ok(body)
}

impl SpecApi for FetchApi {
    fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn extract(&self, url: &str) -> Result<SpecMap, ApiError> {
        let body = serde_json::to_string(&ExtractRequest { url })?;
        let resp = send("POST", &self.endpoints.specs(), Some(body)).await?;
        Ok(serde_json::from_str(&ok_text(resp).await?)?)
    }

    async fn list_records(&self) -> Result<Vec<DatabaseRecord>, ApiError> {
        let resp = send("GET", &self.endpoints.database(), None).await?;
        Ok(serde_json::from_str(&ok_text(resp).await?)?)
    }

    async fn delete_record(&self, model: &str) -> Result<(), ApiError> {
        let resp = send("DELETE", &self.endpoints.delete(model), None).await?;
        if !resp.ok() {
            let body = text(&resp).await.unwrap_or_default();
            return Err(ApiError::from_status(resp.status(), &body));
        }
        Ok(())
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_error_uses_error_message() {
        let err = js_error(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(err, ApiError::Network("Failed to fetch".into()));
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_js_error_accepts_thrown_string() {
        let err = js_error(JsValue::from_str("aborted"));
        assert_eq!(err, ApiError::Network("aborted".into()));
    }

    #[wasm_bindgen_test]
    fn test_fetch_api_endpoints() {
        let api = FetchApi::new("http://localhost:5000/api/");
        assert_eq!(api.endpoints().specs(), "http://localhost:5000/api/specs");
        assert_eq!(api.endpoints().delete("a b"), "http://localhost:5000/api/delete/a%20b");
    }
}
