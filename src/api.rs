//! Backend HTTP access and the JSON shapes the site API speaks.
//!
//! Everything that talks to the server goes through the [`Backend`] trait so
//! the request/response handling in the feature modules can be exercised
//! without a browser. [`FetchBackend`] is the real implementation on top of
//! `window.fetch`.

use crate::config::API_BASE_URL;
use crate::error::ApiError;
use crate::PropertyId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// What came back from the server, already read to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Final URL when the browser followed a redirect.
    pub redirected_to: Option<String>,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        HttpReply {
            status: 200,
            redirected_to: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON regardless of status.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body, treating any non-2xx status as an error.
    pub fn success_json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status(self.status));
        }
        self.json()
    }
}

/// Transport used by the feature modules. Paths are relative to the API base
/// for `get`/`post_json`; `post_form` takes a full form action.
pub trait Backend {
    fn get(&self, path: &str) -> impl Future<Output = Result<HttpReply, ApiError>>;

    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<HttpReply, ApiError>>;

    /// Multipart form post flagged as an async request
    /// (`X-Requested-With: XMLHttpRequest`).
    fn post_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> impl Future<Output = Result<HttpReply, ApiError>>;
}

// ──────────────────────────────────────────────────────────────────────────────
// Wire types

/// `GET /api/search/?q=` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub properties: Vec<Suggestion>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub id: PropertyId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyImage {
    pub url: String,
}

/// `GET /api/property/<id>/` response. Numeric stats arrive as numbers or
/// strings depending on the upstream feed, so they are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyDetail {
    pub id: PropertyId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<serde_json::Value>,
    #[serde(default)]
    pub bathrooms: Option<serde_json::Value>,
    #[serde(default)]
    pub area: Option<serde_json::Value>,
    #[serde(default)]
    pub parking: Option<serde_json::Value>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
}

/// Generic `{success, error?, message?}` acknowledgement used by the
/// newsletter and contact endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ──────────────────────────────────────────────────────────────────────────────
// window.fetch transport

/// [`Backend`] backed by the browser Fetch API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchBackend {
    base_url: String,
}

impl Default for FetchBackend {
    fn default() -> Self {
        FetchBackend::new(API_BASE_URL)
    }
}

impl FetchBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        FetchBackend {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Backend for FetchBackend {
    async fn get(&self, path: &str) -> Result<HttpReply, ApiError> {
        let init = RequestInit::new();
        init.set_method("GET");
        let request =
            Request::new_with_str_and_init(&self.url(path), &init).map_err(ApiError::from_js)?;
        send(request).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, ApiError> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&wasm_bindgen::JsValue::from_str(&body.to_string()));
        let request =
            Request::new_with_str_and_init(&self.url(path), &init).map_err(ApiError::from_js)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::from_js)?;
        send(request).await
    }

    async fn post_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<HttpReply, ApiError> {
        let data = FormData::new().map_err(ApiError::from_js)?;
        for (name, value) in fields {
            data.append_with_str(name, value)
                .map_err(ApiError::from_js)?;
        }
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&data);
        let request = Request::new_with_str_and_init(action, &init).map_err(ApiError::from_js)?;
        request
            .headers()
            .set("X-Requested-With", "XMLHttpRequest")
            .map_err(ApiError::from_js)?;
        send(request).await
    }
}

async fn send(request: Request) -> Result<HttpReply, ApiError> {
    let window = gloo_utils::window();
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: Response = value.dyn_into().map_err(ApiError::from_js)?;
    let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?;

    Ok(HttpReply {
        status: response.status(),
        redirected_to: response.redirected().then(|| response.url()),
        body: text.as_string().unwrap_or_default(),
    })
}

// ──────────────────────────────────────────────────────────────────────────────
// In-memory double for unit tests


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_json_rejects_error_status() {
        let reply = HttpReply {
            status: 404,
            redirected_to: None,
            body: "{}".into(),
        };
        assert_eq!(
            reply.success_json::<Ack>().unwrap_err(),
            ApiError::Status(404)
        );
    }

    #[test]
    fn search_response_tolerates_numeric_ids_and_missing_fields() {
        let reply = HttpReply::ok(
            r#"{"success":true,"properties":[{"id":7,"title":"Marina Loft"},{"id":"x9"}]}"#,
        );
        let parsed: SearchResponse = reply.success_json().unwrap();
        assert_eq!(parsed.properties.len(), 2);
        assert_eq!(parsed.properties[0].id.as_str(), "7");
        assert_eq!(parsed.properties[1].location, None);
    }

    #[test]
    fn property_detail_keeps_raw_stats() {
        let detail: PropertyDetail = serde_json::from_str(
            r#"{"id":3,"bedrooms":"2","area":1450.5,"price":null,"images":[{"url":"/a.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.bedrooms, Some(serde_json::json!("2")));
        assert_eq!(detail.price, None);
        assert_eq!(detail.images[0].url, "/a.jpg");
    }

    #[test]
    fn fetch_backend_joins_paths() {
        let backend = FetchBackend::new("/api/");
        assert_eq!(backend.url("/search/?q=x"), "/api/search/?q=x");
    }
}
