//! Request transport for the page forms.
//!
//! Controllers only see the [`Transport`] trait; the browser implementation
//! posts multipart bodies through `fetch`.

use ragdesk_types::{Endpoint, PortalConfig, PortalError};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// Sends one form to one endpoint and hands back the decoded JSON reply.
///
/// HTTP status is not inspected: any reply with a JSON body is returned as
/// `Ok`, whatever its status code.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Request body type.
    type Form;

    /// Build a body from plain text fields.
    fn form_from_fields(&self, fields: &[(&str, &str)]) -> Result<Self::Form, PortalError>;

    async fn post(&self, endpoint: Endpoint, form: Self::Form) -> Result<Value, PortalError>;
}

/// `fetch`-backed transport used in the browser.
pub struct FetchTransport {
    config: PortalConfig,
}

impl FetchTransport {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    async fn send(&self, url: &str, form: &FormData) -> Result<Response, JsValue> {
        let window = web_sys::window().ok_or("No window")?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(form);

        // Content-Type is left to the browser so it can add the multipart boundary
        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("Accept", "application/json")?;

        let response = JsFuture::from(window.fetch_with_request(&request)).await?;
        response.dyn_into()
    }
}

impl Transport for FetchTransport {
    type Form = FormData;

    fn form_from_fields(&self, fields: &[(&str, &str)]) -> Result<FormData, PortalError> {
        let form = FormData::new().map_err(|e| PortalError::Form(describe_js_error(&e)))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|e| PortalError::Form(describe_js_error(&e)))?;
        }
        Ok(form)
    }

    async fn post(&self, endpoint: Endpoint, form: FormData) -> Result<Value, PortalError> {
        let url = self.config.endpoint_url(endpoint);
        tracing::debug!(%url, "posting form");

        let response = self
            .send(&url, &form)
            .await
            .map_err(|e| PortalError::network(describe_js_error(&e)))?;
        tracing::debug!(%url, status = response.status(), "reply received");

        let text = response
            .text()
            .map_err(|e| PortalError::network(describe_js_error(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| PortalError::network(describe_js_error(&e)))?
            .as_string()
            .unwrap_or_default();

        serde_json::from_str(&body).map_err(|e| PortalError::decode(e.to_string()))
    }
}

/// Human-readable description of a thrown JS value.
///
/// Error objects contribute their `message`, thrown strings are used as-is,
/// anything else falls back to its debug form.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_describe_error_object() {
        let err: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(describe_js_error(&err), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_describe_thrown_string() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    fn test_form_from_fields() {
        let transport = FetchTransport::new(PortalConfig::default());
        let form = transport
            .form_from_fields(&[("question", "hi"), ("index_name", "faiss_index_a")])
            .unwrap();
        assert_eq!(form.get("question").as_string().as_deref(), Some("hi"));
        assert_eq!(
            form.get("index_name").as_string().as_deref(),
            Some("faiss_index_a")
        );
    }
}
