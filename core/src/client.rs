//! Verb-level HTTP client with uniform response/error normalization.
//!
//! # Design
//! `HttpClient` owns the injected `ApiConfig` and a `Transport`; each verb
//! funnels through a single `request` path. Response bodies are parsed
//! leniently: an unparseable or JSON-`null` body counts as absent, and a
//! successful response without a body resolves to the `{"ok": true}`
//! sentinel so callers always receive a `Value`. No retries, timeouts, or
//! caching live at this layer.

use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone)]
pub struct HttpClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Get, path, None)
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Post, path, body)
    }

    pub fn put(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Put, path, body)
    }

    pub fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Delete, path, None)
    }

    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let body = body
            .map(|v| serde_json::to_string(v).map_err(|e| ApiError::Serialization(e.to_string())))
            .transpose()?;

        let response = self.transport.execute(HttpRequest {
            method,
            path: format!("{}{}", self.config.base_url(), path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })?;

        interpretar(response)
    }
}

/// Turn a raw response into the caller-facing result: parsed body (or the
/// `{"ok": true}` sentinel) on 2xx, a normalized `ApiError::Api` otherwise.
fn interpretar(response: HttpResponse) -> Result<Value, ApiError> {
    let payload = serde_json::from_str::<Value>(&response.body)
        .ok()
        .filter(|v| !v.is_null());

    if (200..300).contains(&response.status) {
        return Ok(payload.unwrap_or_else(|| json!({ "ok": true })));
    }

    Err(ApiError::Api {
        status: response.status,
        message: extraer_mensaje(response.status, payload.as_ref()),
        payload,
    })
}

/// Extract a human-readable message from an error payload.
///
/// Priority order: string `message` field, string `error` field, nested
/// `error.message` string, stringified `error` object, then the generic
/// `HTTP <status>`.
fn extraer_mensaje(status: u16, payload: Option<&Value>) -> String {
    if let Some(payload) = payload {
        if let Some(msg) = payload.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
        match payload.get("error") {
            Some(Value::String(msg)) => return msg.clone(),
            Some(error) => {
                if let Some(msg) = error.get("message").and_then(Value::as_str) {
                    return msg.to_string();
                }
                if error.is_object() {
                    return error.to_string();
                }
            }
            None => {}
        }
    }
    format!("HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockTransport;

    fn client(transport: MockTransport) -> HttpClient<MockTransport> {
        HttpClient::new(ApiConfig::new("http://localhost:3000"), transport)
    }

    #[test]
    fn get_resolves_parsed_body() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"x":1}"#);
        let c = client(transport);

        let value = c.get("/api/proyectos/1").unwrap();
        assert_eq!(value, json!({"x": 1}));

        let req = c.transport().request(0);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/proyectos/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn empty_body_resolves_to_ok_sentinel() {
        let transport = MockTransport::new();
        transport.push(200, "");
        let value = client(transport).get("/api/proyectos").unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn unparseable_body_resolves_to_ok_sentinel() {
        let transport = MockTransport::new();
        transport.push(204, "not json");
        let value = client(transport).delete("/api/proyectos/1").unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn null_body_resolves_to_ok_sentinel() {
        let transport = MockTransport::new();
        transport.push(200, "null");
        let value = client(transport).get("/api/proyectos").unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn post_serializes_body_and_sends_json_content_type() {
        let transport = MockTransport::new();
        transport.push(201, r#"{"id":"p1"}"#);
        let c = client(transport);

        c.post("/api/proyectos", Some(&json!({"nombre": "Obra A"}))).unwrap();

        let req = c.transport().request(0);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nombre"], "Obra A");
    }

    #[test]
    fn error_message_from_message_field() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"message":"bad"}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), "bad");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn error_message_from_error_string_field() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"error":"oops"}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), "oops");
    }

    #[test]
    fn error_message_from_nested_error_message() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"error":{"message":"nested"}}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), "nested");
    }

    #[test]
    fn error_object_without_message_is_stringified() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"error":{"code":7}}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), r#"{"code":7}"#);
    }

    #[test]
    fn message_field_takes_priority_over_error_field() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"message":"first","error":"second"}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), "first");
    }

    #[test]
    fn empty_error_body_falls_back_to_status() {
        let transport = MockTransport::new();
        transport.push(500, r#"{}"#);
        let err = client(transport).get("/x").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn error_carries_raw_payload() {
        let transport = MockTransport::new();
        transport.push(422, r#"{"message":"bad","detalle":"monto"}"#);
        let err = client(transport).get("/x").unwrap_err();
        match err {
            ApiError::Api { status, payload, .. } => {
                assert_eq!(status, 422);
                assert_eq!(payload.unwrap()["detalle"], "monto");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
