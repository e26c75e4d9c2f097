//! Project CRUD service: direct passthroughs to `/api/proyectos`.

use serde_json::{json, Value};

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::http::Transport;

/// 1:1 mapping of project operations to REST calls. No validation or
/// transformation happens here; ids and payloads are opaque to the client.
pub struct ProyectosService<'a, T> {
    http: &'a HttpClient<T>,
}

impl<'a, T: Transport> ProyectosService<'a, T> {
    pub fn new(http: &'a HttpClient<T>) -> Self {
        Self { http }
    }

    pub fn crear(&self, data: &Value) -> Result<Value, ApiError> {
        self.http.post("/api/proyectos", Some(data))
    }

    pub fn listar(&self) -> Result<Value, ApiError> {
        self.http.get("/api/proyectos")
    }

    pub fn obtener(&self, id: &str) -> Result<Value, ApiError> {
        self.http.get(&format!("/api/proyectos/{id}"))
    }

    /// Ask the backend to recompute the project summary. The backend expects
    /// an explicit empty JSON object, not a body-less POST.
    pub fn actualizar_resumen(&self, id: &str) -> Result<Value, ApiError> {
        self.http
            .post(&format!("/api/proyectos/{id}/actualizar-resumen"), Some(&json!({})))
    }

    pub fn resumen(&self, id: &str) -> Result<Value, ApiError> {
        self.http.get(&format!("/api/proyectos/{id}/resumen"))
    }

    pub fn eliminar(&self, id: &str) -> Result<Value, ApiError> {
        self.http.delete(&format!("/api/proyectos/{id}"))
    }
}
