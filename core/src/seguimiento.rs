//! Seguimiento: tareas, material usage, avance, and the manifest URL.
//!
//! # Design
//! Everything here is a direct passthrough except `registrar_uso`, the one
//! place in the system with error-driven control flow. Some backend
//! deployments route material-usage registration without the material id in
//! the path and expect it in the body instead; when the primary route does
//! not exist, the call is retried exactly once against that legacy shape.

use serde_json::{json, Map, Value};

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::http::Transport;

pub struct SeguimientoService<'a, T> {
    http: &'a HttpClient<T>,
}

impl<'a, T: Transport> SeguimientoService<'a, T> {
    pub fn new(http: &'a HttpClient<T>) -> Self {
        Self { http }
    }

    // --- tareas ---

    pub fn listar_tareas(&self, proyecto_id: &str) -> Result<Value, ApiError> {
        self.http
            .get(&format!("/api/proyectos/{proyecto_id}/seguimiento/tareas"))
    }

    pub fn crear_tarea(&self, proyecto_id: &str, data: &Value) -> Result<Value, ApiError> {
        self.http.post(
            &format!("/api/proyectos/{proyecto_id}/seguimiento/tareas"),
            Some(data),
        )
    }

    pub fn actualizar_tarea(
        &self,
        proyecto_id: &str,
        tarea_id: &str,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.http.put(
            &format!("/api/proyectos/{proyecto_id}/seguimiento/tareas/{tarea_id}"),
            Some(data),
        )
    }

    pub fn eliminar_tarea(&self, proyecto_id: &str, tarea_id: &str) -> Result<Value, ApiError> {
        self.http
            .delete(&format!("/api/proyectos/{proyecto_id}/seguimiento/tareas/{tarea_id}"))
    }

    // --- materiales ---

    /// All material-usage logs for a project.
    pub fn listar_usos(&self, proyecto_id: &str) -> Result<Value, ApiError> {
        self.http
            .get(&format!("/api/proyectos/{proyecto_id}/seguimiento/materiales"))
    }

    /// Usage logs filtered to one material.
    pub fn usos_por_material(&self, proyecto_id: &str, material_id: &str) -> Result<Value, ApiError> {
        self.http.get(&format!(
            "/api/proyectos/{proyecto_id}/seguimiento/materiales/{material_id}"
        ))
    }

    /// Register a material usage.
    ///
    /// Primary route puts the material id in the path. If the backend
    /// answers HTTP 404, or an error whose message contains
    /// `"Ruta no encontrada"` (some deployments return that text with a
    /// different status), the call is retried exactly once against the
    /// legacy route with `material_id` merged into the body. Any other
    /// failure, and any failure of the retry itself, propagates unchanged.
    pub fn registrar_uso(
        &self,
        proyecto_id: &str,
        material_id: &str,
        data: &Value,
    ) -> Result<Value, ApiError> {
        let primary = format!(
            "/api/proyectos/{proyecto_id}/seguimiento/materiales/{material_id}/uso"
        );
        match self.http.post(&primary, Some(data)) {
            Ok(value) => Ok(value),
            Err(err) if es_ruta_no_encontrada(&err) => {
                let body = con_material_id(data, material_id);
                self.http.post(
                    &format!("/api/proyectos/{proyecto_id}/seguimiento/materiales/uso"),
                    Some(&body),
                )
            }
            Err(err) => Err(err),
        }
    }

    // --- progreso ---

    pub fn avance(&self, proyecto_id: &str) -> Result<Value, ApiError> {
        self.http
            .get(&format!("/api/proyectos/{proyecto_id}/seguimiento/avance"))
    }

    /// URL of the generated manifest spreadsheet. Pure string construction;
    /// the document itself is fetched by the browser, not this layer.
    pub fn manifiesto_url(&self, proyecto_id: &str) -> String {
        format!(
            "{}/api/proyectos/{proyecto_id}/seguimiento/manifiesto.xlsx",
            self.http.base_url()
        )
    }
}

/// Both signals are load-bearing: a plain 404, or the backend's literal
/// "Ruta no encontrada" text under any status.
fn es_ruta_no_encontrada(err: &ApiError) -> bool {
    match err {
        ApiError::Api { status, message, .. } => {
            *status == 404 || message.contains("Ruta no encontrada")
        }
        _ => false,
    }
}

/// `data` with `material_id` merged in, as the legacy route expects.
fn con_material_id(data: &Value, material_id: &str) -> Value {
    let mut map = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert("material_id".to_string(), json!(material_id));
    Value::Object(map)
}
