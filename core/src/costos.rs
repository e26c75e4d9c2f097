//! Cost entries: the closed category set and its CRUD service.
//!
//! # Design
//! Categories are a closed enum with an exhaustive mapping to endpoint
//! suffixes, so a service call with an unknown category cannot be expressed.
//! String input from UI layers goes through `FromStr`, which rejects unknown
//! keys before any request value exists.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::http::Transport;

/// The eleven cost categories the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoriaCosto {
    ManoObra,
    Local,
    Vigilancia,
    Energia,
    HerramientasOtros,
    Materiales,
    ImplementosSeguridad,
    Petroleo,
    Gasolina,
    Topico,
    EquipoOtro,
}

impl CategoriaCosto {
    /// Every category, in backend declaration order. Exposed for UI layers
    /// that render category pickers.
    pub const TODAS: [CategoriaCosto; 11] = [
        CategoriaCosto::ManoObra,
        CategoriaCosto::Local,
        CategoriaCosto::Vigilancia,
        CategoriaCosto::Energia,
        CategoriaCosto::HerramientasOtros,
        CategoriaCosto::Materiales,
        CategoriaCosto::ImplementosSeguridad,
        CategoriaCosto::Petroleo,
        CategoriaCosto::Gasolina,
        CategoriaCosto::Topico,
        CategoriaCosto::EquipoOtro,
    ];

    /// The endpoint suffix / wire key for this category.
    pub fn clave(self) -> &'static str {
        match self {
            CategoriaCosto::ManoObra => "mano-obra",
            CategoriaCosto::Local => "local",
            CategoriaCosto::Vigilancia => "vigilancia",
            CategoriaCosto::Energia => "energia",
            CategoriaCosto::HerramientasOtros => "herramientas-otros",
            CategoriaCosto::Materiales => "materiales",
            CategoriaCosto::ImplementosSeguridad => "implementos-seguridad",
            CategoriaCosto::Petroleo => "petroleo",
            CategoriaCosto::Gasolina => "gasolina",
            CategoriaCosto::Topico => "topico",
            CategoriaCosto::EquipoOtro => "equipo-otro",
        }
    }
}

impl fmt::Display for CategoriaCosto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clave())
    }
}

impl FromStr for CategoriaCosto {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TODAS
            .into_iter()
            .find(|c| c.clave() == s)
            .ok_or_else(|| ApiError::CategoriaDesconocida(s.to_string()))
    }
}

/// CRUD over `/api/proyectos/{id}/costos/{categoria}[/{costo_id}]`.
pub struct CostosService<'a, T> {
    http: &'a HttpClient<T>,
}

impl<'a, T: Transport> CostosService<'a, T> {
    pub fn new(http: &'a HttpClient<T>) -> Self {
        Self { http }
    }

    pub fn crear(
        &self,
        proyecto_id: &str,
        categoria: CategoriaCosto,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.http.post(
            &format!("/api/proyectos/{proyecto_id}/costos/{}", categoria.clave()),
            Some(payload),
        )
    }

    pub fn actualizar(
        &self,
        proyecto_id: &str,
        categoria: CategoriaCosto,
        costo_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.http.put(
            &format!(
                "/api/proyectos/{proyecto_id}/costos/{}/{costo_id}",
                categoria.clave()
            ),
            Some(payload),
        )
    }

    pub fn eliminar(
        &self,
        proyecto_id: &str,
        categoria: CategoriaCosto,
        costo_id: &str,
    ) -> Result<Value, ApiError> {
        self.http.delete(&format!(
            "/api/proyectos/{proyecto_id}/costos/{}/{costo_id}",
            categoria.clave()
        ))
    }
}
