//! Synchronous API client core for the obra cost-tracking backend.
//!
//! # Overview
//! Thin, typed service layer over the construction-project REST API:
//! proyectos, costos (eleven fixed categories), and seguimiento (tareas,
//! material usage, avance). Entity attributes are opaque to this crate and
//! travel as `serde_json::Value`; the backend owns validation and shape.
//!
//! # Design
//! - `HttpClient` holds an injected `ApiConfig` and carries no other state —
//!   one network request per call, no caching, no retries.
//! - The actual HTTP round-trip sits behind the `Transport` trait, so every
//!   service is unit-testable against a recording fake; `UreqTransport` is
//!   the real implementation.
//! - Non-2xx responses are normalized into `ApiError::Api` carrying the
//!   status, an extracted human-readable message, and the raw payload, so
//!   callers can branch on either.
//! - The sole piece of error-driven control flow lives in
//!   `SeguimientoService::registrar_uso`: a single fallback to a legacy
//!   endpoint shape when the primary route does not exist.

pub mod client;
pub mod config;
pub mod costos;
pub mod error;
pub mod http;
pub mod proyectos;
pub mod rutas;
pub mod seguimiento;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::HttpClient;
pub use config::ApiConfig;
pub use costos::{CategoriaCosto, CostosService};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use proyectos::ProyectosService;
pub use rutas::Ruta;
pub use seguimiento::SeguimientoService;
pub use transport::UreqTransport;
