//! Client-side route table: URL path → view, as pure data.
//!
//! View rendering lives outside this crate; resolution only decides which
//! view a path lands on and which project id it carries. Anything that
//! matches no route redirects to the project list.

/// A resolved client-side route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ruta {
    /// `/` — project list.
    Inicio,
    /// `/proyectos/:id` — project detail.
    ProyectoDetalle { id: String },
    /// `/proyectos/:id/seguimiento` — tracking view.
    ProyectoSeguimiento { id: String },
}

impl Ruta {
    /// Match `path` against the route table. Query string and fragment are
    /// ignored; an unmatched path falls through to `Inicio` (the catch-all
    /// redirect).
    pub fn resolver(path: &str) -> Ruta {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ruta::Inicio,
            ["proyectos", id] => Ruta::ProyectoDetalle { id: (*id).to_string() },
            ["proyectos", id, "seguimiento"] => {
                Ruta::ProyectoSeguimiento { id: (*id).to_string() }
            }
            _ => Ruta::Inicio,
        }
    }

    /// Route name, mirroring the view it resolves to.
    pub fn nombre(&self) -> &'static str {
        match self {
            Ruta::Inicio => "home",
            Ruta::ProyectoDetalle { .. } => "proyecto-detalle",
            Ruta::ProyectoSeguimiento { .. } => "proyecto-seguimiento",
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Ruta::Inicio => "/".to_string(),
            Ruta::ProyectoDetalle { id } => format!("/proyectos/{id}"),
            Ruta::ProyectoSeguimiento { id } => format!("/proyectos/{id}/seguimiento"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_inicio() {
        assert_eq!(Ruta::resolver("/"), Ruta::Inicio);
        assert_eq!(Ruta::resolver(""), Ruta::Inicio);
    }

    #[test]
    fn proyecto_detalle_carries_id() {
        let ruta = Ruta::resolver("/proyectos/42");
        assert_eq!(ruta, Ruta::ProyectoDetalle { id: "42".to_string() });
        assert_eq!(ruta.nombre(), "proyecto-detalle");
    }

    #[test]
    fn seguimiento_carries_same_id() {
        let ruta = Ruta::resolver("/proyectos/42/seguimiento");
        assert_eq!(ruta, Ruta::ProyectoSeguimiento { id: "42".to_string() });
        assert_eq!(ruta.nombre(), "proyecto-seguimiento");
    }

    #[test]
    fn unknown_paths_redirect_to_inicio() {
        assert_eq!(Ruta::resolver("/no-existe"), Ruta::Inicio);
        assert_eq!(Ruta::resolver("/proyectos/42/costos"), Ruta::Inicio);
        assert_eq!(Ruta::resolver("/proyectos"), Ruta::Inicio);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            Ruta::resolver("/proyectos/42?tab=costos"),
            Ruta::ProyectoDetalle { id: "42".to_string() }
        );
        assert_eq!(
            Ruta::resolver("/proyectos/42/seguimiento#tareas"),
            Ruta::ProyectoSeguimiento { id: "42".to_string() }
        );
    }

    #[test]
    fn trailing_slash_still_matches() {
        assert_eq!(
            Ruta::resolver("/proyectos/42/"),
            Ruta::ProyectoDetalle { id: "42".to_string() }
        );
    }

    #[test]
    fn path_regenerates_canonical_form() {
        let ruta = Ruta::ProyectoSeguimiento { id: "7".to_string() };
        assert_eq!(ruta.path(), "/proyectos/7/seguimiento");
        assert_eq!(Ruta::resolver(&ruta.path()), ruta);
    }
}
