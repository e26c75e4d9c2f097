//! In-memory mock of the obra backend REST surface.
//!
//! Serves the project/cost/seguimiento API consumed by `obra-core`. Two
//! router flavors exist: [`app`] routes material-usage registration both
//! with the material id in the path and in the body, while [`app_legacy`]
//! only accepts the body shape — letting clients exercise their fallback
//! against a genuine 404. Unknown routes answer with the backend's literal
//! `{"error":"Ruta no encontrada"}` payload.
//!
//! Models are defined independently of the client crate; integration tests
//! catch schema drift.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// The eleven cost-category endpoint suffixes the backend accepts.
pub const CATEGORIAS: [&str; 11] = [
    "mano-obra",
    "local",
    "vigilancia",
    "energia",
    "herramientas-otros",
    "materiales",
    "implementos-seguridad",
    "petroleo",
    "gasolina",
    "topico",
    "equipo-otro",
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proyecto {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateProyecto {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Costo {
    pub id: Uuid,
    pub descripcion: String,
    pub monto: f64,
}

#[derive(Deserialize)]
pub struct CreateCosto {
    pub descripcion: String,
    pub monto: f64,
}

#[derive(Deserialize)]
pub struct UpdateCosto {
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tarea {
    pub id: Uuid,
    pub nombre: String,
    pub completada: bool,
}

#[derive(Deserialize)]
pub struct CreateTarea {
    pub nombre: String,
    #[serde(default)]
    pub completada: bool,
}

#[derive(Deserialize)]
pub struct UpdateTarea {
    pub nombre: Option<String>,
    pub completada: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsoMaterial {
    pub id: Uuid,
    pub material_id: String,
    pub cantidad: f64,
}

#[derive(Deserialize)]
pub struct RegistrarUso {
    pub cantidad: f64,
}

/// Legacy shape: material id travels in the body instead of the path.
#[derive(Deserialize)]
pub struct RegistrarUsoLegacy {
    pub material_id: String,
    pub cantidad: f64,
}

#[derive(Default)]
struct Registro {
    costos: HashMap<String, HashMap<Uuid, Costo>>,
    tareas: HashMap<Uuid, Tarea>,
    usos: Vec<UsoMaterial>,
}

struct Entry {
    proyecto: Proyecto,
    registro: Registro,
}

type Db = Arc<RwLock<HashMap<Uuid, Entry>>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

/// Router with both material-usage route shapes.
pub fn app() -> Router {
    router(true)
}

/// Router that only accepts the body-embedded `material_id` shape, so the
/// path-shaped route 404s with "Ruta no encontrada".
pub fn app_legacy() -> Router {
    router(false)
}

fn router(ruta_uso_moderna: bool) -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let mut router = Router::new()
        .route("/api/proyectos", get(listar_proyectos).post(crear_proyecto))
        .route("/api/proyectos/{id}", get(obtener_proyecto).delete(eliminar_proyecto))
        .route("/api/proyectos/{id}/actualizar-resumen", post(actualizar_resumen))
        .route("/api/proyectos/{id}/resumen", get(resumen))
        .route("/api/proyectos/{id}/costos/{categoria}", post(crear_costo))
        .route(
            "/api/proyectos/{id}/costos/{categoria}/{costo_id}",
            put(actualizar_costo).delete(eliminar_costo),
        )
        .route(
            "/api/proyectos/{id}/seguimiento/tareas",
            get(listar_tareas).post(crear_tarea),
        )
        .route(
            "/api/proyectos/{id}/seguimiento/tareas/{tarea_id}",
            put(actualizar_tarea).delete(eliminar_tarea),
        )
        .route("/api/proyectos/{id}/seguimiento/materiales", get(listar_usos))
        .route(
            "/api/proyectos/{id}/seguimiento/materiales/uso",
            post(registrar_uso_legacy),
        )
        .route(
            "/api/proyectos/{id}/seguimiento/materiales/{material_id}",
            get(usos_por_material),
        )
        .route("/api/proyectos/{id}/seguimiento/avance", get(avance));

    if ruta_uso_moderna {
        router = router.route(
            "/api/proyectos/{id}/seguimiento/materiales/{material_id}/uso",
            post(registrar_uso),
        );
    }

    router.fallback(ruta_no_encontrada).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_legacy(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_legacy()).await
}

async fn ruta_no_encontrada() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Ruta no encontrada" })),
    )
}

fn no_encontrado(msg: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": msg })))
}

// --- proyectos ---

async fn listar_proyectos(State(db): State<Db>) -> Json<Vec<Proyecto>> {
    let db = db.read().await;
    Json(db.values().map(|e| e.proyecto.clone()).collect())
}

async fn crear_proyecto(
    State(db): State<Db>,
    Json(input): Json<CreateProyecto>,
) -> (StatusCode, Json<Proyecto>) {
    let proyecto = Proyecto {
        id: Uuid::new_v4(),
        nombre: input.nombre,
        descripcion: input.descripcion,
    };
    db.write().await.insert(
        proyecto.id,
        Entry {
            proyecto: proyecto.clone(),
            registro: Registro::default(),
        },
    );
    (StatusCode::CREATED, Json(proyecto))
}

async fn obtener_proyecto(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Proyecto>> {
    let db = db.read().await;
    db.get(&id)
        .map(|e| Json(e.proyecto.clone()))
        .ok_or_else(|| no_encontrado("Proyecto no encontrado"))
}

async fn eliminar_proyecto(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let mut db = db.write().await;
    db.remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| no_encontrado("Proyecto no encontrado"))
}

fn resumen_de(entry: &Entry) -> Value {
    let mut por_categoria = serde_json::Map::new();
    let mut total = 0.0;
    for (categoria, costos) in &entry.registro.costos {
        let subtotal: f64 = costos.values().map(|c| c.monto).sum();
        total += subtotal;
        por_categoria.insert(categoria.clone(), json!(subtotal));
    }
    let avance = avance_de(entry);
    json!({
        "proyecto_id": entry.proyecto.id,
        "total_costos": total,
        "costos_por_categoria": por_categoria,
        "total_tareas": entry.registro.tareas.len(),
        "avance": avance["porcentaje"],
    })
}

fn avance_de(entry: &Entry) -> Value {
    let total = entry.registro.tareas.len();
    let completadas = entry.registro.tareas.values().filter(|t| t.completada).count();
    let porcentaje = if total == 0 {
        0.0
    } else {
        completadas as f64 / total as f64 * 100.0
    };
    json!({
        "total_tareas": total,
        "tareas_completadas": completadas,
        "porcentaje": porcentaje,
    })
}

async fn actualizar_resumen(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Value>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(resumen_de(entry)))
}

async fn resumen(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Value>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(resumen_de(entry)))
}

// --- costos ---

fn validar_categoria(categoria: &str) -> Result<(), (StatusCode, Json<Value>)> {
    if CATEGORIAS.contains(&categoria) {
        Ok(())
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Ruta no encontrada" })),
        ))
    }
}

async fn crear_costo(
    State(db): State<Db>,
    Path((id, categoria)): Path<(Uuid, String)>,
    Json(input): Json<CreateCosto>,
) -> ApiResult<(StatusCode, Json<Costo>)> {
    validar_categoria(&categoria)?;
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    let costo = Costo {
        id: Uuid::new_v4(),
        descripcion: input.descripcion,
        monto: input.monto,
    };
    entry
        .registro
        .costos
        .entry(categoria)
        .or_default()
        .insert(costo.id, costo.clone());
    Ok((StatusCode::CREATED, Json(costo)))
}

async fn actualizar_costo(
    State(db): State<Db>,
    Path((id, categoria, costo_id)): Path<(Uuid, String, Uuid)>,
    Json(input): Json<UpdateCosto>,
) -> ApiResult<Json<Costo>> {
    validar_categoria(&categoria)?;
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    let costo = entry
        .registro
        .costos
        .get_mut(&categoria)
        .and_then(|c| c.get_mut(&costo_id))
        .ok_or_else(|| no_encontrado("Costo no encontrado"))?;
    if let Some(descripcion) = input.descripcion {
        costo.descripcion = descripcion;
    }
    if let Some(monto) = input.monto {
        costo.monto = monto;
    }
    Ok(Json(costo.clone()))
}

async fn eliminar_costo(
    State(db): State<Db>,
    Path((id, categoria, costo_id)): Path<(Uuid, String, Uuid)>,
) -> ApiResult<StatusCode> {
    validar_categoria(&categoria)?;
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    entry
        .registro
        .costos
        .get_mut(&categoria)
        .and_then(|c| c.remove(&costo_id))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| no_encontrado("Costo no encontrado"))
}

// --- seguimiento: tareas ---

async fn listar_tareas(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Vec<Tarea>>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(entry.registro.tareas.values().cloned().collect()))
}

async fn crear_tarea(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateTarea>,
) -> ApiResult<(StatusCode, Json<Tarea>)> {
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    let tarea = Tarea {
        id: Uuid::new_v4(),
        nombre: input.nombre,
        completada: input.completada,
    };
    entry.registro.tareas.insert(tarea.id, tarea.clone());
    Ok((StatusCode::CREATED, Json(tarea)))
}

async fn actualizar_tarea(
    State(db): State<Db>,
    Path((id, tarea_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateTarea>,
) -> ApiResult<Json<Tarea>> {
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    let tarea = entry
        .registro
        .tareas
        .get_mut(&tarea_id)
        .ok_or_else(|| no_encontrado("Tarea no encontrada"))?;
    if let Some(nombre) = input.nombre {
        tarea.nombre = nombre;
    }
    if let Some(completada) = input.completada {
        tarea.completada = completada;
    }
    Ok(Json(tarea.clone()))
}

async fn eliminar_tarea(
    State(db): State<Db>,
    Path((id, tarea_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    entry
        .registro
        .tareas
        .remove(&tarea_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| no_encontrado("Tarea no encontrada"))
}

// --- seguimiento: materiales ---

async fn listar_usos(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Vec<UsoMaterial>>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(entry.registro.usos.clone()))
}

async fn usos_por_material(
    State(db): State<Db>,
    Path((id, material_id)): Path<(Uuid, String)>,
) -> ApiResult<Json<Vec<UsoMaterial>>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(
        entry
            .registro
            .usos
            .iter()
            .filter(|u| u.material_id == material_id)
            .cloned()
            .collect(),
    ))
}

async fn registrar_uso(
    State(db): State<Db>,
    Path((id, material_id)): Path<(Uuid, String)>,
    Json(input): Json<RegistrarUso>,
) -> ApiResult<(StatusCode, Json<UsoMaterial>)> {
    insertar_uso(&db, id, material_id, input.cantidad).await
}

async fn registrar_uso_legacy(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<RegistrarUsoLegacy>,
) -> ApiResult<(StatusCode, Json<UsoMaterial>)> {
    insertar_uso(&db, id, input.material_id, input.cantidad).await
}

async fn insertar_uso(
    db: &Db,
    id: Uuid,
    material_id: String,
    cantidad: f64,
) -> ApiResult<(StatusCode, Json<UsoMaterial>)> {
    let mut db = db.write().await;
    let entry = db.get_mut(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    let uso = UsoMaterial {
        id: Uuid::new_v4(),
        material_id,
        cantidad,
    };
    entry.registro.usos.push(uso.clone());
    Ok((StatusCode::CREATED, Json(uso)))
}

// --- seguimiento: avance ---

async fn avance(State(db): State<Db>, Path(id): Path<Uuid>) -> ApiResult<Json<Value>> {
    let db = db.read().await;
    let entry = db.get(&id).ok_or_else(|| no_encontrado("Proyecto no encontrado"))?;
    Ok(Json(avance_de(entry)))
}
