// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;
use tracing::{error, info};

use torneos_api::{
    ActualizarTorneoRequest, ActualizarTorneoResponse, ApiError, CancelarTorneoRequest,
    CancelarTorneoResponse, CrearTorneoRequest, CrearTorneoResponse, ListarCategoriasResponse,
    ListarTorneosQuery, ListarTorneosResponse, ObtenerTorneoResponse, actualizar_torneo,
    cancelar_torneo, crear_torneo, listar_categorias, listar_torneos, obtener_torneo,
};
use torneos_persistence::{RepositorioCategorias, RepositorioTorneos};

/// Torneos Server - HTTP server for the tournament management system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Organizer id used when a request does not name one
    #[arg(long, default_value = "test-organizador-id")]
    default_organizer: String,
}

/// Application state shared across handlers.
///
/// The repositories are wrapped in Mutexes to allow safe concurrent
/// access; handlers lock, delegate to the api crate, and wrap results.
#[derive(Clone)]
struct AppState {
    /// The tournament snapshot store.
    torneos: Arc<Mutex<RepositorioTorneos>>,
    /// The category store.
    categorias: Arc<Mutex<RepositorioCategorias>>,
    /// The fallback organizer id.
    organizador_default: Arc<String>,
}

/// Success envelope wrapping every 2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuccessEnvelope<T> {
    /// Success indicator, always true here.
    success: bool,
    /// The operation's response payload.
    data: T,
    /// A fresh id correlating this response with server logs.
    request_id: String,
    /// When the response was produced (RFC 3339).
    timestamp: String,
}

/// Error envelope wrapping every non-2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorEnvelope {
    /// Success indicator, always false here.
    success: bool,
    /// The error details.
    error: ErrorBody,
}

/// Error details inside an [`ErrorEnvelope`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// The user-facing error message.
    message: String,
    /// The stable machine-readable code for the status class.
    code: String,
    /// A fresh id correlating this response with server logs.
    request_id: String,
    /// When the response was produced (RFC 3339).
    timestamp: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

/// Stable error code for a status, per the API contract.
const fn codigo_para(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        StatusCode::CONFLICT => "CONFLICT",
        StatusCode::UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
        _ => "INTERNAL_SERVER_ERROR",
    }
}

fn marca_de_tiempo() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorEnvelope> = Json(ErrorEnvelope {
            success: false,
            error: ErrorBody {
                message: self.message,
                code: String::from(codigo_para(self.status)),
                request_id: uuid::Uuid::new_v4().to_string(),
                timestamp: marca_de_tiempo(),
            },
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::DomainRuleViolation { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Wraps a payload in the success envelope with a fresh request id.
fn exito<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body: Json<SuccessEnvelope<T>> = Json(SuccessEnvelope {
        success: true,
        data,
        request_id: uuid::Uuid::new_v4().to_string(),
        timestamp: marca_de_tiempo(),
    });
    (status, body).into_response()
}

/// Handler for POST `/api/torneos`.
async fn handle_crear_torneo(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CrearTorneoRequest>,
) -> Result<Response, HttpError> {
    info!(nombre = ?req.nombre, categoria_id = ?req.categoria_id, "Handling crear_torneo request");

    let categorias = state.categorias.lock().await;
    let mut torneos = state.torneos.lock().await;
    let respuesta: CrearTorneoResponse =
        crear_torneo(&req, &mut torneos, &categorias, &state.organizador_default)?;
    drop(torneos);
    drop(categorias);

    info!(torneo_id = %respuesta.torneo_id, "Tournament created");
    Ok(exito(StatusCode::CREATED, respuesta))
}

/// Handler for GET `/api/torneos`.
async fn handle_listar_torneos(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListarTorneosQuery>,
) -> Result<Response, HttpError> {
    info!(user_id = ?query.user_id, estado = ?query.estado, "Handling listar_torneos request");

    let torneos = state.torneos.lock().await;
    let respuesta: ListarTorneosResponse =
        listar_torneos(&query, &torneos, &state.organizador_default)?;
    drop(torneos);

    Ok(exito(StatusCode::OK, respuesta))
}

/// Handler for GET `/api/torneos/{id}`.
async fn handle_obtener_torneo(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    info!(torneo_id = %id, "Handling obtener_torneo request");

    let torneos = state.torneos.lock().await;
    let respuesta: ObtenerTorneoResponse = obtener_torneo(&id, &torneos)?;
    drop(torneos);

    Ok(exito(StatusCode::OK, respuesta))
}

/// Handler for PUT `/api/torneos/{id}`.
async fn handle_actualizar_torneo(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ActualizarTorneoRequest>,
) -> Result<Response, HttpError> {
    info!(torneo_id = %id, "Handling actualizar_torneo request");

    let mut torneos = state.torneos.lock().await;
    let respuesta: ActualizarTorneoResponse = actualizar_torneo(&id, &req, &mut torneos)?;
    drop(torneos);

    info!(torneo_id = %id, version = respuesta.version, "Tournament updated");
    Ok(exito(StatusCode::OK, respuesta))
}

/// Handler for DELETE `/api/torneos/{id}`.
async fn handle_cancelar_torneo(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    req: Option<Json<CancelarTorneoRequest>>,
) -> Result<Response, HttpError> {
    info!(torneo_id = %id, "Handling cancelar_torneo request");

    let request: CancelarTorneoRequest = req.map(|Json(r)| r).unwrap_or_default();
    let mut torneos = state.torneos.lock().await;
    let respuesta: CancelarTorneoResponse = cancelar_torneo(&id, &request, &mut torneos)?;
    drop(torneos);

    info!(torneo_id = %id, estado = %respuesta.estado, "Tournament cancellation handled");
    Ok(exito(StatusCode::OK, respuesta))
}

/// Handler for GET `/api/categorias`.
async fn handle_listar_categorias(
    AxumState(state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    info!("Handling listar_categorias request");

    let categorias = state.categorias.lock().await;
    let respuesta: ListarCategoriasResponse = listar_categorias(&categorias);
    drop(categorias);

    Ok(exito(StatusCode::OK, respuesta))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/torneos",
            get(handle_listar_torneos).post(handle_crear_torneo),
        )
        .route(
            "/api/torneos/{id}",
            get(handle_obtener_torneo)
                .put(handle_actualizar_torneo)
                .delete(handle_cancelar_torneo),
        )
        .route("/api/categorias", get(handle_listar_categorias))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Torneos Server");

    let app_state: AppState = AppState {
        torneos: Arc::new(Mutex::new(RepositorioTorneos::new())),
        categorias: Arc::new(Mutex::new(RepositorioCategorias::con_datos_iniciales()?)),
        organizador_default: Arc::new(args.default_organizer),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
