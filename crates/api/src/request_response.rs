// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Everything serializes camelCase on the wire; timestamps are
//! RFC 3339.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use torneos_domain::EstadoTorneo;

/// API request to create a tournament.
///
/// `nombre` and `categoria_id` are required; they are optional here so
/// their absence is reported as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearTorneoRequest {
    /// The tournament display name.
    pub nombre: Option<String>,
    /// The category the tournament runs in.
    pub categoria_id: Option<String>,
    /// Optional participant limit, applied through the aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limite_participantes: Option<u32>,
    /// The organizing user; falls back to the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizador_id: Option<String>,
}

/// API response for a successful tournament creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearTorneoResponse {
    /// The generated tournament id.
    pub torneo_id: String,
    /// The normalized tournament name.
    pub nombre: String,
    /// The initial lifecycle state (always `BORRADOR`).
    pub estado: EstadoTorneo,
    /// The organizing user.
    pub organizador_id: String,
    /// When the tournament was created.
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
}

/// Category data embedded in a tournament projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaResumen {
    /// The category id.
    pub id: String,
    /// The category description.
    pub descripcion: String,
    /// The category alias.
    pub alias: String,
}

/// Full projection of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObtenerTorneoResponse {
    /// The tournament id.
    pub torneo_id: String,
    /// The tournament name.
    pub nombre: String,
    /// The category captured at creation.
    pub categoria: CategoriaResumen,
    /// The organizing user.
    pub organizador_id: String,
    /// The current lifecycle state.
    pub estado: EstadoTorneo,
    /// When the tournament was created.
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    /// The current participant count.
    pub participantes_actuales: u32,
    /// The participant limit, if one was set.
    pub limite_participantes: Option<u32>,
    /// The optimistic-concurrency version.
    pub version: u64,
    /// The winner, once the tournament finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ganador_id: Option<String>,
    /// The cancellation reason, if cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razon_cancelacion: Option<String>,
    /// When the tournament was cancelled, if it was.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub fecha_cancelacion: Option<OffsetDateTime>,
}

/// API request to update a configurable tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarTorneoRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    /// New participant limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limite_participantes: Option<u32>,
}

/// One field change applied by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CambioAplicado {
    /// The field that changed.
    pub campo: String,
    /// The value before the update.
    pub valor_anterior: String,
    /// The value after the update.
    pub valor_nuevo: String,
}

/// API response for a successful tournament update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarTorneoResponse {
    /// The tournament id.
    pub torneo_id: String,
    /// The changes that were applied, in request order.
    pub cambios_aplicados: Vec<CambioAplicado>,
    /// The version after the update.
    pub version: u64,
    /// When the update was processed.
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_actualizacion: OffsetDateTime,
}

/// API request to cancel a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelarTorneoRequest {
    /// Optional cancellation reason, 10-500 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razon: Option<String>,
}

/// API response for a cancellation, including the idempotent case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelarTorneoResponse {
    /// The tournament id.
    pub torneo_id: String,
    /// The state after the call (always `CANCELADO`).
    pub estado: EstadoTorneo,
    /// The state before the call.
    pub estado_anterior: EstadoTorneo,
    /// The recorded cancellation reason.
    pub razon_cancelacion: Option<String>,
    /// When the tournament was cancelled.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub fecha_cancelacion: Option<OffsetDateTime>,
    /// How many registered participants the cancellation affected.
    pub participantes_afectados: u32,
}

/// Query parameters for listing tournaments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListarTorneosQuery {
    /// The organizer to list for; falls back to the configured default.
    pub user_id: Option<String>,
    /// Filter by lifecycle state (wire name).
    pub estado: Option<String>,
    /// Filter by creation date, inclusive lower bound (`AAAA-MM-DD`).
    pub fecha_desde: Option<String>,
    /// Filter by creation date, inclusive upper bound (`AAAA-MM-DD`).
    pub fecha_hasta: Option<String>,
    /// Whether cancelled tournaments appear (default true).
    pub incluir_cancelados: Option<bool>,
    /// Page size, 1-100 (default 50).
    pub limite: Option<u32>,
    /// Offset into the sorted result set (default 0).
    pub offset: Option<u32>,
}

/// One tournament row in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorneoResumen {
    /// The tournament id.
    pub torneo_id: String,
    /// The tournament name.
    pub nombre: String,
    /// The current lifecycle state.
    pub estado: EstadoTorneo,
    /// The category id.
    pub categoria_id: String,
    /// When the tournament was created.
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    /// The current participant count.
    pub participantes_actuales: u32,
    /// The participant limit, if one was set.
    pub limite_participantes: Option<u32>,
}

/// The filters a listing was produced under, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosAplicados {
    /// The lifecycle state filter, if any.
    pub estado: Option<EstadoTorneo>,
    /// The inclusive lower creation-date bound, if any.
    pub fecha_desde: Option<String>,
    /// The inclusive upper creation-date bound, if any.
    pub fecha_hasta: Option<String>,
    /// Whether cancelled tournaments were included.
    pub incluir_cancelados: bool,
}

/// Pagination echo for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginacion {
    /// The page size used.
    pub limite: u32,
    /// The offset used.
    pub offset: u32,
    /// Whether more matches exist past this page.
    pub has_more: bool,
}

/// API response for a tournament listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListarTorneosResponse {
    /// The page of tournaments, newest first.
    pub torneos: Vec<TorneoResumen>,
    /// The number of matches before pagination.
    pub total: usize,
    /// The filters the listing was produced under.
    pub filtros: FiltrosAplicados,
    /// The pagination applied.
    pub paginacion: Paginacion,
}

/// One category row in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaItem {
    /// The category id.
    pub id: String,
    /// The category description.
    pub descripcion: String,
    /// The category alias.
    pub alias: String,
    /// Whether the category is active.
    pub esta_activa: bool,
}

/// API response for a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListarCategoriasResponse {
    /// The active categories, in insertion order.
    pub categorias: Vec<CategoriaItem>,
    /// The number of active categories.
    pub total: usize,
}
