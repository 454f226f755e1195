// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over the injected repositories.
//!
//! Each operation follows the same shape: validate the request at the
//! boundary, rehydrate the aggregate from its snapshot, mutate through
//! the aggregate so every domain rule applies, and persist the new
//! snapshot. A failed call never leaves a partial write behind.

use time::OffsetDateTime;
use torneos_domain::{
    CategoriaId, EstadoTorneo, NombreTorneo, Torneo, TorneoId, TorneoSnapshot, UsuarioId,
};
use torneos_persistence::{FiltrosListado, RepositorioCategorias, RepositorioTorneos};
use tracing::info;

use crate::error::ApiError;
use crate::request_response::{
    ActualizarTorneoRequest, ActualizarTorneoResponse, CambioAplicado, CancelarTorneoRequest,
    CancelarTorneoResponse, CategoriaItem, CategoriaResumen, CrearTorneoRequest,
    CrearTorneoResponse, FiltrosAplicados, ListarCategoriasResponse, ListarTorneosQuery,
    ListarTorneosResponse, ObtenerTorneoResponse, Paginacion, TorneoResumen,
};
use crate::validation::{
    ValidationError, campo_requerido, parsear_estado, parsear_fecha, validar_id_torneo,
    validar_limite, validar_razon,
};

fn torneo_no_encontrado() -> ApiError {
    ApiError::ResourceNotFound {
        resource: String::from("Torneo"),
        message: String::from("Torneo no encontrado"),
    }
}

/// Rehydrates an aggregate from a stored snapshot.
///
/// A snapshot that no longer passes domain validation is corrupt stored
/// state, not a caller mistake, so the failure maps to an internal error.
fn rehidratar(snapshot: TorneoSnapshot) -> Result<Torneo, ApiError> {
    Torneo::restaurar(snapshot).map_err(|e| ApiError::Internal {
        message: format!("Estado persistido inválido: {e}"),
    })
}

/// Creates a tournament.
///
/// Requires `nombre` and `categoria_id`; the organizer falls back to
/// `organizador_default` when the request does not name one. An optional
/// participant limit is applied through the aggregate so its rules hold.
///
/// # Errors
///
/// Returns an `ApiError` for missing fields, an unknown category, any
/// domain rule violation (inactive category, bad name, bad limit), or a
/// persistence failure.
pub fn crear_torneo(
    request: &CrearTorneoRequest,
    torneos: &mut RepositorioTorneos,
    categorias: &RepositorioCategorias,
    organizador_default: &str,
) -> Result<CrearTorneoResponse, ApiError> {
    let nombre_crudo = campo_requerido("nombre", request.nombre.as_ref())?;
    let categoria_cruda = campo_requerido("categoriaId", request.categoria_id.as_ref())?;

    let nombre = NombreTorneo::new(nombre_crudo)?;
    let categoria_id = CategoriaId::new(categoria_cruda)?;
    let organizador = request
        .organizador_id
        .as_deref()
        .unwrap_or(organizador_default);
    let organizador_id = UsuarioId::new(organizador)?;

    let categoria = categorias
        .obtener_por_id(categoria_id.valor())
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource: String::from("Categoría"),
            message: String::from("Categoría no encontrada"),
        })?;

    let id = TorneoId::nuevo();
    let mut torneo = Torneo::new(id, nombre, categoria, organizador_id)?;
    if let Some(limite) = request.limite_participantes {
        torneo.actualizar_limite_participantes(limite)?;
    }

    torneos.guardar(torneo.snapshot())?;
    info!(torneo_id = %torneo.id(), "Tournament created");

    Ok(CrearTorneoResponse {
        torneo_id: String::from(torneo.id().valor()),
        nombre: String::from(torneo.nombre().valor()),
        estado: torneo.estado(),
        organizador_id: String::from(torneo.organizador_id().valor()),
        fecha_creacion: torneo.fecha_creacion(),
    })
}

/// Fetches the full projection of a tournament.
///
/// # Errors
///
/// Returns an `ApiError` for a malformed path id or a missing record.
pub fn obtener_torneo(
    id: &str,
    torneos: &RepositorioTorneos,
) -> Result<ObtenerTorneoResponse, ApiError> {
    let id = validar_id_torneo("id", id)?;
    let snapshot = torneos
        .obtener_por_id(id.valor())
        .ok_or_else(torneo_no_encontrado)?;

    Ok(ObtenerTorneoResponse {
        torneo_id: snapshot.id,
        nombre: snapshot.nombre,
        categoria: CategoriaResumen {
            id: snapshot.categoria_id,
            descripcion: snapshot.categoria_descripcion,
            alias: snapshot.categoria_alias,
        },
        organizador_id: snapshot.organizador_id,
        estado: snapshot.estado,
        fecha_creacion: snapshot.fecha_creacion,
        participantes_actuales: snapshot.participantes_actuales,
        limite_participantes: snapshot.limite_participantes,
        version: snapshot.version,
        ganador_id: snapshot.ganador_id,
        razon_cancelacion: snapshot.razon_cancelacion,
        fecha_cancelacion: snapshot.fecha_cancelacion,
    })
}

/// Applies name and limit changes to a configurable tournament.
///
/// At least one change must be requested. Changes go through the
/// aggregate, so every gate (only `BORRADOR` tournaments are
/// configurable) applies.
///
/// # Errors
///
/// Returns an `ApiError` for a malformed id, an empty request, a missing
/// record, a domain gate rejection, or a version conflict on save.
pub fn actualizar_torneo(
    id: &str,
    request: &ActualizarTorneoRequest,
    torneos: &mut RepositorioTorneos,
) -> Result<ActualizarTorneoResponse, ApiError> {
    let id = validar_id_torneo("id", id)?;
    if request.nombre.is_none() && request.limite_participantes.is_none() {
        return Err(ValidationError::SinCamposParaActualizar.into());
    }

    let snapshot = torneos
        .obtener_por_id(id.valor())
        .ok_or_else(torneo_no_encontrado)?;
    let mut torneo = rehidratar(snapshot)?;

    let mut cambios: Vec<CambioAplicado> = Vec::new();

    if let Some(nombre_crudo) = &request.nombre {
        let anterior = String::from(torneo.nombre().valor());
        let nombre = NombreTorneo::new(nombre_crudo)?;
        let nuevo = String::from(nombre.valor());
        torneo.actualizar_nombre(nombre)?;
        cambios.push(CambioAplicado {
            campo: String::from("nombre"),
            valor_anterior: anterior,
            valor_nuevo: nuevo,
        });
    }

    if let Some(limite) = request.limite_participantes {
        let anterior = torneo
            .limite_participantes()
            .map_or_else(|| String::from("sin límite"), |n| n.to_string());
        torneo.actualizar_limite_participantes(limite)?;
        cambios.push(CambioAplicado {
            campo: String::from("limiteParticipantes"),
            valor_anterior: anterior,
            valor_nuevo: limite.to_string(),
        });
    }

    let version = torneo.version();
    torneos.guardar(torneo.snapshot())?;
    info!(torneo_id = %id, version, cambios = cambios.len(), "Tournament updated");

    Ok(ActualizarTorneoResponse {
        torneo_id: String::from(id.valor()),
        cambios_aplicados: cambios,
        version,
        fecha_actualizacion: OffsetDateTime::now_utc(),
    })
}

/// Cancels a tournament.
///
/// Cancelling an already-cancelled tournament is an idempotent success:
/// the stored record is returned untouched and nothing is written.
///
/// # Errors
///
/// Returns an `ApiError` for a malformed id, a reason outside the 10-500
/// character range, a missing record, or a finished tournament.
pub fn cancelar_torneo(
    id: &str,
    request: &CancelarTorneoRequest,
    torneos: &mut RepositorioTorneos,
) -> Result<CancelarTorneoResponse, ApiError> {
    let id = validar_id_torneo("id", id)?;
    validar_razon(request.razon.as_ref())?;

    let snapshot = torneos
        .obtener_por_id(id.valor())
        .ok_or_else(torneo_no_encontrado)?;

    if snapshot.estado == EstadoTorneo::Cancelado {
        info!(torneo_id = %id, "Tournament already cancelled; returning stored record");
        return Ok(CancelarTorneoResponse {
            torneo_id: snapshot.id,
            estado: snapshot.estado,
            estado_anterior: snapshot.estado,
            razon_cancelacion: snapshot.razon_cancelacion,
            fecha_cancelacion: snapshot.fecha_cancelacion,
            participantes_afectados: snapshot.participantes_actuales,
        });
    }

    let estado_anterior = snapshot.estado;
    let mut torneo = rehidratar(snapshot)?;
    torneo.cancelar(request.razon.clone())?;

    torneos.guardar(torneo.snapshot())?;
    info!(torneo_id = %id, "Tournament cancelled");

    Ok(CancelarTorneoResponse {
        torneo_id: String::from(id.valor()),
        estado: torneo.estado(),
        estado_anterior,
        razon_cancelacion: torneo.razon_cancelacion().map(String::from),
        fecha_cancelacion: torneo.fecha_cancelacion(),
        participantes_afectados: torneo.participantes_actuales(),
    })
}

/// Lists an organizer's tournaments, filtered, sorted newest first, and
/// paginated.
///
/// `total` counts every match before pagination so callers can page
/// through the whole set.
///
/// # Errors
///
/// Returns an `ApiError` for an unknown estado name, an unparseable
/// date, or an out-of-range page size.
pub fn listar_torneos(
    query: &ListarTorneosQuery,
    torneos: &RepositorioTorneos,
    organizador_default: &str,
) -> Result<ListarTorneosResponse, ApiError> {
    let estado = query.estado.as_deref().map(parsear_estado).transpose()?;
    let fecha_desde = query
        .fecha_desde
        .as_deref()
        .map(|v| parsear_fecha("fechaDesde", v))
        .transpose()?;
    let fecha_hasta = query
        .fecha_hasta
        .as_deref()
        .map(|v| parsear_fecha("fechaHasta", v))
        .transpose()?;
    let limite = validar_limite(query.limite)?;
    let offset = query.offset.unwrap_or(0);
    let incluir_cancelados = query.incluir_cancelados.unwrap_or(true);
    let organizador = query.user_id.as_deref().unwrap_or(organizador_default);

    let filtros = FiltrosListado {
        estado,
        fecha_desde,
        fecha_hasta,
        incluir_cancelados,
    };
    let coincidencias = torneos.listar_por_organizador(organizador, &filtros);
    let total = coincidencias.len();

    let pagina: Vec<TorneoResumen> = coincidencias
        .into_iter()
        .skip(offset as usize)
        .take(limite as usize)
        .map(|s| TorneoResumen {
            torneo_id: s.id,
            nombre: s.nombre,
            estado: s.estado,
            categoria_id: s.categoria_id,
            fecha_creacion: s.fecha_creacion,
            participantes_actuales: s.participantes_actuales,
            limite_participantes: s.limite_participantes,
        })
        .collect();

    let has_more = (offset as usize).saturating_add(pagina.len()) < total;

    Ok(ListarTorneosResponse {
        torneos: pagina,
        total,
        filtros: FiltrosAplicados {
            estado,
            fecha_desde: query.fecha_desde.clone(),
            fecha_hasta: query.fecha_hasta.clone(),
            incluir_cancelados,
        },
        paginacion: Paginacion {
            limite,
            offset,
            has_more,
        },
    })
}

/// Lists the active categories.
#[must_use]
pub fn listar_categorias(categorias: &RepositorioCategorias) -> ListarCategoriasResponse {
    let items: Vec<CategoriaItem> = categorias
        .listar_activas()
        .into_iter()
        .map(|c| CategoriaItem {
            id: String::from(c.id()),
            descripcion: String::from(c.descripcion()),
            alias: String::from(c.alias()),
            esta_activa: c.esta_activa(),
        })
        .collect();
    let total = items.len();

    ListarCategoriasResponse {
        categorias: items,
        total,
    }
}
