// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use time::Date;
use torneos_domain::{EstadoTorneo, TorneoSnapshot};
use tracing::{debug, warn};

use crate::error::PersistenceError;

/// Filters applied when listing a user's tournaments.
///
/// Date bounds are date-granular and inclusive; a tournament created at
/// any time during `fecha_hasta` still matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltrosListado {
    /// Keep only tournaments in this lifecycle state.
    pub estado: Option<EstadoTorneo>,
    /// Keep only tournaments created on or after this date.
    pub fecha_desde: Option<Date>,
    /// Keep only tournaments created on or before this date.
    pub fecha_hasta: Option<Date>,
    /// Whether cancelled tournaments appear in the listing.
    pub incluir_cancelados: bool,
}

impl Default for FiltrosListado {
    fn default() -> Self {
        Self {
            estado: None,
            fecha_desde: None,
            fecha_hasta: None,
            incluir_cancelados: true,
        }
    }
}

impl FiltrosListado {
    fn acepta(&self, snapshot: &TorneoSnapshot) -> bool {
        if let Some(estado) = self.estado {
            if snapshot.estado != estado {
                return false;
            }
        } else if !self.incluir_cancelados && snapshot.estado == EstadoTorneo::Cancelado {
            // An explicit estado filter overrides the exclusion: asking
            // for CANCELADO means the caller wants them.
            return false;
        }

        let fecha = snapshot.fecha_creacion.date();
        if self.fecha_desde.is_some_and(|desde| fecha < desde) {
            return false;
        }
        if self.fecha_hasta.is_some_and(|hasta| fecha > hasta) {
            return false;
        }
        true
    }
}

/// In-memory tournament store keyed by tournament id.
///
/// Holds snapshots, never live aggregates. Writes are guarded by an
/// optimistic version check.
#[derive(Debug, Default)]
pub struct RepositorioTorneos {
    registros: HashMap<String, TorneoSnapshot>,
}

impl RepositorioTorneos {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a tournament snapshot.
    ///
    /// A new id inserts at any version. An existing record is replaced
    /// only when the incoming snapshot's version is strictly greater
    /// than the stored one; a stale write is rejected so a concurrent
    /// writer cannot silently lose an update.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::VersionConflict` for a stale write.
    pub fn guardar(&mut self, snapshot: TorneoSnapshot) -> Result<(), PersistenceError> {
        if let Some(existente) = self.registros.get(&snapshot.id) {
            if snapshot.version <= existente.version {
                warn!(
                    torneo_id = %snapshot.id,
                    version_almacenada = existente.version,
                    version_propuesta = snapshot.version,
                    "Rejecting stale tournament write"
                );
                return Err(PersistenceError::VersionConflict {
                    torneo_id: snapshot.id.clone(),
                    version_almacenada: existente.version,
                    version_propuesta: snapshot.version,
                });
            }
        }

        debug!(torneo_id = %snapshot.id, version = snapshot.version, "Saving tournament snapshot");
        self.registros.insert(snapshot.id.clone(), snapshot);
        Ok(())
    }

    /// Looks up a tournament snapshot by id.
    #[must_use]
    pub fn obtener_por_id(&self, id: &str) -> Option<TorneoSnapshot> {
        self.registros.get(id).cloned()
    }

    /// Lists the tournaments organized by the given user, filtered and
    /// sorted by creation date, newest first.
    #[must_use]
    pub fn listar_por_organizador(
        &self,
        organizador_id: &str,
        filtros: &FiltrosListado,
    ) -> Vec<TorneoSnapshot> {
        let mut resultado: Vec<TorneoSnapshot> = self
            .registros
            .values()
            .filter(|s| s.organizador_id == organizador_id && filtros.acepta(s))
            .cloned()
            .collect();
        resultado.sort_by(|a, b| b.fecha_creacion.cmp(&a.fecha_creacion));
        resultado
    }

    /// Returns the number of stored tournaments.
    #[must_use]
    pub fn contar(&self) -> usize {
        self.registros.len()
    }

    /// Removes every stored tournament.
    pub fn limpiar(&mut self) {
        self.registros.clear();
    }
}
