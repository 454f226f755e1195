// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `Torneo` aggregate root.
//!
//! All tournament state lives behind this type and changes only through
//! its methods. Every mutator validates completely before touching any
//! field, so a failed call leaves the aggregate exactly as it was, and
//! every successful mutation bumps `version` exactly once.

use time::OffsetDateTime;

use crate::categoria::Categoria;
use crate::error::ErrorDominio;
use crate::estado_torneo::EstadoTorneo;
use crate::evento::EventoTorneo;
use crate::ids::{TorneoId, UsuarioId};
use crate::nombre_torneo::NombreTorneo;
use crate::participante::{EstadoParticipante, Participante};
use serde::{Deserialize, Serialize};

/// A ticket sales stage configured for a tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct EtapaVenta {
    nombre: String,
    fecha_inicio: OffsetDateTime,
    fecha_fin: OffsetDateTime,
    precio: f64,
}

impl EtapaVenta {
    /// Returns the stage name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Returns the stage start.
    #[must_use]
    pub const fn fecha_inicio(&self) -> OffsetDateTime {
        self.fecha_inicio
    }

    /// Returns the stage end.
    #[must_use]
    pub const fn fecha_fin(&self) -> OffsetDateTime {
        self.fecha_fin
    }

    /// Returns the ticket price for this stage.
    #[must_use]
    pub const fn precio(&self) -> f64 {
        self.precio
    }
}

/// Participation counters grouped by registration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstadisticasTorneo {
    pub estado: EstadoTorneo,
    pub participantes_totales: u32,
    pub participantes_registrados: u32,
    pub participantes_confirmados: u32,
    pub participantes_descalificados: u32,
    pub limite_participantes: Option<u32>,
    pub sub_administradores: u32,
    pub etapas_venta: u32,
}

/// Persisted projection of a tournament.
///
/// The participant roster itself is not persisted; only the counter
/// survives rehydration. Category data is captured here so a snapshot can
/// be restored without consulting the category store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorneoSnapshot {
    pub id: String,
    pub nombre: String,
    pub organizador_id: String,
    pub categoria_id: String,
    pub categoria_descripcion: String,
    pub categoria_alias: String,
    pub estado: EstadoTorneo,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    pub limite_participantes: Option<u32>,
    pub participantes_actuales: u32,
    pub version: u64,
    pub ganador_id: Option<String>,
    pub razon_cancelacion: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub fecha_cancelacion: Option<OffsetDateTime>,
}

/// Tournament aggregate root.
#[derive(Debug, Clone)]
pub struct Torneo {
    id: TorneoId,
    nombre: NombreTorneo,
    categoria: Categoria,
    organizador_id: UsuarioId,
    estado: EstadoTorneo,
    fecha_creacion: OffsetDateTime,
    limite_participantes: Option<u32>,
    participantes: Vec<Participante>,
    participantes_actuales: u32,
    sub_administradores: Vec<UsuarioId>,
    etapas_venta: Vec<EtapaVenta>,
    ganador_id: Option<UsuarioId>,
    razon_cancelacion: Option<String>,
    fecha_cancelacion: Option<OffsetDateTime>,
    version: u64,
    eventos_no_publicados: Vec<EventoTorneo>,
}

impl Torneo {
    /// Creates a tournament in the `BORRADOR` state, version 1, with an
    /// empty roster and no participant limit.
    ///
    /// # Arguments
    ///
    /// * `id` - Tournament identifier
    /// * `nombre` - Validated tournament name
    /// * `categoria` - Category the tournament runs in; must be active
    /// * `organizador_id` - The organizing user
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the category is inactive.
    pub fn new(
        id: TorneoId,
        nombre: NombreTorneo,
        categoria: Categoria,
        organizador_id: UsuarioId,
    ) -> Result<Self, ErrorDominio> {
        if !categoria.puede_usarse_en_torneo() {
            return Err(ErrorDominio::new(String::from(
                "No se puede crear torneo con categoría inactiva",
            )));
        }

        let evento = EventoTorneo::TorneoCreado {
            torneo_id: String::from(id.valor()),
        };

        Ok(Self {
            id,
            nombre,
            categoria,
            organizador_id,
            estado: EstadoTorneo::Borrador,
            fecha_creacion: OffsetDateTime::now_utc(),
            limite_participantes: None,
            participantes: Vec::new(),
            participantes_actuales: 0,
            sub_administradores: Vec::new(),
            etapas_venta: Vec::new(),
            ganador_id: None,
            razon_cancelacion: None,
            fecha_cancelacion: None,
            version: 1,
            eventos_no_publicados: vec![evento],
        })
    }

    /// Rehydrates a tournament from a persisted snapshot.
    ///
    /// Construction is re-run (re-validating ids, name, and category
    /// data), then the mutable fields are overwritten from the snapshot.
    /// The category is rebuilt from the snapshot's captured data, so a
    /// category deactivated after creation does not invalidate an
    /// existing tournament. Rehydration emits no events.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if any snapshot field no longer passes
    /// its validation rules.
    pub fn restaurar(snapshot: TorneoSnapshot) -> Result<Self, ErrorDominio> {
        let id = TorneoId::new(&snapshot.id)?;
        let nombre = NombreTorneo::new(&snapshot.nombre)?;
        let organizador_id = UsuarioId::new(&snapshot.organizador_id)?;
        let categoria = Categoria::new(
            &snapshot.categoria_id,
            &snapshot.categoria_descripcion,
            &snapshot.categoria_alias,
        )?;

        let mut torneo = Self::new(id, nombre, categoria, organizador_id)?;
        torneo.estado = snapshot.estado;
        torneo.fecha_creacion = snapshot.fecha_creacion;
        torneo.limite_participantes = snapshot.limite_participantes;
        torneo.participantes_actuales = snapshot.participantes_actuales;
        torneo.version = snapshot.version;
        torneo.ganador_id = snapshot
            .ganador_id
            .as_deref()
            .map(UsuarioId::new)
            .transpose()?;
        torneo.razon_cancelacion = snapshot.razon_cancelacion;
        torneo.fecha_cancelacion = snapshot.fecha_cancelacion;
        torneo.eventos_no_publicados.clear();
        Ok(torneo)
    }

    /// Produces the persisted projection of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TorneoSnapshot {
        TorneoSnapshot {
            id: String::from(self.id.valor()),
            nombre: String::from(self.nombre.valor()),
            organizador_id: String::from(self.organizador_id.valor()),
            categoria_id: String::from(self.categoria.id()),
            categoria_descripcion: String::from(self.categoria.descripcion()),
            categoria_alias: String::from(self.categoria.alias()),
            estado: self.estado,
            fecha_creacion: self.fecha_creacion,
            limite_participantes: self.limite_participantes,
            participantes_actuales: self.participantes_actuales,
            version: self.version,
            ganador_id: self.ganador_id.as_ref().map(|g| String::from(g.valor())),
            razon_cancelacion: self.razon_cancelacion.clone(),
            fecha_cancelacion: self.fecha_cancelacion,
        }
    }

    /// Reports whether configuration changes (name, limit, sales stages)
    /// are currently allowed. Only `BORRADOR` tournaments are
    /// configurable.
    #[must_use]
    pub const fn puede_configurar(&self) -> bool {
        matches!(self.estado, EstadoTorneo::Borrador)
    }

    /// Reports whether a new participant would be accepted right now.
    #[must_use]
    pub fn puede_aceptar_participantes(&self) -> bool {
        self.estado == EstadoTorneo::AbiertoRegistro
            && self
                .limite_participantes
                .is_none_or(|limite| self.participantes_actuales < limite)
    }

    /// Sets the participant limit.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament is no longer
    /// configurable or the limit falls outside the 2-1000 range.
    pub fn actualizar_limite_participantes(&mut self, limite: u32) -> Result<(), ErrorDominio> {
        if !self.puede_configurar() {
            return Err(ErrorDominio::new(format!(
                "No se puede modificar torneo en estado {}",
                self.estado
            )));
        }
        if limite < 2 {
            return Err(ErrorDominio::new(String::from(
                "El límite debe ser al menos 2 participantes",
            )));
        }
        if limite > 1000 {
            return Err(ErrorDominio::new(String::from(
                "El límite máximo es 1000 participantes",
            )));
        }

        self.limite_participantes = Some(limite);
        self.version += 1;
        Ok(())
    }

    /// Renames the tournament.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament is no longer
    /// configurable.
    pub fn actualizar_nombre(&mut self, nombre: NombreTorneo) -> Result<(), ErrorDominio> {
        if !self.puede_configurar() {
            return Err(ErrorDominio::new(format!(
                "No se puede modificar el nombre del torneo en estado {}",
                self.estado
            )));
        }

        self.nombre = nombre;
        self.version += 1;
        Ok(())
    }

    /// Opens the registration window.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the lifecycle table forbids the move.
    pub fn abrir_para_registro(&mut self) -> Result<(), ErrorDominio> {
        self.estado
            .validar_transicion(EstadoTorneo::AbiertoRegistro)?;

        self.estado = EstadoTorneo::AbiertoRegistro;
        self.version += 1;
        self.eventos_no_publicados.push(EventoTorneo::RegistroAbierto {
            torneo_id: String::from(self.id.valor()),
        });
        Ok(())
    }

    /// Closes the registration window.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the lifecycle table forbids the move.
    pub fn cerrar_registro(&mut self) -> Result<(), ErrorDominio> {
        self.estado
            .validar_transicion(EstadoTorneo::RegistroCerrado)?;

        self.estado = EstadoTorneo::RegistroCerrado;
        self.version += 1;
        self.eventos_no_publicados.push(EventoTorneo::RegistroCerrado {
            torneo_id: String::from(self.id.valor()),
        });
        Ok(())
    }

    /// Starts the tournament.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the lifecycle table forbids the move
    /// or fewer than two participants are registered.
    pub fn iniciar_torneo(&mut self) -> Result<(), ErrorDominio> {
        self.estado.validar_transicion(EstadoTorneo::EnProgreso)?;
        if self.participantes_actuales < 2 {
            return Err(ErrorDominio::new(String::from(
                "No se puede iniciar el torneo con menos de 2 participantes",
            )));
        }

        self.estado = EstadoTorneo::EnProgreso;
        self.version += 1;
        self.eventos_no_publicados.push(EventoTorneo::TorneoIniciado {
            torneo_id: String::from(self.id.valor()),
            cantidad_participantes: self.participantes_actuales,
        });
        Ok(())
    }

    /// Finishes the tournament and records the winner.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the lifecycle table forbids the move
    /// or the winner is not an active roster member.
    pub fn finalizar_torneo(&mut self, ganador_id: &UsuarioId) -> Result<(), ErrorDominio> {
        self.estado.validar_transicion(EstadoTorneo::Finalizado)?;

        let ganador_valido = self
            .participantes
            .iter()
            .any(|p| p.usuario_id() == ganador_id && p.esta_activo());
        if !ganador_valido {
            return Err(ErrorDominio::new(String::from(
                "El ganador debe ser un participante activo del torneo",
            )));
        }

        self.estado = EstadoTorneo::Finalizado;
        self.ganador_id = Some(ganador_id.clone());
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::TorneoFinalizado {
                torneo_id: String::from(self.id.valor()),
                ganador_id: String::from(ganador_id.valor()),
            });
        Ok(())
    }

    /// Cancels the tournament.
    ///
    /// Cancelling an already-cancelled tournament succeeds without
    /// changing anything: no new reason, no version bump, no event. When
    /// no reason is given (or it is blank) the default
    /// `"Cancelado por organizador"` is recorded.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament already finished.
    pub fn cancelar(&mut self, razon: Option<String>) -> Result<(), ErrorDominio> {
        if self.estado == EstadoTorneo::Cancelado {
            return Ok(());
        }
        if self.estado == EstadoTorneo::Finalizado {
            return Err(ErrorDominio::new(String::from(
                "No se puede cancelar un torneo finalizado",
            )));
        }
        self.estado.validar_transicion(EstadoTorneo::Cancelado)?;

        let razon = razon
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| String::from("Cancelado por organizador"));

        self.estado = EstadoTorneo::Cancelado;
        self.razon_cancelacion = Some(razon.clone());
        self.fecha_cancelacion = Some(OffsetDateTime::now_utc());
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::TorneoCancelado {
                torneo_id: String::from(self.id.valor()),
                razon,
            });
        Ok(())
    }

    /// Registers a participant.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if registration is not open, the user is
    /// already registered, or the tournament is full.
    pub fn agregar_participante(&mut self, participante: Participante) -> Result<(), ErrorDominio> {
        if self.estado != EstadoTorneo::AbiertoRegistro {
            return Err(ErrorDominio::new(format!(
                "No se pueden registrar participantes en estado {}",
                self.estado
            )));
        }
        if self.tiene_participante(participante.usuario_id()) {
            return Err(ErrorDominio::new(String::from(
                "El usuario ya está registrado en el torneo",
            )));
        }
        if self
            .limite_participantes
            .is_some_and(|limite| self.participantes_actuales >= limite)
        {
            return Err(ErrorDominio::new(String::from(
                "El torneo ha alcanzado el límite de participantes",
            )));
        }

        let usuario_id = String::from(participante.usuario_id().valor());
        self.participantes.push(participante);
        self.participantes_actuales += 1;
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::ParticipanteRegistrado {
                torneo_id: String::from(self.id.valor()),
                usuario_id,
            });
        Ok(())
    }

    /// Removes a participant from the roster (voluntary cancellation or
    /// organizer removal before the bracket starts).
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament already started (or
    /// ended) or the participant is not on the roster.
    pub fn remover_participante(
        &mut self,
        participante_id: &str,
        razon: &str,
    ) -> Result<(), ErrorDominio> {
        if !matches!(
            self.estado,
            EstadoTorneo::AbiertoRegistro | EstadoTorneo::RegistroCerrado
        ) {
            return Err(ErrorDominio::new(format!(
                "No se pueden remover participantes en estado {}",
                self.estado
            )));
        }

        let posicion = self
            .participantes
            .iter()
            .position(|p| p.id() == participante_id)
            .ok_or_else(|| {
                ErrorDominio::new(String::from("Participante no encontrado en el torneo"))
            })?;

        let participante = self.participantes.remove(posicion);
        self.participantes_actuales -= 1;
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::ParticipanteCancelado {
                torneo_id: String::from(self.id.valor()),
                usuario_id: String::from(participante.usuario_id().valor()),
                razon: String::from(razon),
            });
        Ok(())
    }

    /// Confirms a registered participant's attendance.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the user is not on the roster or the
    /// participant lifecycle forbids confirmation.
    pub fn confirmar_participante(&mut self, usuario_id: &UsuarioId) -> Result<(), ErrorDominio> {
        let torneo_id = String::from(self.id.valor());
        let participante = self.buscar_participante_mut(usuario_id)?;
        participante.confirmar()?;

        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::ParticipanteConfirmado {
                torneo_id,
                usuario_id: String::from(usuario_id.valor()),
            });
        Ok(())
    }

    /// Disqualifies a participant. The roster slot is kept; the
    /// participant just stops counting as active.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the user is not on the roster or is
    /// already in a terminal state.
    pub fn descalificar_participante(
        &mut self,
        usuario_id: &UsuarioId,
        razon: &str,
    ) -> Result<(), ErrorDominio> {
        let torneo_id = String::from(self.id.valor());
        let participante = self.buscar_participante_mut(usuario_id)?;
        participante.descalificar()?;

        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::ParticipanteDescalificado {
                torneo_id,
                usuario_id: String::from(usuario_id.valor()),
                razon: String::from(razon),
            });
        Ok(())
    }

    /// Grants a user sub-administrator rights over the tournament.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament is in a terminal state
    /// or the user already has the role.
    pub fn agregar_sub_administrador(&mut self, usuario_id: UsuarioId) -> Result<(), ErrorDominio> {
        if self.estado.es_terminal() {
            return Err(ErrorDominio::new(format!(
                "No se puede modificar torneo en estado {}",
                self.estado
            )));
        }
        if self.sub_administradores.contains(&usuario_id) {
            return Err(ErrorDominio::new(String::from(
                "El usuario ya es sub-administrador del torneo",
            )));
        }

        let valor = String::from(usuario_id.valor());
        self.sub_administradores.push(usuario_id);
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::SubAdministradorAgregado {
                torneo_id: String::from(self.id.valor()),
                usuario_id: valor,
            });
        Ok(())
    }

    /// Adds a ticket sales stage.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the tournament is no longer
    /// configurable, the name is empty, the dates are not ordered, or the
    /// price is negative.
    pub fn crear_etapa_venta(
        &mut self,
        nombre: &str,
        fecha_inicio: OffsetDateTime,
        fecha_fin: OffsetDateTime,
        precio: f64,
    ) -> Result<(), ErrorDominio> {
        if !self.puede_configurar() {
            return Err(ErrorDominio::new(format!(
                "No se puede modificar torneo en estado {}",
                self.estado
            )));
        }
        if nombre.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "Nombre de la etapa de venta es requerido",
            )));
        }
        if fecha_fin <= fecha_inicio {
            return Err(ErrorDominio::new(String::from(
                "La fecha de fin debe ser posterior a la fecha de inicio",
            )));
        }
        if precio < 0.0 {
            return Err(ErrorDominio::new(String::from(
                "El precio no puede ser negativo",
            )));
        }

        let nombre = String::from(nombre.trim());
        self.etapas_venta.push(EtapaVenta {
            nombre: nombre.clone(),
            fecha_inicio,
            fecha_fin,
            precio,
        });
        self.version += 1;
        self.eventos_no_publicados
            .push(EventoTorneo::EtapaVentaCreada {
                torneo_id: String::from(self.id.valor()),
                nombre,
            });
        Ok(())
    }

    /// Returns the participation counters for this tournament.
    #[must_use]
    pub fn estadisticas(&self) -> EstadisticasTorneo {
        let mut registrados: u32 = 0;
        let mut confirmados: u32 = 0;
        let mut descalificados: u32 = 0;
        for participante in &self.participantes {
            match participante.estado() {
                EstadoParticipante::Registrado => registrados += 1,
                EstadoParticipante::Confirmado => confirmados += 1,
                EstadoParticipante::Descalificado => descalificados += 1,
                EstadoParticipante::Cancelado => {}
            }
        }

        EstadisticasTorneo {
            estado: self.estado,
            participantes_totales: self.participantes_actuales,
            participantes_registrados: registrados,
            participantes_confirmados: confirmados,
            participantes_descalificados: descalificados,
            limite_participantes: self.limite_participantes,
            sub_administradores: u32::try_from(self.sub_administradores.len()).unwrap_or(u32::MAX),
            etapas_venta: u32::try_from(self.etapas_venta.len()).unwrap_or(u32::MAX),
        }
    }

    /// Reports whether the user is on the roster.
    #[must_use]
    pub fn tiene_participante(&self, usuario_id: &UsuarioId) -> bool {
        self.participantes
            .iter()
            .any(|p| p.usuario_id() == usuario_id)
    }

    /// Looks up a roster member by user.
    #[must_use]
    pub fn buscar_participante(&self, usuario_id: &UsuarioId) -> Option<&Participante> {
        self.participantes
            .iter()
            .find(|p| p.usuario_id() == usuario_id)
    }

    fn buscar_participante_mut(
        &mut self,
        usuario_id: &UsuarioId,
    ) -> Result<&mut Participante, ErrorDominio> {
        self.participantes
            .iter_mut()
            .find(|p| p.usuario_id() == usuario_id)
            .ok_or_else(|| {
                ErrorDominio::new(String::from("Participante no encontrado en el torneo"))
            })
    }

    /// Returns the buffered events not yet handed to a publisher.
    #[must_use]
    pub fn eventos_no_publicados(&self) -> &[EventoTorneo] {
        &self.eventos_no_publicados
    }

    /// Drains the buffered events, marking them published.
    #[must_use]
    pub fn tomar_eventos_no_publicados(&mut self) -> Vec<EventoTorneo> {
        std::mem::take(&mut self.eventos_no_publicados)
    }

    /// Returns the tournament id.
    #[must_use]
    pub const fn id(&self) -> &TorneoId {
        &self.id
    }

    /// Returns the tournament name.
    #[must_use]
    pub const fn nombre(&self) -> &NombreTorneo {
        &self.nombre
    }

    /// Returns the category captured at creation.
    #[must_use]
    pub const fn categoria(&self) -> &Categoria {
        &self.categoria
    }

    /// Returns the organizing user.
    #[must_use]
    pub const fn organizador_id(&self) -> &UsuarioId {
        &self.organizador_id
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn estado(&self) -> EstadoTorneo {
        self.estado
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn fecha_creacion(&self) -> OffsetDateTime {
        self.fecha_creacion
    }

    /// Returns the participant limit, if one was set.
    #[must_use]
    pub const fn limite_participantes(&self) -> Option<u32> {
        self.limite_participantes
    }

    /// Returns the current participant count.
    #[must_use]
    pub const fn participantes_actuales(&self) -> u32 {
        self.participantes_actuales
    }

    /// Returns the roster.
    #[must_use]
    pub fn participantes(&self) -> &[Participante] {
        &self.participantes
    }

    /// Returns the sub-administrators.
    #[must_use]
    pub fn sub_administradores(&self) -> &[UsuarioId] {
        &self.sub_administradores
    }

    /// Returns the configured sales stages.
    #[must_use]
    pub fn etapas_venta(&self) -> &[EtapaVenta] {
        &self.etapas_venta
    }

    /// Returns the winner, once the tournament finished.
    #[must_use]
    pub const fn ganador_id(&self) -> Option<&UsuarioId> {
        self.ganador_id.as_ref()
    }

    /// Returns the cancellation reason, if cancelled.
    #[must_use]
    pub fn razon_cancelacion(&self) -> Option<&str> {
        self.razon_cancelacion.as_deref()
    }

    /// Returns the cancellation timestamp, if cancelled.
    #[must_use]
    pub const fn fecha_cancelacion(&self) -> Option<OffsetDateTime> {
        self.fecha_cancelacion
    }

    /// Returns the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}
