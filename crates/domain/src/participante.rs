// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participant registration states and the participant entity.

use time::OffsetDateTime;

use crate::error::ErrorDominio;
use crate::ids::UsuarioId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Registration states of a tournament participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoParticipante {
    /// Signed up, attendance not yet confirmed.
    Registrado,
    /// Confirmed attendance.
    Confirmado,
    /// Withdrew or was removed before the bracket started.
    Cancelado,
    /// Removed by the organizer for rule violations.
    Descalificado,
}

impl EstadoParticipante {
    /// Returns the wire representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registrado => "REGISTRADO",
            Self::Confirmado => "CONFIRMADO",
            Self::Cancelado => "CANCELADO",
            Self::Descalificado => "DESCALIFICADO",
        }
    }

    fn parse_str(s: &str) -> Result<Self, ErrorDominio> {
        match s {
            "REGISTRADO" => Ok(Self::Registrado),
            "CONFIRMADO" => Ok(Self::Confirmado),
            "CANCELADO" => Ok(Self::Cancelado),
            "DESCALIFICADO" => Ok(Self::Descalificado),
            _ => Err(ErrorDominio::new(format!(
                "Estado de participante desconocido: {s}"
            ))),
        }
    }

    /// Returns true if this state is terminal.
    #[must_use]
    pub const fn es_terminal(&self) -> bool {
        matches!(self, Self::Cancelado | Self::Descalificado)
    }

    /// Reports whether the participant lifecycle allows moving from this
    /// state to `destino`.
    #[must_use]
    pub const fn puede_transicionar_a(&self, destino: Self) -> bool {
        matches!(
            (self, destino),
            (
                Self::Registrado,
                Self::Confirmado | Self::Cancelado | Self::Descalificado
            ) | (Self::Confirmado, Self::Cancelado | Self::Descalificado)
        )
    }

    /// Validates a transition from this state to `destino`.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` naming both states if the transition is
    /// not permitted.
    pub fn validar_transicion(&self, destino: Self) -> Result<(), ErrorDominio> {
        if self.puede_transicionar_a(destino) {
            Ok(())
        } else {
            Err(ErrorDominio::new(format!(
                "No se puede cambiar el estado del participante de {} a {}",
                self.as_str(),
                destino.as_str()
            )))
        }
    }
}

impl std::fmt::Display for EstadoParticipante {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EstadoParticipante {
    type Err = ErrorDominio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// A user registered in a tournament.
///
/// Participants are owned by the `Torneo` aggregate; their state changes
/// only through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participante {
    id: String,
    usuario_id: UsuarioId,
    estado: EstadoParticipante,
    fecha_registro: OffsetDateTime,
}

impl Participante {
    /// Creates a participant in the `REGISTRADO` state.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the participant id is empty.
    pub fn new(id: &str, usuario_id: UsuarioId) -> Result<Self, ErrorDominio> {
        if id.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "ID de participante es requerido",
            )));
        }

        Ok(Self {
            id: String::from(id.trim()),
            usuario_id,
            estado: EstadoParticipante::Registrado,
            fecha_registro: OffsetDateTime::now_utc(),
        })
    }

    /// Returns the participant identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the user behind this registration.
    #[must_use]
    pub const fn usuario_id(&self) -> &UsuarioId {
        &self.usuario_id
    }

    /// Returns the current registration state.
    #[must_use]
    pub const fn estado(&self) -> EstadoParticipante {
        self.estado
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn fecha_registro(&self) -> OffsetDateTime {
        self.fecha_registro
    }

    /// Reports whether the participant still counts as active (not in a
    /// terminal state).
    #[must_use]
    pub const fn esta_activo(&self) -> bool {
        !self.estado.es_terminal()
    }

    /// Confirms attendance.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the participant is not in a state
    /// that can be confirmed.
    pub fn confirmar(&mut self) -> Result<(), ErrorDominio> {
        self.estado
            .validar_transicion(EstadoParticipante::Confirmado)?;
        self.estado = EstadoParticipante::Confirmado;
        Ok(())
    }

    /// Marks the registration as cancelled.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the participant is already in a
    /// terminal state.
    pub fn cancelar(&mut self) -> Result<(), ErrorDominio> {
        self.estado
            .validar_transicion(EstadoParticipante::Cancelado)?;
        self.estado = EstadoParticipante::Cancelado;
        Ok(())
    }

    /// Disqualifies the participant.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the participant is already in a
    /// terminal state.
    pub fn descalificar(&mut self) -> Result<(), ErrorDominio> {
        self.estado
            .validar_transicion(EstadoParticipante::Descalificado)?;
        self.estado = EstadoParticipante::Descalificado;
        Ok(())
    }
}
