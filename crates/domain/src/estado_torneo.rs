// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament lifecycle states and transition logic.
//!
//! Transitions are organizer-initiated only; the system never advances a
//! tournament based on time alone. The transition table is exhaustive and
//! self-transitions are never permitted.

use crate::error::ErrorDominio;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoTorneo {
    /// Just created; only configuration changes are allowed.
    Borrador,
    /// Registration window is open; participants may join.
    AbiertoRegistro,
    /// Registration closed, waiting for the bracket to start.
    RegistroCerrado,
    /// The tournament is being played.
    EnProgreso,
    /// Played to completion; a winner is recorded.
    Finalizado,
    /// Aborted by the organizer; keeps the cancellation reason.
    Cancelado,
}

impl EstadoTorneo {
    /// Returns the wire representation of the state.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Borrador => "BORRADOR",
            Self::AbiertoRegistro => "ABIERTO_REGISTRO",
            Self::RegistroCerrado => "REGISTRO_CERRADO",
            Self::EnProgreso => "EN_PROGRESO",
            Self::Finalizado => "FINALIZADO",
            Self::Cancelado => "CANCELADO",
        }
    }

    /// Parses a state from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the string is not a known state.
    fn parse_str(s: &str) -> Result<Self, ErrorDominio> {
        match s {
            "BORRADOR" => Ok(Self::Borrador),
            "ABIERTO_REGISTRO" => Ok(Self::AbiertoRegistro),
            "REGISTRO_CERRADO" => Ok(Self::RegistroCerrado),
            "EN_PROGRESO" => Ok(Self::EnProgreso),
            "FINALIZADO" => Ok(Self::Finalizado),
            "CANCELADO" => Ok(Self::Cancelado),
            _ => Err(ErrorDominio::new(format!(
                "Estado de torneo desconocido: {s}"
            ))),
        }
    }

    /// Returns true if this state is terminal (no transition can ever
    /// leave it).
    #[must_use]
    pub const fn es_terminal(&self) -> bool {
        matches!(self, Self::Finalizado | Self::Cancelado)
    }

    /// Reports whether the lifecycle allows moving from this state to
    /// `destino`. Self-transitions are never allowed.
    #[must_use]
    pub const fn puede_transicionar_a(&self, destino: Self) -> bool {
        matches!(
            (self, destino),
            (Self::Borrador, Self::AbiertoRegistro | Self::Cancelado)
                | (
                    Self::AbiertoRegistro,
                    Self::RegistroCerrado | Self::EnProgreso | Self::Cancelado
                )
                | (Self::RegistroCerrado, Self::EnProgreso | Self::Cancelado)
                | (Self::EnProgreso, Self::Finalizado | Self::Cancelado)
        )
    }

    /// Validates a transition from this state to `destino`.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` naming both states if the transition is
    /// not permitted by the lifecycle table.
    pub fn validar_transicion(&self, destino: Self) -> Result<(), ErrorDominio> {
        if self.puede_transicionar_a(destino) {
            Ok(())
        } else {
            Err(ErrorDominio::new(format!(
                "No se puede transicionar del estado {} al estado {}",
                self.as_str(),
                destino.as_str()
            )))
        }
    }
}

impl std::fmt::Display for EstadoTorneo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EstadoTorneo {
    type Err = ErrorDominio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
