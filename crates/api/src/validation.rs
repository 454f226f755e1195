// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary validation of request shapes.
//!
//! These rules run before any domain rule: they reject requests that are
//! malformed regardless of business state (missing fields, bad UUIDs,
//! unparseable dates, out-of-range pagination). A request that passes
//! here can still be rejected by the domain.

use std::str::FromStr;
use time::Date;
use time::macros::format_description;
use torneos_domain::{EstadoTorneo, TorneoId};

/// The maximum page size a listing may request.
const LIMITE_MAXIMO: u32 = 100;
/// The page size used when the request does not name one.
const LIMITE_POR_DEFECTO: u32 = 50;

/// A malformed request shape, detected before any domain rule runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Campo '{campo}' es requerido")]
    CampoRequerido { campo: String },
    #[error("El parámetro '{campo}' debe ser un UUID v4 válido")]
    UuidInvalido { campo: String },
    #[error("El parámetro '{campo}' debe ser una fecha válida (AAAA-MM-DD)")]
    FechaInvalida { campo: String },
    #[error("El parámetro 'limite' debe estar entre 1 y {LIMITE_MAXIMO}")]
    LimiteFueraDeRango,
    #[error("Estado de torneo inválido: {valor}")]
    EstadoInvalido { valor: String },
    #[error("La razón debe tener entre 10 y 500 caracteres")]
    RazonInvalida,
    #[error("Debe proporcionar al menos un campo para actualizar")]
    SinCamposParaActualizar,
}

impl ValidationError {
    /// Returns the name of the offending request field.
    #[must_use]
    pub fn campo(&self) -> &str {
        match self {
            Self::CampoRequerido { campo }
            | Self::UuidInvalido { campo }
            | Self::FechaInvalida { campo } => campo,
            Self::LimiteFueraDeRango => "limite",
            Self::EstadoInvalido { .. } => "estado",
            Self::RazonInvalida => "razon",
            Self::SinCamposParaActualizar => "body",
        }
    }
}

/// Extracts a required field, rejecting absent or blank values.
pub fn campo_requerido<'a>(
    campo: &str,
    valor: Option<&'a String>,
) -> Result<&'a str, ValidationError> {
    valor
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ValidationError::CampoRequerido {
            campo: String::from(campo),
        })
}

/// Validates a path id against the canonical UUID form and wraps it.
pub fn validar_id_torneo(campo: &str, valor: &str) -> Result<TorneoId, ValidationError> {
    TorneoId::new(valor).map_err(|_| ValidationError::UuidInvalido {
        campo: String::from(campo),
    })
}

/// Parses an `AAAA-MM-DD` date parameter.
pub fn parsear_fecha(campo: &str, valor: &str) -> Result<Date, ValidationError> {
    let formato = format_description!("[year]-[month]-[day]");
    Date::parse(valor, &formato).map_err(|_| ValidationError::FechaInvalida {
        campo: String::from(campo),
    })
}

/// Parses an estado query parameter against the wire names.
pub fn parsear_estado(valor: &str) -> Result<EstadoTorneo, ValidationError> {
    EstadoTorneo::from_str(valor).map_err(|_| ValidationError::EstadoInvalido {
        valor: String::from(valor),
    })
}

/// Resolves the page size, defaulting to 50 and capping at 100.
pub const fn validar_limite(limite: Option<u32>) -> Result<u32, ValidationError> {
    match limite {
        None => Ok(LIMITE_POR_DEFECTO),
        Some(n) if n >= 1 && n <= LIMITE_MAXIMO => Ok(n),
        Some(_) => Err(ValidationError::LimiteFueraDeRango),
    }
}

/// Validates an optional cancellation reason: 10-500 characters when
/// present.
pub fn validar_razon(razon: Option<&String>) -> Result<(), ValidationError> {
    if let Some(razon) = razon {
        let longitud = razon.trim().chars().count();
        if !(10..=500).contains(&longitud) {
            return Err(ValidationError::RazonInvalida);
        }
    }
    Ok(())
}
