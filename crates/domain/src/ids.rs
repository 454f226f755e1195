// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ErrorDominio;

/// Unique identifier of a tournament.
///
/// Wraps a canonical hyphenated UUID (versions 1-5, RFC 4122 variant),
/// case-insensitive on validation but stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TorneoId {
    valor: String,
}

impl TorneoId {
    /// Creates a tournament id from an existing UUID string.
    ///
    /// # Arguments
    ///
    /// * `valor` - The candidate id, in canonical hyphenated form
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the value is empty or is not a
    /// canonical UUID.
    pub fn new(valor: &str) -> Result<Self, ErrorDominio> {
        if valor.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "TorneoId no puede ser nulo",
            )));
        }

        if !es_uuid_canonico(valor) {
            return Err(ErrorDominio::new(String::from(
                "TorneoId debe ser un UUID v4 válido",
            )));
        }

        Ok(Self {
            valor: String::from(valor),
        })
    }

    /// Generates a fresh random tournament id.
    #[must_use]
    pub fn nuevo() -> Self {
        Self {
            valor: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Returns the underlying UUID string.
    #[must_use]
    pub fn valor(&self) -> &str {
        &self.valor
    }
}

impl std::fmt::Display for TorneoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.valor)
    }
}

/// Checks the canonical hyphenated UUID form: 36 characters, hyphens at
/// positions 8/13/18/23, hex digits elsewhere, a version digit of 1-5 and
/// an RFC 4122 variant digit. Stricter than a general-purpose UUID parser,
/// which also accepts unhyphenated and non-RFC forms.
fn es_uuid_canonico(valor: &str) -> bool {
    let bytes = valor.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    for (posicion, &byte) in bytes.iter().enumerate() {
        let valido = match posicion {
            8 | 13 | 18 | 23 => byte == b'-',
            14 => (b'1'..=b'5').contains(&byte),
            19 => matches!(byte, b'8' | b'9' | b'a' | b'b' | b'A' | b'B'),
            _ => byte.is_ascii_hexdigit(),
        };
        if !valido {
            return false;
        }
    }

    true
}

/// Unique identifier of a category.
///
/// Lowercase slug of at least two characters: letters, digits, hyphen and
/// underscore. The value is trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoriaId {
    valor: String,
}

impl CategoriaId {
    /// Creates a category id from a slug string.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the value is empty or does not match
    /// the slug format.
    pub fn new(valor: &str) -> Result<Self, ErrorDominio> {
        let limpio = valor.trim();

        if limpio.is_empty() {
            return Err(ErrorDominio::new(String::from(
                "CategoriaId no puede ser nulo",
            )));
        }

        let formato_valido = limpio.len() >= 2
            && limpio
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !formato_valido {
            return Err(ErrorDominio::new(String::from(
                "CategoriaId tiene formato inválido",
            )));
        }

        Ok(Self {
            valor: String::from(limpio),
        })
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn valor(&self) -> &str {
        &self.valor
    }
}

impl std::fmt::Display for CategoriaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.valor)
    }
}

/// Unique identifier of a user (organizer or participant).
///
/// 3 to 50 characters: letters, digits, hyphen and underscore. The value
/// is trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsuarioId {
    valor: String,
}

impl UsuarioId {
    /// Creates a user id.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if the value is empty, out of the 3-50
    /// character range, or contains characters outside the allowed set.
    pub fn new(valor: &str) -> Result<Self, ErrorDominio> {
        let limpio = valor.trim();

        if limpio.is_empty() {
            return Err(ErrorDominio::new(String::from(
                "UsuarioId no puede ser nulo",
            )));
        }

        let longitud = limpio.chars().count();
        if !(3..=50).contains(&longitud) {
            return Err(ErrorDominio::new(String::from(
                "UsuarioId debe tener entre 3 y 50 caracteres",
            )));
        }

        let charset_valido = limpio
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !charset_valido {
            return Err(ErrorDominio::new(String::from(
                "UsuarioId solo puede contener letras, números, guiones y guiones bajos",
            )));
        }

        Ok(Self {
            valor: String::from(limpio),
        })
    }

    /// Returns the underlying id string.
    #[must_use]
    pub fn valor(&self) -> &str {
        &self.valor
    }
}

impl std::fmt::Display for UsuarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.valor)
    }
}
