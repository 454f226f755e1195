// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ErrorDominio;

/// Terms that are never allowed inside a tournament name, matched
/// case-insensitively against the normalized value.
const TERMINOS_PROHIBIDOS: [&str; 3] = ["spam", "test123", "ejemplo"];

/// Validated tournament name.
///
/// The raw input is normalized (trimmed, internal whitespace runs
/// collapsed to single spaces) before any rule runs. Rules apply in
/// order: length, allowed characters, content denylist, useful text.
/// The first broken rule produces the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NombreTorneo {
    valor: String,
}

impl NombreTorneo {
    /// Creates a validated tournament name.
    ///
    /// # Arguments
    ///
    /// * `valor` - The raw name as entered by the organizer
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` when the name is missing, outside the
    /// 3-100 character range, contains disallowed characters or denied
    /// terms, or carries no letters or digits at all.
    pub fn new(valor: &str) -> Result<Self, ErrorDominio> {
        if valor.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "Nombre del torneo es requerido",
            )));
        }

        let normalizado = normalizar(valor);

        let longitud = normalizado.chars().count();
        if longitud < 3 {
            return Err(ErrorDominio::new(String::from(
                "El nombre del torneo debe tener al menos 3 caracteres",
            )));
        }
        if longitud > 100 {
            return Err(ErrorDominio::new(String::from(
                "El nombre del torneo no puede exceder 100 caracteres",
            )));
        }

        if !normalizado.chars().all(es_caracter_permitido) {
            return Err(ErrorDominio::new(String::from(
                "El nombre contiene caracteres no permitidos",
            )));
        }

        let en_minusculas = normalizado.to_lowercase();
        for termino in TERMINOS_PROHIBIDOS {
            if en_minusculas.contains(termino) {
                return Err(ErrorDominio::new(String::from(
                    "El nombre contiene contenido no permitido",
                )));
            }
        }

        if !normalizado.chars().any(char::is_alphanumeric) {
            return Err(ErrorDominio::new(String::from(
                "El nombre debe contener al menos una letra o número",
            )));
        }

        Ok(Self { valor: normalizado })
    }

    /// Returns the normalized name.
    #[must_use]
    pub fn valor(&self) -> &str {
        &self.valor
    }

    /// Returns the length of the normalized name, in characters.
    #[must_use]
    pub fn longitud(&self) -> usize {
        self.valor.chars().count()
    }

    /// Reports whether the name contains the given term,
    /// case-insensitively. An empty or whitespace-only term never matches.
    #[must_use]
    pub fn contiene_termino(&self, termino: &str) -> bool {
        if termino.trim().is_empty() {
            return false;
        }
        self.valor
            .to_lowercase()
            .contains(&termino.to_lowercase())
    }
}

impl std::fmt::Display for NombreTorneo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.valor)
    }
}

/// Trims the value and collapses internal whitespace runs to single
/// spaces.
fn normalizar(valor: &str) -> String {
    valor.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Allowed characters: ASCII letters and digits, Spanish letters, space,
/// and the punctuation set `- _ . , ! ( ) : [ ] { }`.
const fn es_caracter_permitido(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            'ñ' | 'Ñ' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú'
        )
        || matches!(
            c,
            ' ' | '-' | '_' | '.' | ',' | '!' | '(' | ')' | ':' | '[' | ']' | '{' | '}'
        )
}
