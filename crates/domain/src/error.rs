// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Error raised when a domain rule is violated.
///
/// Every domain rule reports through this single type. The message carries
/// the user-facing Spanish text; callers assert on message substrings, so
/// the wording is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDominio {
    mensaje: String,
}

impl ErrorDominio {
    /// Creates a new domain error with the given message.
    #[must_use]
    pub const fn new(mensaje: String) -> Self {
        Self { mensaje }
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn mensaje(&self) -> &str {
        &self.mensaje
    }
}

impl std::fmt::Display for ErrorDominio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mensaje)
    }
}

impl std::error::Error for ErrorDominio {}
