// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory persistence for the tournament management system.
//!
//! Repositories are plain owned values injected into the layers above;
//! there is no global state. Tournaments are stored as serializable
//! snapshots, never as live aggregates, and writes are guarded by an
//! optimistic version check: an existing record may only be replaced by
//! a snapshot carrying a strictly greater version.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod categorias;
mod error;
mod torneos;

#[cfg(test)]
mod tests;

pub use categorias::RepositorioCategorias;
pub use error::PersistenceError;
pub use torneos::{FiltrosListado, RepositorioTorneos};
