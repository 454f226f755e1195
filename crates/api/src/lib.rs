// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the tournament management system.
//!
//! Operations are pure functions over injected repositories. Each one
//! validates the request shape at the boundary, delegates every business
//! rule to the domain aggregate, and maps failures onto the [`ApiError`]
//! taxonomy the HTTP layer translates into status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

mod error;
mod handlers;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use handlers::{
    actualizar_torneo, cancelar_torneo, crear_torneo, listar_categorias, listar_torneos,
    obtener_torneo,
};
pub use request_response::{
    ActualizarTorneoRequest, ActualizarTorneoResponse, CambioAplicado, CancelarTorneoRequest,
    CancelarTorneoResponse, CategoriaItem, CategoriaResumen, CrearTorneoRequest,
    CrearTorneoResponse, FiltrosAplicados, ListarCategoriasResponse, ListarTorneosQuery,
    ListarTorneosResponse, ObtenerTorneoResponse, Paginacion, TorneoResumen,
};
pub use validation::ValidationError;
