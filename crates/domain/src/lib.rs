// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod categoria;
mod error;
mod estado_torneo;
mod evento;
mod ids;
mod nombre_torneo;
mod participante;
mod torneo;

#[cfg(test)]
mod tests;

pub use categoria::{Categoria, ConfiguracionComisiones};
pub use error::ErrorDominio;
pub use estado_torneo::EstadoTorneo;
pub use evento::EventoTorneo;
pub use ids::{CategoriaId, TorneoId, UsuarioId};
pub use nombre_torneo::NombreTorneo;
pub use participante::{EstadoParticipante, Participante};
pub use torneo::{EstadisticasTorneo, EtapaVenta, Torneo, TorneoSnapshot};
