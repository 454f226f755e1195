// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use torneos_persistence::{RepositorioCategorias, RepositorioTorneos};

use crate::{CrearTorneoRequest, CrearTorneoResponse, crear_torneo};

pub const ORGANIZADOR: &str = "test-organizador-id";

pub fn categorias_de_prueba() -> RepositorioCategorias {
    RepositorioCategorias::con_datos_iniciales().unwrap()
}

pub fn crear_request(nombre: &str, categoria_id: &str) -> CrearTorneoRequest {
    CrearTorneoRequest {
        nombre: Some(String::from(nombre)),
        categoria_id: Some(String::from(categoria_id)),
        limite_participantes: None,
        organizador_id: None,
    }
}

/// Creates a valid draft tournament owned by the default organizer and
/// returns the creation response.
pub fn crear_torneo_de_prueba(
    torneos: &mut RepositorioTorneos,
    categorias: &RepositorioCategorias,
) -> CrearTorneoResponse {
    crear_torneo(
        &crear_request("Copa de Verano 2024", "cat-profesional-001"),
        torneos,
        categorias,
        ORGANIZADOR,
    )
    .unwrap()
}
