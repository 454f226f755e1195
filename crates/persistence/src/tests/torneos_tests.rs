// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository behavior: optimistic concurrency and organizer listings.

use time::OffsetDateTime;
use time::macros::{date, datetime};
use torneos_domain::{EstadoTorneo, TorneoSnapshot};

use crate::{FiltrosListado, PersistenceError, RepositorioTorneos};

fn snapshot(id: &str, organizador: &str, fecha: OffsetDateTime, version: u64) -> TorneoSnapshot {
    TorneoSnapshot {
        id: String::from(id),
        nombre: String::from("Copa de Verano 2024"),
        organizador_id: String::from(organizador),
        categoria_id: String::from("cat-profesional-001"),
        categoria_descripcion: String::from("Profesional"),
        categoria_alias: String::from("profesional"),
        estado: EstadoTorneo::Borrador,
        fecha_creacion: fecha,
        limite_participantes: None,
        participantes_actuales: 0,
        version,
        ganador_id: None,
        razon_cancelacion: None,
        fecha_cancelacion: None,
    }
}

const ID_A: &str = "550e8400-e29b-41d4-a716-446655440000";
const ID_B: &str = "550e8400-e29b-41d4-a716-446655440001";
const ID_C: &str = "550e8400-e29b-41d4-a716-446655440002";

#[test]
fn test_save_and_fetch_round_trip() {
    let mut repo = RepositorioTorneos::new();
    let original = snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1);

    repo.guardar(original.clone()).unwrap();

    assert_eq!(repo.obtener_por_id(ID_A), Some(original));
    assert_eq!(repo.obtener_por_id(ID_B), None);
    assert_eq!(repo.contar(), 1);
}

#[test]
fn test_newer_version_replaces_record() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();

    let mut actualizado = snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 2);
    actualizado.limite_participantes = Some(32);
    repo.guardar(actualizado).unwrap();

    let guardado = repo.obtener_por_id(ID_A).unwrap();
    assert_eq!(guardado.version, 2);
    assert_eq!(guardado.limite_participantes, Some(32));
}

#[test]
fn test_stale_write_rejected() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 3))
        .unwrap();

    // Same version and older version are both stale.
    for version in [3, 2] {
        let result = repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), version));
        assert_eq!(
            result,
            Err(PersistenceError::VersionConflict {
                torneo_id: String::from(ID_A),
                version_almacenada: 3,
                version_propuesta: version,
            })
        );
    }

    // The stored record is untouched.
    assert_eq!(repo.obtener_por_id(ID_A).unwrap().version, 3);
}

#[test]
fn test_new_id_inserts_at_any_version() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 7))
        .unwrap();
    assert_eq!(repo.obtener_por_id(ID_A).unwrap().version, 7);
}

#[test]
fn test_listing_sorted_newest_first() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();
    repo.guardar(snapshot(ID_B, "org-001", datetime!(2024-06-03 10:00 UTC), 1))
        .unwrap();
    repo.guardar(snapshot(ID_C, "org-001", datetime!(2024-06-02 10:00 UTC), 1))
        .unwrap();

    let listado = repo.listar_por_organizador("org-001", &FiltrosListado::default());

    let ids: Vec<&str> = listado.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![ID_B, ID_C, ID_A]);
}

#[test]
fn test_listing_scoped_to_organizer() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();
    repo.guardar(snapshot(ID_B, "org-002", datetime!(2024-06-02 10:00 UTC), 1))
        .unwrap();

    let listado = repo.listar_por_organizador("org-001", &FiltrosListado::default());
    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].id, ID_A);

    assert!(repo.listar_por_organizador("org-999", &FiltrosListado::default()).is_empty());
}

#[test]
fn test_estado_filter() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();
    let mut cancelado = snapshot(ID_B, "org-001", datetime!(2024-06-02 10:00 UTC), 2);
    cancelado.estado = EstadoTorneo::Cancelado;
    repo.guardar(cancelado).unwrap();

    let filtros = FiltrosListado {
        estado: Some(EstadoTorneo::Borrador),
        ..FiltrosListado::default()
    };
    let listado = repo.listar_por_organizador("org-001", &filtros);
    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].id, ID_A);
}

#[test]
fn test_cancelled_excluded_on_request() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();
    let mut cancelado = snapshot(ID_B, "org-001", datetime!(2024-06-02 10:00 UTC), 2);
    cancelado.estado = EstadoTorneo::Cancelado;
    repo.guardar(cancelado).unwrap();

    // Default keeps cancelled tournaments.
    assert_eq!(
        repo.listar_por_organizador("org-001", &FiltrosListado::default()).len(),
        2
    );

    let sin_cancelados = FiltrosListado {
        incluir_cancelados: false,
        ..FiltrosListado::default()
    };
    let listado = repo.listar_por_organizador("org-001", &sin_cancelados);
    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].id, ID_A);

    // Explicitly asking for CANCELADO overrides the exclusion.
    let solo_cancelados = FiltrosListado {
        estado: Some(EstadoTorneo::Cancelado),
        incluir_cancelados: false,
        ..FiltrosListado::default()
    };
    assert_eq!(repo.listar_por_organizador("org-001", &solo_cancelados).len(), 1);
}

#[test]
fn test_date_range_inclusive() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 23:59 UTC), 1))
        .unwrap();
    repo.guardar(snapshot(ID_B, "org-001", datetime!(2024-06-05 00:00 UTC), 1))
        .unwrap();
    repo.guardar(snapshot(ID_C, "org-001", datetime!(2024-06-10 12:00 UTC), 1))
        .unwrap();

    let filtros = FiltrosListado {
        fecha_desde: Some(date!(2024 - 06 - 01)),
        fecha_hasta: Some(date!(2024 - 06 - 05)),
        ..FiltrosListado::default()
    };
    let listado = repo.listar_por_organizador("org-001", &filtros);
    let ids: Vec<&str> = listado.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![ID_B, ID_A]);
}

#[test]
fn test_limpiar_empties_repository() {
    let mut repo = RepositorioTorneos::new();
    repo.guardar(snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1))
        .unwrap();
    repo.limpiar();
    assert_eq!(repo.contar(), 0);
    assert_eq!(repo.obtener_por_id(ID_A), None);
}

#[test]
fn test_snapshot_serde_round_trip() {
    let original = snapshot(ID_A, "org-001", datetime!(2024-06-01 10:00 UTC), 1);
    let json = serde_json::to_string(&original).unwrap();
    let parseado: TorneoSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(original, parseado);
}
