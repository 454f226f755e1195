// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cancellation semantics, including idempotency and the finished-state
//! rejection.

use time::macros::datetime;
use torneos_domain::{EstadoTorneo, TorneoSnapshot};
use torneos_persistence::RepositorioTorneos;

use crate::tests::helpers::{categorias_de_prueba, crear_torneo_de_prueba};
use crate::{
    ActualizarTorneoRequest, ApiError, CancelarTorneoRequest, actualizar_torneo, cancelar_torneo,
    obtener_torneo,
};

fn razon(texto: &str) -> CancelarTorneoRequest {
    CancelarTorneoRequest {
        razon: Some(String::from(texto)),
    }
}

#[test]
fn test_cancel_records_reason_and_timestamp() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();
    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);

    let respuesta = cancelar_torneo(
        &creado.torneo_id,
        &razon("Problemas técnicos de la sede"),
        &mut torneos,
    )
    .unwrap();

    assert_eq!(respuesta.estado, EstadoTorneo::Cancelado);
    assert_eq!(respuesta.estado_anterior, EstadoTorneo::Borrador);
    assert_eq!(
        respuesta.razon_cancelacion.as_deref(),
        Some("Problemas técnicos de la sede")
    );
    assert!(respuesta.fecha_cancelacion.is_some());
    assert_eq!(respuesta.participantes_afectados, 0);

    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();
    assert_eq!(proyeccion.estado, EstadoTorneo::Cancelado);
    assert_eq!(proyeccion.version, 2);
}

#[test]
fn test_cancel_without_reason_uses_default() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();
    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);

    let respuesta = cancelar_torneo(
        &creado.torneo_id,
        &CancelarTorneoRequest::default(),
        &mut torneos,
    )
    .unwrap();

    assert_eq!(
        respuesta.razon_cancelacion.as_deref(),
        Some("Cancelado por organizador")
    );
}

#[test]
fn test_cancel_reason_length_bounds() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();
    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);

    let demasiado_larga = "x".repeat(501);
    for texto in ["corta", demasiado_larga.as_str()] {
        match cancelar_torneo(&creado.torneo_id, &razon(texto), &mut torneos) {
            Err(ApiError::InvalidInput { field, message }) => {
                assert_eq!(field, "razon");
                assert!(message.contains("entre 10 y 500"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // The rejected calls did not cancel anything.
    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();
    assert_eq!(proyeccion.estado, EstadoTorneo::Borrador);
}

#[test]
fn test_cancel_twice_is_idempotent() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();
    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);

    let primera = cancelar_torneo(
        &creado.torneo_id,
        &razon("Problemas técnicos de la sede"),
        &mut torneos,
    )
    .unwrap();

    let segunda = cancelar_torneo(
        &creado.torneo_id,
        &razon("Otra razón distinta esta vez"),
        &mut torneos,
    )
    .unwrap();

    // The second call succeeds but changes nothing: the original reason
    // stands and no new version is written.
    assert_eq!(segunda.estado, EstadoTorneo::Cancelado);
    assert_eq!(segunda.estado_anterior, EstadoTorneo::Cancelado);
    assert_eq!(segunda.razon_cancelacion, primera.razon_cancelacion);

    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();
    assert_eq!(proyeccion.version, 2);
    assert_eq!(
        proyeccion.razon_cancelacion.as_deref(),
        Some("Problemas técnicos de la sede")
    );
}

#[test]
fn test_cancel_finished_tournament_rejected() {
    let mut torneos = RepositorioTorneos::new();

    let snapshot = TorneoSnapshot {
        id: String::from("550e8400-e29b-41d4-a716-446655440000"),
        nombre: String::from("Copa Terminada"),
        organizador_id: String::from("org-001"),
        categoria_id: String::from("cat-profesional-001"),
        categoria_descripcion: String::from("Profesional"),
        categoria_alias: String::from("profesional"),
        estado: EstadoTorneo::Finalizado,
        fecha_creacion: datetime!(2024-06-01 10:00 UTC),
        limite_participantes: Some(8),
        participantes_actuales: 4,
        version: 9,
        ganador_id: Some(String::from("user-001")),
        razon_cancelacion: None,
        fecha_cancelacion: None,
    };
    torneos.guardar(snapshot).unwrap();

    let error = cancelar_torneo(
        "550e8400-e29b-41d4-a716-446655440000",
        &CancelarTorneoRequest::default(),
        &mut torneos,
    )
    .unwrap_err();

    match error {
        ApiError::DomainRuleViolation { message } => {
            assert!(message.contains("finalizado"));
        }
        other => panic!("expected domain rule violation, got {other:?}"),
    }
}

#[test]
fn test_cancel_unknown_id_is_not_found() {
    let mut torneos = RepositorioTorneos::new();

    let error = cancelar_torneo(
        "550e8400-e29b-41d4-a716-446655440000",
        &CancelarTorneoRequest::default(),
        &mut torneos,
    )
    .unwrap_err();

    assert!(matches!(error, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_configure_then_cancel_scenario() {
    // The full configure-then-cancel flow: limit update bumps the
    // version to 2, cancellation to 3.
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();
    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);

    let request = ActualizarTorneoRequest {
        limite_participantes: Some(32),
        ..ActualizarTorneoRequest::default()
    };
    let actualizado = actualizar_torneo(&creado.torneo_id, &request, &mut torneos).unwrap();
    assert_eq!(actualizado.version, 2);

    let cancelado = cancelar_torneo(
        &creado.torneo_id,
        &razon("Problemas técnicos de la sede"),
        &mut torneos,
    )
    .unwrap();
    assert_eq!(cancelado.estado, EstadoTorneo::Cancelado);

    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();
    assert_eq!(proyeccion.limite_participantes, Some(32));
    assert_eq!(proyeccion.version, 3);
}
