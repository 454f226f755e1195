// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Creation and fetch operations.

use torneos_domain::EstadoTorneo;
use torneos_persistence::RepositorioTorneos;

use crate::tests::helpers::{ORGANIZADOR, categorias_de_prueba, crear_request, crear_torneo_de_prueba};
use crate::{ApiError, CrearTorneoRequest, crear_torneo, obtener_torneo};

#[test]
fn test_create_starts_in_borrador() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let respuesta = crear_torneo_de_prueba(&mut torneos, &categorias);

    assert_eq!(respuesta.estado, EstadoTorneo::Borrador);
    assert_eq!(respuesta.nombre, "Copa de Verano 2024");
    assert_eq!(respuesta.organizador_id, ORGANIZADOR);
    assert_eq!(torneos.contar(), 1);
}

#[test]
fn test_create_then_fetch_round_trip() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let creado = crear_torneo_de_prueba(&mut torneos, &categorias);
    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();

    assert_eq!(proyeccion.torneo_id, creado.torneo_id);
    assert_eq!(proyeccion.nombre, "Copa de Verano 2024");
    assert_eq!(proyeccion.categoria.id, "cat-profesional-001");
    assert_eq!(proyeccion.categoria.descripcion, "Profesional");
    assert_eq!(proyeccion.categoria.alias, "profesional");
    assert_eq!(proyeccion.estado, EstadoTorneo::Borrador);
    assert_eq!(proyeccion.participantes_actuales, 0);
    assert_eq!(proyeccion.limite_participantes, None);
    assert_eq!(proyeccion.version, 1);
    assert_eq!(proyeccion.ganador_id, None);
    assert_eq!(proyeccion.razon_cancelacion, None);
}

#[test]
fn test_create_normalizes_name() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let respuesta = crear_torneo(
        &crear_request("  Copa   de  Invierno  ", "cat-amateur-001"),
        &mut torneos,
        &categorias,
        ORGANIZADOR,
    )
    .unwrap();

    assert_eq!(respuesta.nombre, "Copa de Invierno");
}

#[test]
fn test_create_applies_optional_limit_through_aggregate() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let mut request = crear_request("Copa de Verano 2024", "cat-profesional-001");
    request.limite_participantes = Some(32);
    let creado = crear_torneo(&request, &mut torneos, &categorias, ORGANIZADOR).unwrap();

    let proyeccion = obtener_torneo(&creado.torneo_id, &torneos).unwrap();
    assert_eq!(proyeccion.limite_participantes, Some(32));
    // The limit update is a mutation of its own.
    assert_eq!(proyeccion.version, 2);
}

#[test]
fn test_create_rejects_out_of_range_limit() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let mut request = crear_request("Copa de Verano 2024", "cat-profesional-001");
    request.limite_participantes = Some(1);
    let error = crear_torneo(&request, &mut torneos, &categorias, ORGANIZADOR).unwrap_err();

    assert_eq!(
        error,
        ApiError::DomainRuleViolation {
            message: String::from("El límite debe ser al menos 2 participantes"),
        }
    );
    // The rejected tournament is not persisted.
    assert_eq!(torneos.contar(), 0);
}

#[test]
fn test_create_uses_explicit_organizer() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let mut request = crear_request("Copa de Verano 2024", "cat-profesional-001");
    request.organizador_id = Some(String::from("org-explicito-001"));
    let respuesta = crear_torneo(&request, &mut torneos, &categorias, ORGANIZADOR).unwrap();

    assert_eq!(respuesta.organizador_id, "org-explicito-001");
}

#[test]
fn test_create_requires_nombre_and_categoria() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let sin_nombre = CrearTorneoRequest {
        categoria_id: Some(String::from("cat-profesional-001")),
        ..CrearTorneoRequest::default()
    };
    match crear_torneo(&sin_nombre, &mut torneos, &categorias, ORGANIZADOR) {
        Err(ApiError::InvalidInput { field, message }) => {
            assert_eq!(field, "nombre");
            assert!(message.contains("requerido"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let sin_categoria = CrearTorneoRequest {
        nombre: Some(String::from("Copa de Verano 2024")),
        ..CrearTorneoRequest::default()
    };
    match crear_torneo(&sin_categoria, &mut torneos, &categorias, ORGANIZADOR) {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "categoriaId"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_create_with_unknown_category_is_not_found() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let error = crear_torneo(
        &crear_request("Copa de Verano 2024", "cat-inexistente"),
        &mut torneos,
        &categorias,
        ORGANIZADOR,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ApiError::ResourceNotFound {
            resource: String::from("Categoría"),
            message: String::from("Categoría no encontrada"),
        }
    );
}

#[test]
fn test_create_with_inactive_category_is_domain_error() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let error = crear_torneo(
        &crear_request("Copa de Verano 2024", "cat-inactiva-001"),
        &mut torneos,
        &categorias,
        ORGANIZADOR,
    )
    .unwrap_err();

    match error {
        ApiError::DomainRuleViolation { message } => {
            assert!(message.contains("categoría inactiva"));
        }
        other => panic!("expected domain rule violation, got {other:?}"),
    }
}

#[test]
fn test_create_with_invalid_name_is_domain_error() {
    let mut torneos = RepositorioTorneos::new();
    let categorias = categorias_de_prueba();

    let error = crear_torneo(
        &crear_request("ab", "cat-profesional-001"),
        &mut torneos,
        &categorias,
        ORGANIZADOR,
    )
    .unwrap_err();

    match error {
        ApiError::DomainRuleViolation { message } => {
            assert!(message.contains("al menos 3 caracteres"));
        }
        other => panic!("expected domain rule violation, got {other:?}"),
    }
}

#[test]
fn test_fetch_with_malformed_id_is_validation_error() {
    let torneos = RepositorioTorneos::new();

    match obtener_torneo("no-es-un-uuid", &torneos) {
        Err(ApiError::InvalidInput { field, message }) => {
            assert_eq!(field, "id");
            assert!(message.contains("UUID"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_fetch_unknown_id_is_not_found() {
    let torneos = RepositorioTorneos::new();

    let error = obtener_torneo("550e8400-e29b-41d4-a716-446655440000", &torneos).unwrap_err();
    assert_eq!(
        error,
        ApiError::ResourceNotFound {
            resource: String::from("Torneo"),
            message: String::from("Torneo no encontrado"),
        }
    );
}
