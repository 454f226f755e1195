// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Domain events recorded by the `Torneo` aggregate.
///
/// Events are buffered on the aggregate until a publisher drains them;
/// they are not persisted with the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventoTorneo {
    TorneoCreado {
        torneo_id: String,
    },
    RegistroAbierto {
        torneo_id: String,
    },
    RegistroCerrado {
        torneo_id: String,
    },
    TorneoIniciado {
        torneo_id: String,
        cantidad_participantes: u32,
    },
    TorneoFinalizado {
        torneo_id: String,
        ganador_id: String,
    },
    TorneoCancelado {
        torneo_id: String,
        razon: String,
    },
    ParticipanteRegistrado {
        torneo_id: String,
        usuario_id: String,
    },
    ParticipanteConfirmado {
        torneo_id: String,
        usuario_id: String,
    },
    ParticipanteCancelado {
        torneo_id: String,
        usuario_id: String,
        razon: String,
    },
    ParticipanteDescalificado {
        torneo_id: String,
        usuario_id: String,
        razon: String,
    },
    SubAdministradorAgregado {
        torneo_id: String,
        usuario_id: String,
    },
    EtapaVentaCreada {
        torneo_id: String,
        nombre: String,
    },
}

impl EventoTorneo {
    /// Returns the stable event type name consumers match on.
    #[must_use]
    pub const fn tipo(&self) -> &'static str {
        match self {
            Self::TorneoCreado { .. } => "TorneoCreado",
            Self::RegistroAbierto { .. } => "RegistroAbierto",
            Self::RegistroCerrado { .. } => "RegistroCerrado",
            Self::TorneoIniciado { .. } => "TorneoIniciado",
            Self::TorneoFinalizado { .. } => "TorneoFinalizado",
            Self::TorneoCancelado { .. } => "TorneoCancelado",
            Self::ParticipanteRegistrado { .. } => "ParticipanteRegistrado",
            Self::ParticipanteConfirmado { .. } => "ParticipanteConfirmado",
            Self::ParticipanteCancelado { .. } => "ParticipanteCancelado",
            Self::ParticipanteDescalificado { .. } => "ParticipanteDescalificado",
            Self::SubAdministradorAgregado { .. } => "SubAdministradorAgregado",
            Self::EtapaVentaCreada { .. } => "EtapaVentaCreada",
        }
    }

    /// Returns the id of the tournament the event belongs to.
    #[must_use]
    pub fn torneo_id(&self) -> &str {
        match self {
            Self::TorneoCreado { torneo_id }
            | Self::RegistroAbierto { torneo_id }
            | Self::RegistroCerrado { torneo_id }
            | Self::TorneoIniciado { torneo_id, .. }
            | Self::TorneoFinalizado { torneo_id, .. }
            | Self::TorneoCancelado { torneo_id, .. }
            | Self::ParticipanteRegistrado { torneo_id, .. }
            | Self::ParticipanteConfirmado { torneo_id, .. }
            | Self::ParticipanteCancelado { torneo_id, .. }
            | Self::ParticipanteDescalificado { torneo_id, .. }
            | Self::SubAdministradorAgregado { torneo_id, .. }
            | Self::EtapaVentaCreada { torneo_id, .. } => torneo_id,
        }
    }
}
