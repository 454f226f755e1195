// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

use crate::error::ErrorDominio;

/// Commission percentages a category charges per tournament.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguracionComisiones {
    porcentaje_base: f64,
    porcentaje_premium: f64,
}

impl ConfiguracionComisiones {
    /// Returns the base commission percentage.
    #[must_use]
    pub const fn porcentaje_base(&self) -> f64 {
        self.porcentaje_base
    }

    /// Returns the premium commission percentage.
    #[must_use]
    pub const fn porcentaje_premium(&self) -> f64 {
        self.porcentaje_premium
    }
}

impl Default for ConfiguracionComisiones {
    fn default() -> Self {
        Self {
            porcentaje_base: 5.0,
            porcentaje_premium: 8.0,
        }
    }
}

/// Tournament category.
///
/// Categories classify tournaments and carry the commission configuration
/// applied to them. A deactivated category keeps existing tournaments
/// valid but cannot be used to create new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Categoria {
    id: String,
    descripcion: String,
    alias: String,
    esta_activa: bool,
    fecha_creacion: OffsetDateTime,
    comisiones: ConfiguracionComisiones,
}

impl Categoria {
    /// Creates an active category with the default commission
    /// configuration.
    ///
    /// # Arguments
    ///
    /// * `id` - Category identifier slug
    /// * `descripcion` - Human-readable description, 2-100 characters
    /// * `alias` - Short lowercase alias (letters, digits, hyphens)
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` when any piece is missing, the
    /// description is out of range, or the alias breaks a format rule.
    /// Alias rules are checked in priority order: lowercase, then no
    /// spaces, then allowed characters.
    pub fn new(id: &str, descripcion: &str, alias: &str) -> Result<Self, ErrorDominio> {
        if id.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "ID de categoría es requerido",
            )));
        }
        if descripcion.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "Descripción de categoría es requerido",
            )));
        }
        if alias.trim().is_empty() {
            return Err(ErrorDominio::new(String::from(
                "Alias de categoría es requerido",
            )));
        }

        let descripcion = descripcion.trim();
        let longitud = descripcion.chars().count();
        if longitud < 2 {
            return Err(ErrorDominio::new(String::from(
                "La descripción debe tener al menos 2 caracteres",
            )));
        }
        if longitud > 100 {
            return Err(ErrorDominio::new(String::from(
                "La descripción no puede exceder 100 caracteres",
            )));
        }

        let alias = alias.trim();
        if alias.chars().any(char::is_uppercase) {
            return Err(ErrorDominio::new(String::from(
                "El alias debe estar en minúsculas",
            )));
        }
        if alias.contains(' ') {
            return Err(ErrorDominio::new(String::from(
                "El alias no puede contener espacios",
            )));
        }
        let alias_valido = alias
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !alias_valido {
            return Err(ErrorDominio::new(String::from(
                "El alias solo puede contener letras, números y guiones",
            )));
        }

        Ok(Self {
            id: String::from(id.trim()),
            descripcion: String::from(descripcion),
            alias: String::from(alias),
            esta_activa: true,
            fecha_creacion: OffsetDateTime::now_utc(),
            comisiones: ConfiguracionComisiones::default(),
        })
    }

    /// Returns the category identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the description.
    #[must_use]
    pub fn descripcion(&self) -> &str {
        &self.descripcion
    }

    /// Returns the alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Reports whether the category is active.
    #[must_use]
    pub const fn esta_activa(&self) -> bool {
        self.esta_activa
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn fecha_creacion(&self) -> OffsetDateTime {
        self.fecha_creacion
    }

    /// Returns the commission configuration.
    #[must_use]
    pub const fn comisiones(&self) -> ConfiguracionComisiones {
        self.comisiones
    }

    /// Activates the category. Idempotent.
    pub const fn activar(&mut self) {
        self.esta_activa = true;
    }

    /// Deactivates the category. Idempotent; tournaments already created
    /// with it remain valid.
    pub const fn desactivar(&mut self) {
        self.esta_activa = false;
    }

    /// Reports whether new tournaments may be created in this category.
    #[must_use]
    pub const fn puede_usarse_en_torneo(&self) -> bool {
        self.esta_activa
    }

    /// Updates the commission percentages.
    ///
    /// Both percentages are validated before either is applied, so a
    /// failed call leaves the configuration untouched.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if any provided percentage falls outside
    /// the 0-20 range.
    pub fn actualizar_comisiones(
        &mut self,
        base: f64,
        premium: Option<f64>,
    ) -> Result<(), ErrorDominio> {
        validar_porcentaje(base)?;
        if let Some(porcentaje) = premium {
            validar_porcentaje(porcentaje)?;
        }

        self.comisiones.porcentaje_base = base;
        if let Some(porcentaje) = premium {
            self.comisiones.porcentaje_premium = porcentaje;
        }
        Ok(())
    }

    /// Returns the commission percentage for the given participation
    /// type: `"premium"` selects the premium rate, anything else the base
    /// rate.
    #[must_use]
    pub fn obtener_comision_para(&self, tipo: &str) -> f64 {
        if tipo == "premium" {
            self.comisiones.porcentaje_premium
        } else {
            self.comisiones.porcentaje_base
        }
    }
}

fn validar_porcentaje(porcentaje: f64) -> Result<(), ErrorDominio> {
    if (0.0..=20.0).contains(&porcentaje) {
        Ok(())
    } else {
        Err(ErrorDominio::new(String::from(
            "Porcentaje de comisión debe estar entre 0% y 20%",
        )))
    }
}
