// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use torneos_domain::{Categoria, ErrorDominio};
use tracing::debug;

/// In-memory category store.
///
/// Categories are kept in insertion order, which is the order listings
/// are returned in.
#[derive(Debug, Default)]
pub struct RepositorioCategorias {
    registros: Vec<Categoria>,
}

impl RepositorioCategorias {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the standard category set:
    /// Profesional (8%/12%), Amateur (5%/7%), Junior (3%/5%), and a
    /// deactivated Categoría Inactiva.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorDominio` if a seed fails entity validation.
    pub fn con_datos_iniciales() -> Result<Self, ErrorDominio> {
        let mut repo = Self::new();

        let mut profesional = Categoria::new("cat-profesional-001", "Profesional", "profesional")?;
        profesional.actualizar_comisiones(8.0, Some(12.0))?;
        repo.guardar(profesional);

        let mut amateur = Categoria::new("cat-amateur-001", "Amateur", "amateur")?;
        amateur.actualizar_comisiones(5.0, Some(7.0))?;
        repo.guardar(amateur);

        let mut junior = Categoria::new("cat-junior-001", "Junior", "junior")?;
        junior.actualizar_comisiones(3.0, Some(5.0))?;
        repo.guardar(junior);

        let mut inactiva = Categoria::new("cat-inactiva-001", "Categoría Inactiva", "inactiva")?;
        inactiva.desactivar();
        repo.guardar(inactiva);

        Ok(repo)
    }

    /// Saves a category, replacing any record with the same id.
    pub fn guardar(&mut self, categoria: Categoria) {
        debug!(categoria_id = %categoria.id(), "Saving category");
        if let Some(existente) = self.registros.iter_mut().find(|c| c.id() == categoria.id()) {
            *existente = categoria;
        } else {
            self.registros.push(categoria);
        }
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn obtener_por_id(&self, id: &str) -> Option<Categoria> {
        self.registros.iter().find(|c| c.id() == id).cloned()
    }

    /// Lists the active categories in insertion order.
    #[must_use]
    pub fn listar_activas(&self) -> Vec<Categoria> {
        self.registros
            .iter()
            .filter(|c| c.esta_activa())
            .cloned()
            .collect()
    }

    /// Returns the number of stored categories, active or not.
    #[must_use]
    pub fn contar(&self) -> usize {
        self.registros.len()
    }
}
