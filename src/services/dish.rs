//! Dish service

use crate::core::repository::Repository;
use crate::core::service::CrudService;
use crate::entities::Dish;
use std::sync::Arc;

/// The generic CRUD contract bound to the dish repository. No
/// entity-specific behavior.
pub struct DishService {
    repo: Arc<dyn Repository<Dish>>,
}

impl DishService {
    pub fn new(repo: Arc<dyn Repository<Dish>>) -> Self {
        Self { repo }
    }
}

impl CrudService<Dish> for DishService {
    fn repo(&self) -> &dyn Repository<Dish> {
        self.repo.as_ref()
    }
}
