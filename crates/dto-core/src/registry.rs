// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type-indexed DTO registry.
//!
//! Lets callers pick the hydration target at runtime, by name, for
//! example from a message envelope or a configuration file.
//!
//! ```rust,ignore
//! let mut registry = DtoRegistry::new();
//! registry.register::<ModelDto>().register_as::<ModelExtendedDto>("extended");
//!
//! let dto = registry.hydrate("ModelDto", &json!({"id": 1}))?;
//! let model = dto.downcast_ref::<ModelDto>().unwrap();
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::{dto::Dto, error::HydrateError, hydrator::Hydrator};

type Factory = fn(&Value, Option<&Hydrator>) -> Box<dyn Dto>;

fn build<T: Dto>(data: &Value, hydrator: Option<&Hydrator>) -> Box<dyn Dto> {
    match hydrator {
        Some(hydrator) => Box::new(hydrator.hydrate::<T>(data)),
        None => Box::new(T::hydrate(data))
    }
}

/// Name → DTO factory registry.
#[derive(Debug, Clone, Default)]
pub struct DtoRegistry {
    factories: IndexMap<String, Factory>
}

impl DtoRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its [`Dto::dto_name`].
    pub fn register<T: Dto>(&mut self) -> &mut Self {
        self.register_as::<T>(T::dto_name())
    }

    /// Register `T` under `name`, replacing any previous registration.
    pub fn register_as<T: Dto>(&mut self, name: impl Into<String>) -> &mut Self {
        self.factories.insert(name.into(), build::<T>);
        self
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Hydrate the type registered as `name` with its default map.
    ///
    /// # Errors
    ///
    /// [`HydrateError::UnknownTargetType`] if `name` is not registered.
    pub fn hydrate(&self, name: &str, data: &Value) -> Result<Box<dyn Dto>, HydrateError> {
        self.factory(name).map(|factory| factory(data, None))
    }

    /// Hydrate the type registered as `name` with `hydrator`'s map.
    ///
    /// # Errors
    ///
    /// [`HydrateError::UnknownTargetType`] if `name` is not registered.
    pub fn hydrate_with(
        &self,
        name: &str,
        data: &Value,
        hydrator: &Hydrator
    ) -> Result<Box<dyn Dto>, HydrateError> {
        self.factory(name).map(|factory| factory(data, Some(hydrator)))
    }

    fn factory(&self, name: &str) -> Result<Factory, HydrateError> {
        self.factories.get(name).copied().ok_or_else(|| {
            tracing::debug!(name, "hydration target not registered");
            HydrateError::UnknownTargetType {
                name: name.to_string()
            }
        })
    }
}
