//! Type Handler Registry
//!
//! The registry maps application types to the handler that binds and reads
//! them. A process-wide registry backs the free functions in this module so
//! that mapping code can look a handler up by type alone.
//!
//! # Usage
//!
//! ```rust
//! use core_kernel::Instant;
//! use infra_db::registry::{parse_value, register_defaults};
//! use infra_db::DbValue;
//!
//! register_defaults();
//!
//! let instant: Instant = parse_value(DbValue::Instant(Instant::UNIX_EPOCH)).unwrap();
//! assert_eq!(instant, Instant::UNIX_EPOCH);
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use core_kernel::Instant;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::handlers::{InstantHandler, TypeHandler};
use crate::parameter::DbParameter;
use crate::value::DbValue;

/// A set of type handlers keyed by the application type they convert
///
/// Each entry stores an `Arc<dyn TypeHandler<T>>` behind `dyn Any`, keyed by
/// `TypeId::of::<T>()`, so lookups downcast back to the exact handler type.
#[derive(Default)]
pub struct TypeHandlerRegistry {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl TypeHandlerRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in handlers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<Instant>(Arc::new(InstantHandler::DEFAULT));
        registry
    }

    /// Registers `handler` for `T`, replacing any previous handler
    ///
    /// # Returns
    ///
    /// `true` if a previous handler was replaced
    pub fn register<T: 'static>(&mut self, handler: Arc<dyn TypeHandler<T>>) -> bool {
        let replaced = self
            .handlers
            .insert(TypeId::of::<T>(), Box::new(handler))
            .is_some();

        if replaced {
            info!(type_name = type_name::<T>(), "Replaced type handler");
        } else {
            debug!(type_name = type_name::<T>(), "Registered type handler");
        }
        replaced
    }

    /// Returns the handler registered for `T`
    pub fn get<T: 'static>(&self) -> Option<Arc<dyn TypeHandler<T>>> {
        self.handlers
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn TypeHandler<T>>>())
            .cloned()
    }

    /// Returns true if a handler is registered for `T`
    pub fn contains<T: 'static>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for TypeHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandlerRegistry")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

static GLOBAL_REGISTRY: Lazy<RwLock<TypeHandlerRegistry>> =
    Lazy::new(|| RwLock::new(TypeHandlerRegistry::new()));

/// Registers `handler` for `T` in the process-wide registry
pub fn register_handler<T: 'static>(handler: Arc<dyn TypeHandler<T>>) -> bool {
    GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(handler)
}

/// Registers the built-in handlers in the process-wide registry
///
/// Safe to call more than once.
pub fn register_defaults() {
    register_handler::<Instant>(Arc::new(InstantHandler::DEFAULT));
}

/// Looks up the process-wide handler for `T`
pub fn handler_for<T: 'static>() -> Result<Arc<dyn TypeHandler<T>>, DatabaseError> {
    GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get::<T>()
        .ok_or(DatabaseError::HandlerNotRegistered {
            type_name: type_name::<T>(),
        })
}

/// Binds `value` to `parameter` using the process-wide handler for `T`
pub fn set_parameter<T: 'static>(parameter: &mut DbParameter, value: T) -> Result<(), DatabaseError> {
    handler_for::<T>()?.set_value(parameter, value);
    Ok(())
}

/// Materializes a `T` from a raw value using the process-wide handler for `T`
pub fn parse_value<T: 'static>(value: DbValue) -> Result<T, DatabaseError> {
    handler_for::<T>()?.parse(value)
}
