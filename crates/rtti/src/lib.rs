//! Opt-in runtime type identity.
//!
//! Participating types carry one process-wide [`TypeDescriptor`] each. Any
//! value reachable as `&dyn Identify` reports its concrete type's descriptor in
//! O(1) from a type-level cache, and descriptors compare by identity, which is
//! what downcasting and [`Dispatcher`] build on.
//!
//! # Modules
//!
//! - [`core`] - Runtime ids, descriptors, handles, errors, collision records
//! - [`registry`] - [`TypeRegistry`]: minting, name/id/type lookup, the global instance
//! - [`registration`] - [`TypeSlot`] caches and `inventory` records
//! - [`identify`] - The [`Identify`] / [`Identifiable`] capability and checked downcasts
//! - [`dispatch`] - Descriptor-identity dispatch
//! - [`diagnostics`] - Registry dumps
//!
//! # Example
//!
//! ```ignore
//! use rtti::{Dispatcher, Identifiable, Identify};
//!
//! #[derive(Identifiable)]
//! struct Foo { x: i32, y: i32 }
//!
//! #[derive(Identifiable)]
//! struct Bar { base: Foo, m: [f32; 4] }
//!
//! let visitor = Dispatcher::new()
//!     .on::<Bar, _>(|_| "bar")
//!     .on::<Foo, _>(|_| "foo")
//!     .fallback(|_| "other");
//!
//! let value: &dyn Identify = &Bar { base: Foo { x: 1, y: 2 }, m: [0.0; 4] };
//! assert_eq!(visitor.dispatch(value)?, "bar");
//! ```

extern crate self as rtti;

pub mod core;
pub mod diagnostics;
pub mod dispatch;
pub mod identify;
pub mod registration;
pub mod registry;

pub use crate::core::{
	Collision, DispatchError, DuplicatePolicy, RegisterError, RegistryError, Resolution, RuntimeId,
	TypeDescriptor, TypeRef,
};

pub use diagnostics::{DiagnosticReport, diagnostics};
pub use dispatch::Dispatcher;
pub use identify::{
	Identifiable, Identify, downcast_box, find_type_by_name, peek_type_descriptor,
	type_descriptor, type_of, type_of_val,
};
#[doc(hidden)]
pub use inventory;
pub use registration::{Registration, TypeSlot, short_type_name};
pub use registry::{RegistryConfig, TypeRegistry};
/// Derives [`Identifiable`] and [`Identify`] and schedules eager registration.
///
/// Attributes:
/// * `#[rtti(name = "Custom")]` - display name (defaults to the type identifier)
/// * `#[rtti(ordinal = N)]` - eager registration order (defaults to 0)
pub use rtti_macros::Identifiable;
