#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Type registry: mints descriptors and resolves them by name, id or Rust type.
//!
//! # Mental Model
//!
//! 1. **Registration:** [`TypeRegistry::create_type_id`] mints a [`TypeRef`] with the next
//!    [`RuntimeId`] and binds it to a name. Typed registrations also bind the Rust
//!    [`TypeId`] so generic code can find the descriptor without the type's cooperation.
//! 2. **Caching:** Participating types keep their handle in a [`crate::TypeSlot`], so the
//!    dispatch path never touches this registry.
//! 3. **Lookup:** Name, runtime id and type lookups are diagnostics and dynamic paths.
//!
//! # Invariants
//!
//! - Runtime ids are strictly increasing from [`RuntimeId::FIRST`] and never reused.
//!   - Enforced in: [`Inner::mint`] (id derived from the append-only table length).
//!   - Tested by: `tests::runtime_ids_strictly_increase`
//! - At most one live descriptor per name.
//!   - Enforced in: [`TypeRegistry::insert`] via [`DuplicatePolicy`].
//!   - Tested by: `tests::duplicate_name_rejected_by_default`, `tests::replace_rebinds_name`
//! - A Rust type maps to at most one descriptor per registry.
//!   - Enforced in: [`TypeRegistry::insert`] (typed registration is idempotent).
//!   - Tested by: `tests::typed_registration_is_idempotent`
//!
//! # Concurrency
//!
//! All operations take `&self`. Writes hold the lock only for the insert itself;
//! reads share it. The process-wide instance is created once under
//! [`std::sync::OnceLock`].

mod config;
mod global;


use std::any::{Any, TypeId};

pub use config::RegistryConfig;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::core::{
	Collision, DuplicatePolicy, RegisterError, Resolution, RuntimeId, TypeDescriptor, TypeRef,
};
use crate::registration::{Registration, short_type_name};

/// Owner and source of truth for type descriptors.
pub struct TypeRegistry {
	config: RegistryConfig,
	inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
	/// Every descriptor ever minted, indexed by `runtime_id - 1`.
	table: Vec<TypeRef>,
	by_name: FxHashMap<Box<str>, TypeRef>,
	by_type: FxHashMap<TypeId, TypeRef>,
	collisions: Vec<Collision>,
}

impl Inner {
	fn mint(
		&mut self,
		label: &'static str,
		name: &str,
		size: usize,
		rust_type: Option<&'static str>,
	) -> Result<TypeRef, RegisterError> {
		let runtime_id = u32::try_from(self.table.len() + 1)
			.ok()
			.and_then(RuntimeId::new)
			.ok_or(RegisterError::IdSpaceExhausted { registry: label })?;
		let descriptor = TypeRef::new(TypeDescriptor::new(runtime_id, name, size, rust_type));
		self.table.push(descriptor.clone());
		Ok(descriptor)
	}
}

impl TypeRegistry {
	/// Creates an empty registry.
	pub fn new(config: RegistryConfig) -> Self {
		Self {
			config,
			inner: RwLock::new(Inner::default()),
		}
	}

	/// Returns the label used in logs and errors.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.config.label()
	}

	#[inline]
	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Mints a descriptor for `name` with an explicit size.
	///
	/// A live `name` is handled according to the configured [`DuplicatePolicy`].
	pub fn create_type_id(&self, name: &str, size: usize) -> Result<TypeRef, RegisterError> {
		self.insert(name, size, None)
	}

	/// Mints a descriptor for `T` under `name`, taking the size from `T`'s layout.
	///
	/// Registering a type that is already bound returns its existing descriptor.
	pub fn create_type_id_of<T: 'static>(&self, name: &str) -> Result<TypeRef, RegisterError> {
		self.insert(
			name,
			std::mem::size_of::<T>(),
			Some((TypeId::of::<T>(), std::any::type_name::<T>())),
		)
	}

	/// Registers `T` under its unqualified Rust type name.
	pub fn register_type<T: 'static>(&self) -> Result<TypeRef, RegisterError> {
		self.create_type_id_of::<T>(short_type_name::<T>())
	}

	/// Registers a batch of collected records in `(ordinal, name, rust_type)` order.
	///
	/// The order is independent of the input order, so two records sharing a
	/// name always settle the same way. Each outcome is returned next to its
	/// record; a failed record does not stop the batch.
	pub fn register_all<'a, I>(
		&self,
		registrations: I,
	) -> Vec<(&'a Registration, Result<TypeRef, RegisterError>)>
	where
		I: IntoIterator<Item = &'a Registration>,
	{
		let mut registrations: Vec<&'a Registration> = registrations.into_iter().collect();
		registrations.sort_by(|a, b| {
			a.ordinal()
				.cmp(&b.ordinal())
				.then_with(|| a.name().cmp(b.name()))
				.then_with(|| a.rust_type().cmp(b.rust_type()))
		});

		registrations
			.into_iter()
			.map(|registration| {
				let outcome = self.insert(
					registration.name(),
					registration.size(),
					Some((registration.type_id(), registration.rust_type())),
				);
				(registration, outcome)
			})
			.collect()
	}

	fn insert(
		&self,
		name: &str,
		size: usize,
		ty: Option<(TypeId, &'static str)>,
	) -> Result<TypeRef, RegisterError> {
		let label = self.label();
		let mut guard = self.inner.write();
		let inner = &mut *guard;

		if let Some((type_id, rust_type)) = ty
			&& let Some(existing) = inner.by_type.get(&type_id)
		{
			tracing::debug!(
				registry = label,
				rust_type,
				runtime_id = %existing.runtime_id(),
				"type already registered; reusing descriptor"
			);
			return Ok(existing.clone());
		}

		let bound = inner.by_name.get(name).map(|d| d.runtime_id());
		let superseded = match (bound, self.config.policy()) {
			(None, _) => None,
			(Some(existing), DuplicatePolicy::Replace) => Some(existing),
			(Some(existing), DuplicatePolicy::Reject) => {
				inner.collisions.push(Collision {
					registry: label,
					name: name.into(),
					existing,
					incoming: None,
					resolution: Resolution::Rejected,
				});
				tracing::warn!(
					registry = label,
					name,
					existing = %existing,
					"duplicate type name rejected"
				);
				return Err(RegisterError::DuplicateName {
					registry: label,
					name: name.into(),
					existing,
				});
			}
		};

		let descriptor = inner.mint(label, name, size, ty.map(|(_, rust_type)| rust_type))?;
		let runtime_id = descriptor.runtime_id();

		if let Some(existing) = superseded {
			inner.collisions.push(Collision {
				registry: label,
				name: name.into(),
				existing,
				incoming: Some(runtime_id),
				resolution: Resolution::ReplacedExisting,
			});
			tracing::warn!(
				registry = label,
				name,
				existing = %existing,
				runtime_id = %runtime_id,
				"type name re-registered; previous descriptor is now stale"
			);
		}

		inner.by_name.insert(name.into(), descriptor.clone());
		if let Some((type_id, _)) = ty {
			inner.by_type.insert(type_id, descriptor.clone());
		}

		tracing::debug!(registry = label, name, size, runtime_id = %runtime_id, "type registered");
		Ok(descriptor)
	}

	/// Returns the descriptor currently bound to `name`.
	pub fn find_type_by_name(&self, name: &str) -> Option<TypeRef> {
		self.inner.read().by_name.get(name).cloned()
	}

	/// Returns the descriptor minted with `id`, including superseded ones.
	pub fn find_type_by_runtime_id(&self, id: RuntimeId) -> Option<TypeRef> {
		self.inner.read().table.get(id.index()).cloned()
	}

	/// Returns the descriptor bound to the Rust type `T`.
	#[inline]
	pub fn lookup<T: ?Sized + 'static>(&self) -> Option<TypeRef> {
		self.lookup_type_id(TypeId::of::<T>())
	}

	/// Returns the descriptor bound to a [`TypeId`].
	pub fn lookup_type_id(&self, type_id: TypeId) -> Option<TypeRef> {
		self.inner.read().by_type.get(&type_id).cloned()
	}

	/// Returns the descriptor bound to the concrete type of `value`.
	#[inline]
	pub fn descriptor_of_val(&self, value: &dyn Any) -> Option<TypeRef> {
		self.lookup_type_id(Any::type_id(value))
	}

	/// Returns live descriptors ordered by runtime id.
	pub fn descriptors(&self) -> Vec<TypeRef> {
		let mut live: Vec<TypeRef> = self.inner.read().by_name.values().cloned().collect();
		live.sort_by_key(|d| d.runtime_id());
		live
	}

	/// Returns recorded duplicate-name collisions in arrival order.
	pub fn collisions(&self) -> Vec<Collision> {
		self.inner.read().collisions.clone()
	}

	/// Returns the number of live descriptors.
	pub fn len(&self) -> usize {
		self.inner.read().by_name.len()
	}

	/// Returns true if no descriptors are live.
	pub fn is_empty(&self) -> bool {
		self.inner.read().by_name.is_empty()
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new(RegistryConfig::default())
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("label", &self.label())
			.field("policy", &self.config.policy())
			.field("len", &self.len())
			.finish()
	}
}
