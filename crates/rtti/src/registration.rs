//! Per-type descriptor caching and static registration records.
//!
//! `#[derive(Identifiable)]` emits one [`TypeSlot`] static per type plus a
//! [`Registration`] record submitted through `inventory`. The global registry
//! walks those records once on first access, so a slot is normally filled
//! before any instance of its type reaches a dispatcher.

use std::any::TypeId;
use std::sync::OnceLock;

use crate::core::TypeRef;
use crate::registry::TypeRegistry;

/// Type-level cache of a descriptor issued by the global registry.
///
/// The cached value is the registration outcome: a type whose registration
/// the global registry refused stays without a descriptor, exactly like a type
/// that never participated.
pub struct TypeSlot {
	cell: OnceLock<Option<TypeRef>>,
}

impl TypeSlot {
	pub const fn new() -> Self {
		Self {
			cell: OnceLock::new(),
		}
	}

	/// Reads the cached descriptor without registering anything.
	#[inline]
	pub fn peek(&self) -> Option<&TypeRef> {
		self.cell.get().and_then(Option::as_ref)
	}

	/// Returns the cached descriptor, registering `T` under `name` on first use.
	///
	/// Returns `None` if the global registry refuses the registration, which
	/// happens when another type already owns `name` under
	/// [`crate::DuplicatePolicy::Reject`]. The refusal is cached and not retried.
	pub fn get_or_register<T: 'static>(&self, name: &'static str) -> Option<&TypeRef> {
		if let Some(outcome) = self.cell.get() {
			return outcome.as_ref();
		}
		let registry = TypeRegistry::global();
		self.cell
			.get_or_init(|| match registry.create_type_id_of::<T>(name) {
				Ok(descriptor) => Some(descriptor),
				Err(e) => {
					tracing::warn!(
						registry = registry.label(),
						rust_type = std::any::type_name::<T>(),
						error = %e,
						"type left without a descriptor"
					);
					None
				}
			})
			.as_ref()
	}

	pub(crate) fn fill(&self, outcome: Option<TypeRef>) {
		// A racing `get_or_register` may have won; both hold the same outcome.
		let _ = self.cell.set(outcome);
	}
}

impl Default for TypeSlot {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TypeSlot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeSlot").field(&self.cell.get()).finish()
	}
}

/// Static registration record emitted by `#[derive(Identifiable)]`.
pub struct Registration {
	name: &'static str,
	ordinal: i32,
	size: usize,
	type_id: fn() -> TypeId,
	rust_type: fn() -> &'static str,
	slot: &'static TypeSlot,
}

inventory::collect!(Registration);

impl Registration {
	/// Describes `T` for eager registration.
	///
	/// Records are registered in ascending `ordinal`, then by name, then by
	/// Rust type name. Declaration order plays no part.
	pub const fn new<T: 'static>(name: &'static str, ordinal: i32, slot: &'static TypeSlot) -> Self {
		Self {
			name,
			ordinal,
			size: std::mem::size_of::<T>(),
			type_id: TypeId::of::<T>,
			rust_type: std::any::type_name::<T>,
			slot,
		}
	}

	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[inline]
	pub fn ordinal(&self) -> i32 {
		self.ordinal
	}

	#[inline]
	pub fn size(&self) -> usize {
		self.size
	}

	#[inline]
	pub fn type_id(&self) -> TypeId {
		(self.type_id)()
	}

	#[inline]
	pub fn rust_type(&self) -> &'static str {
		(self.rust_type)()
	}

	#[inline]
	pub fn slot(&self) -> &'static TypeSlot {
		self.slot
	}
}

impl std::fmt::Debug for Registration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registration")
			.field("name", &self.name)
			.field("ordinal", &self.ordinal)
			.field("size", &self.size)
			.field("rust_type", &self.rust_type())
			.finish()
	}
}

/// Returns the Rust type name of `T` without its module path.
///
/// Generic arguments are kept verbatim: `alloc::vec::Vec<u8>` becomes `Vec<u8>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	let head = full.find('<').unwrap_or(full.len());
	match full[..head].rfind("::") {
		Some(pos) => &full[pos + 2..],
		None => full,
	}
}
