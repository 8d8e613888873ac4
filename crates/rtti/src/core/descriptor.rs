//! Type descriptors and their identity handles.
//!
//! # Invariants
//!
//! - A descriptor is immutable once minted and never relocated: the registry
//!   table and every [`TypeRef`] share one allocation.
//! - Descriptor equality is handle identity, never a comparison of fields. Two
//!   descriptors may share a name when a registry runs with
//!   [`crate::DuplicatePolicy::Replace`].

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use super::id::RuntimeId;

/// Runtime description of a registered type.
#[derive(Debug)]
pub struct TypeDescriptor {
	runtime_id: RuntimeId,
	name: Box<str>,
	size: usize,
	rust_type: Option<&'static str>,
}

impl TypeDescriptor {
	pub(crate) fn new(
		runtime_id: RuntimeId,
		name: &str,
		size: usize,
		rust_type: Option<&'static str>,
	) -> Self {
		Self {
			runtime_id,
			name: name.into(),
			size,
			rust_type,
		}
	}

	/// Returns the id minted for this descriptor.
	#[inline]
	pub fn runtime_id(&self) -> RuntimeId {
		self.runtime_id
	}

	/// Returns the registered display name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the in-memory size supplied at registration.
	#[inline]
	pub fn size(&self) -> usize {
		self.size
	}

	/// Returns the full Rust type path for typed registrations.
	#[inline]
	pub fn rust_type(&self) -> Option<&'static str> {
		self.rust_type
	}
}

impl std::fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "TYPE {}:", self.name)?;
		writeln!(f, "   SIZE: {}", self.size)?;
		write!(f, "   RUNTIME ID: {}", self.runtime_id)
	}
}

/// Shared handle to a [`TypeDescriptor`] compared by identity.
///
/// Cloning a handle is a reference-count bump. Handles stay valid for as long
/// as they are held, even if the registry later rebinds the name.
#[derive(Clone)]
pub struct TypeRef(Arc<TypeDescriptor>);

impl TypeRef {
	pub(crate) fn new(descriptor: TypeDescriptor) -> Self {
		Self(Arc::new(descriptor))
	}

	/// Returns true if both handles point at the same descriptor.
	#[inline]
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}

	/// Returns the descriptor address used for identity.
	#[inline]
	pub fn as_ptr(&self) -> *const TypeDescriptor {
		Arc::as_ptr(&self.0)
	}
}

impl Deref for TypeRef {
	type Target = TypeDescriptor;

	#[inline]
	fn deref(&self) -> &TypeDescriptor {
		&self.0
	}
}

impl PartialEq for TypeRef {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		Self::ptr_eq(self, other)
	}
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::hash(self.as_ptr(), state)
	}
}

impl std::fmt::Debug for TypeRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRef")
			.field("runtime_id", &self.runtime_id)
			.field("name", &self.name())
			.field("size", &self.size)
			.finish()
	}
}

impl std::fmt::Display for TypeRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&**self, f)
	}
}
