//! The identity capability participating types implement.
//!
//! [`Identify`] is the object-safe, instance-level half: it answers "which
//! descriptor does this value report" through any `&dyn Identify`, and defaults
//! to no descriptor. [`Identifiable`] is the type-level half, normally derived.

use std::any::{Any, TypeId};

use crate::core::TypeRef;
use crate::registration::TypeSlot;
use crate::registry::TypeRegistry;

/// Instance-level descriptor access.
///
/// Types that do not participate implement this with no body and report
/// `None`. `#[derive(Identifiable)]` overrides [`Identify::type_ref`] so a value
/// reports its own concrete type's descriptor through any trait object.
pub trait Identify: Any {
	fn type_ref(&self) -> Option<&'static TypeRef> {
		None
	}
}

/// Type-level descriptor access.
///
/// Derive it rather than implementing it by hand:
///
/// ```ignore
/// #[derive(rtti::Identifiable)]
/// #[rtti(name = "FooObject")]
/// struct Foo {
///     x: i32,
///     y: i32,
/// }
///
/// let foo = Foo::type_descriptor().expect("registered");
/// assert_eq!(foo.name(), "FooObject");
/// ```
pub trait Identifiable: Identify + Sized {
	/// Display name registered for this type.
	const NAME: &'static str;

	/// Returns the static slot caching this type's descriptor.
	fn type_slot() -> &'static TypeSlot;

	/// Returns this type's descriptor, registering it on first use.
	///
	/// Returns `None` if the global registry refused the type, which happens
	/// when another type already owns [`Self::NAME`] under
	/// [`crate::DuplicatePolicy::Reject`]. Such a type behaves like a
	/// non-participant everywhere.
	#[inline]
	fn type_descriptor() -> Option<&'static TypeRef> {
		Self::type_slot().get_or_register::<Self>(Self::NAME)
	}
}

impl dyn Identify {
	/// Returns true if the value reports `T`'s descriptor and is a `T`.
	#[inline]
	pub fn is<T: Identifiable>(&self) -> bool {
		self.downcast_ref::<T>().is_some()
	}

	/// Returns the value as a `T` if its descriptor is `T`'s.
	///
	/// The descriptor is compared by identity first; the concrete type is then
	/// verified, so a value misreporting its descriptor yields `None`.
	pub fn downcast_ref<T: Identifiable>(&self) -> Option<&T> {
		if self.type_ref()? != T::type_descriptor()? {
			return None;
		}
		let any: &dyn Any = self;
		any.downcast_ref::<T>()
	}

	/// Mutable counterpart of [`downcast_ref`](Self::downcast_ref).
	pub fn downcast_mut<T: Identifiable>(&mut self) -> Option<&mut T> {
		if self.type_ref()? != T::type_descriptor()? {
			return None;
		}
		let any: &mut dyn Any = self;
		any.downcast_mut::<T>()
	}
}

/// Converts a boxed value into a `Box<T>`.
///
/// Like [`Box::downcast`], a mismatch hands the box back as `Box<dyn Any>`.
pub fn downcast_box<T: Identifiable>(value: Box<dyn Identify>) -> Result<Box<T>, Box<dyn Any>> {
	let claims_t = value.type_ref().is_some_and(|d| Some(d) == T::type_descriptor());
	let any: Box<dyn Any> = value;
	if !claims_t {
		return Err(any);
	}
	any.downcast::<T>()
}

/// Returns `T`'s descriptor; the trait bound is the capability check.
#[inline]
pub fn type_descriptor<T: Identifiable>() -> Option<&'static TypeRef> {
	T::type_descriptor()
}

/// Reads `T`'s cached descriptor without registering it.
///
/// Returns `None` until the global registry has been built or the type has
/// been resolved once, and always for a type the registry refused.
#[inline]
pub fn peek_type_descriptor<T: Identifiable>() -> Option<&'static TypeRef> {
	T::type_slot().peek()
}

/// Looks up any type in the global registry; non-participants yield `None`.
pub fn type_of<T: ?Sized + 'static>() -> Option<TypeRef> {
	TypeRegistry::global().lookup_type_id(TypeId::of::<T>())
}

/// Looks up the concrete type of `value` in the global registry.
pub fn type_of_val(value: &dyn Any) -> Option<TypeRef> {
	TypeRegistry::global().descriptor_of_val(value)
}

/// Finds a descriptor by name in the global registry.
pub fn find_type_by_name(name: &str) -> Option<TypeRef> {
	TypeRegistry::global().find_type_by_name(name)
}
