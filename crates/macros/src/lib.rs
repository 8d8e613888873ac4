//! Procedural macros for the rtti type registry.
//!
//! Provides derive macros:
//! * `#[derive(Identifiable)]` - per-type descriptor slot, capability impls and
//!   eager registration

use proc_macro::TokenStream;

/// Identifiable derive macro implementation.
mod identifiable;

/// Derives `rtti::Identifiable` and `rtti::Identify` for a non-generic type.
///
/// ```ignore
/// #[derive(Identifiable)]
/// #[rtti(name = "BarObject", ordinal = 1)]
/// pub struct Bar {
///     base: Foo,
///     m: [f32; 4],
/// }
/// ```
///
/// Generates:
/// * A private `rtti::TypeSlot` static caching the descriptor
/// * `impl Identifiable` with `NAME` set to the display name
/// * `impl Identify` reporting the type's own descriptor
/// * An `inventory` submission so the global registry registers the type eagerly
///
/// # Attributes
///
/// - `name = "..."` - Optional: display name (defaults to the type identifier)
/// - `ordinal = N` - Optional: eager registration order, lower first (default 0)
///
/// # Registration order
///
/// Runtime ids are assigned in `(ordinal, name, rust type)` order, never in
/// declaration order: without `ordinal`, `Foo` declared before `Bar` still
/// gets the larger id because `"Bar" < "Foo"`. Give `ordinal`s when id order
/// matters.
///
/// # Duplicate names
///
/// Under the default `DuplicatePolicy::Reject`, a type that loses its name to
/// an earlier type in that order gets no descriptor. Its `type_descriptor()`
/// and `type_ref()` return `None` and dispatch sends its values to the fallback.
#[proc_macro_derive(Identifiable, attributes(rtti))]
pub fn derive_identifiable(input: TokenStream) -> TokenStream {
	identifiable::derive_identifiable(input)
}
