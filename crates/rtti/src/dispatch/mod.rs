//! Descriptor-identity dispatch.
//!
//! A dispatcher classifies a `&dyn Identify` by comparing the descriptor it
//! reports against an ordered list of candidates. The first identical
//! descriptor selects the arm; everything else goes to the fallback. Arms
//! receive the value already converted to their concrete type, and that
//! conversion is checked: a value whose descriptor matches but whose concrete
//! type does not is reported as [`DispatchError::Mismatch`].
//!
//! Two equivalent forms exist:
//!
//! - [`Dispatcher`]: a reusable table of per-type handler closures.
//! - [`dispatch!`](crate::dispatch!): an expression macro for one-off matches.

#[cfg(test)]
mod tests;

use std::any::Any;

use crate::core::{DispatchError, TypeRef};
use crate::identify::{Identifiable, Identify};

type ArmHandler<'h, R> = Box<dyn Fn(&dyn Any) -> Option<R> + 'h>;
type FallbackHandler<'h, R> = Box<dyn Fn(&dyn Identify) -> R + 'h>;

struct Arm<'h, R> {
	descriptor: &'static TypeRef,
	expected: &'static str,
	handler: ArmHandler<'h, R>,
}

/// Ordered table of per-type handlers with an optional fallback.
pub struct Dispatcher<'h, R> {
	arms: Vec<Arm<'h, R>>,
	fallback: Option<FallbackHandler<'h, R>>,
}

impl<'h, R> Dispatcher<'h, R> {
	pub fn new() -> Self {
		Self {
			arms: Vec::new(),
			fallback: None,
		}
	}

	/// Appends an arm for `T`. Arms are tried in insertion order.
	///
	/// A `T` without a descriptor gets no arm; its values reach the fallback.
	pub fn on<T, F>(mut self, handler: F) -> Self
	where
		T: Identifiable,
		F: Fn(&T) -> R + 'h,
	{
		let Some(descriptor) = T::type_descriptor() else {
			tracing::debug!(
				rust_type = std::any::type_name::<T>(),
				"type has no descriptor; dispatch arm skipped"
			);
			return self;
		};
		self.arms.push(Arm {
			descriptor,
			expected: std::any::type_name::<T>(),
			handler: Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&handler)),
		});
		self
	}

	/// Sets the handler for values no arm claims, including untyped ones.
	pub fn fallback<F>(mut self, handler: F) -> Self
	where
		F: Fn(&dyn Identify) -> R + 'h,
	{
		self.fallback = Some(Box::new(handler));
		self
	}

	/// Routes `value` to the first arm whose descriptor it reports.
	pub fn dispatch(&self, value: &dyn Identify) -> Result<R, DispatchError> {
		let descriptor = value.type_ref();

		if let Some(descriptor) = descriptor
			&& let Some(arm) = self.arms.iter().find(|arm| arm.descriptor == descriptor)
		{
			let any: &dyn Any = value;
			return (arm.handler)(any).ok_or_else(|| DispatchError::Mismatch {
				descriptor: descriptor.name().into(),
				expected: arm.expected,
			});
		}

		match &self.fallback {
			Some(fallback) => Ok(fallback(value)),
			None => Err(DispatchError::Unhandled {
				descriptor: descriptor.map(|d| d.name().into()),
			}),
		}
	}

	/// Dispatches each value in order, stopping at the first error.
	pub fn dispatch_all<'v, I>(&self, values: I) -> Result<Vec<R>, DispatchError>
	where
		I: IntoIterator<Item = &'v dyn Identify>,
	{
		values.into_iter().map(|value| self.dispatch(value)).collect()
	}

	/// Returns the number of typed arms.
	pub fn len(&self) -> usize {
		self.arms.len()
	}

	/// Returns true if no typed arms are installed.
	pub fn is_empty(&self) -> bool {
		self.arms.is_empty()
	}
}

impl<R> Default for Dispatcher<'_, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> std::fmt::Debug for Dispatcher<'_, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dispatcher")
			.field(
				"arms",
				&self.arms.iter().map(|arm| arm.descriptor.name()).collect::<Vec<_>>(),
			)
			.field("fallback", &self.fallback.is_some())
			.finish()
	}
}

/// Matches a `&dyn Identify` against concrete types by descriptor identity.
///
/// Arms are tried top to bottom; each binds the value as `&T`. The trailing
/// `else` arm binds the unmatched `&dyn Identify`.
///
/// ```ignore
/// let label = rtti::dispatch!(value, {
///     Bar => |bar| format!("bar {}", bar.m[0]),
///     Foo => |foo| format!("foo {}", foo.x),
///     else => |_other| String::from("unknown"),
/// });
/// ```
#[macro_export]
macro_rules! dispatch {
	($value:expr, {
		$($ty:ty => |$bind:pat_param| $body:expr,)*
		else => |$other:pat_param| $fallback:expr $(,)?
	}) => {{
		let __value: &dyn $crate::Identify = $value;
		'dispatch: {
			$(
				if let ::std::option::Option::Some($bind) = __value.downcast_ref::<$ty>() {
					break 'dispatch $body;
				}
			)*
			let $other = __value;
			$fallback
		}
	}};
}
