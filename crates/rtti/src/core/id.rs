use std::num::NonZeroU32;

/// Process-unique runtime identifier of a registered type.
///
/// Ids are minted by [`crate::TypeRegistry`] starting at 1 and are never
/// reused. Zero is unrepresentable, so `Option<RuntimeId>` spells "no type"
/// at no extra cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeId(NonZeroU32);

impl RuntimeId {
	/// The first id handed out by a fresh registry.
	pub const FIRST: Self = Self(NonZeroU32::MIN);

	/// Wraps a raw id, returning `None` for the reserved value 0.
	#[inline]
	pub const fn new(raw: u32) -> Option<Self> {
		match NonZeroU32::new(raw) {
			Some(id) => Some(Self(id)),
			None => None,
		}
	}

	/// Returns the raw integer value.
	#[inline]
	pub const fn get(self) -> u32 {
		self.0.get()
	}

	/// Returns the id following this one, or `None` once the space is exhausted.
	#[inline]
	pub const fn next(self) -> Option<Self> {
		match self.0.checked_add(1) {
			Some(id) => Some(Self(id)),
			None => None,
		}
	}

	/// Zero-based slot of this id in a registry table.
	#[inline]
	pub(crate) const fn index(self) -> usize {
		(self.0.get() - 1) as usize
	}
}

impl std::fmt::Display for RuntimeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::RuntimeId;

	#[test]
	fn zero_is_reserved() {
		assert!(RuntimeId::new(0).is_none());
		assert_eq!(RuntimeId::new(1), Some(RuntimeId::FIRST));
		assert_eq!(std::mem::size_of::<Option<RuntimeId>>(), std::mem::size_of::<u32>());
	}

	#[test]
	fn next_is_strictly_greater() {
		let first = RuntimeId::FIRST;
		let second = first.next().expect("space left");
		assert!(second > first);
		assert_eq!(second.get(), 2);
		assert_eq!(second.index(), 1);
		assert!(RuntimeId::new(u32::MAX).expect("nonzero").next().is_none());
	}
}
