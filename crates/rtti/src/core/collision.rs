//! Duplicate-name policy and collision records.
//!
//! # Role
//!
//! Names are the only user-chosen key in a registry, so two registrations can
//! disagree on who owns one. This module defines how a registry settles that
//! and what it records for diagnostics.

use super::id::RuntimeId;

/// How a registry treats a second registration under a live name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Refuse the registration with [`crate::RegisterError::DuplicateName`].
	#[default]
	Reject,
	/// Mint a fresh descriptor and rebind the name to it.
	///
	/// Handles to the previous descriptor remain valid but no longer resolve
	/// by name.
	Replace,
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Reject => write!(f, "reject"),
			Self::Replace => write!(f, "replace"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Incoming registration refused; existing binding kept.
	Rejected,
	/// Existing binding replaced by the incoming descriptor.
	ReplacedExisting,
}

/// A duplicate-name registration observed by a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub registry: &'static str,
	pub name: Box<str>,
	/// Descriptor bound to the name when the registration arrived.
	pub existing: RuntimeId,
	/// Descriptor minted for the incoming registration, if any.
	pub incoming: Option<RuntimeId>,
	pub resolution: Resolution,
}

impl std::fmt::Display for Collision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match (self.resolution, self.incoming) {
			(Resolution::ReplacedExisting, Some(incoming)) => write!(
				f,
				"{}: name {:?} rebound from #{} to #{}",
				self.registry, self.name, self.existing, incoming
			),
			_ => write!(
				f,
				"{}: name {:?} already owned by #{}; registration rejected",
				self.registry, self.name, self.existing
			),
		}
	}
}
