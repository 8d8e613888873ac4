//! Registry diagnostics.
//!
//! Dumps every live descriptor together with the duplicate-name collisions a
//! registry has seen, so registration conflicts can be spotted at startup.

use crate::core::{Collision, TypeRef};
use crate::registry::TypeRegistry;

/// Point-in-time report of a registry's contents.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
	pub registry: &'static str,
	pub descriptors: Vec<TypeRef>,
	pub collisions: Vec<Collision>,
}

impl DiagnosticReport {
	/// Returns true if the registry has recorded any collision.
	pub fn has_collisions(&self) -> bool {
		!self.collisions.is_empty()
	}
}

impl std::fmt::Display for DiagnosticReport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "registry {} ({} types)", self.registry, self.descriptors.len())?;
		for descriptor in &self.descriptors {
			writeln!(f, "{descriptor}")?;
		}
		for collision in &self.collisions {
			writeln!(f, "collision: {collision}")?;
		}
		Ok(())
	}
}

impl TypeRegistry {
	/// Captures descriptors and collisions for diagnostics.
	pub fn diagnostics(&self) -> DiagnosticReport {
		DiagnosticReport {
			registry: self.label(),
			descriptors: self.descriptors(),
			collisions: self.collisions(),
		}
	}
}

/// Generates a diagnostic report for the global registry.
pub fn diagnostics() -> DiagnosticReport {
	TypeRegistry::global().diagnostics()
}
