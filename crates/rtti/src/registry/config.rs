use crate::core::DuplicatePolicy;

/// Construction-time settings for a [`super::TypeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	label: &'static str,
	duplicate_policy: DuplicatePolicy,
}

impl RegistryConfig {
	/// Label used for the process-wide registry.
	pub const GLOBAL_LABEL: &'static str = "global";
	/// Label used by [`RegistryConfig::default`].
	pub const DEFAULT_LABEL: &'static str = "types";

	/// Creates a config with the given label for logs and errors.
	pub const fn new(label: &'static str) -> Self {
		Self {
			label,
			duplicate_policy: DuplicatePolicy::Reject,
		}
	}

	/// Sets the duplicate-name handling policy.
	pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_policy = policy;
		self
	}

	pub const fn label(&self) -> &'static str {
		self.label
	}

	pub const fn policy(&self) -> DuplicatePolicy {
		self.duplicate_policy
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self::new(Self::DEFAULT_LABEL)
	}
}
