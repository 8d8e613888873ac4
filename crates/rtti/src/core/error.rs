use super::id::RuntimeId;

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
	#[error("{registry}: type name {name:?} is already registered as #{existing}")]
	DuplicateName {
		registry: &'static str,
		name: Box<str>,
		existing: RuntimeId,
	},

	#[error("{registry}: runtime id space exhausted")]
	IdSpaceExhausted { registry: &'static str },
}

/// Registry lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("global type registry is already initialized")]
	AlreadyInitialized,
}

/// Dispatch failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
	/// The descriptor matched an arm but the value is not of the arm's type.
	#[error("value reports descriptor {descriptor:?} but is not a {expected}")]
	Mismatch {
		descriptor: Box<str>,
		expected: &'static str,
	},

	/// No arm matched and no fallback is installed.
	#[error("no handler for {}", .descriptor.as_deref().unwrap_or("untyped value"))]
	Unhandled { descriptor: Option<Box<str>> },
}
