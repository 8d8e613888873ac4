//! The process-wide registry instance.

use std::sync::OnceLock;

use super::{RegistryConfig, TypeRegistry};
use crate::core::RegistryError;
use crate::registration::Registration;

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

impl TypeRegistry {
	/// Returns the process-wide registry, building it on first access.
	///
	/// The first call registers every `#[derive(Identifiable)]` type linked into
	/// the binary and fills its [`crate::TypeSlot`].
	pub fn global() -> &'static TypeRegistry {
		GLOBAL.get_or_init(|| build_global(RegistryConfig::new(RegistryConfig::GLOBAL_LABEL)))
	}

	/// Builds the process-wide registry with `config`.
	///
	/// Must run before anything touches [`TypeRegistry::global`]; afterwards the
	/// configuration is fixed and this returns [`RegistryError::AlreadyInitialized`].
	pub fn init_global(config: RegistryConfig) -> Result<&'static TypeRegistry, RegistryError> {
		let mut built = false;
		let registry = GLOBAL.get_or_init(|| {
			built = true;
			build_global(config)
		});
		if built {
			Ok(registry)
		} else {
			Err(RegistryError::AlreadyInitialized)
		}
	}
}

fn build_global(config: RegistryConfig) -> TypeRegistry {
	let registry = TypeRegistry::new(config);
	let mut registered = 0usize;

	for (registration, outcome) in registry.register_all(inventory::iter::<Registration>) {
		match outcome {
			Ok(descriptor) => {
				registration.slot().fill(Some(descriptor));
				registered += 1;
			}
			Err(e) => {
				tracing::error!(
					registry = config.label(),
					name = registration.name(),
					rust_type = registration.rust_type(),
					error = %e,
					"eager type registration failed; type reports no descriptor"
				);
				registration.slot().fill(None);
			}
		}
	}

	tracing::debug!(
		registry = config.label(),
		registered,
		policy = %config.policy(),
		"global type registry initialized"
	);
	registry
}
