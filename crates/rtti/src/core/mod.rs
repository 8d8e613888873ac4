//! Shared registry infrastructure.

pub mod collision;
pub mod descriptor;
pub mod error;
pub mod id;

pub use collision::{Collision, DuplicatePolicy, Resolution};
pub use descriptor::{TypeDescriptor, TypeRef};
pub use error::{DispatchError, RegisterError, RegistryError};
pub use id::RuntimeId;
