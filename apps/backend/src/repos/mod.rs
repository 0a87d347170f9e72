//! Data access: in-memory registries behind the service layer.

pub mod games;

pub use games::GameRegistry;
