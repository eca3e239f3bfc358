//! Builders to construct table controllers from configuration.

pub mod controller_builder;

pub use controller_builder::TableControllerBuilder;
