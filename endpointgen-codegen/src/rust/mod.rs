//! Rust code generation modules.

pub mod consts;
pub mod literals;
pub mod resolvers;

pub use consts::ConstGenerator;
pub use resolvers::ResolverGenerator;
