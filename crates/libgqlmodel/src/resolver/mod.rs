//! Maps declared field and argument types onto concrete representation
//! types under a [`ModelConfig`](crate::config::ModelConfig).

mod builtin_scalar;
mod type_resolver;

pub use builtin_scalar::BuiltinScalar;
pub use type_resolver::TypeResolver;

#[cfg(test)]
mod tests;
