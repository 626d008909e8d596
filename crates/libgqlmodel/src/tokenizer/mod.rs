//! Splits raw SDL text into one normalized text block per top-level
//! declaration.

mod entity_tokenizer;
mod line_normalizer;
pub(crate) mod patterns;

pub use entity_tokenizer::EntityTokenizer;
pub use line_normalizer::LineNormalizer;

#[cfg(test)]
mod tests;
