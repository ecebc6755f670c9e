//! Text preparation for sentiment scoring

pub mod lemmatizer;
pub mod normalizer;

pub use lemmatizer::{IdentityLemmatizer, Lemmatizer, PluralLemmatizer, SnowballLemmatizer};
pub use normalizer::{clean_text, NormalizedText, TextNormalizer};
