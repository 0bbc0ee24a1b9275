//! Revision suggestions for scored content

pub mod brand_voice;
pub mod revision;

pub use brand_voice::{BrandVoice, ToneProfile};
pub use revision::{RevisionPromptBuilder, MAX_PROMPT_TEXT_CHARS};
