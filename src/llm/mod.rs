//! LLM domain — the classifier gateway.
//!
//! Public API for the Brain layer of EcoGuide. External code should only
//! use what is exported here.
//!
//! Layout:
//!   - gemini.rs   — the Gemini `generateContent` call
//!   - prompts.rs  — system prompt + user-message builder
//!   - parse.rs    — pipe-delimited response parser
//!   - provider.rs — credential/model/endpoint resolution
//!   - types.rs    — Classification, Outcome, ClassifyError

mod gemini;
pub mod parse;
pub mod prompts;
pub mod provider;
pub mod types;

pub use gemini::classify;
pub use parse::parse_classification;
pub use types::{Classification, ClassifyError, Outcome};
