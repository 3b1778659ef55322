//! EcoGuide — AI-powered waste-classification assistant.
//!
//! The library is the classifier gateway plus the static reference data;
//! the binary in main.rs is one possible front end. No business logic
//! lives outside these modules:
//!
//!   - llm    — prompt → Gemini → parsed [`llm::Outcome`]
//!   - guide  — the five disposal bins and the quick reference guide
//!   - render — terminal cards for results and the guide

pub mod guide;
pub mod llm;
pub mod render;
