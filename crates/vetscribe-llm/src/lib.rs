//! LLM adapter for dental finding extraction.
//!
//! This crate builds dental extraction prompts, parses model replies into
//! findings maps, and hands them to the `vetscribe-core` chart assembler.
//! Backends plug in through [`FindingsExtractor`].

pub mod analysis;
pub mod config;
pub mod extraction;
pub mod prompts;

pub use analysis::*;
pub use config::*;
pub use extraction::*;
pub use prompts::*;
