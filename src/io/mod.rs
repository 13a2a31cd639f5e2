//! Input/output: command line, prompts, source discovery, export and errors

/// Command-line parsing and session orchestration
pub mod cli;
/// Layout constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Output format resolution and collage export
pub mod image;
/// Progress display while decoding sources
pub mod progress;
/// Interactive question and answer session
pub mod prompt;
/// Source directory listing and decoding
pub mod source;
