//! Error types for AdviseeMatrix

use thiserror::Error;

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for planner operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested major key is not in the plan store
    #[error("Major not found: {0}")]
    MajorNotFound(String),

    /// Requested section is not part of the plan
    #[error("Section '{section}' not found in {major}")]
    SectionNotFound { major: String, section: String },

    /// Slot index past the end of a section
    #[error("Slot {index} out of range for '{section}' ({len} slots)")]
    SlotOutOfRange {
        section: String,
        index: usize,
        len: usize,
    },

    /// Credit value outside the accepted range
    #[error("Invalid credits: {credits} (allowed 0-{max})")]
    InvalidCredits { credits: u32, max: u32 },

    /// An operation needs a selected major
    #[error("No major selected")]
    NoMajorSelected,

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unparseable enumeration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
