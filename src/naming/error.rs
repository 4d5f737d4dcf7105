use thiserror::Error;

/// Errors produced while validating user-supplied tag text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Nothing left after trimming whitespace and the leading `#`
    #[error("Empty tag provided")]
    Empty,
    /// Tag text contains characters outside the hashtag alphabet
    #[error("Invalid tag '{tag}': expected '#' followed by letters, digits or '_'")]
    Invalid { tag: String },
    /// Priority outside `1..=5`
    #[error("Invalid priority {value}: expected a number from 1 to 5")]
    PriorityOutOfRange { value: u8 },
}
