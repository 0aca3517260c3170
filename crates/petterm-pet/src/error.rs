//! Error types for the petterm-pet crate.
//!
//! Guard rejections (sleeping pet, saturated stat, missing item) are not
//! errors: they come back as result values. The variants here cover the
//! conditions a caller cannot recover from by changing its input.

use petterm_ledger::LedgerError;

/// Errors that can occur while mutating a pet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    /// Attempted to remove more of an item than the inventory holds.
    #[error("insufficient items: wanted {requested} of {item_id} but only have {available}")]
    InsufficientItems {
        /// The item being removed.
        item_id: String,
        /// The quantity the caller attempted to remove.
        requested: u32,
        /// The quantity actually held.
        available: u32,
    },

    /// The item id is not in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A coin ledger operation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// An arithmetic overflow occurred.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
