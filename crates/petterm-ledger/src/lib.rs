//! Coin ledger for the Pet Terminal virtual pet.
//!
//! Every coin that enters or leaves the pet's wallet is recorded as a
//! [`CoinEntry`](petterm_types::CoinEntry): positive amounts are earnings,
//! negative amounts are spending. The ledger never panics; it returns errors.
//!
//! # Retention
//!
//! Only the most recent [`HISTORY_CAPACITY`] entries are kept. Older entries
//! are evicted first, so lifetime and per-day totals computed from the
//! history are exact only within that window. The balance itself is always
//! exact because it is stored separately.
//!
//! # Modules
//!
//! - [`ledger`] -- [`CoinLedger`], a mutable view over a balance and its history
//! - [`rewards`] -- The fixed coin reward table

pub mod ledger;
pub mod rewards;

pub use ledger::{CoinLedger, HISTORY_CAPACITY, earned_on, total_earned, total_spent};
pub use rewards::{STARTING_COINS, coin_reward};

/// Errors that can occur when moving coins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The balance does not cover the requested spend.
    #[error("insufficient coins: need {requested}, have {available}")]
    InsufficientFunds {
        /// Coins the caller tried to spend.
        requested: u64,
        /// Coins actually held.
        available: u64,
    },

    /// The amount does not fit in the ledger's signed entry type.
    #[error("coin amount too large: {0}")]
    AmountTooLarge(u64),

    /// The balance would overflow.
    #[error("arithmetic overflow in coin ledger: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
