//! [`CoinLedger`]: earn and spend against a balance with a bounded history.
//!
//! The ledger borrows the balance and history straight out of the pet
//! record, so there is exactly one copy of the wallet in memory and nothing
//! to sync back before saving.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::debug;

use petterm_types::{CoinEntry, CoinReason};

use crate::LedgerError;

/// Maximum number of entries retained in the coin history.
pub const HISTORY_CAPACITY: usize = 100;

/// A mutable view over a coin balance and its history.
#[derive(Debug)]
pub struct CoinLedger<'a> {
    balance: &'a mut u64,
    history: &'a mut Vec<CoinEntry>,
}

impl<'a> CoinLedger<'a> {
    /// Wrap a balance and its history.
    pub const fn new(balance: &'a mut u64, history: &'a mut Vec<CoinEntry>) -> Self {
        Self { balance, history }
    }

    /// Current balance.
    pub const fn balance(&self) -> u64 {
        *self.balance
    }

    /// Credit `amount` coins and record the entry.
    ///
    /// A zero amount is a no-op and records nothing.
    pub fn earn(
        &mut self,
        amount: u64,
        reason: CoinReason,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let signed = i64::try_from(amount)
            .ok()
            .ok_or(LedgerError::AmountTooLarge(amount))?;
        let new_balance =
            self.balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::ArithmeticOverflow {
                    context: String::from("balance overflow in earn"),
                })?;

        *self.balance = new_balance;
        self.push(CoinEntry {
            amount: signed,
            reason,
            timestamp: at,
        });
        debug!(amount, ?reason, balance = new_balance, "coins earned");
        Ok(())
    }

    /// Debit `amount` coins and record a negative entry.
    ///
    /// Fails without touching the balance or the history when the balance
    /// does not cover the amount.
    pub fn spend(
        &mut self,
        amount: u64,
        reason: CoinReason,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let available = *self.balance;
        let remaining = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            })?;
        if amount == 0 {
            return Ok(());
        }
        let signed = i64::try_from(amount)
            .ok()
            .and_then(i64::checked_neg)
            .ok_or(LedgerError::AmountTooLarge(amount))?;

        *self.balance = remaining;
        self.push(CoinEntry {
            amount: signed,
            reason,
            timestamp: at,
        });
        debug!(amount, ?reason, balance = remaining, "coins spent");
        Ok(())
    }

    /// Append an entry, evicting the oldest ones past capacity.
    fn push(&mut self, entry: CoinEntry) {
        self.history.push(entry);
        let excess = self.history.len().saturating_sub(HISTORY_CAPACITY);
        if excess > 0 {
            self.history.drain(..excess);
        }
    }
}

/// Sum of positive entries whose timestamp falls on `day` in `tz`.
pub fn earned_on<Tz: TimeZone>(history: &[CoinEntry], day: NaiveDate, tz: &Tz) -> u64 {
    history
        .iter()
        .filter(|entry| entry.timestamp.with_timezone(tz).date_naive() == day)
        .filter_map(|entry| u64::try_from(entry.amount).ok())
        .fold(0, u64::saturating_add)
}

/// Sum of all positive entries in the retained window.
pub fn total_earned(history: &[CoinEntry]) -> u64 {
    history
        .iter()
        .filter_map(|entry| u64::try_from(entry.amount).ok())
        .fold(0, u64::saturating_add)
}

/// Sum of all negative entries in the retained window, as a positive number.
pub fn total_spent(history: &[CoinEntry]) -> u64 {
    history
        .iter()
        .filter(|entry| entry.amount < 0)
        .map(|entry| entry.amount.unsigned_abs())
        .fold(0, u64::saturating_add)
}
