//! Session-scoped usage quota (credits).
//!
//! Each session starts with a fixed balance on first access. The ledger
//! exposes a `charge` operation so a billing policy can be wired in later,
//! but no operation currently decrements the balance: the orchestration
//! charges an amount of zero. Balances never go negative.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;

/// Opening balance for a new session.
pub const STARTING_CREDITS: u64 = 10_000;

/// Remaining quota for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditBalance {
    pub remaining: u64,
}

/// Tracks credit balances per session for the lifetime of the process.
#[derive(Debug)]
pub struct CreditLedger {
    starting_balance: u64,
    balances: RwLock<HashMap<String, u64>>,
}

impl CreditLedger {
    pub fn new(starting_balance: u64) -> Self {
        Self {
            starting_balance,
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Establishes the balance for a session.
    ///
    /// Idempotent: re-invocation on an already-initialized session returns
    /// the existing balance and never resets it.
    pub fn initialize(&self, session_id: &str) -> CreditBalance {
        let mut balances = self.balances.write();
        let remaining = *balances
            .entry(session_id.to_string())
            .or_insert(self.starting_balance);
        CreditBalance { remaining }
    }

    /// Returns the current balance without mutating the ledger.
    ///
    /// Uninitialized sessions report the starting balance.
    pub fn balance(&self, session_id: &str) -> CreditBalance {
        let remaining = self
            .balances
            .read()
            .get(session_id)
            .copied()
            .unwrap_or(self.starting_balance);
        CreditBalance { remaining }
    }

    /// Deducts `amount` from the session balance, saturating at zero.
    ///
    /// The orchestration currently charges zero per synthesis; no charge
    /// amount exists as a product decision yet.
    pub fn charge(&self, session_id: &str, amount: u64) -> CreditBalance {
        let mut balances = self.balances.write();
        let entry = balances
            .entry(session_id.to_string())
            .or_insert(self.starting_balance);
        *entry = entry.saturating_sub(amount);
        CreditBalance { remaining: *entry }
    }
}

impl Default for CreditLedger {
    fn default() -> Self {
        Self::new(STARTING_CREDITS)
    }
}
