//! Transaction ledger - newest-first record of currency movement

use serde::{Deserialize, Serialize};

use arcade_hub_types::LEDGER_CAP;

/// Why coins moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Spend,
    Reward,
    Streak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub label: String,
    pub amount: u64,
    pub time_ms: u64,
}

/// Capped newest-first log; old entries fall off the end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tx: Transaction) {
        self.entries.insert(0, tx);
        self.entries.truncate(LEDGER_CAP);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(label: &str, time_ms: u64) -> Transaction {
        Transaction {
            kind: TransactionKind::Earn,
            label: label.to_string(),
            amount: 10,
            time_ms,
        }
    }

    #[test]
    fn test_newest_first() {
        let mut ledger = Ledger::new();
        ledger.push(tx("first", 1));
        ledger.push(tx("second", 2));
        assert_eq!(ledger.entries()[0].label, "second");
        assert_eq!(ledger.entries()[1].label, "first");
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut ledger = Ledger::new();
        for i in 0..(LEDGER_CAP as u64 + 10) {
            ledger.push(tx("earn", i));
        }
        assert_eq!(ledger.len(), LEDGER_CAP);
        // The newest entry survives; the oldest ten fell off.
        assert_eq!(ledger.entries()[0].time_ms, LEDGER_CAP as u64 + 9);
        assert_eq!(ledger.entries()[LEDGER_CAP - 1].time_ms, 10);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut ledger = Ledger::new();
        ledger.push(tx("earn", 5));
        let raw = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&raw).unwrap();
        assert_eq!(ledger, back);
    }
}
