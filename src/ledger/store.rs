//! The in-memory store that owns the active set of transactions.

use time::OffsetDateTime;

use crate::Error;

use super::models::{NewTransaction, Transaction, TransactionId};

/// The ordered, in-memory set of transactions.
///
/// Insertion order is display order. Entries are only ever appended by
/// [Ledger::add] or dropped by [Ledger::remove]; there is no update
/// operation.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and append it to the ledger.
    ///
    /// Timestamps must be no later than now, and the ID must not already be
    /// in use. A rejected candidate leaves the ledger untouched.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonFiniteAmount] if the amount is NaN or infinite,
    /// - or [Error::DuplicateId] if a transaction with the same ID already exists,
    /// - or [Error::FutureTimestamp] if the timestamp is after the current time.
    pub fn add(&mut self, candidate: NewTransaction) -> Result<Transaction, Error> {
        if !candidate.amount.is_finite() {
            return Err(Error::NonFiniteAmount(candidate.amount));
        }

        if self.get(candidate.id).is_some() {
            return Err(Error::DuplicateId(candidate.id));
        }

        if candidate.timestamp > OffsetDateTime::now_utc() {
            return Err(Error::FutureTimestamp(candidate.timestamp));
        }

        let transaction = Transaction {
            id: candidate.id,
            timestamp: candidate.timestamp,
            category: candidate.category,
            description: candidate.description,
            amount: candidate.amount,
        };
        self.entries.push(transaction.clone());

        Ok(transaction)
    }

    /// Remove the transaction with `id` from the ledger.
    ///
    /// Removing an ID that is not in the ledger is a no-op.
    pub fn remove(&mut self, id: TransactionId) {
        self.entries.retain(|transaction| transaction.id != id);
    }

    /// Retrieve the transaction with `id`, if it is in the ledger.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|transaction| transaction.id == id)
    }

    /// The sum of all transaction amounts, rounded to 2 decimal places for
    /// display.
    pub fn total(&self) -> f64 {
        let sum: f64 = self
            .entries
            .iter()
            .map(|transaction| transaction.amount)
            .sum();

        (sum * 100.0).round() / 100.0
    }

    /// The transactions in insertion order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod ledger_tests {
    use time::{Duration, OffsetDateTime};

    use crate::Error;

    use super::{Ledger, NewTransaction};

    fn candidate(id: i64, amount: f64) -> NewTransaction {
        NewTransaction {
            id,
            timestamp: OffsetDateTime::now_utc() - Duration::hours(1),
            category: "Food".to_owned(),
            description: "Dinner at a restaurant".to_owned(),
            amount,
        }
    }

    #[test]
    fn add_succeeds_and_grows_ledger_by_one() {
        let mut ledger = Ledger::new();
        let amount = 50.0;

        let result = ledger.add(candidate(1, amount));

        match result {
            Ok(transaction) => assert_eq!(transaction.amount, amount),
            Err(error) => panic!("Unexpected error: {error}"),
        }
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), amount);
    }

    #[test]
    fn add_succeeds_on_current_time() {
        let mut ledger = Ledger::new();
        let mut now = candidate(1, 12.3);
        now.timestamp = OffsetDateTime::now_utc();

        assert!(ledger.add(now).is_ok());
    }

    #[test]
    fn add_fails_on_duplicate_id() {
        let mut ledger = Ledger::new();
        ledger
            .add(candidate(1, 50.0))
            .expect("Could not add transaction");

        let duplicate = ledger.add(candidate(1, -20.0));

        assert_eq!(duplicate, Err(Error::DuplicateId(1)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 50.0);
    }

    #[test]
    fn add_fails_on_future_timestamp() {
        let mut ledger = Ledger::new();
        let tomorrow = OffsetDateTime::now_utc() + Duration::days(1);
        let mut future = candidate(1, 50.0);
        future.timestamp = tomorrow;

        let result = ledger.add(future);

        assert_eq!(result, Err(Error::FutureTimestamp(tomorrow)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_fails_on_non_finite_amount() {
        let mut ledger = Ledger::new();

        let result = ledger.add(candidate(1, f64::NAN));

        assert!(
            matches!(result, Err(Error::NonFiniteAmount(_))),
            "want NonFiniteAmount error, got {result:?}"
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_drops_matching_transaction() {
        let mut ledger = Ledger::new();
        ledger
            .add(candidate(1, 50.0))
            .expect("Could not add transaction");
        ledger
            .add(candidate(2, -20.0))
            .expect("Could not add transaction");

        ledger.remove(1);

        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(1).is_none());
        assert!(ledger.get(2).is_some());
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut ledger = Ledger::new();
        ledger
            .add(candidate(1, 50.0))
            .expect("Could not add transaction");

        ledger.remove(42);

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn total_sums_all_amounts() {
        let mut ledger = Ledger::new();
        for (id, amount) in [(1, 50.0), (2, -20.0), (3, 30.0)] {
            ledger
                .add(candidate(id, amount))
                .expect("Could not add transaction");
        }

        assert_eq!(ledger.total(), 60.00);
    }

    #[test]
    fn total_rounds_to_two_decimal_places() {
        let mut ledger = Ledger::new();
        ledger
            .add(candidate(1, 0.1))
            .expect("Could not add transaction");
        ledger
            .add(candidate(2, 0.2))
            .expect("Could not add transaction");

        assert_eq!(ledger.total(), 0.3);
    }

    #[test]
    fn get_finds_transaction_by_id() {
        let mut ledger = Ledger::new();
        let stored = ledger
            .add(candidate(7, 12.3))
            .expect("Could not add transaction");

        assert_eq!(ledger.get(7), Some(&stored));
        assert_eq!(ledger.get(8), None);
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let mut ledger = Ledger::new();
        for id in [3, 1, 2] {
            ledger
                .add(candidate(id, 1.0))
                .expect("Could not add transaction");
        }

        let ids: Vec<i64> = ledger.entries().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }
}
