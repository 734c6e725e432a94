//! Aggregates derived from a snapshot of the ledger.
//!
//! Every function here is pure and only reads its input. [recent] sorts a copy
//! of the snapshot, the ledger's own order is never touched.

use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// Sum the amounts of the transactions of `kind`.
///
/// Returns zero for an empty snapshot or when nothing matches.
pub fn total_by_kind(snapshot: &[Transaction], kind: TransactionKind) -> f64 {
    snapshot
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Total income minus total expenses.
pub fn balance(snapshot: &[Transaction]) -> f64 {
    total_by_kind(snapshot, TransactionKind::Income)
        - total_by_kind(snapshot, TransactionKind::Expense)
}

/// The `n` most recently created transactions, newest first.
///
/// Transactions created at the same instant keep their insertion order.
pub fn recent(snapshot: &[Transaction], n: usize) -> Vec<Transaction> {
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = snapshot.to_vec();
    // `sort_by` is stable, which is what keeps ties in insertion order.
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);

    sorted
}

/// The totals shown alongside the transaction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all income.
    pub total_income: f64,
    /// Sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
    /// How many transactions were summarised.
    pub transaction_count: usize,
}

impl Summary {
    /// Compute the summary of `snapshot`.
    pub fn from_snapshot(snapshot: &[Transaction]) -> Self {
        Self {
            total_income: total_by_kind(snapshot, TransactionKind::Income),
            total_expenses: total_by_kind(snapshot, TransactionKind::Expense),
            balance: balance(snapshot),
            transaction_count: snapshot.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime, macros::datetime};

    use crate::transaction::{Transaction, TransactionKind};

    use super::{Summary, balance, recent, total_by_kind};

    fn create_transaction(
        id: u64,
        amount: f64,
        kind: TransactionKind,
        created_at: OffsetDateTime,
    ) -> Transaction {
        Transaction {
            id,
            description: format!("transaction #{id}"),
            amount,
            kind,
            created_at,
        }
    }

    fn sample_snapshot() -> Vec<Transaction> {
        let start = datetime!(2025-03-01 08:00:00 UTC);

        vec![
            create_transaction(1, 3000.0, TransactionKind::Income, start),
            create_transaction(2, 150.0, TransactionKind::Expense, start + Duration::minutes(5)),
            create_transaction(3, 45.5, TransactionKind::Expense, start + Duration::minutes(1)),
            create_transaction(4, 200.0, TransactionKind::Income, start + Duration::minutes(3)),
        ]
    }

    #[test]
    fn totals_are_zero_for_empty_snapshot() {
        assert_eq!(total_by_kind(&[], TransactionKind::Income), 0.0);
        assert_eq!(total_by_kind(&[], TransactionKind::Expense), 0.0);
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn sums_only_matching_kind() {
        let snapshot = sample_snapshot();

        assert_eq!(total_by_kind(&snapshot, TransactionKind::Income), 3200.0);
        assert_eq!(total_by_kind(&snapshot, TransactionKind::Expense), 195.5);
    }

    #[test]
    fn total_is_zero_when_nothing_matches() {
        let snapshot = vec![create_transaction(
            1,
            10.0,
            TransactionKind::Income,
            OffsetDateTime::UNIX_EPOCH,
        )];

        assert_eq!(total_by_kind(&snapshot, TransactionKind::Expense), 0.0);
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let snapshot = sample_snapshot();

        let want = total_by_kind(&snapshot, TransactionKind::Income)
            - total_by_kind(&snapshot, TransactionKind::Expense);

        assert_eq!(balance(&snapshot), want);
        assert_eq!(balance(&snapshot), 3004.5);
    }

    #[test]
    fn negative_amounts_are_summed_as_is() {
        let snapshot = vec![
            create_transaction(1, -50.0, TransactionKind::Income, OffsetDateTime::UNIX_EPOCH),
            create_transaction(2, -20.0, TransactionKind::Expense, OffsetDateTime::UNIX_EPOCH),
        ];

        assert_eq!(balance(&snapshot), -30.0);
    }

    #[test]
    fn recent_returns_newest_first() {
        let snapshot = sample_snapshot();

        let ids: Vec<_> = recent(&snapshot, 3).iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn recent_returns_everything_when_n_exceeds_length() {
        let snapshot = sample_snapshot();

        let got = recent(&snapshot, 10);

        assert_eq!(got.len(), snapshot.len());
        assert!(got.iter().all(|transaction| snapshot.contains(transaction)));
    }

    #[test]
    fn recent_with_zero_is_empty() {
        assert!(recent(&sample_snapshot(), 0).is_empty());
    }

    #[test]
    fn recent_on_empty_snapshot_is_empty() {
        for n in [0, 1, 3, 100] {
            assert!(recent(&[], n).is_empty(), "want empty for n = {n}");
        }
    }

    #[test]
    fn recent_keeps_insertion_order_for_ties() {
        let now = datetime!(2025-03-01 08:00:00 UTC);
        let snapshot = vec![
            create_transaction(1, 1.0, TransactionKind::Income, now),
            create_transaction(2, 2.0, TransactionKind::Expense, now),
            create_transaction(3, 3.0, TransactionKind::Income, now - Duration::seconds(1)),
            create_transaction(4, 4.0, TransactionKind::Income, now),
        ];

        let ids: Vec<_> = recent(&snapshot, 4).iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1, 2, 4, 3]);
    }

    #[test]
    fn recent_does_not_reorder_the_snapshot() {
        let snapshot = sample_snapshot();
        let before = snapshot.clone();

        let _ = recent(&snapshot, 2);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn summary_of_empty_snapshot_is_all_zero() {
        let summary = Summary::from_snapshot(&[]);

        assert_eq!(
            summary,
            Summary {
                total_income: 0.0,
                total_expenses: 0.0,
                balance: 0.0,
                transaction_count: 0,
            }
        );
    }

    #[test]
    fn summary_matches_individual_functions() {
        let snapshot = sample_snapshot();

        let summary = Summary::from_snapshot(&snapshot);

        assert_eq!(summary.total_income, 3200.0);
        assert_eq!(summary.total_expenses, 195.5);
        assert_eq!(summary.balance, balance(&snapshot));
        assert_eq!(summary.transaction_count, 4);
    }

    #[test]
    fn summary_balance_goes_negative_when_expenses_exceed_income() {
        let snapshot = vec![
            create_transaction(1, 100.0, TransactionKind::Income, OffsetDateTime::UNIX_EPOCH),
            create_transaction(2, 250.0, TransactionKind::Expense, OffsetDateTime::UNIX_EPOCH),
        ];

        let summary = Summary::from_snapshot(&snapshot);

        assert_eq!(summary.balance, -150.0);
        assert_eq!(summary.balance, balance(&snapshot));
    }
}
