//! Deterministic demo transaction history.
//!
//! The static fixtures only hold a handful of transactions. Screens that page
//! through history need more, so this module fabricates believable entries
//! from a seed. The same seed, count, and anchor time always produce
//! identical output.

use chrono::{DateTime, TimeDelta, Utc};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::records::TransactionRecord;

/// Upper bound on generated entries per call.
pub const MAX_HISTORY_LEN: usize = 500;

/// Smallest generated amount in minor units (₦100.00).
const MIN_AMOUNT: i64 = 10_000;

/// Largest generated amount in minor units (₦500,000.00).
const MAX_AMOUNT: i64 = 50_000_000;

/// Probability of a credit rather than a debit (30%).
const CREDIT_NUMERATOR: u32 = 3;
const CREDIT_DENOMINATOR: u32 = 10;

/// Gap between consecutive entries, in minutes.
const MIN_GAP_MINUTES: i64 = 15;
const MAX_GAP_MINUTES: i64 = 36 * 60;

const DEBIT_PURPOSES: [&str; 4] = ["Transfer to", "Gift card for", "Ticket for", "Bill for"];

/// Generates `count` transactions walking backwards in time from `anchor`.
///
/// Statuses are mostly `completed`, with an occasional `pending` or `failed`
/// entry. References use the `TRX` prefix followed by ten digits.
///
/// # Errors
///
/// Returns [`GenerationError::HistoryTooLong`] when `count` exceeds
/// [`MAX_HISTORY_LEN`].
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fixture_data::generate_transaction_history;
///
/// let anchor = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).single().expect("valid time");
/// let first = generate_transaction_history(7, 4, anchor).expect("generated");
/// let second = generate_transaction_history(7, 4, anchor).expect("generated");
///
/// assert_eq!(first.len(), 4);
/// assert_eq!(first, second);
/// ```
pub fn generate_transaction_history(
    seed: u64,
    count: usize,
    anchor: DateTime<Utc>,
) -> Result<Vec<TransactionRecord>, GenerationError> {
    if count > MAX_HISTORY_LEN {
        return Err(GenerationError::HistoryTooLong {
            max: MAX_HISTORY_LEN,
            requested: count,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut history = Vec::with_capacity(count);
    let mut cursor = anchor;

    for _ in 0..count {
        cursor -= TimeDelta::minutes(rng.random_range(MIN_GAP_MINUTES..=MAX_GAP_MINUTES));
        history.push(generate_single_transaction(&mut rng, cursor));
    }

    Ok(history)
}

fn generate_single_transaction(rng: &mut ChaCha8Rng, date: DateTime<Utc>) -> TransactionRecord {
    let id = Uuid::from_u128(rng.random());
    let amount = rng.random_range(MIN_AMOUNT..=MAX_AMOUNT);
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let counterparty = format!("{first} {last}");

    let (kind, description, recipient) =
        if rng.random_ratio(CREDIT_NUMERATOR, CREDIT_DENOMINATOR) {
            ("credit", format!("Transfer from {counterparty}"), None)
        } else {
            let purpose_index = rng.random_range(0..DEBIT_PURPOSES.len());
            let purpose = DEBIT_PURPOSES
                .get(purpose_index)
                .copied()
                .unwrap_or("Transfer to");
            (
                "debit",
                format!("{purpose} {counterparty}"),
                Some(counterparty),
            )
        };

    let status = match rng.random_range(0_u8..20) {
        0 => "failed",
        1 | 2 => "pending",
        _ => "completed",
    };

    let reference = format!("TRX{:010}", rng.random_range(0_u64..10_000_000_000));

    TransactionRecord {
        id,
        kind: kind.to_owned(),
        amount,
        description,
        recipient,
        reference,
        date,
        status: status.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0)
            .single()
            .expect("valid anchor")
    }

    #[rstest]
    fn same_seed_produces_identical_history(anchor: DateTime<Utc>) {
        let first = generate_transaction_history(99, 25, anchor).expect("generated");
        let second = generate_transaction_history(99, 25, anchor).expect("generated");
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_diverge(anchor: DateTime<Utc>) {
        let first = generate_transaction_history(1, 10, anchor).expect("generated");
        let second = generate_transaction_history(2, 10, anchor).expect("generated");
        assert_ne!(first, second);
    }

    #[rstest]
    fn entries_walk_backwards_from_anchor(anchor: DateTime<Utc>) {
        let history = generate_transaction_history(5, 30, anchor).expect("generated");

        let mut previous = anchor;
        for entry in &history {
            assert!(entry.date < previous, "dates must strictly decrease");
            previous = entry.date;
        }
    }

    #[rstest]
    fn entries_respect_value_ranges(anchor: DateTime<Utc>) {
        let history = generate_transaction_history(11, 100, anchor).expect("generated");

        for entry in &history {
            assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&entry.amount));
            assert!(matches!(entry.kind.as_str(), "credit" | "debit"));
            assert!(matches!(
                entry.status.as_str(),
                "completed" | "pending" | "failed"
            ));
            assert_eq!(entry.reference.len(), 13);
            assert!(entry.reference.starts_with("TRX"));
            assert_eq!(entry.kind == "debit", entry.recipient.is_some());
        }
    }

    #[rstest]
    fn zero_count_is_empty(anchor: DateTime<Utc>) {
        let history = generate_transaction_history(3, 0, anchor).expect("generated");
        assert!(history.is_empty());
    }

    #[rstest]
    fn rejects_oversized_requests(anchor: DateTime<Utc>) {
        let err = generate_transaction_history(3, MAX_HISTORY_LEN + 1, anchor)
            .expect_err("oversized request rejected");
        assert_eq!(
            err,
            GenerationError::HistoryTooLong {
                max: MAX_HISTORY_LEN,
                requested: MAX_HISTORY_LEN + 1,
            }
        );
    }
}
