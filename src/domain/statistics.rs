//! Pure aggregation over an in-memory slice of transactions.
//!
//! Every function takes the full dataset, never mutates it, and degrades to a
//! defined default (zero, `None`, empty list) on empty input. Sums are
//! checked; a result outside `Decimal`'s range is a `DomainError::Compute`.

use crate::domain::{DomainError, Transaction, TransactionKind};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Maximum number of dates returned by [`top_dates_by_total`].
pub const TOP_DATES_LIMIT: usize = 5;

/// Decimal places kept by [`average_amount_per_day`].
const AVERAGE_DP: u32 = 2;

fn overflow(what: impl std::fmt::Display) -> DomainError {
    DomainError::Compute(format!("{} is outside the decimal range", what))
}

/// Sum and count of one calendar day's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
    pub count: usize,
}

impl DailyTotal {
    pub fn average(&self) -> Decimal {
        // |total / count| <= |total| for count >= 1, so this cannot overflow.
        self.total / Decimal::from(self.count)
    }
}

/// Sum of amounts tagged exactly `Credit`.
pub fn total_credit(transactions: &[Transaction]) -> Result<Decimal, DomainError> {
    total_of_kind(transactions, &TransactionKind::Credit)
}

/// Sum of amounts tagged exactly `Debit`.
pub fn total_debit(transactions: &[Transaction]) -> Result<Decimal, DomainError> {
    total_of_kind(transactions, &TransactionKind::Debit)
}

fn total_of_kind(
    transactions: &[Transaction],
    kind: &TransactionKind,
) -> Result<Decimal, DomainError> {
    transactions
        .iter()
        .filter(|t| &t.kind == kind)
        .try_fold(Decimal::ZERO, |acc, t| {
            acc.checked_add(t.amount)
                .ok_or_else(|| overflow(format!("{} total", kind)))
        })
}

/// Timestamp of the largest transaction. On equal amounts the earliest one
/// in input order wins.
pub fn highest_amount_date(transactions: &[Transaction]) -> Option<NaiveDateTime> {
    let mut best: Option<&Transaction> = None;
    for t in transactions {
        match best {
            Some(b) if t.amount <= b.amount => {}
            _ => best = Some(t),
        }
    }
    best.map(|t| t.date)
}

/// Groups by calendar day. Groups appear in the order their first
/// transaction was seen.
pub fn daily_totals(transactions: &[Transaction]) -> Result<Vec<DailyTotal>, DomainError> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut days: Vec<DailyTotal> = Vec::new();
    for t in transactions {
        let day = t.day();
        match index.get(&day) {
            Some(&i) => {
                days[i].total = days[i]
                    .total
                    .checked_add(t.amount)
                    .ok_or_else(|| overflow(format!("total for {}", day)))?;
                days[i].count += 1;
            }
            None => {
                index.insert(day, days.len());
                days.push(DailyTotal {
                    date: day,
                    total: t.amount,
                    count: 1,
                });
            }
        }
    }
    Ok(days)
}

/// Mean of the per-day averages, rounded half-to-even to 2 places.
///
/// This is a two-level average: each day weighs the same regardless of how
/// many transactions it holds, so it generally differs from
/// `sum(amount) / count`.
pub fn average_amount_per_day(transactions: &[Transaction]) -> Result<Decimal, DomainError> {
    let days = daily_totals(transactions)?;
    if days.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let sum_of_averages = days.iter().try_fold(Decimal::ZERO, |acc, d| {
        acc.checked_add(d.average())
            .ok_or_else(|| overflow("sum of daily averages"))
    })?;
    Ok((sum_of_averages / Decimal::from(days.len())).round_dp(AVERAGE_DP))
}

/// Up to [`TOP_DATES_LIMIT`] days ranked by summed amount, highest first.
/// Equal sums keep first-seen day order.
pub fn top_dates_by_total(transactions: &[Transaction]) -> Result<Vec<NaiveDate>, DomainError> {
    let mut days = daily_totals(transactions)?;
    // sort_by is stable
    days.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(days
        .into_iter()
        .take(TOP_DATES_LIMIT)
        .map(|d| d.date)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: i32, date: NaiveDateTime, kind: &str, amount: Decimal) -> Transaction {
        Transaction::new(id, date, TransactionKind::parse(kind), amount)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, at(2024, 8, 12, 0), "Credit", dec!(1000)),
            tx(2, at(2024, 8, 11, 0), "Debit", dec!(500)),
            tx(3, at(2024, 8, 10, 0), "Credit", dec!(300)),
            tx(4, at(2024, 8, 10, 0), "Credit", dec!(200)),
            tx(5, at(2024, 8, 9, 0), "Debit", dec!(150)),
        ]
    }

    #[test]
    fn test_sample_dataset() {
        let txs = sample();
        assert_eq!(total_credit(&txs).unwrap(), dec!(1500));
        assert_eq!(total_debit(&txs).unwrap(), dec!(650));
        assert_eq!(highest_amount_date(&txs), Some(at(2024, 8, 12, 0)));
        assert_eq!(average_amount_per_day(&txs).unwrap(), dec!(475.00));
        assert_eq!(
            top_dates_by_total(&txs).unwrap(),
            vec![
                day(2024, 8, 12),
                day(2024, 8, 11),
                day(2024, 8, 10),
                day(2024, 8, 9)
            ]
        );
    }

    #[test]
    fn test_empty_input_defaults() {
        assert_eq!(total_credit(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(total_debit(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(highest_amount_date(&[]), None);
        assert_eq!(average_amount_per_day(&[]).unwrap(), Decimal::ZERO);
        assert!(top_dates_by_total(&[]).unwrap().is_empty());
        assert!(daily_totals(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_kinds_count_toward_neither_total() {
        let txs = vec![
            tx(1, at(2024, 1, 1, 9), "Credit", dec!(10)),
            tx(2, at(2024, 1, 1, 9), "credit", dec!(20)),
            tx(3, at(2024, 1, 1, 9), "Debit", dec!(5)),
            tx(4, at(2024, 1, 1, 9), "DEBIT", dec!(40)),
            tx(5, at(2024, 1, 1, 9), "", dec!(80)),
        ];
        assert_eq!(total_credit(&txs).unwrap(), dec!(10));
        assert_eq!(total_debit(&txs).unwrap(), dec!(5));
    }

    #[test]
    fn test_highest_amount_tie_prefers_first_seen() {
        let d1 = at(2024, 3, 1, 8);
        let d2 = at(2024, 3, 2, 8);
        let txs = vec![tx(1, d1, "Credit", dec!(100)), tx(2, d2, "Debit", dec!(100))];
        assert_eq!(highest_amount_date(&txs), Some(d1));

        let reversed = vec![tx(2, d2, "Debit", dec!(100)), tx(1, d1, "Credit", dec!(100))];
        assert_eq!(highest_amount_date(&reversed), Some(d2));
    }

    #[test]
    fn test_highest_amount_with_negative_amounts() {
        let txs = vec![
            tx(1, at(2024, 3, 1, 8), "Debit", dec!(-50)),
            tx(2, at(2024, 3, 2, 8), "Debit", dec!(-10)),
        ];
        assert_eq!(highest_amount_date(&txs), Some(at(2024, 3, 2, 8)));
    }

    #[test]
    fn test_average_is_mean_of_daily_averages() {
        // day one: 10, 20, 30 -> 20; day two: 100 -> 100. Mean of days = 60,
        // whereas total / count would be 40.
        let txs = vec![
            tx(1, at(2024, 5, 1, 1), "Credit", dec!(10)),
            tx(2, at(2024, 5, 1, 12), "Credit", dec!(20)),
            tx(3, at(2024, 5, 1, 23), "Debit", dec!(30)),
            tx(4, at(2024, 5, 2, 0), "Debit", dec!(100)),
        ];
        assert_eq!(average_amount_per_day(&txs).unwrap(), dec!(60));
    }

    #[test]
    fn test_average_single_day_is_simple_average() {
        let txs = vec![
            tx(1, at(2024, 5, 1, 1), "Credit", dec!(10.10)),
            tx(2, at(2024, 5, 1, 2), "Credit", dec!(20.20)),
            tx(3, at(2024, 5, 1, 3), "Credit", dec!(30.31)),
        ];
        assert_eq!(average_amount_per_day(&txs).unwrap(), dec!(20.20));
    }

    #[test]
    fn test_average_rounds_half_to_even() {
        let low = vec![tx(1, at(2024, 5, 1, 1), "Credit", dec!(0.125))];
        assert_eq!(average_amount_per_day(&low).unwrap(), dec!(0.12));

        let high = vec![tx(1, at(2024, 5, 1, 1), "Credit", dec!(0.135))];
        assert_eq!(average_amount_per_day(&high).unwrap(), dec!(0.14));
    }

    #[test]
    fn test_daily_totals_ignores_time_of_day() {
        let txs = vec![
            tx(1, at(2024, 6, 1, 0), "Credit", dec!(1)),
            tx(2, at(2024, 6, 2, 5), "Credit", dec!(2)),
            tx(3, at(2024, 6, 1, 23), "Debit", dec!(3)),
        ];
        let days = daily_totals(&txs).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day(2024, 6, 1));
        assert_eq!(days[0].total, dec!(4));
        assert_eq!(days[0].count, 2);
        assert_eq!(days[1].date, day(2024, 6, 2));
        assert_eq!(days[1].average(), dec!(2));
    }

    #[test]
    fn test_top_dates_caps_at_limit_and_ranks() {
        let txs: Vec<Transaction> = (1..=8)
            .map(|d| tx(d as i32, at(2024, 7, d, 12), "Credit", Decimal::from(d * 10)))
            .collect();
        let top = top_dates_by_total(&txs).unwrap();
        assert_eq!(top.len(), TOP_DATES_LIMIT);
        assert_eq!(
            top,
            vec![
                day(2024, 7, 8),
                day(2024, 7, 7),
                day(2024, 7, 6),
                day(2024, 7, 5),
                day(2024, 7, 4)
            ]
        );

        let totals = daily_totals(&txs).unwrap();
        let min_returned = totals
            .iter()
            .filter(|d| top.contains(&d.date))
            .map(|d| d.total)
            .min()
            .unwrap();
        assert!(totals
            .iter()
            .filter(|d| !top.contains(&d.date))
            .all(|d| d.total <= min_returned));
    }

    #[test]
    fn test_top_dates_tie_keeps_first_seen_order() {
        let txs = vec![
            tx(1, at(2024, 9, 3, 0), "Credit", dec!(50)),
            tx(2, at(2024, 9, 1, 0), "Credit", dec!(50)),
            tx(3, at(2024, 9, 2, 0), "Credit", dec!(70)),
        ];
        assert_eq!(
            top_dates_by_total(&txs).unwrap(),
            vec![day(2024, 9, 2), day(2024, 9, 3), day(2024, 9, 1)]
        );
    }

    #[test]
    fn test_overflow_is_an_error_not_a_panic() {
        let txs = vec![
            tx(1, at(2024, 2, 1, 9), "Credit", Decimal::MAX),
            tx(2, at(2024, 2, 1, 10), "Credit", Decimal::MAX),
        ];
        assert!(matches!(total_credit(&txs), Err(DomainError::Compute(_))));
        assert!(matches!(daily_totals(&txs), Err(DomainError::Compute(_))));
        assert!(matches!(
            average_amount_per_day(&txs),
            Err(DomainError::Compute(_))
        ));
        assert!(matches!(top_dates_by_total(&txs), Err(DomainError::Compute(_))));
        // Comparisons only; still answers.
        assert_eq!(highest_amount_date(&txs), Some(at(2024, 2, 1, 9)));
        // Debit side untouched by the credit overflow.
        assert_eq!(total_debit(&txs).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_in_sum_of_daily_averages() {
        let txs = vec![
            tx(1, at(2024, 2, 1, 9), "Credit", Decimal::MAX),
            tx(2, at(2024, 2, 2, 9), "Credit", Decimal::MAX),
        ];
        // Each day fits; adding the two daily averages does not.
        assert_eq!(daily_totals(&txs).unwrap().len(), 2);
        assert!(matches!(
            average_amount_per_day(&txs),
            Err(DomainError::Compute(_))
        ));
    }

    #[test]
    fn test_results_independent_of_input_order() {
        let mut txs = sample();
        txs.reverse();
        assert_eq!(total_credit(&txs).unwrap(), dec!(1500));
        assert_eq!(total_debit(&txs).unwrap(), dec!(650));
        assert_eq!(average_amount_per_day(&txs).unwrap(), dec!(475));
        assert_eq!(top_dates_by_total(&txs).unwrap()[0], day(2024, 8, 12));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let txs = sample();
        assert_eq!(
            average_amount_per_day(&txs).unwrap(),
            average_amount_per_day(&txs).unwrap()
        );
        assert_eq!(
            top_dates_by_total(&txs).unwrap(),
            top_dates_by_total(&txs).unwrap()
        );
        assert_eq!(highest_amount_date(&txs), highest_amount_date(&txs));
    }
}
