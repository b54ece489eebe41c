//! Access facade: fetch -> aggregate -> log, for each of the five statistics.
//!
//! - Logs an info line before fetching and another with the computed value
//! - Any store or computation failure is logged with its cause and returned unchanged
//! - No retry and no fallback; the caller decides whether to carry on

use crate::domain::{DomainError, Transaction, statistics};
use crate::ports::{LogPort, StatisticsQueries, TransactionSource};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Log lines surrounding one query.
struct Step {
    start: &'static str,
    done: &'static str,
    failed: &'static str,
}

const TOTAL_CREDIT: Step = Step {
    start: "Getting total credit amount.",
    done: "Total credit amount retrieved",
    failed: "Error retrieving total credit amount.",
};

const TOTAL_DEBIT: Step = Step {
    start: "Getting total debit amount.",
    done: "Total debit amount retrieved",
    failed: "Error retrieving total debit amount.",
};

const HIGHEST_AMOUNT_DATE: Step = Step {
    start: "Getting transaction with the highest amount date/time.",
    done: "Transaction with highest amount date/time retrieved",
    failed: "Error retrieving transaction with the highest amount date/time.",
};

const AVERAGE_PER_DAY: Step = Step {
    start: "Calculating average amount per day.",
    done: "Average amount per day calculated",
    failed: "Error calculating average amount per day.",
};

const TOP_DATES: Step = Step {
    start: "Getting top 5 dates with the highest total amount.",
    done: "Top 5 dates with highest total amount retrieved",
    failed: "Error retrieving top 5 dates with highest total amount.",
};

/// Statistics service. Pairs the transaction source with logging around
/// the pure aggregation functions.
pub struct StatisticsService {
    source: Arc<dyn TransactionSource>,
    log: Arc<dyn LogPort>,
}

impl StatisticsService {
    pub fn new(source: Arc<dyn TransactionSource>, log: Arc<dyn LogPort>) -> Self {
        Self { source, log }
    }

    async fn compute<T>(
        &self,
        step: &Step,
        aggregate: impl FnOnce(&[Transaction]) -> Result<T, DomainError>,
        render: impl FnOnce(&T) -> String,
    ) -> Result<T, DomainError> {
        self.log.info(step.start);
        let result = match self.source.fetch_all().await {
            Ok(transactions) => aggregate(&transactions),
            Err(e) => Err(e),
        };
        match result {
            Ok(value) => {
                self.log.info(&format!("{}: {}", step.done, render(&value)));
                Ok(value)
            }
            Err(e) => {
                self.log.error(step.failed, &e);
                Err(e)
            }
        }
    }
}

fn render_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait::async_trait]
impl StatisticsQueries for StatisticsService {
    async fn total_credit_amount(&self) -> Result<Decimal, DomainError> {
        self.compute(&TOTAL_CREDIT, statistics::total_credit, |v| v.to_string())
            .await
    }

    async fn total_debit_amount(&self) -> Result<Decimal, DomainError> {
        self.compute(&TOTAL_DEBIT, statistics::total_debit, |v| v.to_string())
            .await
    }

    async fn highest_amount_date(&self) -> Result<Option<NaiveDateTime>, DomainError> {
        self.compute(
            &HIGHEST_AMOUNT_DATE,
            |t| Ok(statistics::highest_amount_date(t)),
            |v| match v {
                Some(date) => date.to_string(),
                None => "none".to_string(),
            },
        )
        .await
    }

    async fn average_amount_per_day(&self) -> Result<Decimal, DomainError> {
        self.compute(
            &AVERAGE_PER_DAY,
            statistics::average_amount_per_day,
            |v| v.to_string(),
        )
        .await
    }

    async fn top_dates_by_total(&self) -> Result<Vec<NaiveDate>, DomainError> {
        self.compute(&TOP_DATES, statistics::top_dates_by_total, |v| render_dates(v))
            .await
    }
}
