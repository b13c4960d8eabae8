//! Anomaly screening business logic.
//!
//! This module implements the statistical screen that flags transactions whose
//! amount is anomalously large relative to the other transactions in the same
//! case. The screen is a single-pass descriptive-statistics threshold: a
//! transaction is flagged when its amount strictly exceeds the mean plus two
//! population standard deviations of its case's amounts. The whole computation
//! runs in fixed-point decimal arithmetic so no fractional cents are lost to
//! binary floating point. The detector is a pure function: it takes the full
//! transaction set of one case, touches no persistence, and is deterministic
//! for a given input.

use crate::entities::transaction;
use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

/// Reason attached to every transaction flagged by the screen.
pub const HIGH_VALUE_REASON: &str = "high-value anomaly";

/// A flagged transaction together with the reason it was flagged.
///
/// Serializes as the transaction record itself plus a `reason` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalousTransaction {
    /// The transaction that exceeded the threshold
    #[serde(flatten)]
    pub transaction: transaction::Model,
    /// Why it was flagged
    pub reason: String,
}

/// Screens one case's transactions for anomalously large amounts.
///
/// Computes the arithmetic mean `μ` and the population standard deviation `σ`
/// (divisor `n`, since the set is treated as the entire population under
/// analysis) of all amounts, then flags every transaction whose amount
/// strictly exceeds `μ + 2σ`. A single-element input has `σ = 0` by policy
/// rather than through the variance formula, which keeps the degenerate case
/// well defined. Output order matches input order.
///
/// # Arguments
/// * `transactions` - The complete transaction set of one case, in any order
///
/// # Returns
/// The flagged subset in input order, each annotated with
/// [`HIGH_VALUE_REASON`]. Empty input yields an empty result.
#[must_use]
pub fn detect_anomalies(transactions: &[transaction::Model]) -> Vec<AnomalousTransaction> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let n = Decimal::from(transactions.len());
    let total: Decimal = transactions.iter().map(|t| t.amount).sum();
    let mean = total / n;

    let std_dev = if transactions.len() == 1 {
        Decimal::ZERO
    } else {
        let variance = transactions
            .iter()
            .map(|t| {
                let deviation = t.amount - mean;
                deviation * deviation
            })
            .sum::<Decimal>()
            / n;
        // Variance is never negative, so sqrt always succeeds
        variance.sqrt().unwrap_or(Decimal::ZERO)
    };

    let threshold = mean + Decimal::TWO * std_dev;

    transactions
        .iter()
        .filter(|t| t.amount > threshold)
        .map(|t| AnomalousTransaction {
            transaction: t.clone(),
            reason: HIGH_VALUE_REASON.to_string(),
        })
        .collect()
}
