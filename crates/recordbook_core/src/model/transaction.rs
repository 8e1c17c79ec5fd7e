//! Finance transaction record.

use crate::model::record::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One outgoing payment.
///
/// Amounts are stored in minor currency units to keep arithmetic exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: NaiveDate, amount_cents: i64, category: impl Into<String>) -> Self {
        Self {
            id,
            date,
            amount_cents,
            category: category.into(),
        }
    }
}

impl Keyed for Transaction {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// Formats minor units as `$1,234.56`-style currency text.
pub fn format_amount(amount_cents: i64) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let abs = amount_cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(123_456_789), "$1,234,567.89");
        assert_eq!(format_amount(7_550), "$75.50");
        assert_eq!(format_amount(5), "$0.05");
        assert_eq!(format_amount(-15_000), "-$150.00");
    }
}
