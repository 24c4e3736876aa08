use chrono::NaiveDate;

use crate::house::House;

/// Aggregate income over an inclusive date range.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeReport {
    pub total_payments: f64,
    pub total_charges: f64,
    pub net: f64,
}

/// Read-side income aggregation across payments and charges.
pub struct IncomeService;

impl IncomeService {
    /// Sums payments and charges dated within `[start, end]` and returns the
    /// net income. All totals are `0.00` when nothing falls in range.
    pub fn total_income(house: &House, start: NaiveDate, end: NaiveDate) -> IncomeReport {
        let total_payments: f64 = house
            .payments
            .iter()
            .filter(|payment| payment.date >= start && payment.date <= end)
            .map(|payment| payment.amount)
            .sum();
        let total_charges: f64 = house
            .charges
            .iter()
            .filter(|charge| charge.date >= start && charge.date <= end)
            .map(|charge| charge.amount)
            .sum();
        IncomeReport {
            total_payments,
            total_charges,
            net: total_payments - total_charges,
        }
    }
}
