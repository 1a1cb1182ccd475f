//! Headline figures shown above the charts.

use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub orders: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    pub total_quantity: u64,
    pub average_order_value: f64,
}

pub fn summarize(records: &[SalesRecord]) -> Summary {
    if records.is_empty() {
        return Summary::default();
    }

    let orders = records.len();
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();

    Summary {
        orders,
        total_sales,
        total_profit: records.iter().map(|r| r.profit).sum(),
        total_quantity: records
            .iter()
            .map(SalesRecord::quantity_or_zero)
            .fold(0, u64::saturating_add),
        average_order_value: total_sales / orders as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let records = vec![
            SalesRecord { sales: 30.0, profit: 5.0, quantity: Some(3), ..Default::default() },
            SalesRecord { sales: 10.0, profit: -1.0, quantity: None, ..Default::default() },
        ];
        let summary = summarize(&records);
        assert_eq!(summary.orders, 2);
        assert_eq!(summary.total_sales, 40.0);
        assert_eq!(summary.total_profit, 4.0);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.average_order_value, 20.0);
    }

    #[test]
    fn test_total_quantity_saturates() {
        let records = vec![
            SalesRecord { quantity: Some(u64::MAX), ..Default::default() },
            SalesRecord { quantity: Some(2), ..Default::default() },
        ];
        assert_eq!(summarize(&records).total_quantity, u64::MAX);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(summarize(&[]), Summary::default());
    }
}
