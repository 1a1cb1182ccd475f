//! Top-N product ranking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

/// Per-product totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRank {
    pub name: String,
    pub quantity: u64,
    pub sales: f64,
}

/// Rank every product by total quantity, descending.
///
/// `quantity` sums the recorded quantities (missing counts as zero) while
/// `sales` prices each record as `unit_price × quantity`, where a missing
/// quantity counts as a single unit. Equal quantities keep first-seen order.
pub fn rank_products(records: &[SalesRecord]) -> Vec<ProductRank> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ranking: Vec<ProductRank> = Vec::new();

    for record in records {
        let name = record.product_key();
        let slot = *index.entry(name).or_insert_with(|| {
            ranking.push(ProductRank {
                name: name.to_string(),
                quantity: 0,
                sales: 0.0,
            });
            ranking.len() - 1
        });

        let entry = &mut ranking[slot];
        entry.quantity = entry.quantity.saturating_add(record.quantity_or_zero());
        entry.sales += record.unit_price * record.quantity_or_one() as f64;
    }

    // sort_by is stable, which gives the first-seen tie-break
    ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranking
}

/// The first `limit` entries of [`rank_products`].
pub fn top_products(records: &[SalesRecord], limit: usize) -> Vec<ProductRank> {
    let mut ranking = rank_products(records);
    ranking.truncate(limit);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: Option<&str>, quantity: Option<u64>, unit_price: f64) -> SalesRecord {
        SalesRecord {
            product_name: product.map(str::to_string),
            quantity,
            unit_price,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorted_by_quantity() {
        let top = top_products(
            &[line(Some("A"), Some(3), 10.0), line(Some("B"), Some(5), 2.0)],
            10,
        );

        assert_eq!(
            top,
            vec![
                ProductRank { name: "B".into(), quantity: 5, sales: 10.0 },
                ProductRank { name: "A".into(), quantity: 3, sales: 30.0 },
            ]
        );
    }

    #[test]
    fn test_groups_by_exact_name() {
        let top = top_products(
            &[
                line(Some("Desk"), Some(1), 100.0),
                line(Some("desk"), Some(1), 100.0),
                line(Some("Desk"), Some(2), 90.0),
            ],
            10,
        );

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Desk");
        assert_eq!(top[0].quantity, 3);
        assert_eq!(top[0].sales, 280.0);
    }

    #[test]
    fn test_missing_quantity_paths() {
        let top = top_products(&[line(Some("Pen"), None, 4.0)], 10);
        assert_eq!(top[0].quantity, 0);
        assert_eq!(top[0].sales, 4.0);
    }

    #[test]
    fn test_missing_name_groups_as_unknown() {
        let top = top_products(&[line(None, Some(1), 1.0), line(None, Some(2), 1.0)], 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Unknown");
        assert_eq!(top[0].quantity, 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let top = top_products(
            &[
                line(Some("C"), Some(2), 1.0),
                line(Some("A"), Some(2), 1.0),
                line(Some("B"), Some(2), 1.0),
            ],
            10,
        );
        let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_huge_quantity_saturates() {
        let top = top_products(
            &[line(Some("A"), Some(u64::MAX), 1.0), line(Some("A"), Some(2), 1.0)],
            10,
        );
        assert_eq!(top[0].quantity, u64::MAX);
    }

    #[test]
    fn test_truncates_to_limit() {
        let records: Vec<SalesRecord> = (0..12u64)
            .map(|i| line(Some(&format!("P{i}")), Some(i), 1.0))
            .collect();

        let top = top_products(&records, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "P11");
        assert_eq!(top[4].name, "P7");
        assert_eq!(top, rank_products(&records)[..5].to_vec());
        assert!(top_products(&records, 0).is_empty());
    }
}
