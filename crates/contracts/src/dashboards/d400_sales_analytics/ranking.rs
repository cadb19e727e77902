use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::dto::GroupRollup;

/// Field a rollup list is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    #[default]
    Quantity,
    Transactions,
    /// Units per transaction ("efficiency")
    AvgQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

/// Rank by quantity, highest first, optionally cut to `limit`
pub fn rank(rollups: &[GroupRollup], limit: Option<usize>) -> Vec<GroupRollup> {
    rank_by(rollups, RankBy::Quantity, Direction::Desc, limit)
}

/// Stable sort: equal values keep their input (first-seen) order in both
/// directions.
pub fn rank_by(
    rollups: &[GroupRollup],
    by: RankBy,
    direction: Direction,
    limit: Option<usize>,
) -> Vec<GroupRollup> {
    let mut ranked = rollups.to_vec();
    ranked.sort_by(|a, b| {
        let cmp = compare(a, b, by);
        match direction {
            Direction::Asc => cmp,
            Direction::Desc => cmp.reverse(),
        }
    });
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

fn compare(a: &GroupRollup, b: &GroupRollup, by: RankBy) -> Ordering {
    match by {
        RankBy::Quantity => a.quantity.cmp(&b.quantity),
        RankBy::Transactions => a.transactions.cmp(&b.transactions),
        RankBy::AvgQuantity => a
            .avg_quantity
            .partial_cmp(&b.avg_quantity)
            .unwrap_or(Ordering::Equal),
    }
}

/// First rollup with the highest value of `by`; ties go to the earlier one
pub fn first_max(rollups: &[GroupRollup], by: RankBy) -> Option<&GroupRollup> {
    rollups.iter().fold(None, |best, current| match best {
        Some(b) if compare(current, b, by) != Ordering::Greater => Some(b),
        _ => Some(current),
    })
}

/// First rollup with the lowest value of `by`; ties go to the earlier one
pub fn first_min(rollups: &[GroupRollup], by: RankBy) -> Option<&GroupRollup> {
    rollups.iter().fold(None, |best, current| match best {
        Some(b) if compare(current, b, by) != Ordering::Less => Some(b),
        _ => Some(current),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rollup(key: &str, quantity: u64, transactions: u64) -> GroupRollup {
        GroupRollup {
            key: key.to_string(),
            quantity,
            transactions,
            avg_quantity: super::super::group_by::average(quantity, transactions),
            unique_customers: None,
            unique_products: None,
            contact: None,
        }
    }

    fn keys(rollups: &[GroupRollup]) -> Vec<&str> {
        rollups.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_rank_desc_by_quantity() {
        let input = vec![rollup("a", 1, 1), rollup("b", 9, 3), rollup("c", 4, 1)];
        assert_eq!(keys(&rank(&input, None)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let input = vec![
            rollup("first", 5, 1),
            rollup("top", 8, 2),
            rollup("second", 5, 5),
            rollup("third", 5, 2),
        ];
        assert_eq!(
            keys(&rank(&input, None)),
            vec!["top", "first", "second", "third"]
        );
        assert_eq!(
            keys(&rank_by(&input, RankBy::Quantity, Direction::Asc, None)),
            vec!["first", "second", "third", "top"]
        );
    }

    #[test]
    fn test_limit() {
        let input: Vec<GroupRollup> = (0..7).map(|i| rollup(&i.to_string(), i, 1)).collect();
        for n in [0, 1, 5, 7, 10] {
            let ranked = rank(&input, Some(n));
            assert_eq!(ranked.len(), n.min(input.len()));
            assert!(ranked.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        }
    }

    #[test]
    fn test_rank_by_efficiency() {
        let input = vec![rollup("volume", 30, 10), rollup("efficient", 12, 2)];
        let ranked = rank_by(&input, RankBy::AvgQuantity, Direction::Desc, Some(1));
        assert_eq!(keys(&ranked), vec!["efficient"]);
    }

    #[test]
    fn test_first_max_and_min() {
        let input = vec![rollup("a", 5, 1), rollup("b", 2, 1), rollup("c", 5, 1), rollup("d", 2, 1)];
        assert_eq!(first_max(&input, RankBy::Quantity).unwrap().key, "a");
        assert_eq!(first_min(&input, RankBy::Quantity).unwrap().key, "b");
        assert!(first_max(&[], RankBy::Quantity).is_none());
    }
}
