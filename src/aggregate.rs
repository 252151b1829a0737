//! Aggregations feeding the dashboard widgets.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Counts occurrences of each label, skipping missing ones.
///
/// Ordered by descending count; equal counts are ordered by label.
pub fn value_counts<I, S>(labels: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for label in labels.into_iter().flatten() {
        *counts.entry(label.into()).or_insert(0) += 1;
    }
    let mut counts: Vec<(String, u64)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Floors each timestamp to the whole second and counts rows per second,
/// in time order.
pub fn packets_per_second(timestamps: &[DateTime<Utc>]) -> Vec<(DateTime<Utc>, u64)> {
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();
    for ts in timestamps {
        *buckets.entry(ts.timestamp()).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .filter_map(|(secs, count)| DateTime::from_timestamp(secs, 0).map(|ts| (ts, count)))
        .collect()
}

/// Arithmetic mean of `values` per label, ordered by label.
///
/// Rows with a missing label or value do not contribute; a label whose values
/// are all missing is left out.
pub fn mean_by_group(labels: &[Option<String>], values: &[Option<f64>]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for (label, value) in labels.iter().zip(values) {
        if let (Some(label), Some(value)) = (label, value) {
            let entry = sums.entry(label.as_str()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(label, (sum, n))| (label.to_string(), sum / n as f64))
        .collect()
}

/// First `n` entries of a [`value_counts`] result.
pub fn top_n(mut counts: Vec<(String, u64)>, n: usize) -> Vec<(String, u64)> {
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: f64) -> DateTime<Utc> {
        crate::table::cell::epoch_seconds_to_datetime(secs).unwrap()
    }

    #[test]
    fn test_value_counts_orders_by_count_then_label() {
        let labels = ["UDP", "TCP", "ICMP", "TCP", "UDP", "TCP"].map(Some);
        assert_eq!(
            value_counts(labels),
            vec![
                ("TCP".to_string(), 3),
                ("UDP".to_string(), 2),
                ("ICMP".to_string(), 1)
            ]
        );

        let tied = ["b", "a"].map(Some);
        assert_eq!(
            value_counts(tied),
            vec![("a".to_string(), 1), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_value_counts_skips_missing() {
        let labels = vec![Some("TCP"), None, Some("TCP")];
        assert_eq!(value_counts(labels), vec![("TCP".to_string(), 2)]);
        assert!(value_counts(Vec::<Option<String>>::new()).is_empty());
    }

    #[test]
    fn test_packets_per_second_floors_and_orders() {
        let stamps = [ts(1.9), ts(0.0), ts(0.4), ts(1.0)];
        let buckets = packets_per_second(&stamps);
        assert_eq!(buckets, vec![(ts(0.0), 2), (ts(1.0), 2)]);
    }

    #[test]
    fn test_packets_per_second_skips_empty_seconds() {
        let buckets = packets_per_second(&[ts(0.0), ts(5.0)]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].0.timestamp(), 5);
    }

    #[test]
    fn test_mean_by_group() {
        let labels = vec![
            Some("UDP".to_string()),
            Some("TCP".to_string()),
            Some("TCP".to_string()),
            None,
            Some("ICMP".to_string()),
        ];
        let values = vec![Some(100.0), Some(10.0), Some(20.0), Some(5000.0), None];
        assert_eq!(
            mean_by_group(&labels, &values),
            vec![("TCP".to_string(), 15.0), ("UDP".to_string(), 100.0)]
        );
    }

    #[test]
    fn test_top_n_truncates() {
        let counts: Vec<(String, u64)> = (0..15).map(|i| (format!("h{}", i), 15 - i)).collect();
        let top = top_n(counts, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0], ("h0".to_string(), 15));
        assert_eq!(top[9], ("h9".to_string(), 6));
        assert_eq!(top_n(vec![("only".to_string(), 1)], 10).len(), 1);
    }
}
