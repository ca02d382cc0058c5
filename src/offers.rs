//! The ids offered by the selector.

use serde_json::Value;

use crate::error::FeedError;

/// Sorted, de-duplicated message ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offers {
    ids: Vec<i64>,
}

impl Offers {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut ids: Vec<i64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// Build from the listing response. Non-integer entries are skipped.
    pub fn from_value(value: &Value) -> Self {
        match value.as_array() {
            Some(items) => Self::new(items.iter().filter_map(Value::as_i64)),
            None => Self::default(),
        }
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn first(&self) -> Option<i64> {
        self.ids.first().copied()
    }

    /// Smallest offered id strictly greater than `id`.
    pub fn next_after(&self, id: i64) -> Option<i64> {
        let idx = self.ids.partition_point(|&x| x <= id);
        self.ids.get(idx).copied()
    }

    /// Largest offered id strictly smaller than `id`.
    pub fn prev_before(&self, id: i64) -> Option<i64> {
        let idx = self.ids.partition_point(|&x| x < id);
        idx.checked_sub(1).and_then(|i| self.ids.get(i)).copied()
    }
}

/// Parse the listing response body.
pub fn decode_offers(body: &str) -> Result<Offers, FeedError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(Offers::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_and_deduped() {
        let offers = Offers::new([30, 10, 20, 10]);
        assert_eq!(offers.ids(), &[10, 20, 30]);
        assert_eq!(offers.len(), 3);
        assert!(offers.contains(20));
        assert!(!offers.contains(25));
    }

    #[test]
    fn test_from_value_skips_junk() {
        let offers = Offers::from_value(&json!([5, "x", 3, null, 4.5, 9]));
        assert_eq!(offers.ids(), &[3, 5, 9]);
        assert!(Offers::from_value(&json!({})).is_empty());
    }

    #[test]
    fn test_neighbors() {
        let offers = Offers::new([10, 20, 30]);
        assert_eq!(offers.next_after(10), Some(20));
        assert_eq!(offers.next_after(15), Some(20));
        assert_eq!(offers.next_after(30), None);
        assert_eq!(offers.prev_before(30), Some(20));
        assert_eq!(offers.prev_before(25), Some(20));
        assert_eq!(offers.prev_before(10), None);
        assert_eq!(offers.next_after(0), Some(10));
    }

    #[test]
    fn test_empty_neighbors() {
        let offers = Offers::default();
        assert_eq!(offers.first(), None);
        assert_eq!(offers.next_after(1), None);
        assert_eq!(offers.prev_before(1), None);
    }

    #[test]
    fn test_decode_offers() {
        assert_eq!(decode_offers("[2,1]").unwrap().ids(), &[1, 2]);
        assert!(decode_offers("[").is_err());
    }
}
