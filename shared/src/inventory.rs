use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::RewardItem;

/// A reward earned from one completed spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinRecord {
    // `id` and `spinner` are the field names older saves used
    #[serde(alias = "id")]
    pub item_id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub earned_at: DateTime<Utc>,
    #[serde(alias = "spinner")]
    pub source_wheel_id: String,
}

impl SpinRecord {
    pub fn new(item: &RewardItem, source_wheel_id: &str, earned_at: DateTime<Utc>) -> Self {
        Self {
            item_id: item.id.clone(),
            label: item.label.clone(),
            color: item.color.clone(),
            earned_at,
            source_wheel_id: source_wheel_id.to_string(),
        }
    }
}

/// Earned rewards in the order they were won. Entries are only ever appended or redeemed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Inventory(Vec<SpinRecord>);

impl Inventory {
    pub fn add(&mut self, record: SpinRecord) {
        self.0.push(record);
    }

    /// Redeems the entry at `index`. Out-of-range indices leave the ledger untouched.
    pub fn remove(&mut self, index: usize) -> Option<SpinRecord> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&SpinRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpinRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many of each item are held, in the order each item was first earned.
    pub fn counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for record in &self.0 {
            match counts.iter_mut().find(|(id, _)| *id == record.item_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.item_id.clone(), 1)),
            }
        }
        counts
    }
}

impl From<Vec<SpinRecord>> for Inventory {
    fn from(records: Vec<SpinRecord>) -> Self {
        Self(records)
    }
}

/// Everything that survives a reload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub special_task_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(item_id: &str) -> SpinRecord {
        let item = RewardItem::new(item_id, &item_id.to_uppercase(), 1.0, None);
        SpinRecord::new(&item, "sparrow", Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut inventory = Inventory::default();
        for id in ["a", "b", "c", "d"] {
            inventory.add(record(id));
        }
        let removed = inventory.remove(1).unwrap();
        assert_eq!(removed.item_id, "b");
        assert_eq!(inventory.len(), 3);
        let ids: Vec<&str> = inventory.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);

        assert_eq!(inventory.remove(3), None);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_counts_by_item() {
        let inventory: Inventory = vec![record("a"), record("b"), record("a")].into();
        assert_eq!(
            inventory.counts(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_session_json_shape() {
        let state = SessionState {
            inventory: vec![record("math")].into(),
            special_task_complete: true,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["specialTaskComplete"], true);
        assert_eq!(json["inventory"][0]["itemId"], "math");
        assert_eq!(json["inventory"][0]["sourceWheelId"], "sparrow");
        assert!(json["inventory"][0].get("color").is_none());
    }

    #[test]
    fn test_legacy_record_fields_load() {
        let raw = r##"{
            "inventory": [{
                "id": "screen_10", "label": "10m Screen", "weight": 10, "color": "#fcd34d",
                "earnedAt": "2024-05-01T07:15:00.000Z", "spinner": "sparrow"
            }],
            "specialTaskComplete": false
        }"##;
        let state: SessionState = serde_json::from_str(raw).unwrap();
        let record = state.inventory.get(0).unwrap();
        assert_eq!(record.item_id, "screen_10");
        assert_eq!(record.source_wheel_id, "sparrow");
        assert_eq!(record.color.as_deref(), Some("#fcd34d"));
    }

    #[test]
    fn test_missing_fields_default() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, SessionState::default());
        let state: SessionState = serde_json::from_str(r#"{"specialTaskComplete": true, "extra": 1}"#).unwrap();
        assert!(state.special_task_complete);
        assert!(state.inventory.is_empty());
    }
}
