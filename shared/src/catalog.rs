use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SpinError;

pub const SPARROW: &str = "sparrow";
pub const OWL: &str = "owl";
pub const REWARD: &str = "reward";

/// One slice of a wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RewardItem {
    pub id: String,
    pub label: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RewardItem {
    pub fn new(id: &str, label: &str, weight: f64, color: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            weight,
            color: color.map(str::to_string),
        }
    }
}

/// Tailwind classes used to style a wheel and the page around it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub border: String,
    pub gradient: String,
}

impl Theme {
    fn new(primary: &str, secondary: &str, text: &str, border: &str, gradient: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            text: text.to_string(),
            border: border.to_string(),
            gradient: gradient.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Wheel {
    pub id: String,
    pub name: String,
    /// Slice order; index `i` is drawn at `[i, i + 1) * 360 / len` degrees.
    pub items: Vec<RewardItem>,
    #[serde(default)]
    pub theme: Theme,
}

impl Wheel {
    pub fn slot_count(&self) -> usize {
        self.items.len()
    }

    pub fn validate(&self) -> Result<(), SpinError> {
        if self.items.is_empty() {
            return Err(SpinError::EmptyWheel);
        }
        let mut seen = HashSet::new();
        for item in &self.items {
            if !(item.weight.is_finite() && item.weight > 0.0) {
                return Err(SpinError::InvalidWeight {
                    id: item.id.clone(),
                    weight: item.weight,
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(SpinError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(())
    }
}

/// Half-open hour range `[start, end)`. `start > end` wraps past midnight.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimeRule {
    pub window: TimeWindow,
    pub wheel: String,
}

/// Which wheel belongs to which part of the day, and which wheel is the task reward.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub morning: TimeRule,
    pub evening: TimeRule,
    pub reward_wheel: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            morning: TimeRule {
                window: TimeWindow::new(6, 15),
                wheel: SPARROW.to_string(),
            },
            evening: TimeRule {
                window: TimeWindow::new(15, 20),
                wheel: OWL.to_string(),
            },
            reward_wheel: REWARD.to_string(),
        }
    }
}

impl Schedule {
    /// Wheels whose availability follows the clock.
    pub fn is_time_gated(&self, wheel_id: &str) -> bool {
        self.morning.wheel == wheel_id || self.evening.wheel == wheel_id
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Catalog {
    wheels: Vec<Wheel>,
    schedule: Schedule,
}

impl Catalog {
    pub fn new(wheels: Vec<Wheel>, schedule: Schedule) -> Result<Self, SpinError> {
        let catalog = Self { wheels, schedule };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, SpinError> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|e| SpinError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The three wheels the app ships with.
    pub fn builtin() -> Self {
        let sparrow = Wheel {
            id: SPARROW.to_string(),
            name: "Sparrow Spinner".to_string(),
            theme: Theme::new(
                "bg-yellow-400",
                "bg-orange-500",
                "text-yellow-900",
                "border-yellow-600",
                "from-yellow-300 to-orange-400",
            ),
            items: vec![
                RewardItem::new("math", "Math Practice", 30.0, Some("#fca5a5")),
                RewardItem::new("percy", "Percy (English)", 30.0, Some("#86efac")),
                RewardItem::new("homework", "Homework", 40.0, Some("#93c5fd")),
                RewardItem::new("screen_10", "10m Screen", 10.0, Some("#fcd34d")),
            ],
        };
        let owl = Wheel {
            id: OWL.to_string(),
            name: "Owl Spinner".to_string(),
            theme: Theme::new(
                "bg-indigo-600",
                "bg-purple-700",
                "text-indigo-100",
                "border-indigo-400",
                "from-indigo-800 to-purple-900",
            ),
            items: vec![
                RewardItem::new("math", "Math Practice", 10.0, Some("#c084fc")),
                RewardItem::new("percy", "Percy", 40.0, Some("#818cf8")),
                RewardItem::new("screen_10", "10m Screen", 40.0, Some("#fbbf24")),
                RewardItem::new("screen_60", "1h Screen", 2.0, Some("#f472b6")),
            ],
        };
        let reward = Wheel {
            id: REWARD.to_string(),
            name: "Golden Prize".to_string(),
            theme: Theme::new(
                "bg-amber-500",
                "bg-yellow-600",
                "text-amber-900",
                "border-amber-200",
                "from-amber-200 via-yellow-400 to-amber-500",
            ),
            items: vec![
                RewardItem::new("homework", "Homework", 5.0, Some("#9ca3af")),
                RewardItem::new("percy", "Percy", 15.0, Some("#86efac")),
                RewardItem::new("screen_10", "10m Screen", 40.0, Some("#fcd34d")),
                RewardItem::new("screen_60", "1h Screen", 35.0, Some("#f472b6")),
                RewardItem::new("jackpot", "CHOOSE ANY!", 2.0, Some("#ffffff")),
            ],
        };

        Self {
            wheels: vec![sparrow, owl, reward],
            schedule: Schedule::default(),
        }
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn wheel(&self, id: &str) -> Option<&Wheel> {
        self.wheels.iter().find(|wheel| wheel.id == id)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn validate(&self) -> Result<(), SpinError> {
        if self.wheels.is_empty() {
            return Err(SpinError::InvalidCatalog("no wheels configured".to_string()));
        }
        let mut ids = HashSet::new();
        for wheel in &self.wheels {
            if !ids.insert(wheel.id.as_str()) {
                return Err(SpinError::InvalidCatalog(format!(
                    "wheel `{}` is defined twice",
                    wheel.id
                )));
            }
            wheel.validate()?;
        }
        for referenced in [
            &self.schedule.morning.wheel,
            &self.schedule.evening.wheel,
            &self.schedule.reward_wheel,
        ] {
            if self.wheel(referenced).is_none() {
                return Err(SpinError::UnknownWheel(referenced.clone()));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.wheels().len(), 3);
        assert_eq!(catalog.wheel(REWARD).unwrap().slot_count(), 5);
        assert_eq!(catalog.wheel(OWL).unwrap().items[3].id, "screen_60");
    }

    #[test]
    fn test_wheel_rejects_bad_items() {
        let mut wheel = Catalog::builtin().wheel(SPARROW).unwrap().clone();
        wheel.items[1].weight = 0.0;
        assert!(matches!(wheel.validate(), Err(SpinError::InvalidWeight { .. })));

        wheel.items[1].weight = 5.0;
        wheel.items[2].id = "math".to_string();
        assert_eq!(wheel.validate(), Err(SpinError::DuplicateItem("math".to_string())));

        wheel.items.clear();
        assert_eq!(wheel.validate(), Err(SpinError::EmptyWheel));
    }

    #[test]
    fn test_time_window_wraps_midnight() {
        let night = TimeWindow::new(20, 6);
        assert!(night.contains(23));
        assert!(night.contains(0));
        assert!(night.contains(5));
        assert!(!night.contains(6));
        assert!(!night.contains(12));

        let day = TimeWindow::new(6, 15);
        assert!(day.contains(6));
        assert!(!day.contains(15));
    }

    #[test]
    fn test_catalog_from_json_validates_schedule() {
        let raw = r#"{
            "wheels": [
                { "id": "sparrow", "name": "S", "items": [{ "id": "a", "label": "A", "weight": 1 }] }
            ],
            "schedule": {
                "morning": { "window": { "start": 6, "end": 15 }, "wheel": "sparrow" },
                "evening": { "window": { "start": 15, "end": 20 }, "wheel": "owl" },
                "rewardWheel": "sparrow"
            }
        }"#;
        assert_eq!(
            Catalog::from_json(raw),
            Err(SpinError::UnknownWheel("owl".to_string()))
        );
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(SpinError::InvalidCatalog(_))
        ));
    }
}
