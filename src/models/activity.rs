// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Activity wire model as served by the activity backend.

use crate::error::ClientError;
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use validator::Validate;

/// Workout type. Unrecognised values decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[default]
    Running,
    Walking,
    Cycling,
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Types offered by the creation form, in menu order.
    pub const SELECTABLE: [ActivityType; 3] = [
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Cycling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "RUNNING",
            ActivityType::Walking => "WALKING",
            ActivityType::Cycling => "CYCLING",
            ActivityType::Other => "OTHER",
        }
    }

    /// Label shown for a record whose type may be missing.
    pub fn label(activity_type: Option<ActivityType>) -> &'static str {
        activity_type.map_or("ACTIVITY", |t| t.as_str())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity record owned by the backend.
///
/// The recommendation bundle (`recommendation`, `improvements`,
/// `suggestions`, `safety`) is filled in by the backend's AI step some time
/// after creation, so every part of it may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Backend-assigned identifier
    pub id: String,
    /// Owner of the record
    #[serde(default)]
    pub user_id: Option<String>,
    /// Missing or null types are kept as `None` and displayed with the default descriptor
    #[serde(rename = "type", default)]
    pub activity_type: Option<ActivityType>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient_count")]
    pub duration: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories_burned: u32,
    /// When the workout started, if the user supplied it
    #[serde(default)]
    pub start_time: Option<String>,
    /// Creation timestamp (list payloads may call it `date`)
    #[serde(default, alias = "date")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_metrics: HashMap<String, Value>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub safety: Vec<String>,
}

impl Activity {
    /// Whether any part of the recommendation bundle has arrived.
    pub fn has_recommendation(&self) -> bool {
        self.recommendation
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
            || !self.improvements.is_empty()
            || !self.suggestions.is_empty()
            || !self.safety.is_empty()
    }
}

/// Input for creating an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[validate(range(min = 1, message = "Duration must be greater than zero"))]
    pub duration: i64,
    #[validate(range(min = 0, message = "Calories burned cannot be negative"))]
    pub calories_burned: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_metrics: HashMap<String, Value>,
}

impl NewActivity {
    pub fn new(activity_type: ActivityType, duration: i64, calories_burned: i64) -> Self {
        Self {
            activity_type,
            duration,
            calories_burned,
            start_time: None,
            additional_metrics: HashMap::new(),
        }
    }

    pub fn with_start_time(mut self, start: DateTime<Utc>) -> Self {
        self.start_time = Some(format_utc_rfc3339(start));
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_metrics.insert(name.into(), value.into());
        self
    }

    /// Check the input before it is sent anywhere.
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate().map_err(ClientError::from)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Backend counts are unchecked: negatives and non-numbers decode as 0,
/// values past `u32::MAX` saturate.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i.clamp(0, i64::from(u32::MAX)) as u32,
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map_or(0, |f| f.clamp(0.0, f64::from(u32::MAX)) as u32),
        },
        _ => 0,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_full_activity() {
        let json = r#"{
            "id": "a1",
            "userId": "u1",
            "type": "CYCLING",
            "duration": 45,
            "caloriesBurned": 500,
            "createdAt": "2025-03-01T08:15:00",
            "additionalMetrics": {"distanceKm": 18.5},
            "recommendation": "Solid tempo ride.",
            "improvements": ["Hold cadence above 85"],
            "suggestions": ["Add a recovery spin"],
            "safety": ["Wear a helmet"]
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.activity_type, Some(ActivityType::Cycling));
        assert_eq!(activity.calories_burned, 500);
        assert_eq!(activity.additional_metrics["distanceKm"], 18.5);
        assert!(activity.has_recommendation());
        assert_eq!(activity.safety, vec!["Wear a helmet"]);
    }

    #[test]
    fn test_decode_summary_without_bundle() {
        let json = r#"{"id": "a2", "type": "WALKING", "duration": 20,
                       "caloriesBurned": 90, "date": "2025-03-02T07:00:00Z",
                       "improvements": null}"#;

        let activity: Activity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.created_at.as_deref(), Some("2025-03-02T07:00:00Z"));
        assert!(activity.improvements.is_empty());
        assert!(activity.recommendation.is_none());
        assert!(!activity.has_recommendation());
    }

    #[test]
    fn test_unknown_and_missing_types() {
        let unknown: Activity =
            serde_json::from_str(r#"{"id": "a3", "type": "SWIMMING"}"#).unwrap();
        assert_eq!(unknown.activity_type, Some(ActivityType::Other));

        let missing: Activity = serde_json::from_str(r#"{"id": "a4"}"#).unwrap();
        assert_eq!(missing.activity_type, None);
        assert_eq!(missing.duration, 0);
    }

    #[test]
    fn test_list_with_out_of_range_counts_still_decodes() {
        let json = r#"[
            {"id": "ok", "type": "RUNNING", "duration": 30, "caloriesBurned": 300},
            {"id": "bad", "type": "WALKING", "duration": -5, "caloriesBurned": 99999999999},
            {"id": "odd", "duration": 12.7, "caloriesBurned": null}
        ]"#;

        let activities: Vec<Activity> = serde_json::from_str(json).unwrap();

        assert_eq!(activities.len(), 3);
        assert_eq!((activities[0].duration, activities[0].calories_burned), (30, 300));
        assert_eq!((activities[1].duration, activities[1].calories_burned), (0, u32::MAX));
        assert_eq!((activities[2].duration, activities[2].calories_burned), (12, 0));
    }

    #[test]
    fn test_type_label() {
        assert_eq!(ActivityType::label(Some(ActivityType::Cycling)), "CYCLING");
        assert_eq!(ActivityType::label(Some(ActivityType::Other)), "OTHER");
        assert_eq!(ActivityType::label(None), "ACTIVITY");
    }

    #[test]
    fn test_blank_recommendation_is_not_ready() {
        let activity: Activity =
            serde_json::from_str(r#"{"id": "a5", "recommendation": "  "}"#).unwrap();
        assert!(!activity.has_recommendation());
    }

    #[test]
    fn test_new_activity_body() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap();
        let input = NewActivity::new(ActivityType::Running, 30, 300).with_start_time(start);

        let body = serde_json::to_value(&input).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "type": "RUNNING",
                "duration": 30,
                "caloriesBurned": 300,
                "startTime": "2025-03-01T07:00:00Z"
            })
        );
    }

    #[test]
    fn test_new_activity_check() {
        assert!(NewActivity::new(ActivityType::Walking, 1, 0).check().is_ok());

        let err = NewActivity::new(ActivityType::Walking, 0, 10)
            .check()
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation("Duration must be greater than zero".to_string())
        );

        let err = NewActivity::new(ActivityType::Walking, 10, -1)
            .check()
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation("Calories burned cannot be negative".to_string())
        );
    }
}
