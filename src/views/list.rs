// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Activity list view model.

use crate::fetch::{FetchLifecycle, FetchState, Loader};
use crate::models::{Activity, ActivityType};
use crate::services::metrics::{self, IntensityDescriptor, TypeDescriptor};
use crate::services::ActivityApi;
use crate::time_utils::format_display_date;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// One activity as presented in the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub id: String,
    pub type_label: String,
    pub descriptor: TypeDescriptor,
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub calories_per_minute: f64,
    pub intensity: IntensityDescriptor,
    pub date: Option<String>,
    /// Whether the coaching content is already available on the detail view
    pub has_recommendation: bool,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let derived = metrics::summarize(activity);
        Self {
            id: activity.id.clone(),
            type_label: ActivityType::label(activity.activity_type).to_string(),
            descriptor: derived.descriptor,
            duration_minutes: activity.duration,
            calories_burned: activity.calories_burned,
            calories_per_minute: derived.calories_per_minute,
            intensity: derived.intensity,
            date: activity.created_at.as_deref().and_then(format_display_date),
            has_recommendation: activity.has_recommendation(),
        }
    }
}

/// What the list shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListDisplay {
    Idle,
    /// Skeleton placeholders
    Loading,
    Failed { message: String },
    /// Loaded fine, nothing logged yet
    Empty,
    Activities(Vec<ActivityCard>),
}

impl ListDisplay {
    pub const EMPTY_TITLE: &'static str = "No Activities Yet";
    pub const EMPTY_HINT: &'static str =
        "Start tracking your fitness journey by adding your first activity!";

    pub fn from_state(state: &FetchState<Vec<Activity>>) -> Self {
        match state {
            FetchState::Idle => ListDisplay::Idle,
            FetchState::Loading => ListDisplay::Loading,
            FetchState::Failed(message) => ListDisplay::Failed {
                message: message.clone(),
            },
            FetchState::Ready(activities) if activities.is_empty() => ListDisplay::Empty,
            FetchState::Ready(activities) => {
                ListDisplay::Activities(activities.iter().map(ActivityCard::from_activity).collect())
            }
        }
    }
}

/// Fetches and presents every activity of the signed-in user.
pub struct ActivityListView {
    api: Arc<dyn ActivityApi>,
    loader: Loader<Vec<Activity>>,
}

impl ActivityListView {
    pub fn new(api: Arc<dyn ActivityApi>) -> Self {
        Self {
            api,
            loader: Loader::new(),
        }
    }

    /// Restart the lifecycle and refetch the full list.
    ///
    /// The view enters `Loading` as soon as this is called; the returned
    /// future performs the request.
    pub fn activate(&self) -> impl Future<Output = ()> + '_ {
        let load = self.loader.load(self.api.list_activities());
        async move {
            if load.await {
                tracing::debug!("Activity list updated");
            }
        }
    }

    pub fn state(&self) -> FetchState<Vec<Activity>> {
        self.loader.snapshot()
    }

    pub fn display(&self) -> ListDisplay {
        ListDisplay::from_state(&self.state())
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchLifecycle<Vec<Activity>>> {
        self.loader.subscribe()
    }

    /// Number of fetches started so far.
    pub fn activations(&self) -> u64 {
        self.loader.activations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(json: &str) -> Activity {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_card_from_activity() {
        let card = ActivityCard::from_activity(&activity(
            r#"{"id": "7", "type": "WALKING", "duration": 40, "caloriesBurned": 180,
                "date": "2025-03-02T07:00:00Z"}"#,
        ));

        assert_eq!(card.type_label, "WALKING");
        assert_eq!(card.calories_per_minute, 4.5);
        assert_eq!(card.intensity.level, metrics::IntensityLevel::VeryLow);
        assert_eq!(card.descriptor.card_gradient, "linear-gradient(45deg, #A8E6CF, #88D8A3)");
        assert_eq!(card.date.as_deref(), Some("Mar 2, 2025"));
        assert!(!card.has_recommendation);
    }

    #[test]
    fn test_card_without_type_or_duration() {
        let card = ActivityCard::from_activity(&activity(r#"{"id": "8", "caloriesBurned": 50}"#));

        assert_eq!(card.type_label, "ACTIVITY");
        assert_eq!(card.descriptor.emoji, "💪");
        assert_eq!(card.calories_per_minute, 0.0);
        assert!(card.date.is_none());
    }

    #[test]
    fn test_display_states() {
        assert_eq!(ListDisplay::from_state(&FetchState::Idle), ListDisplay::Idle);
        assert_eq!(ListDisplay::from_state(&FetchState::Loading), ListDisplay::Loading);
        assert_eq!(
            ListDisplay::from_state(&FetchState::Ready(vec![])),
            ListDisplay::Empty
        );
        assert_eq!(
            ListDisplay::from_state(&FetchState::Failed("down".to_string())),
            ListDisplay::Failed {
                message: "down".to_string()
            }
        );
    }
}
