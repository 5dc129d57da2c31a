// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Activity detail view model: derived metrics plus coaching content.

use crate::fetch::{FetchLifecycle, FetchState, Loader};
use crate::models::{Activity, ActivityType};
use crate::services::metrics::{self, IntensityDescriptor, TypeDescriptor};
use crate::services::ActivityApi;
use crate::time_utils::format_display_datetime;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Coaching content produced by the backend's AI step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub recommendation: Option<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub safety: Vec<String>,
}

impl RecommendationBundle {
    pub fn from_activity(activity: &Activity) -> Option<Self> {
        if !activity.has_recommendation() {
            return None;
        }
        Some(Self {
            recommendation: activity
                .recommendation
                .clone()
                .filter(|r| !r.trim().is_empty()),
            improvements: activity.improvements.clone(),
            suggestions: activity.suggestions.clone(),
            safety: activity.safety.clone(),
        })
    }
}

/// Everything the detail page renders for a loaded activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDetails {
    pub id: String,
    pub type_label: String,
    pub descriptor: TypeDescriptor,
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub calories_per_minute: f64,
    pub intensity: IntensityDescriptor,
    pub intensity_label: &'static str,
    pub created_at: Option<String>,
    /// `None` while the analysis has not arrived yet
    pub coaching: Option<RecommendationBundle>,
}

impl ActivityDetails {
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
            intensity_label: derived.intensity.level.label(),
            created_at: activity
                .created_at
                .as_deref()
                .and_then(format_display_datetime),
            coaching: RecommendationBundle::from_activity(activity),
        }
    }

    pub fn analysis_pending(&self) -> bool {
        self.coaching.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailDisplay {
    Idle,
    Loading,
    Failed { message: String },
    Ready(Box<ActivityDetails>),
}

impl DetailDisplay {
    pub fn from_state(state: &FetchState<Activity>) -> Self {
        match state {
            FetchState::Idle => DetailDisplay::Idle,
            FetchState::Loading => DetailDisplay::Loading,
            FetchState::Failed(message) => DetailDisplay::Failed {
                message: message.clone(),
            },
            FetchState::Ready(activity) => {
                DetailDisplay::Ready(Box::new(ActivityDetails::from_activity(activity)))
            }
        }
    }
}

/// Fetches one activity by id. Every activation refetches, so a
/// recommendation bundle that arrived since the last visit shows up on the
/// next one.
pub struct ActivityDetailView {
    api: Arc<dyn ActivityApi>,
    loader: Loader<Activity>,
}

impl ActivityDetailView {
    pub fn new(api: Arc<dyn ActivityApi>) -> Self {
        Self {
            api,
            loader: Loader::new(),
        }
    }

    /// Activate for `id`. A later activation (same or different id)
    /// supersedes this one even if its request is still in flight.
    pub fn activate(&self, id: &str) -> impl Future<Output = ()> + '_ {
        let id = id.to_string();
        tracing::debug!(activity_id = %id, "Activating detail view");
        let activation = self.loader.begin();
        async move {
            let result = self.api.get_activity(&id).await;
            if !self.loader.complete(activation, result) {
                tracing::debug!(activity_id = %id, "Detail result not applied");
            }
        }
    }

    pub fn state(&self) -> FetchState<Activity> {
        self.loader.snapshot()
    }

    pub fn display(&self) -> DetailDisplay {
        DetailDisplay::from_state(&self.state())
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchLifecycle<Activity>> {
        self.loader.subscribe()
    }
}
