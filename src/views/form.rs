// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Activity creation form.
//!
//! The form never touches list data. A successful submission resets the
//! fields, shows a short-lived acknowledgement and emits one
//! [`ActivityAdded`] notification; whoever owns the list decides how to
//! refresh it.

use crate::error::{ClientError, ErrorKind};
use crate::models::{Activity, ActivityType, NewActivity};
use crate::services::ActivityApi;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Raw form input, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub activity_type: ActivityType,
    pub duration: String,
    pub calories_burned: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            activity_type: ActivityType::Running,
            duration: String::new(),
            calories_burned: String::new(),
        }
    }
}

impl FormFields {
    /// Parse the text fields into a create request.
    pub fn to_input(&self) -> Result<NewActivity, ClientError> {
        let duration = parse_whole_number(&self.duration, "Duration")?;
        let calories_burned = parse_whole_number(&self.calories_burned, "Calories burned")?;
        Ok(NewActivity::new(self.activity_type, duration, calories_burned))
    }
}

fn parse_whole_number(raw: &str, field: &str) -> Result<i64, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::Validation(format!("{} is required", field)));
    }
    raw.parse()
        .map_err(|_| ClientError::Validation(format!("{} must be a whole number", field)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    Idle,
    Submitting,
    /// Acknowledgement shown after a successful submission; reverts to
    /// `Idle` on its own
    Success,
    /// Message shown until the next submission
    Failed(String),
}

/// Everything the form renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormModel {
    pub fields: FormFields,
    pub status: FormStatus,
    submissions: u64,
}

impl FormModel {
    pub const SUCCESS_MESSAGE: &'static str = "Activity added successfully!";

    fn new() -> Self {
        Self {
            fields: FormFields::default(),
            status: FormStatus::Idle,
            submissions: 0,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}

/// Notification emitted once per successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityAdded {
    pub activity_id: String,
}

/// Result of a call to [`ActivityForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight
    Ignored,
    Added(Activity),
    Failed(ErrorKind),
}

pub struct ActivityForm {
    api: Arc<dyn ActivityApi>,
    model: Arc<watch::Sender<FormModel>>,
    added_tx: mpsc::UnboundedSender<ActivityAdded>,
    success_notice: Duration,
}

impl ActivityForm {
    pub fn new(
        api: Arc<dyn ActivityApi>,
        added_tx: mpsc::UnboundedSender<ActivityAdded>,
        success_notice: Duration,
    ) -> Self {
        let (tx, _rx) = watch::channel(FormModel::new());
        Self {
            api,
            model: Arc::new(tx),
            added_tx,
            success_notice,
        }
    }

    pub fn model(&self) -> FormModel {
        self.model.borrow().clone()
    }

    pub fn status(&self) -> FormStatus {
        self.model.borrow().status.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormModel> {
        self.model.subscribe()
    }

    pub fn set_activity_type(&self, activity_type: ActivityType) {
        self.model
            .send_modify(|m| m.fields.activity_type = activity_type);
    }

    pub fn set_duration(&self, value: impl Into<String>) {
        let value = value.into();
        self.model.send_modify(|m| m.fields.duration = value);
    }

    pub fn set_calories_burned(&self, value: impl Into<String>) {
        let value = value.into();
        self.model.send_modify(|m| m.fields.calories_burned = value);
    }

    /// Submit the current fields.
    ///
    /// Never returns an error: failures end up in [`FormStatus::Failed`].
    pub async fn submit(&self) -> SubmitOutcome {
        let mut claimed = None;
        self.model.send_if_modified(|m| {
            if m.is_submitting() {
                return false;
            }
            m.status = FormStatus::Submitting;
            m.submissions += 1;
            claimed = Some((m.fields.clone(), m.submissions));
            true
        });

        let Some((fields, submission)) = claimed else {
            tracing::debug!("Submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        };
        let _in_flight = InFlight {
            model: Arc::clone(&self.model),
            submission,
        };

        let result = match fields.to_input().and_then(|input| input.check().map(|_| input)) {
            Ok(input) => self.api.create_activity(&input).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(activity) => {
                self.model.send_modify(|m| {
                    m.fields = FormFields::default();
                    m.status = FormStatus::Success;
                });

                let notification = ActivityAdded {
                    activity_id: activity.id.clone(),
                };
                if self.added_tx.send(notification).is_err() {
                    tracing::warn!(
                        activity_id = %activity.id,
                        "Nobody is listening for new activities"
                    );
                }

                self.schedule_success_reset(submission);
                SubmitOutcome::Added(activity)
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Failed to add activity");
                let message = match &e {
                    ClientError::Validation(_) | ClientError::Auth(_) => e.user_message(),
                    _ => "Failed to add activity. Please try again.".to_string(),
                };
                self.model.send_modify(|m| m.status = FormStatus::Failed(message));
                SubmitOutcome::Failed(e.kind())
            }
        }
    }

    /// Clear the success acknowledgement after the notice interval, unless
    /// a newer submission has taken over in the meantime.
    fn schedule_success_reset(&self, submission: u64) {
        let model = Arc::clone(&self.model);
        let delay = self.success_notice;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            model.send_if_modified(|m| {
                if m.status == FormStatus::Success && m.submissions == submission {
                    m.status = FormStatus::Idle;
                    true
                } else {
                    false
                }
            });
        });
    }
}

/// Releases the form if a submission is dropped before it settles, so a
/// cancelled `submit()` cannot leave it stuck in `Submitting`.
struct InFlight {
    model: Arc<watch::Sender<FormModel>>,
    submission: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let submission = self.submission;
        self.model.send_if_modified(|m| {
            if m.is_submitting() && m.submissions == submission {
                tracing::warn!(submission, "Submission abandoned before completion");
                m.status = FormStatus::Idle;
                true
            } else {
                false
            }
        });
    }
}
