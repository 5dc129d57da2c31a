// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Top-level shell: authentication gate, routes and page composition.

use crate::config::Config;
use crate::error::Result;
use crate::services::{ActivityApi, HttpActivityClient, Session};
use crate::views::{ActivityAdded, ActivityDetailView, ActivityForm, ActivityListView};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, redirects to the activities page
    Root,
    Activities,
    ActivityDetail(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Root,
            ["activities"] => Route::Activities,
            ["activities", id] => match urlencoding::decode(id) {
                Ok(id) => Route::ActivityDetail(id.into_owned()),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Activities => "/activities".to_string(),
            Route::ActivityDetail(id) => format!("/activities/{}", urlencoding::encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// What the shell shows for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Activities,
    ActivityDetail(String),
    NotFound,
}

/// Owns the session and the backend client; builds pages on demand.
pub struct Shell {
    session: Session,
    api: Arc<dyn ActivityApi>,
    success_notice: Duration,
}

impl Shell {
    /// Shell talking HTTP to the configured backend.
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let client = HttpActivityClient::new(config, session.clone())?;
        Ok(Self::with_api(session, Arc::new(client), config.success_notice))
    }

    pub fn with_api(
        session: Session,
        api: Arc<dyn ActivityApi>,
        success_notice: Duration,
    ) -> Self {
        Self {
            session,
            api,
            success_notice,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self, route: &Route) -> Screen {
        if !self.session.is_authenticated() {
            return Screen::Login;
        }
        match route {
            Route::Root | Route::Activities => Screen::Activities,
            Route::ActivityDetail(id) => Screen::ActivityDetail(id.clone()),
            Route::NotFound => Screen::NotFound,
        }
    }

    /// Avatar initials of the signed-in user.
    pub fn user_initials(&self) -> String {
        self.session
            .user()
            .map(|u| u.initials())
            .unwrap_or_else(|| crate::models::user_initials(None, None))
    }

    pub fn log_out(&self) {
        self.session.log_out();
    }

    pub fn activities_page(&self) -> ActivitiesPage {
        ActivitiesPage::new(Arc::clone(&self.api), self.success_notice)
    }

    /// A fresh detail view. Views are not shared across navigations.
    pub fn detail_view(&self) -> ActivityDetailView {
        ActivityDetailView::new(Arc::clone(&self.api))
    }
}

/// The activities page: creation form above the activity list.
///
/// The form reports additions over a channel; the page answers by giving
/// the list a new refresh key and refetching it in full.
pub struct ActivitiesPage {
    form: ActivityForm,
    list: ActivityListView,
    added_rx: mpsc::UnboundedReceiver<ActivityAdded>,
    refresh_key: u64,
}

impl ActivitiesPage {
    pub fn new(api: Arc<dyn ActivityApi>, success_notice: Duration) -> Self {
        let (added_tx, added_rx) = mpsc::unbounded_channel();
        Self {
            form: ActivityForm::new(Arc::clone(&api), added_tx, success_notice),
            list: ActivityListView::new(api),
            added_rx,
            refresh_key: 0,
        }
    }

    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    pub fn list(&self) -> &ActivityListView {
        &self.list
    }

    /// Identity of the current list instance; bumped on every addition.
    pub fn refresh_key(&self) -> u64 {
        self.refresh_key
    }

    /// Initial load of the list.
    pub async fn mount(&self) {
        self.list.activate().await;
    }

    /// Apply pending "activity added" notifications.
    ///
    /// Several notifications that piled up are folded into one refetch,
    /// since only the latest list identity would survive anyway. Returns
    /// the number of notifications consumed.
    pub async fn process_notifications(&mut self) -> usize {
        let mut consumed = 0;
        while let Ok(added) = self.added_rx.try_recv() {
            tracing::debug!(
                activity_id = %added.activity_id,
                "Activity added, refreshing list"
            );
            self.refresh_key += 1;
            consumed += 1;
        }
        if consumed > 0 {
            self.list.activate().await;
        }
        consumed
    }

    /// Wait for the next notification and refresh the list for it.
    ///
    /// Returns `None` once the form is gone.
    pub async fn next_notification(&mut self) -> Option<ActivityAdded> {
        let added = self.added_rx.recv().await?;
        self.refresh_key += 1;
        self.list.activate().await;
        Some(added)
    }
}
