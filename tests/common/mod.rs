// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

use async_trait::async_trait;
use fittracker::error::{ClientError, Result};
use fittracker::models::{Activity, ActivityType, NewActivity, UserProfile};
use fittracker::services::{ActivityApi, Credential, Session};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Build an activity record the way the backend would return it.
#[allow(dead_code)]
pub fn sample_activity(
    id: &str,
    activity_type: ActivityType,
    duration: u32,
    calories: u32,
) -> Activity {
    Activity {
        id: id.to_string(),
        user_id: Some("user-1".to_string()),
        activity_type: Some(activity_type),
        duration,
        calories_burned: calories,
        start_time: None,
        created_at: Some("2025-03-01T08:15:00".to_string()),
        updated_at: None,
        additional_metrics: Default::default(),
        recommendation: None,
        improvements: vec![],
        suggestions: vec![],
        safety: vec![],
    }
}

/// Session signed in as `user-1`.
#[allow(dead_code)]
pub fn signed_in_session() -> Session {
    Session::with_credential(Credential::new("test-token", UserProfile::new("user-1")))
}

/// Scripted response: resolve after `delay` with `result`.
#[allow(dead_code)]
pub type Scripted<T> = (Duration, Result<T>);

/// In-memory [`ActivityApi`] with scripted responses and call counters.
///
/// Each call pops the next scripted response for its operation; when the
/// script is empty, lists return `[]`, detail fetches `NotFound` and
/// creates echo the input back as `created-N`.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeApi {
    lists: Mutex<VecDeque<Scripted<Vec<Activity>>>>,
    details: Mutex<VecDeque<Scripted<Activity>>>,
    creates: Mutex<VecDeque<Scripted<Activity>>>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, delay: Duration, result: Result<Vec<Activity>>) {
        self.lists.lock().unwrap().push_back((delay, result));
    }

    pub fn push_detail(&self, delay: Duration, result: Result<Activity>) {
        self.details.lock().unwrap().push_back((delay, result));
    }

    pub fn push_create(&self, delay: Duration, result: Result<Activity>) {
        self.creates.lock().unwrap().push_back((delay, result));
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[allow(dead_code)]
async fn play<T>(
    scripted: Option<Scripted<T>>,
    fallback: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match scripted {
        Some((delay, result)) => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
        None => fallback(),
    }
}

#[async_trait]
impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.lists.lock().unwrap().pop_front();
        play(scripted, || Ok(vec![])).await
    }

    async fn get_activity(&self, id: &str) -> Result<Activity> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.details.lock().unwrap().pop_front();
        play(scripted, || Err(ClientError::NotFound(format!("Activity {}", id)))).await
    }

    async fn create_activity(&self, input: &NewActivity) -> Result<Activity> {
        let n = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let scripted = self.creates.lock().unwrap().pop_front();
        play(scripted, || {
            Ok(sample_activity(
                &format!("created-{}", n),
                input.activity_type,
                input.duration as u32,
                input.calories_burned as u32,
            ))
        })
        .await
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_backend(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend crashed");
    });
    format!("http://{}/api", addr)
}
