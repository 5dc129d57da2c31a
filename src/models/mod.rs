// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Data models for the application.

pub mod activity;
pub mod user;

pub use activity::{Activity, ActivityType, NewActivity};
pub use user::{user_initials, UserProfile};
