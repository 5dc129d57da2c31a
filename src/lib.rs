// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! FitTracker: client-side activity state for a personal fitness tracker
//!
//! This crate provides the headless core of the FitTracker client: the
//! activity backend client, derived workout metrics, and the view models
//! (list, detail, creation form) with their fetch and refresh state
//! machines. A host UI renders the display values they expose.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod services;
pub mod shell;
pub mod time_utils;
pub mod views;

pub use error::{ClientError, ErrorKind};
pub use fetch::{FetchLifecycle, FetchState};
pub use shell::{ActivitiesPage, Route, Screen, Shell};
