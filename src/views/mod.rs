// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! View models. Each one owns its own state and exposes a plain display
//! value for the host UI to render.

pub mod detail;
pub mod form;
pub mod list;

pub use detail::{ActivityDetailView, ActivityDetails, DetailDisplay, RecommendationBundle};
pub use form::{ActivityAdded, ActivityForm, FormFields, FormModel, FormStatus, SubmitOutcome};
pub use list::{ActivityCard, ActivityListView, ListDisplay};
