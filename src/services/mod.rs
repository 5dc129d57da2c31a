// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Services module - backend access, session and derived metrics.

pub mod client;
pub mod metrics;
pub mod session;

pub use client::{ActivityApi, HttpActivityClient};
pub use metrics::{ActivityMetrics, IntensityDescriptor, IntensityLevel, TypeDescriptor};
pub use session::{Credential, Session};
