// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Derived activity metrics: type descriptors, calories per minute and
//! intensity bands.
//!
//! Everything here is pure and total. No input, including a zero duration
//! or a missing type, produces an error, a NaN or a panic.

use crate::models::{Activity, ActivityType};
use serde::Serialize;

/// Display tokens for an activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub emoji: &'static str,
    pub color_primary: &'static str,
    pub color_light: &'static str,
    /// Background used by list cards
    pub card_gradient: &'static str,
}

const RUNNING: TypeDescriptor = TypeDescriptor {
    emoji: "🏃‍♂️",
    color_primary: "#FF6B6B",
    color_light: "#FFE5E5",
    card_gradient: "linear-gradient(45deg, #FF6B6B, #4ECDC4)",
};

const WALKING: TypeDescriptor = TypeDescriptor {
    emoji: "🚶‍♂️",
    color_primary: "#4ECDC4",
    color_light: "#E5F9F7",
    card_gradient: "linear-gradient(45deg, #A8E6CF, #88D8A3)",
};

const CYCLING: TypeDescriptor = TypeDescriptor {
    emoji: "🚴‍♂️",
    color_primary: "#FFD93D",
    color_light: "#FFF8E1",
    card_gradient: "linear-gradient(45deg, #FFD93D, #FF6B6B)",
};

const DEFAULT: TypeDescriptor = TypeDescriptor {
    emoji: "💪",
    color_primary: "#667eea",
    color_light: "#E8ECFF",
    card_gradient: "linear-gradient(45deg, #667eea, #764ba2)",
};

/// Map an activity type to its display descriptor.
pub fn classify(activity_type: Option<ActivityType>) -> TypeDescriptor {
    match activity_type {
        Some(ActivityType::Running) => RUNNING,
        Some(ActivityType::Walking) => WALKING,
        Some(ActivityType::Cycling) => CYCLING,
        Some(ActivityType::Other) | None => DEFAULT,
    }
}

/// Calories burned per minute, rounded to one decimal. Zero when `duration` is zero.
pub fn calories_per_minute(calories: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    round1(f64::from(calories) / f64::from(duration))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Effort band derived from calories per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IntensityLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::VeryLow => "Very Low",
            IntensityLevel::Low => "Low",
            IntensityLevel::Medium => "Medium",
            IntensityLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntensityDescriptor {
    pub level: IntensityLevel,
    pub color_token: &'static str,
    /// Fill of the intensity progress bar, 0..=100
    pub progress_percent: u8,
}

/// Classify calories per minute into an intensity band.
///
/// Bands are inclusive on their lower bound: 15 and up is High, 10 and up
/// Medium, 5 and up Low, anything else (including NaN) Very Low.
pub fn intensity(calories_per_minute: f64) -> IntensityDescriptor {
    let (level, color_token, progress_percent) = if calories_per_minute >= 15.0 {
        (IntensityLevel::High, "#FF6B6B", 100)
    } else if calories_per_minute >= 10.0 {
        (IntensityLevel::Medium, "#FFD93D", 70)
    } else if calories_per_minute >= 5.0 {
        (IntensityLevel::Low, "#4ECDC4", 40)
    } else {
        (IntensityLevel::VeryLow, "#95A5A6", 20)
    };

    IntensityDescriptor {
        level,
        color_token,
        progress_percent,
    }
}

/// All derived metrics for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityMetrics {
    pub descriptor: TypeDescriptor,
    pub calories_per_minute: f64,
    pub intensity: IntensityDescriptor,
}

pub fn summarize(activity: &Activity) -> ActivityMetrics {
    let cpm = calories_per_minute(activity.calories_burned, activity.duration);
    ActivityMetrics {
        descriptor: classify(activity.activity_type),
        calories_per_minute: cpm,
        intensity: intensity(cpm),
    }
}
