// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Signed-in user profile, as carried by the access token.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID sent to the backend (token subject)
    pub user_id: String,
    /// Display name (may be None if the provider does not share it)
    pub name: Option<String>,
    /// Email address (may be None if not shared)
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
        }
    }

    /// Avatar initials for the navigation header.
    pub fn initials(&self) -> String {
        user_initials(self.name.as_deref(), self.email.as_deref())
    }
}

/// Initials of every word of `name`, else the first letter of `email`, else `U`.
pub fn user_initials(name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        return name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
    }
    if let Some(first) = email.and_then(|e| e.trim().chars().next()) {
        return first.to_uppercase().collect();
    }
    "U".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_name() {
        assert_eq!(user_initials(Some("ada lovelace"), None), "AL");
        assert_eq!(user_initials(Some("  Grace  Brewster Hopper "), None), "GBH");
    }

    #[test]
    fn test_initials_fall_back_to_email() {
        assert_eq!(user_initials(None, Some("zoe@example.com")), "Z");
        assert_eq!(user_initials(Some("   "), Some("max@example.com")), "M");
    }

    #[test]
    fn test_initials_default() {
        assert_eq!(user_initials(None, None), "U");
        assert_eq!(UserProfile::new("user-1").initials(), "U");
    }
}
