//! Community alert category and severity enumerations.
//!
//! The string forms must match the CHECK constraints on
//! `community_alerts.category` and `community_alerts.severity`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of alerts returned by the alert feed.
pub const ALERT_FEED_LIMIT: i64 = 20;

/// Window, in days, used when counting recent alerts for the dashboard.
pub const RECENT_ALERT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    #[serde(rename = "Disease Outbreak")]
    DiseaseOutbreak,
    #[serde(rename = "Environmental")]
    Environmental,
    #[serde(rename = "Hospital Updates")]
    HospitalUpdates,
    #[serde(rename = "Public Health")]
    PublicHealth,
    #[serde(rename = "Emergency")]
    Emergency,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 5] = [
        AlertCategory::DiseaseOutbreak,
        AlertCategory::Environmental,
        AlertCategory::HospitalUpdates,
        AlertCategory::PublicHealth,
        AlertCategory::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::DiseaseOutbreak => "Disease Outbreak",
            AlertCategory::Environmental => "Environmental",
            AlertCategory::HospitalUpdates => "Hospital Updates",
            AlertCategory::PublicHealth => "Public Health",
            AlertCategory::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown alert category '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 4] = [
        AlertSeverity::Low,
        AlertSeverity::Medium,
        AlertSeverity::High,
        AlertSeverity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::High => "High",
            AlertSeverity::Critical => "Critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown alert severity '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_display_form() {
        assert_eq!(
            "Disease Outbreak".parse::<AlertCategory>(),
            Ok(AlertCategory::DiseaseOutbreak)
        );
        assert_eq!(
            "Hospital Updates".parse::<AlertCategory>(),
            Ok(AlertCategory::HospitalUpdates)
        );
        assert!("disease outbreak".parse::<AlertCategory>().is_err());
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in AlertCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Critical > AlertSeverity::High);
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let err = "Severe".parse::<AlertSeverity>().unwrap_err();
        assert!(err.contains("Unknown alert severity"));
    }
}
