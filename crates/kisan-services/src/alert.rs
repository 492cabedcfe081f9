//! Farm alert feed: an in-memory list of advisories shown to the farmer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Category of a farm alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Weather,
    Pest,
    Market,
    Irrigation,
    Fertilizer,
    Harvest,
}

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A single alert shown in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub action_required: bool,
    pub location: Option<String>,
    pub crop_type: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the caller when raising an alert; id, timestamp and
/// read state are assigned by the feed.
#[derive(Debug, Clone)]
pub struct AlertDraft {
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub action_required: bool,
    pub location: Option<String>,
    pub crop_type: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// In-memory alert feed, newest first.
#[derive(Debug, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed pre-populated with sample advisories for the demo flow.
    pub fn with_samples() -> Self {
        let now = Utc::now();
        let alerts = vec![
            Alert {
                id: uuid::Uuid::new_v4().to_string(),
                kind: AlertKind::Weather,
                severity: Severity::High,
                title: "Weather alert".to_string(),
                message: "Heavy rainfall expected in next 24 hours. Protect your crops and ensure proper drainage.".to_string(),
                timestamp: now - Duration::hours(2),
                is_read: false,
                action_required: true,
                location: Some("Punjab, Ludhiana".to_string()),
                crop_type: None,
                expires_at: Some(now + Duration::hours(24)),
            },
            Alert {
                id: uuid::Uuid::new_v4().to_string(),
                kind: AlertKind::Pest,
                severity: Severity::Critical,
                title: "Pest alert".to_string(),
                message: "Brown plant hopper detected in nearby farms. Immediate action recommended.".to_string(),
                timestamp: now - Duration::hours(4),
                is_read: false,
                action_required: true,
                location: Some("Punjab, Ludhiana".to_string()),
                crop_type: Some("Rice".to_string()),
                expires_at: None,
            },
            Alert {
                id: uuid::Uuid::new_v4().to_string(),
                kind: AlertKind::Market,
                severity: Severity::Medium,
                title: "Market alert".to_string(),
                message: "Wheat prices increased by 8% in Ludhiana mandi. Good time to sell.".to_string(),
                timestamp: now - Duration::hours(6),
                is_read: true,
                action_required: false,
                location: Some("Ludhiana Mandi".to_string()),
                crop_type: Some("Wheat".to_string()),
                expires_at: None,
            },
            Alert {
                id: uuid::Uuid::new_v4().to_string(),
                kind: AlertKind::Irrigation,
                severity: Severity::Medium,
                title: "Irrigation alert".to_string(),
                message: "Soil moisture levels are low. Consider irrigation for optimal crop growth.".to_string(),
                timestamp: now - Duration::hours(8),
                is_read: false,
                action_required: true,
                location: None,
                crop_type: Some("Cotton".to_string()),
                expires_at: None,
            },
            Alert {
                id: uuid::Uuid::new_v4().to_string(),
                kind: AlertKind::Fertilizer,
                severity: Severity::Low,
                title: "Fertilizer alert".to_string(),
                message: "Time for nitrogen application based on your crop growth stage.".to_string(),
                timestamp: now - Duration::hours(12),
                is_read: false,
                action_required: true,
                location: None,
                crop_type: Some("Wheat".to_string()),
                expires_at: None,
            },
        ];

        Self { alerts }
    }

    /// All alerts, newest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Raise a new alert; it lands at the top of the feed, unread.
    pub fn add(&mut self, draft: AlertDraft) -> &Alert {
        let alert = Alert {
            id: uuid::Uuid::new_v4().to_string(),
            kind: draft.kind,
            severity: draft.severity,
            title: draft.title,
            message: draft.message,
            timestamp: Utc::now(),
            is_read: false,
            action_required: draft.action_required,
            location: draft.location,
            crop_type: draft.crop_type,
            expires_at: draft.expires_at,
        };
        tracing::debug!("Raising {:?} alert: {}", alert.kind, alert.title);
        self.alerts.insert(0, alert);
        &self.alerts[0]
    }

    /// Mark a single alert as read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.is_read = true;
        }
    }

    /// Mark every alert as read.
    pub fn mark_all_read(&mut self) {
        for alert in &mut self.alerts {
            alert.is_read = true;
        }
    }

    /// Remove an alert from the feed. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.alerts.retain(|a| a.id != id);
    }

    /// Alerts of a given kind.
    pub fn by_kind(&self, kind: AlertKind) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.kind == kind).collect()
    }

    /// Alerts that have not expired yet.
    pub fn active(&self) -> Vec<&Alert> {
        let now = Utc::now();
        self.alerts
            .iter()
            .filter(|a| a.expires_at.map_or(true, |exp| exp > now))
            .collect()
    }

    /// Number of unread alerts.
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.is_read).count()
    }
}
