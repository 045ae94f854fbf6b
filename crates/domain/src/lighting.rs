//! Lighting — selector and result types for the vendor light-control call.
//!
//! One uniform addressing model: a call targets either every known light or
//! a named group. Per-light success is reported verbatim; there is no
//! derived overall flag beyond what [`LightingResult::all_ok`] computes for
//! logging.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

/// Default fade duration for power transitions.
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(1);

/// Which lights a call addresses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightSelector {
    /// Every light the vendor account knows.
    #[default]
    All,
    /// Lights in a named group.
    Group(String),
}

impl LightSelector {
    /// Build a selector from an optional group name.
    #[must_use]
    pub fn group_or_all(group: Option<String>) -> Self {
        match group {
            Some(name) if !name.trim().is_empty() => Self::Group(name),
            _ => Self::All,
        }
    }
}

impl std::fmt::Display for LightSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Group(name) => write!(f, "group:{name}"),
        }
    }
}

/// Desired light power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightPower {
    On,
    Off,
}

impl LightPower {
    /// Vendor wire word for this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for LightPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one lighting call, per light.
///
/// Serializes to `{"perDeviceSuccess": {…}, "error": …?}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LightingResult {
    /// Success flag per light label.
    #[serde(rename = "perDeviceSuccess")]
    pub per_device: BTreeMap<String, bool>,
    /// Transport-level failure, when the vendor call itself never produced
    /// per-light statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LightingResult {
    /// A result from per-light statuses.
    #[must_use]
    pub fn from_statuses(per_device: BTreeMap<String, bool>) -> Self {
        Self {
            per_device,
            error: None,
        }
    }

    /// A result for a call that failed before any light was addressed.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            per_device: BTreeMap::new(),
            error: Some(reason.into()),
        }
    }

    /// Did the call address zero lights?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_device.is_empty()
    }

    /// Did every addressed light succeed (and was at least one addressed)?
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.error.is_none() && !self.per_device.is_empty() && self.per_device.values().all(|ok| *ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_all_selector() {
        assert_eq!(LightSelector::All.to_string(), "all");
    }

    #[test]
    fn should_render_group_selector() {
        assert_eq!(
            LightSelector::Group("Office".to_string()).to_string(),
            "group:Office"
        );
    }

    #[test]
    fn should_fall_back_to_all_when_group_is_absent_or_blank() {
        assert_eq!(LightSelector::group_or_all(None), LightSelector::All);
        assert_eq!(
            LightSelector::group_or_all(Some("  ".to_string())),
            LightSelector::All
        );
        assert_eq!(
            LightSelector::group_or_all(Some("Office".to_string())),
            LightSelector::Group("Office".to_string())
        );
    }

    #[test]
    fn should_report_all_ok_only_when_nonempty_and_all_true() {
        let mut statuses = BTreeMap::new();
        statuses.insert("Desk".to_string(), true);
        statuses.insert("Shelf".to_string(), true);
        assert!(LightingResult::from_statuses(statuses.clone()).all_ok());

        statuses.insert("Shelf".to_string(), false);
        assert!(!LightingResult::from_statuses(statuses).all_ok());
        assert!(!LightingResult::default().all_ok());
        assert!(!LightingResult::failed("connect refused").all_ok());
    }

    #[test]
    fn should_serialize_per_device_map() {
        let mut statuses = BTreeMap::new();
        statuses.insert("Desk".to_string(), true);
        let json = serde_json::to_value(LightingResult::from_statuses(statuses)).unwrap();
        assert_eq!(json, serde_json::json!({"perDeviceSuccess": {"Desk": true}}));
    }

    #[test]
    fn should_serialize_transport_error() {
        let json = serde_json::to_value(LightingResult::failed("timeout")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"perDeviceSuccess": {}, "error": "timeout"})
        );
    }
}
