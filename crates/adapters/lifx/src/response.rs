//! Vendor response shapes.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Body of a `set state` multi-status response.
#[derive(Debug, Deserialize)]
pub(crate) struct SetStateResponse {
    pub results: Vec<BulbResult>,
}

/// Per-bulb outcome inside a multi-status response. The vendor also sends
/// a bulb id; only the label and status matter here, and serde skips the
/// rest.
#[derive(Debug, Deserialize)]
pub(crate) struct BulbResult {
    pub label: String,
    pub status: String,
}

impl SetStateResponse {
    /// Collapse to the port's label → success map. The vendor reports
    /// `"ok"` for applied changes; `"timed_out"` and `"offline"` are the
    /// failure words.
    pub(crate) fn into_status_map(self) -> BTreeMap<String, bool> {
        self.results
            .into_iter()
            .map(|bulb| (bulb.label, bulb.status == "ok"))
            .collect()
    }
}
