use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One driver's reported shift data, as accepted into the pending batch.
///
/// `code` is always present and trimmed. Every other field is either absent
/// or a non-empty trimmed string; absent means "leave that cell alone".
/// Distances and counts are free text, clock times are 24-hour "hhmm" — all
/// stored as the driver typed them, the sheet does the parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_km: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_km: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reattempt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    /// Human-readable zone name; translated to a single-letter code at
    /// write time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rej_dmg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oodt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    /// Look up a tracked field by its wire name. Returns `None` both for
    /// absent fields and unknown names.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "startingKm" => self.starting_km.as_deref(),
            "endingKm" => self.ending_km.as_deref(),
            "shiftStart" => self.shift_start.as_deref(),
            "loadOut" => self.load_out.as_deref(),
            "firstStop" => self.first_stop.as_deref(),
            "lastStop" => self.last_stop.as_deref(),
            "lastReattempt" => self.last_reattempt.as_deref(),
            "stationReturn" => self.station_return.as_deref(),
            "clockOut" => self.clock_out.as_deref(),
            "zone" => self.zone.as_deref(),
            "uta" => self.uta.as_deref(),
            "utl" => self.utl.as_deref(),
            "nsl" => self.nsl.as_deref(),
            "bc" => self.bc.as_deref(),
            "rejDmg" => self.rej_dmg.as_deref(),
            "oodt" => self.oodt.as_deref(),
            "fdd" => self.fdd.as_deref(),
            "extra" => self.extra.as_deref(),
            _ => None,
        }
    }
}

/// Per-submission result of one reconciliation pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub code: String,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<i64>,
}

impl SubmissionOutcome {
    pub fn success(code: &str, row: i64, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            success: true,
            message: message.into(),
            row: Some(row),
        }
    }

    pub fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            success: false,
            message: message.into(),
            row: None,
        }
    }
}

/// Aggregate result of reconciling one pending batch.
///
/// `success + failed` always equals `results.len()`; cancelled submissions
/// count as failures. `cancelled` holds each duplicated code once,
/// uppercased, in first-seen order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub success: usize,
    pub failed: usize,
    pub cancelled: Vec<String>,
    pub results: Vec<SubmissionOutcome>,
}
