//! Options controlling a cleaning run.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Sentinel written into missing text and category cells.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Value written into missing datetime cells.
pub const EPOCH_FILL: &str = "2000-01-01 00:00:00";

/// Which cleaning variant to run.
///
/// `Standard` coerces `event_ts`/`event_dt` to timestamps and fills them
/// with the epoch. `Canonical` keeps them as text, reformats them to
/// `HH:MM:SS` and `DD-MM-YYYY`, and also normalizes the integer-coded
/// features `var_44..var_50` to `{0,1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningProfile {
    #[default]
    Standard,
    Canonical,
}

impl CleaningProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Canonical => "canonical",
        }
    }

    /// Whether the date/time canonicalization stage runs.
    pub fn canonicalizes_datetimes(self) -> bool {
        matches!(self, Self::Canonical)
    }
}

impl fmt::Display for CleaningProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleaningProfile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "1" => Ok(Self::Standard),
            "canonical" | "2" => Ok(Self::Canonical),
            other => Err(ModelError::UnknownProfile(other.to_string())),
        }
    }
}

/// Truthy and falsy tokens recognized by the boolean normalizer.
///
/// Tokens are compared after trimming and lowercasing the cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanTokens {
    pub truthy: BTreeSet<String>,
    pub falsy: BTreeSet<String>,
}

impl Default for BooleanTokens {
    fn default() -> Self {
        Self {
            truthy: ["true", "1", "yes"].map(String::from).into(),
            falsy: ["false", "0", "no"].map(String::from).into(),
        }
    }
}

impl BooleanTokens {
    /// Build a token set, rejecting tokens listed on both sides.
    pub fn new<I, J>(truthy: I, falsy: J) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let truthy: BTreeSet<String> = truthy
            .into_iter()
            .map(|t| normalize_token(t.as_ref()))
            .collect();
        let falsy: BTreeSet<String> = falsy
            .into_iter()
            .map(|t| normalize_token(t.as_ref()))
            .collect();
        if let Some(token) = truthy.intersection(&falsy).next() {
            return Err(ModelError::ConflictingToken(token.clone()));
        }
        Ok(Self { truthy, falsy })
    }

    /// Map a raw cell to `1`, `0`, or `None` when unrecognized.
    pub fn classify(&self, raw: &str) -> Option<i64> {
        let token = normalize_token(raw);
        if self.truthy.contains(&token) {
            Some(1)
        } else if self.falsy.contains(&token) {
            Some(0)
        } else {
            None
        }
    }
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Options for a cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOptions {
    pub profile: CleaningProfile,
    /// Fill value for missing text and category cells.
    pub unknown_sentinel: String,
    /// Fill value for missing datetime cells, in `YYYY-MM-DD HH:MM:SS` form.
    pub datetime_fill: String,
    pub boolean_tokens: BooleanTokens,
    /// Allow raw cell values in debug logs.
    #[serde(default)]
    pub log_data: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            profile: CleaningProfile::default(),
            unknown_sentinel: UNKNOWN_SENTINEL.to_string(),
            datetime_fill: EPOCH_FILL.to_string(),
            boolean_tokens: BooleanTokens::default(),
            log_data: false,
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: CleaningProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_boolean_tokens(mut self, tokens: BooleanTokens) -> Self {
        self.boolean_tokens = tokens;
        self
    }

    pub fn with_log_data(mut self, enabled: bool) -> Self {
        self.log_data = enabled;
        self
    }
}
