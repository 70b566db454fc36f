// api/options.rs

use serde::{Deserialize, Serialize};

/// Host-supplied engine configuration.
///
/// Parsed from the JSON the UI layer passes at mount time, e.g.
/// `{"useDamping": true, "followerTau": 160}`. Missing keys fall back to
/// their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// When false the follower snaps to the raw pointer each frame
    /// (equivalent to a smoothing factor of 1).
    pub use_damping: bool,
    /// Follower smoothing time constant in milliseconds: the time for ~63%
    /// convergence toward the pointer.
    pub follower_tau: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            use_damping: true,
            follower_tau: 160.0,
        }
    }
}

impl EngineOptions {
    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
