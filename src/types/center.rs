use serde::{Deserialize, Serialize};

/// Map framing hint in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Center {
    /// Fallback used when a geometry gives nothing to average (roughly the middle of India).
    pub const DEFAULT: Center = Center { latitude: 22.5, longitude: 80.0 };

    pub fn new(latitude: f64, longitude: f64) -> Self { Self { latitude, longitude } }
}

impl Default for Center {
    fn default() -> Self { Self::DEFAULT }
}
