use serde::Deserialize;

/// Engine tuning knobs. Hosts usually deserialize this from their own
/// settings blob; the defaults match the production dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Regional offset applied to feed timestamps before minute bucketing
    /// (IST, +5.5h, by default).
    pub utc_offset_minutes: i32,
    /// Per-kind debounce window between a drag commit and its request.
    pub debounce_ms: u64,
    /// Vertical distance within which a pointer grabs a marker.
    pub hit_threshold_px: f64,
    /// Cap on the historical bar series.
    pub max_bars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { utc_offset_minutes: 330, debounce_ms: 500, hit_threshold_px: 10.0, max_bars: 1000 }
    }
}
