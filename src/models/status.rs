use serde::Deserialize;

/// Status reported by the EMS status API on `GET /get_status`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    /// Electricity price in ct/€
    pub current_price: f64,
    pub charging: String,
    pub battery_capacity_kwh: f64,
    pub battery_capacity_percent: f64,
    // Older API versions do not report consumption
    #[serde(default)]
    pub facility_consumption_rate: Option<f64>,
    #[serde(default)]
    pub total_consumption_kwh: Option<f64>,
}
