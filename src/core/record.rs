// Decoded telemetry snapshot of a QT device

use super::device::{DeviceColor, DeviceMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device state recovered from one advertisement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Advertised local name
    pub name: String,

    /// MAC address of the advertiser, colon-separated hex
    pub mac_address: String,

    pub color: DeviceColor,

    pub mode: DeviceMode,

    pub armed: bool,

    pub snow_mode: bool,

    /// Battery voltage in volts
    pub battery_voltage: f64,
}

impl TelemetryRecord {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] color={} mode={} armed={} snow_mode={} battery={:.2}V",
            self.name,
            self.mac_address,
            self.color,
            self.mode,
            self.armed,
            self.snow_mode,
            self.battery_voltage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TelemetryRecord {
        TelemetryRecord {
            name: "QT-1234".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
            color: DeviceColor::LightGreen,
            mode: DeviceMode::User,
            armed: true,
            snow_mode: false,
            battery_voltage: 12.0,
        }
    }

    #[test]
    fn test_json_field_names() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["name"], "QT-1234");
        assert_eq!(json["mac_address"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(json["color"], "LIGHTGREEN");
        assert_eq!(json["mode"], "USER");
        assert_eq!(json["armed"], true);
        assert_eq!(json["snow_mode"], false);
        assert_eq!(json["battery_voltage"], 12.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"name":"QT-1234","mac_address":"AA:BB:CC:DD:EE:FF","color":"LIGHTGREEN","mode":"USER","armed":true,"snow_mode":false,"battery_voltage":12.0}"#;
        assert_eq!(TelemetryRecord::from_json(json).unwrap(), sample());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "QT-1234 [AA:BB:CC:DD:EE:FF] color=LIGHTGREEN mode=USER armed=true snow_mode=false battery=12.00V"
        );
    }
}
