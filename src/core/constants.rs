// Constants for the QT manufacturer payload and scan records

/// Manufacturer-specific payload length carried by QT devices
pub const MANUFACTURER_PAYLOAD_LEN: usize = 6;

/// MAC address text length, e.g. "AA:BB:CC:DD:EE:FF"
pub const MAC_ADDRESS_LEN: usize = 17;

/// Battery voltage resolution in millivolts per raw count
pub const BATTERY_MV_PER_COUNT: u32 = 60;

/// Byte positions within the manufacturer payload
pub const COLOR_LOW_BYTE: usize = 0;
pub const COLOR_HIGH_BYTE: usize = 1;
pub const MODE_LOW_BYTE: usize = 2;
pub const MODE_HIGH_BYTE: usize = 3;
pub const ARMED_BYTE: usize = 3;
pub const SNOW_MODE_BYTE: usize = 4;
pub const BATTERY_BYTE: usize = 5;

/// Bit masks within those bytes
pub const COLOR_LOW_MASK: u8 = 0xC0;
pub const COLOR_HIGH_MASK: u8 = 0xC0;
pub const MODE_LOW_MASK: u8 = 0xC0;
pub const MODE_HIGH_MASK: u8 = 0x40;
pub const ARMED_MASK: u8 = 0x80;
pub const SNOW_MODE_MASK: u8 = 0x40;

/// Convert a raw battery count to volts
pub fn battery_volts(raw: u8) -> f64 {
    f64::from(u32::from(raw) * BATTERY_MV_PER_COUNT) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_volts() {
        assert_eq!(battery_volts(0), 0.0);
        assert_eq!(battery_volts(200), 12.0);
        assert_eq!(battery_volts(255), 15.3);
        assert_eq!(battery_volts(50), 3.0);
    }
}
