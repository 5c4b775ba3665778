// QT manufacturer-specific payload
//
// Six bytes, bit groups packed into the upper bits:
//   color = byte0[7:6] | byte1[7:6] << 2
//   mode  = byte2[7:6] | byte3[6] << 2
//   armed = byte3[7], snow_mode = byte4[6]
//   battery = byte5 * 60 mV

use super::decoder::{Result, TelemetryError};
use crate::bitwise::bits;
use crate::bitwise::parser::parse_fixed;
use crate::core::constants::*;
use crate::core::{DeviceColor, DeviceMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerPayload {
    bytes: [u8; MANUFACTURER_PAYLOAD_LEN],
}

impl ManufacturerPayload {
    pub fn new(bytes: [u8; MANUFACTURER_PAYLOAD_LEN]) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8; MANUFACTURER_PAYLOAD_LEN] {
        &self.bytes
    }

    /// Raw color code before enumeration lookup
    pub fn color_code(&self) -> u8 {
        bits::assemble(&[
            (self.bytes[COLOR_LOW_BYTE], COLOR_LOW_MASK),
            (self.bytes[COLOR_HIGH_BYTE], COLOR_HIGH_MASK),
        ])
    }

    /// Raw mode code before enumeration lookup
    pub fn mode_code(&self) -> u8 {
        bits::assemble(&[
            (self.bytes[MODE_LOW_BYTE], MODE_LOW_MASK),
            (self.bytes[MODE_HIGH_BYTE], MODE_HIGH_MASK),
        ])
    }

    pub fn color(&self) -> Result<DeviceColor> {
        Ok(DeviceColor::try_from(self.color_code())?)
    }

    pub fn mode(&self) -> Result<DeviceMode> {
        Ok(DeviceMode::try_from(self.mode_code())?)
    }

    pub fn armed(&self) -> bool {
        bits::is_set(self.bytes[ARMED_BYTE], ARMED_MASK)
    }

    pub fn snow_mode(&self) -> bool {
        bits::is_set(self.bytes[SNOW_MODE_BYTE], SNOW_MODE_MASK)
    }

    pub fn battery_raw(&self) -> u8 {
        self.bytes[BATTERY_BYTE]
    }

    pub fn battery_millivolts(&self) -> u32 {
        u32::from(self.battery_raw()) * BATTERY_MV_PER_COUNT
    }

    pub fn battery_voltage(&self) -> f64 {
        battery_volts(self.battery_raw())
    }
}

impl TryFrom<&[u8]> for ManufacturerPayload {
    type Error = TelemetryError;

    fn try_from(data: &[u8]) -> Result<Self> {
        let mismatch = || TelemetryError::SizeMismatch {
            field: "manufacturer data",
            expected: MANUFACTURER_PAYLOAD_LEN,
            actual: data.len(),
        };

        if data.len() != MANUFACTURER_PAYLOAD_LEN {
            return Err(mismatch());
        }

        let (_, bytes) =
            parse_fixed::<MANUFACTURER_PAYLOAD_LEN>(data).map_err(|_| mismatch())?;

        Ok(Self::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RangeError;

    // LIGHTGREEN, USER, armed, snow mode, 200 counts
    const SAMPLE: [u8; 6] = [0xC0, 0x00, 0xC0, 0x80, 0x40, 0xC8];

    #[test]
    fn test_sample_payload() {
        let payload = ManufacturerPayload::new(SAMPLE);
        assert_eq!(payload.color_code(), 3);
        assert_eq!(payload.mode_code(), 3);
        assert_eq!(payload.color().unwrap(), DeviceColor::LightGreen);
        assert_eq!(payload.mode().unwrap(), DeviceMode::User);
        assert!(payload.armed());
        assert!(payload.snow_mode());
        assert_eq!(payload.battery_raw(), 0xC8);
        assert_eq!(payload.battery_millivolts(), 12000);
        assert_eq!(payload.battery_voltage(), 12.0);
    }

    #[test]
    fn test_high_groups_are_positional() {
        // byte1 top bits land on bits 3:2, byte3 bit 6 on bit 2
        let payload = ManufacturerPayload::new([0x40, 0x80, 0xC0, 0xC0, 0x40, 0xC8]);
        assert_eq!(payload.color_code(), 0b1001);
        assert_eq!(payload.mode_code(), 0b111);
        assert_eq!(payload.mode().unwrap(), DeviceMode::Bootload);
        assert!(matches!(
            payload.color(),
            Err(TelemetryError::Range(RangeError { field: "color", value: 9 }))
        ));
        assert!(payload.armed());
        assert!(payload.snow_mode());
        assert_eq!(payload.battery_voltage(), 12.0);
    }

    #[test]
    fn test_matches_shift_formula() {
        for b0 in [0x00u8, 0x40, 0x80, 0xC0, 0x3F] {
            for b1 in [0x00u8, 0x40, 0x80, 0xC0, 0x7F] {
                let payload = ManufacturerPayload::new([b0, b1, b0, b1, 0, 0]);
                assert_eq!(payload.color_code(), ((b0 & 0xC0) >> 6) | ((b1 & 0xC0) >> 4));
                assert_eq!(payload.mode_code(), ((b0 & 0xC0) >> 6) | ((b1 & 0x40) >> 4));
                assert_eq!(payload.armed(), b1 & 0x80 != 0);
            }
        }
    }

    #[test]
    fn test_mode_high_bit() {
        // byte3 bit 6 lands on bit 2 of the mode
        let payload = ManufacturerPayload::new([0, 0, 0x00, 0x40, 0, 0]);
        assert_eq!(payload.mode_code(), 4);
        assert_eq!(payload.mode().unwrap(), DeviceMode::NoSale);
        assert!(!payload.armed());
    }

    #[test]
    fn test_low_bits_ignored() {
        let payload = ManufacturerPayload::new([0x3F, 0x3F, 0x3F, 0x3F, 0xBF, 0]);
        assert_eq!(payload.color_code(), 0);
        assert_eq!(payload.mode_code(), 0);
        assert!(!payload.armed());
        assert!(!payload.snow_mode());
    }

    #[test]
    fn test_color_range() {
        // color 0 has no member
        let payload = ManufacturerPayload::new([0x00, 0x00, 0, 0, 0, 0]);
        assert!(matches!(payload.color(), Err(TelemetryError::Range(_))));

        // 0b1111 = 15
        let payload = ManufacturerPayload::new([0xC0, 0xC0, 0, 0, 0, 0]);
        assert_eq!(payload.color_code(), 15);
        assert!(matches!(payload.color(), Err(TelemetryError::Range(_))));

        // 0b0110 = 6
        let payload = ManufacturerPayload::new([0x80, 0x40, 0, 0, 0, 0]);
        assert_eq!(payload.color().unwrap(), DeviceColor::LightGrey);
    }

    #[test]
    fn test_try_from_slice() {
        assert_eq!(
            ManufacturerPayload::try_from(&SAMPLE[..]).unwrap().bytes(),
            &SAMPLE
        );

        for len in [0usize, 1, 5, 7, 8] {
            let data = vec![0u8; len];
            let err = ManufacturerPayload::try_from(data.as_slice()).unwrap_err();
            assert!(matches!(
                err,
                TelemetryError::SizeMismatch { expected: 6, actual, .. } if actual == len
            ));
        }
    }
}
