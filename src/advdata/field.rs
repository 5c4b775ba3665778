// Advertising data field types
// Assigned numbers: Bluetooth Core Specification Supplement, Part A

use std::collections::HashMap;
use std::fmt;

/// AD type code of an advertising structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdType(u8);

impl AdType {
    pub const FLAGS: AdType = AdType(0x01);
    pub const INCOMPLETE_16_SERVICE_LIST: AdType = AdType(0x02);
    pub const COMPLETE_16_SERVICE_LIST: AdType = AdType(0x03);
    pub const INCOMPLETE_32_SERVICE_LIST: AdType = AdType(0x04);
    pub const COMPLETE_32_SERVICE_LIST: AdType = AdType(0x05);
    pub const INCOMPLETE_128_SERVICE_LIST: AdType = AdType(0x06);
    pub const COMPLETE_128_SERVICE_LIST: AdType = AdType(0x07);
    pub const SHORTENED_LOCAL_NAME: AdType = AdType(0x08);
    pub const COMPLETE_LOCAL_NAME: AdType = AdType(0x09);
    pub const TX_POWER_LEVEL: AdType = AdType(0x0A);
    pub const SERVICE_DATA_16: AdType = AdType(0x16);
    pub const APPEARANCE: AdType = AdType(0x19);
    pub const MANUFACTURER_SPECIFIC_DATA: AdType = AdType(0xFF);

    pub const fn from_u8(value: u8) -> Self {
        AdType(value)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Human-readable name for the well-known types
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            AdType::FLAGS => "Flags",
            AdType::INCOMPLETE_16_SERVICE_LIST => "Incomplete List of 16-bit Service UUIDs",
            AdType::COMPLETE_16_SERVICE_LIST => "Complete List of 16-bit Service UUIDs",
            AdType::INCOMPLETE_32_SERVICE_LIST => "Incomplete List of 32-bit Service UUIDs",
            AdType::COMPLETE_32_SERVICE_LIST => "Complete List of 32-bit Service UUIDs",
            AdType::INCOMPLETE_128_SERVICE_LIST => "Incomplete List of 128-bit Service UUIDs",
            AdType::COMPLETE_128_SERVICE_LIST => "Complete List of 128-bit Service UUIDs",
            AdType::SHORTENED_LOCAL_NAME => "Shortened Local Name",
            AdType::COMPLETE_LOCAL_NAME => "Complete Local Name",
            AdType::TX_POWER_LEVEL => "Tx Power Level",
            AdType::SERVICE_DATA_16 => "Service Data - 16-bit UUID",
            AdType::APPEARANCE => "Appearance",
            AdType::MANUFACTURER_SPECIFIC_DATA => "Manufacturer Specific Data",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u8> for AdType {
    fn from(value: u8) -> Self {
        AdType(value)
    }
}

impl From<AdType> for u8 {
    fn from(value: AdType) -> Self {
        value.0
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:02X})", name, self.0),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// One (type, value) unit of advertising data, borrowed from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdField<'a> {
    pub ad_type: AdType,
    pub value: &'a [u8],
}

impl<'a> AdField<'a> {
    pub fn new(ad_type: AdType, value: &'a [u8]) -> Self {
        Self { ad_type, value }
    }

    /// Length byte this field carries on the air (type byte plus value)
    pub fn encoded_len(&self) -> usize {
        self.value.len() + 1
    }
}

/// Advertising fields keyed by type code
///
/// Inserting a type that is already present replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFieldMap {
    fields: HashMap<AdType, Vec<u8>>,
}

impl AdFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the value it replaced
    pub fn insert(&mut self, ad_type: AdType, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.fields.insert(ad_type, value.into())
    }

    pub fn get(&self, ad_type: AdType) -> Option<&[u8]> {
        self.fields.get(&ad_type).map(Vec::as_slice)
    }

    pub fn contains(&self, ad_type: AdType) -> bool {
        self.fields.contains_key(&ad_type)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Type codes present, in ascending order
    pub fn types(&self) -> Vec<AdType> {
        let mut types: Vec<AdType> = self.fields.keys().copied().collect();
        types.sort();
        types
    }
}

impl<'a> FromIterator<AdField<'a>> for AdFieldMap {
    fn from_iter<I: IntoIterator<Item = AdField<'a>>>(iter: I) -> Self {
        let mut map = AdFieldMap::new();
        for field in iter {
            map.insert(field.ad_type, field.value);
        }
        map
    }
}
