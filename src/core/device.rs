// Device enumerations carried in the QT manufacturer payload

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An assembled bit value with no matching enumeration member
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown {field} value: {value}")]
pub struct RangeError {
    pub field: &'static str,
    pub value: u8,
}

/// Housing color of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum DeviceColor {
    Orange = 1,
    Blue = 2,
    LightGreen = 3,
    Red = 4,
    MediumPurple = 5,
    LightGrey = 6,
}

impl DeviceColor {
    pub const ALL: [DeviceColor; 6] = [
        DeviceColor::Orange,
        DeviceColor::Blue,
        DeviceColor::LightGreen,
        DeviceColor::Red,
        DeviceColor::MediumPurple,
        DeviceColor::LightGrey,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceColor::Orange => "ORANGE",
            DeviceColor::Blue => "BLUE",
            DeviceColor::LightGreen => "LIGHTGREEN",
            DeviceColor::Red => "RED",
            DeviceColor::MediumPurple => "MEDIUMPURPLE",
            DeviceColor::LightGrey => "LIGHTGREY",
        }
    }
}

impl TryFrom<u8> for DeviceColor {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .ok_or(RangeError {
                field: "color",
                value,
            })
    }
}

impl fmt::Display for DeviceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operating mode of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum DeviceMode {
    Unknown = 0,
    Installer = 1,
    Dealer = 2,
    User = 3,
    NoSale = 4,
    Bca = 5,
    Valet = 6,
    Bootload = 7,
    Unconfigured = 8,
}

impl DeviceMode {
    pub const ALL: [DeviceMode; 9] = [
        DeviceMode::Unknown,
        DeviceMode::Installer,
        DeviceMode::Dealer,
        DeviceMode::User,
        DeviceMode::NoSale,
        DeviceMode::Bca,
        DeviceMode::Valet,
        DeviceMode::Bootload,
        DeviceMode::Unconfigured,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceMode::Unknown => "UNKNOWN",
            DeviceMode::Installer => "INSTALLER",
            DeviceMode::Dealer => "DEALER",
            DeviceMode::User => "USER",
            DeviceMode::NoSale => "NOSALE",
            DeviceMode::Bca => "BCA",
            DeviceMode::Valet => "VALET",
            DeviceMode::Bootload => "BOOTLOAD",
            DeviceMode::Unconfigured => "UNCONFIGURED",
        }
    }
}

impl TryFrom<u8> for DeviceMode {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.value() == value)
            .ok_or(RangeError {
                field: "mode",
                value,
            })
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
