// BLE advertising data parsing
pub mod field;
pub mod iter;

pub use field::{AdField, AdFieldMap, AdType};
pub use iter::{collect_fields, iter_fields, parse_fields, AdFieldIter, AdvDataError};
