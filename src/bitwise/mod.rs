// Binary parsing helpers for advertising data and packed payloads

pub mod bits;
pub mod parser;

pub use bits::{assemble, extract, is_set};
pub use parser::{parse_ad_body, parse_ad_length, parse_fixed};
