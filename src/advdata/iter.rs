// Iteration over length-prefixed advertising structures
//
// Layout: [len][type][value: len - 1 bytes] repeated. A zero length byte ends
// the data; anything after it is padding.

use super::field::{AdField, AdFieldMap, AdType};
use crate::bitwise::parser::{parse_ad_body, parse_ad_length};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvDataError {
    #[error(
        "Malformed advertising data at offset {offset}: need {needed} bytes, {available} available"
    )]
    BufferMalformed {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, AdvDataError>;

/// Lazy iterator over the fields of an advertising data buffer
///
/// Yields `Err` once for a record that overruns the buffer, then stops.
/// Cloning the iterator restarts from the clone point.
#[derive(Debug, Clone)]
pub struct AdFieldIter<'a> {
    data: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> AdFieldIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next record
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn malformed(&mut self, needed: usize) -> AdvDataError {
        self.done = true;
        AdvDataError::BufferMalformed {
            offset: self.offset,
            needed,
            available: self.data.len() - self.offset,
        }
    }
}

impl<'a> Iterator for AdFieldIter<'a> {
    type Item = Result<AdField<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.data.len() {
            self.done = true;
            return None;
        }

        let data = self.data;
        let input = &data[self.offset..];

        let (body, length) = match parse_ad_length(input) {
            Ok(parsed) => parsed,
            Err(_) => return Some(Err(self.malformed(1))),
        };

        if length == 0 {
            self.done = true;
            return None;
        }

        let (_, (ad_type, value)) = match parse_ad_body(length)(body) {
            Ok(parsed) => parsed,
            Err(_) => return Some(Err(self.malformed(usize::from(length) + 1))),
        };

        self.offset += usize::from(length) + 1;
        Some(Ok(AdField::new(AdType::from(ad_type), value)))
    }
}

impl std::iter::FusedIterator for AdFieldIter<'_> {}

/// Iterate the fields of an advertising data buffer lazily
pub fn iter_fields(data: &[u8]) -> AdFieldIter<'_> {
    AdFieldIter::new(data)
}

/// Parse every field of an advertising data buffer, in order
pub fn parse_fields(data: &[u8]) -> Result<Vec<AdField<'_>>> {
    iter_fields(data).collect()
}

/// Collect the fields of an advertising data buffer by type code
///
/// When a type code repeats, the last occurrence wins.
pub fn collect_fields(data: &[u8]) -> Result<AdFieldMap> {
    let mut map = AdFieldMap::new();

    for field in iter_fields(data) {
        let field = field?;
        if map.insert(field.ad_type, field.value).is_some() {
            tracing::debug!("Repeated advertising field {}, keeping last", field.ad_type);
        }
    }

    Ok(map)
}
