//! The self-describing container format.
//!
//! Layout: `[u32 header length, big-endian][header bytes][packed bits]`.
//! The header is a UTF-8 JSON object carrying the meaningful bit count and
//! the symbol frequency table, which is everything a decoder needs to
//! rebuild the code tree:
//!
//! ```text
//! { "bitLength": 23, "freq": { "a": 5, "b": 2, ... } }
//! ```
//!
//! The frequency map is ordered, so a given input always serializes to the
//! same header bytes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Container metadata: everything needed to decode the packed bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Number of meaningful bits in the packed payload.
    #[serde(rename = "bitLength")]
    pub bit_length: usize,
    /// Symbol frequencies the code tree is rebuilt from.
    pub freq: FrequencyTable,
}

/// Serialize a header and packed payload into one container buffer.
pub fn write_container(header: &Header, packed: &[u8]) -> Result<Vec<u8>> {
    let header_bytes = serde_json::to_vec(header)?;
    let header_len = u32::try_from(header_bytes.len())
        .map_err(|_| Error::InvalidInput("header exceeds u32 byte length".to_string()))?;

    let mut buf = Vec::with_capacity(4 + header_bytes.len() + packed.len());
    buf.extend_from_slice(&header_len.to_be_bytes());
    buf.extend_from_slice(&header_bytes);
    buf.extend_from_slice(packed);
    Ok(buf)
}

/// Split a container buffer into its parsed header and packed payload.
///
/// Fails with [`Error::MalformedContainer`] when the buffer cannot hold the
/// length prefix or the header it promises, and with [`Error::Header`] when
/// the header bytes do not parse. No partial output is produced.
pub fn read_container(buf: &[u8]) -> Result<(Header, &[u8])> {
    if buf.len() < 4 {
        return Err(Error::MalformedContainer(format!(
            "buffer of {} bytes cannot hold the 4-byte header length",
            buf.len()
        )));
    }
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&buf[..4]);
    let header_len = u32::from_be_bytes(len_bytes) as usize;

    let rest = &buf[4..];
    if header_len > rest.len() {
        return Err(Error::MalformedContainer(format!(
            "header length {} exceeds the {} remaining bytes",
            header_len,
            rest.len()
        )));
    }

    let header: Header = serde_json::from_slice(&rest[..header_len])?;
    Ok((header, &rest[header_len..]))
}
