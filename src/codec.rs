//! End-to-end compression and decompression.
//!
//! `compress` runs the whole encode pipeline: count symbol frequencies,
//! build the code tree, derive per-symbol codes, pack the bits, and wrap
//! everything in a self-describing container. `decompress` reverses it by
//! rebuilding the tree from the container header and walking it bit by
//! bit. Both operations are synchronous and run to completion; each call
//! owns its own tree, heap and buffers, so concurrent calls never share
//! state.
//!
//! The `*_stats` variants additionally report the sizes and wall-clock
//! time a caller may want to display; the codec itself does not require
//! them.

use std::time::{Duration, Instant};

use log::debug;

use crate::bits::{pack_symbols, unpack_symbols};
use crate::code::build_code_table;
use crate::container::{read_container, write_container, Header};
use crate::error::{Error, Result};
use crate::freq::count_symbols;
use crate::tree::build_tree;

/// Compress `input` into a container buffer.
///
/// Empty input is signaled as [`Error::EmptyInput`]: there is nothing to
/// compress, and no buffer is produced.
///
/// # Example
///
/// ```
/// let buf = huffpack::compress("abracadabra")?;
/// assert_eq!(huffpack::decompress(&buf)?, "abracadabra");
/// # Ok::<(), huffpack::Error>(())
/// ```
pub fn compress(input: &str) -> Result<Vec<u8>> {
    let freq = count_symbols(input);
    let root = build_tree(&freq).ok_or(Error::EmptyInput)?;
    let table = build_code_table(&root);
    let payload = pack_symbols(input, &table);
    debug!(
        "encoded {} symbols ({} distinct) into {} bits",
        root.weight(),
        freq.len(),
        payload.bit_length
    );

    let header = Header {
        bit_length: payload.bit_length,
        freq,
    };
    write_container(&header, &payload.packed)
}

/// Decompress a container buffer back into the original text.
///
/// The code tree is rebuilt from the frequency table persisted in the
/// container header, so the buffer is fully self-describing. Truncated or
/// unparseable containers fail without producing partial output.
pub fn decompress(buf: &[u8]) -> Result<String> {
    let (header, packed) = read_container(buf)?;
    let root = build_tree(&header.freq).ok_or_else(|| {
        Error::MalformedContainer("header frequency table is empty".to_string())
    })?;
    debug!(
        "rebuilt code tree for {} distinct symbols, {} bits to decode",
        header.freq.len(),
        header.bit_length
    );
    unpack_symbols(packed, &root, header.bit_length)
}

/// Sizes and timing of one codec operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecStats {
    /// Byte length of the operation's input.
    pub input_bytes: usize,
    /// Byte length of the operation's output.
    pub output_bytes: usize,
    /// Wall-clock time the operation took.
    pub elapsed: Duration,
}

impl CodecStats {
    /// Output size as a percentage of input size. Below 100 means the
    /// operation shrank the data.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64 * 100.0
    }
}

/// [`compress`], plus the statistics a caller may want to display.
pub fn compress_stats(input: &str) -> Result<(Vec<u8>, CodecStats)> {
    let start = Instant::now();
    let buf = compress(input)?;
    let stats = CodecStats {
        input_bytes: input.len(),
        output_bytes: buf.len(),
        elapsed: start.elapsed(),
    };
    debug!(
        "compression finished: {} -> {} bytes ({:.2}%) in {:?}",
        stats.input_bytes,
        stats.output_bytes,
        stats.ratio(),
        stats.elapsed
    );
    Ok((buf, stats))
}

/// [`decompress`], plus the statistics a caller may want to display.
pub fn decompress_stats(buf: &[u8]) -> Result<(String, CodecStats)> {
    let start = Instant::now();
    let text = decompress(buf)?;
    let stats = CodecStats {
        input_bytes: buf.len(),
        output_bytes: text.len(),
        elapsed: start.elapsed(),
    };
    debug!(
        "decompression finished: {} -> {} bytes in {:?}",
        stats.input_bytes, stats.output_bytes, stats.elapsed
    );
    Ok((text, stats))
}
