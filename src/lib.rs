//! Lossless Huffman entropy coding with a self-describing container.
//!
//! The encoder derives a prefix code from symbol frequencies, packs the
//! coded bits MSB-first, and prepends a header carrying the frequency
//! table and meaningful bit count so the buffer decodes on its own. The
//! decoder rebuilds the code tree from that header and walks it bit by
//! bit back to the exact original text.
//!
//! # Quick start
//!
//! ```
//! let buf = huffpack::compress("abracadabra")?;
//! let text = huffpack::decompress(&buf)?;
//! assert_eq!(text, "abracadabra");
//! # Ok::<(), huffpack::Error>(())
//! ```
//!
//! Each pipeline stage (frequency counting, tree construction, code table
//! generation, bit packing, the container format) is exposed as its own
//! module for callers that need direct access.

pub mod bits;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod heap;
pub mod tree;

pub use codec::{compress, compress_stats, decompress, decompress_stats, CodecStats};
pub use error::{Error, Result};
