//! Bit-level packing and unpacking of coded symbols.
//!
//! Encoding concatenates per-symbol codes into one logical bit sequence and
//! packs it most-significant-bit-first, eight bits per byte, zero-padding
//! the unused low-order bits of the final byte. The exact bit count travels
//! with the bytes; without it the padding would be indistinguishable from
//! data on decode.

use bitvec::prelude::*;

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::tree::HuffmanNode;

/// Packed code bits plus the number of meaningful bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Code bits, MSB-first. Holds `bit_length.div_ceil(8)` bytes.
    pub packed: Vec<u8>,
    /// Exact number of meaningful bits in `packed`.
    pub bit_length: usize,
}

/// Concatenate each input symbol's code in order and pack the bits.
///
/// The table must cover every symbol in `input`; both are always derived
/// from the same text, so a missing entry is a contract violation rather
/// than a recoverable error.
pub fn pack_symbols(input: &str, table: &CodeTable) -> EncodedPayload {
    let mut bits = BitVec::<u8, Msb0>::new();
    for ch in input.chars() {
        let code = table
            .get(&ch)
            .expect("code table must cover every input symbol");
        for bit in code.bytes() {
            bits.push(bit == b'1');
        }
    }
    let bit_length = bits.len();
    EncodedPayload {
        packed: bits.into_vec(),
        bit_length,
    }
}

/// Decode `bit_length` bits of packed data by walking the tree.
///
/// Each bit steps from the current node to its `zero` child on 0 or its
/// `one` child on 1; reaching a leaf emits that leaf's symbol and resets
/// the walk to the root. Exactly `bit_length` bits are consumed; a valid
/// payload always ends on a leaf boundary. A bit count exceeding the
/// packed data, or a step into a missing child, means the container was
/// corrupted in transit and is reported as malformed.
pub fn unpack_symbols(
    packed: &[u8],
    root: &HuffmanNode,
    bit_length: usize,
) -> Result<String> {
    let bits = packed.view_bits::<Msb0>();
    if bit_length > bits.len() {
        return Err(Error::MalformedContainer(format!(
            "bit count {} exceeds {} bits of packed data",
            bit_length,
            bits.len()
        )));
    }

    let mut out = String::new();
    let mut node = root;
    for bit in bits[..bit_length].iter().by_vals() {
        let next = match node {
            HuffmanNode::Internal { zero, one, .. } => {
                if bit {
                    one.as_deref().ok_or_else(|| {
                        Error::MalformedContainer(
                            "bit walk stepped into a missing child".to_string(),
                        )
                    })?
                } else {
                    zero.as_ref()
                }
            }
            HuffmanNode::Leaf { .. } => {
                return Err(Error::InvalidInput(
                    "decode tree root is a bare leaf".to_string(),
                ))
            }
        };
        if let HuffmanNode::Leaf { symbol, .. } = next {
            out.push(*symbol);
            node = root;
        } else {
            node = next;
        }
    }

    Ok(out)
}
