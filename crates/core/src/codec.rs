//! The four transforms.
//!
//! - [`encode`] / [`decode`]: the bit-string pair. The encoded form is a
//!   string of '0'/'1' characters; the ring is the tree alone, because the
//!   symbol stream is an exact concatenation of complete codewords and
//!   self-terminates at leaves.
//! - [`compress`] / [`decompress`]: the packed pair. Eight symbols per output
//!   byte, first symbol in bit 7; the ring carries the exact meaningful bit
//!   count so padding is never decoded.
//!
//! All four are pure, single-pass transforms over in-memory buffers. The ring
//! is the only artifact that crosses calls; it is read-only once produced and
//! may serve any number of decode calls.

use crate::bits::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::error::{CodecError, Result};
use crate::freq::FreqTable;
use crate::tree::{HuffTree, Node};

/// Decoder ring for the packed transform: the tree plus the exact number of
/// meaningful bits in the payload (padding excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRing {
    pub bit_count: u64,
    pub tree: HuffTree,
}

/// Encode `msg` as a string of '0'/'1' symbols.
///
/// Returns the symbol string and the tree that decodes it.
///
/// # Errors
/// Returns `CodecError::EmptyInput` for an empty message.
pub fn encode(msg: &[u8]) -> Result<(String, HuffTree)> {
    let freqs = FreqTable::from_bytes(msg)?;
    let tree = HuffTree::build(&freqs)?;
    let table = CodeTable::from_tree(&tree)?;

    let mut symbols = String::new();
    for &byte in msg {
        let code = table
            .get(byte)
            .ok_or(CodecError::RingMismatch { byte })?;
        for bit in code.symbols() {
            symbols.push(if bit { '1' } else { '0' });
        }
    }

    Ok((symbols, tree))
}

/// Decode a '0'/'1' symbol string by walking `ring` from the root: 0 descends
/// left, 1 right; each leaf emits its byte and resets the walk.
///
/// # Errors
/// - `CodecError::MalformedSymbol` for any character outside {0, 1}
/// - `CodecError::TruncatedInput` if the string ends mid-codeword
pub fn decode(symbols: &str, ring: &HuffTree) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut chars = symbols.char_indices();

    'message: loop {
        let mut node = ring.root();
        let mut mid_path = false;
        loop {
            match node {
                Node::Leaf { byte, .. } => {
                    out.push(*byte);
                    continue 'message;
                }
                Node::Internal { left, right, .. } => {
                    let Some((position, symbol)) = chars.next() else {
                        if mid_path {
                            return Err(CodecError::TruncatedInput.into());
                        }
                        break 'message;
                    };
                    node = match symbol {
                        '0' => left,
                        '1' => right,
                        other => {
                            return Err(CodecError::MalformedSymbol {
                                symbol: other,
                                position,
                            }
                            .into())
                        }
                    };
                    mid_path = true;
                }
            }
        }
    }

    Ok(out)
}

/// Compress `msg` into packed bytes: codewords pushed bit by bit, first
/// symbol in bit 7 of each byte, final partial byte zero-padded.
///
/// Returns the packed bytes and the ring (exact bit count + tree).
///
/// # Errors
/// Returns `CodecError::EmptyInput` for an empty message.
pub fn compress(msg: &[u8]) -> Result<(Vec<u8>, PackedRing)> {
    let freqs = FreqTable::from_bytes(msg)?;
    let tree = HuffTree::build(&freqs)?;
    let table = CodeTable::from_tree(&tree)?;

    let mut writer = BitWriter::new();
    for &byte in msg {
        let code = table
            .get(byte)
            .ok_or(CodecError::RingMismatch { byte })?;
        writer.push_code(code);
    }

    let bit_count = writer.bit_len();
    let packed = writer.finish();

    Ok((packed, PackedRing { bit_count, tree }))
}

/// Decompress packed bytes: walk the tree over exactly `ring.bit_count`
/// meaningful bits, MSB-first, and ignore whatever padding follows.
///
/// # Errors
/// `CodecError::TruncatedInput` if the payload holds fewer physical bits than
/// the ring records, or if the bit budget runs out mid-codeword.
pub fn decompress(packed: &[u8], ring: &PackedRing) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = BitReader::new(packed);
    let mut remaining = ring.bit_count;

    'message: loop {
        let mut node = ring.tree.root();
        let mut mid_path = false;
        loop {
            match node {
                Node::Leaf { byte, .. } => {
                    out.push(*byte);
                    continue 'message;
                }
                Node::Internal { left, right, .. } => {
                    if remaining == 0 {
                        if mid_path {
                            return Err(CodecError::TruncatedInput.into());
                        }
                        break 'message;
                    }
                    let bit = reader.next().ok_or(CodecError::TruncatedInput)?;
                    remaining -= 1;
                    node = if bit { right } else { left };
                    mid_path = true;
                }
            }
        }
    }

    Ok(out)
}
