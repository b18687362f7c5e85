//! Sealed containers pairing a decoder ring with its payload.
//!
//! A container is what the four-mode tool writes to disk: enough to reverse
//! the transform later, in one self-describing byte sequence.
//!
//! # Layout
//!
//! ```text
//! +-------------------+
//! | Magic (4 bytes)   |  0x48 0x55 0x46 0x43 ("HUFC")
//! +-------------------+
//! | mode (1)          |  0x01 = encoded (bit-string), 0x02 = packed
//! +-------------------+
//! | ring_len (2)      |  u16 little-endian
//! +-------------------+
//! | bit_count (8)     |  u64, meaningful payload bits (packed mode only)
//! +-------------------+
//! | payload_len (8)   |  u64 little-endian
//! +-------------------+
//! | crc32 (4)         |  over mode, bit_count, ring, payload
//! +-------------------+
//! | ring              |  serialized frequency table (ring_len bytes)
//! +-------------------+
//! | payload           |  symbol text (encoded) or packed bytes
//! +-------------------+
//! ```
//!
//! The ring section stores the frequency table, not the tree shape: an entry
//! count (u16 LE) followed by (byte, count u64 LE) pairs in ascending byte
//! order. Tree construction is deterministic, so the reader rebuilds the
//! exact tree the writer used. In encoded mode `bit_count` is zero and the
//! payload length carries all the framing needed.
//!
//! The CRC detects accidental corruption of any protected field. A ring
//! deliberately paired with a foreign payload still decodes to garbage if the
//! alphabets happen to be compatible; that limitation is inherent to the
//! format.

use crate::codec::{self, PackedRing};
use crate::error::{ContainerError, Error, Result};
use crate::freq::FreqTable;
use crate::tree::HuffTree;

/// Magic number for sealed containers: "HUFC"
const MAGIC: [u8; 4] = [0x48, 0x55, 0x46, 0x43];

/// Size of the container header in bytes
const HEADER_SIZE: usize = 27;

/// Which transform produced the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bit-string transform: the payload is '0'/'1' text
    Encoded,
    /// Packed transform: the payload is dense bytes plus a bit count
    Packed,
}

impl Mode {
    fn to_byte(self) -> u8 {
        match self {
            Mode::Encoded => 0x01,
            Mode::Packed => 0x02,
        }
    }

    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(Mode::Encoded),
            0x02 => Ok(Mode::Packed),
            other => Err(ContainerError::UnknownMode(other).into()),
        }
    }
}

/// A parsed container, CRC already verified.
#[derive(Debug, Clone)]
pub struct Container {
    pub mode: Mode,
    pub bit_count: u64,
    pub freqs: FreqTable,
    pub payload: Vec<u8>,
}

/// Serialize a container from its parts.
pub fn seal(mode: Mode, bit_count: u64, freqs: &FreqTable, payload: &[u8]) -> Vec<u8> {
    let ring = serialize_ring(freqs);
    let crc32 = compute_crc(mode, bit_count, &ring, payload);

    let mut out = Vec::with_capacity(HEADER_SIZE + ring.len() + payload.len());
    out.extend_from_slice(&MAGIC);
    out.push(mode.to_byte());
    out.extend_from_slice(&(ring.len() as u16).to_le_bytes());
    out.extend_from_slice(&bit_count.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&crc32.to_le_bytes());
    out.extend_from_slice(&ring);
    out.extend_from_slice(payload);
    out
}

/// Parse and validate a container.
///
/// # Errors
/// - `ContainerError::TooShort` if the buffer can't hold the header or the
///   sections the header declares
/// - `ContainerError::InvalidMagic` / `ContainerError::UnknownMode` for a
///   foreign or damaged header
/// - `Error::Crc` if the checksum does not match
/// - Propagates ring deserialization errors
pub fn open(bytes: &[u8]) -> Result<Container> {
    if bytes.len() < HEADER_SIZE {
        return Err(ContainerError::TooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(ContainerError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let mode = Mode::from_byte(bytes[4])?;
    let ring_len = u16::from_le_bytes(bytes[5..7].try_into().unwrap()) as usize;
    let bit_count = u64::from_le_bytes(bytes[7..15].try_into().unwrap());
    let payload_len = u64::from_le_bytes(bytes[15..23].try_into().unwrap()) as usize;
    let crc32 = u32::from_le_bytes(bytes[23..27].try_into().unwrap());

    let expected_len = HEADER_SIZE + ring_len + payload_len;
    if bytes.len() != expected_len {
        return Err(ContainerError::TooShort {
            required: expected_len,
            actual: bytes.len(),
        }
        .into());
    }

    let ring = &bytes[HEADER_SIZE..HEADER_SIZE + ring_len];
    let payload = &bytes[HEADER_SIZE + ring_len..expected_len];

    let computed = compute_crc(mode, bit_count, ring, payload);
    if computed != crc32 {
        return Err(Error::Crc {
            expected: crc32,
            actual: computed,
        });
    }

    let freqs = deserialize_ring(ring)?;

    Ok(Container {
        mode,
        bit_count,
        freqs,
        payload: payload.to_vec(),
    })
}

/// Compress `msg` and seal the result in one step.
pub fn seal_compressed(msg: &[u8]) -> Result<Vec<u8>> {
    let (packed, ring) = codec::compress(msg)?;
    let freqs = FreqTable::from_counts(ring.tree.leaf_counts())?;
    Ok(seal(Mode::Packed, ring.bit_count, &freqs, &packed))
}

/// Open a packed-mode container and decompress its payload.
///
/// # Errors
/// `ContainerError::ModeMismatch` if the container was sealed in encoded
/// mode, plus anything `open` or `decompress` reports.
pub fn open_compressed(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = open(bytes)?;
    if container.mode != Mode::Packed {
        return Err(ContainerError::ModeMismatch {
            expected: Mode::Packed,
            actual: container.mode,
        }
        .into());
    }

    let tree = HuffTree::build(&container.freqs)?;
    let ring = PackedRing {
        bit_count: container.bit_count,
        tree,
    };
    codec::decompress(&container.payload, &ring)
}

/// Encode `msg` as '0'/'1' text and seal the result in one step.
pub fn seal_encoded(msg: &[u8]) -> Result<Vec<u8>> {
    let (symbols, tree) = codec::encode(msg)?;
    let freqs = FreqTable::from_counts(tree.leaf_counts())?;
    Ok(seal(Mode::Encoded, 0, &freqs, symbols.as_bytes()))
}

/// Open an encoded-mode container and decode its payload.
///
/// # Errors
/// `ContainerError::ModeMismatch` if the container was sealed in packed mode,
/// `ContainerError::InvalidEncodedPayload` if the payload is not text, plus
/// anything `open` or `decode` reports.
pub fn open_encoded(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = open(bytes)?;
    if container.mode != Mode::Encoded {
        return Err(ContainerError::ModeMismatch {
            expected: Mode::Encoded,
            actual: container.mode,
        }
        .into());
    }

    let tree = HuffTree::build(&container.freqs)?;
    let symbols = std::str::from_utf8(&container.payload)
        .map_err(|_| ContainerError::InvalidEncodedPayload)?;
    codec::decode(symbols, &tree)
}

/// Compute CRC32 over the protected fields.
///
/// This function defines what data is covered by the integrity check.
fn compute_crc(mode: Mode, bit_count: u64, ring: &[u8], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&[mode.to_byte()]);
    hasher.update(&bit_count.to_le_bytes());
    hasher.update(ring);
    hasher.update(payload);
    hasher.finalize()
}

/// Serialize a frequency table: entry count, then (byte, count) pairs.
fn serialize_ring(freqs: &FreqTable) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + freqs.len() * 9);
    bytes.extend_from_slice(&(freqs.len() as u16).to_le_bytes());
    for (byte, count) in freqs.iter() {
        bytes.push(byte);
        bytes.extend_from_slice(&count.to_le_bytes());
    }
    bytes
}

/// Parse a ring section back into a frequency table.
fn deserialize_ring(bytes: &[u8]) -> Result<FreqTable> {
    if bytes.len() < 2 {
        return Err(ContainerError::RingLengthMismatch {
            expected: 2,
            actual: bytes.len(),
        }
        .into());
    }

    let entry_count = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    let expected = 2 + entry_count * 9;
    if bytes.len() != expected {
        return Err(ContainerError::RingLengthMismatch {
            expected,
            actual: bytes.len(),
        }
        .into());
    }

    let entries = bytes[2..].chunks_exact(9).map(|chunk| {
        let byte = chunk[0];
        let count = u64::from_le_bytes(chunk[1..9].try_into().unwrap());
        (byte, count)
    });

    FreqTable::from_counts(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_packed_seal_open_round_trip() {
        let msg = b"hello world! this is a test.";

        let sealed = seal_compressed(msg).unwrap();
        assert_eq!(open_compressed(&sealed).unwrap(), msg);
    }

    #[test]
    fn test_encoded_seal_open_round_trip() {
        let msg = b"hello world! this is a test.";

        let sealed = seal_encoded(msg).unwrap();
        assert_eq!(open_encoded(&sealed).unwrap(), msg);
    }

    #[test]
    fn test_ring_section_round_trip() {
        let freqs = FreqTable::from_bytes(b"aaabbc").unwrap();

        let ring = serialize_ring(&freqs);
        assert_eq!(ring.len(), 2 + 3 * 9);
        assert_eq!(deserialize_ring(&ring).unwrap(), freqs);
    }

    #[test]
    fn test_invalid_magic() {
        let mut sealed = seal_compressed(b"test data").unwrap();
        sealed[0] = 0xFF;

        let result = open(&sealed);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_too_short() {
        let result = open(&[0u8; 10]);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::TooShort { .. }))
        ));
    }

    #[test]
    fn test_unknown_mode() {
        let mut sealed = seal_compressed(b"test data").unwrap();
        sealed[4] = 0x7F;

        let result = open(&sealed);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::UnknownMode(0x7F)))
        ));
    }

    #[test]
    fn test_crc_detects_payload_corruption() {
        let mut sealed = seal_compressed(b"test data for crc validation").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        let result = open(&sealed);
        assert!(matches!(result, Err(Error::Crc { .. })));
    }

    #[test]
    fn test_crc_detects_ring_corruption() {
        let mut sealed = seal_compressed(b"test data for crc validation").unwrap();
        // first ring byte sits right after the header
        sealed[HEADER_SIZE] ^= 0xFF;

        let result = open(&sealed);
        assert!(matches!(result, Err(Error::Crc { .. })));
    }

    #[test]
    fn test_mode_mismatch() {
        let sealed = seal_compressed(b"some packed data").unwrap();

        let result = open_encoded(&sealed);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::ModeMismatch {
                expected: Mode::Encoded,
                actual: Mode::Packed,
            }))
        ));
    }

    #[test]
    fn test_empty_input_propagates() {
        assert!(matches!(
            seal_compressed(b""),
            Err(Error::Codec(CodecError::EmptyInput))
        ));
    }

    #[test]
    fn test_single_byte_message() {
        let sealed = seal_compressed(b"A").unwrap();
        assert_eq!(open_compressed(&sealed).unwrap(), b"A");
    }

    #[test]
    fn test_large_single_symbol_run_compresses() {
        let msg = vec![b'X'; 65536];

        let sealed = seal_compressed(&msg).unwrap();
        assert!(sealed.len() < msg.len() / 2);
        assert_eq!(open_compressed(&sealed).unwrap(), msg);
    }
}
