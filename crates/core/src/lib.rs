//! huffc-core: byte-oriented Huffman codec
//!
//! This library builds an optimal prefix-code tree from the byte frequencies
//! of a message and uses it to run two paired transforms:
//! - `encode`/`decode`: a bit-string form, one '0'/'1' character per symbol
//! - `compress`/`decompress`: a packed form, eight symbols per byte with
//!   exact-bit-count bookkeeping to strip the final byte's padding
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: byte frequency counting
//! - `tree`: prefix-tree construction with a deterministic tie-break
//! - `code`: codeword derivation (iterative tree walk)
//! - `bits`: MSB-first bit writing/reading
//! - `codec`: the four transforms and the packed decoder ring
//! - `container`: sealed on-disk format pairing ring and payload
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: identical inputs always produce identical trees,
//!   codewords, and bytes — which is what lets the container ship frequency
//!   counts instead of tree shape
//! - **Explicit rings**: the decoder ring is always an argument or return
//!   value, never ambient state
//!
//! # Example
//! ```
//! use huffc_core::{compress, decode, decompress, encode};
//!
//! let msg = b"abracadabra";
//!
//! let (symbols, ring) = encode(msg)?;
//! assert_eq!(decode(&symbols, &ring)?, msg);
//!
//! let (packed, ring) = compress(msg)?;
//! assert_eq!(decompress(&packed, &ring)?, msg);
//! # Ok::<(), huffc_core::Error>(())
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export commonly used types
pub use codec::{compress, decode, decompress, encode, PackedRing};
pub use error::{Error, Result};
