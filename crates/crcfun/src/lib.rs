//! Table-driven CRC update kernels.
//!
//! This crate is the fast path of a CRC calculator: given an input byte
//! sequence, a running register value, and a precomputed 256-entry lookup
//! table, each kernel folds the input into the register one byte (one table
//! lookup) at a time. Results are bit-for-bit identical to bit-by-bit
//! polynomial division over the same generator, so the kernels slot in as a
//! drop-in replacement for a bitwise implementation at roughly 8× fewer
//! operations per byte.
//!
//! Widths 8, 16, 32, and 64 are covered, each in a forward (MSB-first) and a
//! reflected (LSB-first) variant: eight entry points in total, from
//! [`crc8_update`] to [`crc64_update_reflected`]. The kernels hold no state and apply no
//! whole-algorithm conventions: initial value, final XOR, and output
//! reflection belong to the caller, which is also what makes the register
//! resumable across arbitrary input splits.
//!
//! # Example
//!
//! ```rust
//! use crcfun::{crc32_update_reflected, tables};
//!
//! // CRC-32 (IEEE 802.3): reflected, init all ones, final XOR all ones.
//! let table = tables::crc32_table_reflected(0x04C1_1DB7);
//! let crc = crc32_update_reflected(b"123456789", !0u32, &table)?;
//! assert_eq!(crc ^ !0u32, 0xCBF4_3926);
//!
//! // The register carries across splits.
//! let head = crc32_update_reflected(b"1234", !0u32, &table)?;
//! assert_eq!(crc32_update_reflected(b"56789", head, &table)?, crc);
//! # Ok::<(), crcfun::InvalidTableError>(())
//! ```
//!
//! # Tables
//!
//! Tables are supplied by the caller; any 256-entry table of matching width
//! works, wherever it came from. The [`tables`] module provides const-fn
//! builders for deriving tables from a generator polynomial, and
//! [`reference`] holds the bitwise oracle the kernels are verified against.
//!
//! # no_std
//!
//! The crate is `no_std` and allocation-free; kernels are pure functions
//! over borrowed data and are freely callable from concurrent workers.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod error;
mod kernels;
pub mod reference;
pub mod tables;

pub use error::InvalidTableError;
pub use kernels::{
  crc8_update, crc8_update_reflected, crc16_update, crc16_update_reflected, crc32_update, crc32_update_reflected,
  crc64_update, crc64_update_reflected,
};
