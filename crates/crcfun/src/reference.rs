//! Bitwise reference implementations for all CRC widths.
//!
//! This module is the source of truth for CRC computation. Each function
//! processes its input one bit at a time, directly mirroring polynomial
//! division: no tables, a dozen lines per width, and `const fn` throughout
//! so check values can be pinned at compile time.
//!
//! The table-driven kernels must produce identical raw register values to
//! these functions for every (polynomial, initial, input) triple; that
//! equivalence is what qualifies them as a drop-in replacement.
//!
//! Forward functions process MSB-first and take the polynomial in normal
//! form (implicit high bit stripped). Reflected functions process LSB-first
//! and take the polynomial already bit-reversed; see
//! [`crate::tables::reflect_bits`].
//!
//! # Performance
//!
//! These are intentionally slow (~8 operations per bit). Use them as test
//! oracles and for generating expected values, not in production paths.

// All array indexing uses bounded loop indices (0..data.len()); clippy
// cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// 8-Bit Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise forward (MSB-first) CRC-8 computation.
///
/// Returns the raw register state; the caller applies any final XOR.
#[must_use]
pub const fn crc8_bitwise(poly: u8, init: u8, data: &[u8]) -> u8 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i];
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

/// Bitwise reflected (LSB-first) CRC-8 computation.
///
/// `poly` is the reflected polynomial (e.g. 0x8C for CRC-8/MAXIM).
#[must_use]
pub const fn crc8_bitwise_reflected(poly: u8, init: u8, data: &[u8]) -> u8 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i];
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// 16-Bit Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise forward (MSB-first) CRC-16 computation.
///
/// Input bytes enter at the top of the register.
///
/// # Arguments
///
/// * `poly` - Normal polynomial (e.g., 0x1021 for CRC-16/CCITT)
/// * `init` - Initial register value (typically 0xFFFF or 0x0000)
/// * `data` - Input bytes
#[must_use]
pub const fn crc16_bitwise(poly: u16, init: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u16) << 8;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

/// Bitwise reflected (LSB-first) CRC-16 computation.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xA001 for CRC-16/ARC)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc16_bitwise_reflected(poly: u16, init: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u16;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// 32-Bit Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise forward (MSB-first) CRC-32 computation.
///
/// # Arguments
///
/// * `poly` - Normal polynomial (e.g., 0x04C11DB7 for CRC-32/BZIP2)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

/// Bitwise reflected (LSB-first) CRC-32 computation.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32/IEEE)
/// * `init` - Initial register value (typically 0xFFFFFFFF)
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise_reflected(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// 64-Bit Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise forward (MSB-first) CRC-64 computation.
///
/// # Arguments
///
/// * `poly` - Normal polynomial (e.g., 0x42F0E1EBA9EA3693 for CRC-64/ECMA-182)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u64) << 56;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000_0000_0000 != 0 {
        (crc << 1) ^ poly
      } else {
        crc << 1
      };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

/// Bitwise reflected (LSB-first) CRC-64 computation.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xC96C5795D7870F42 for CRC-64/XZ)
/// * `init` - Initial register value (typically all ones)
/// * `data` - Input bytes
#[must_use]
pub const fn crc64_bitwise_reflected(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementations against known
// check values at compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-8 (SMBus): poly=0x07, init=0x00, xorout=0x00
// Check value: 0xF4
const _: () = {
  let check = crc8_bitwise(0x07, 0x00, CHECK_INPUT);
  assert!(check == 0xF4);
};

// CRC-8/MAXIM: poly=0x31 (reflected 0x8C), init=0x00, xorout=0x00
// Check value: 0xA1
const _: () = {
  let check = crc8_bitwise_reflected(0x8C, 0x00, CHECK_INPUT);
  assert!(check == 0xA1);
};

// CRC-16/CCITT-FALSE: poly=0x1021, init=0xFFFF, xorout=0x0000
// Check value: 0x29B1
const _: () = {
  let check = crc16_bitwise(0x1021, 0xFFFF, CHECK_INPUT);
  assert!(check == 0x29B1);
};

// CRC-16/ARC: poly=0x8005 (reflected 0xA001), init=0x0000, xorout=0x0000
// Check value: 0xBB3D
const _: () = {
  let check = crc16_bitwise_reflected(0xA001, 0x0000, CHECK_INPUT);
  assert!(check == 0xBB3D);
};

// CRC-32/BZIP2: poly=0x04C11DB7, init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xFC891918
const _: () = {
  let raw = crc32_bitwise(0x04C1_1DB7, !0u32, CHECK_INPUT);
  let check = raw ^ !0u32;
  assert!(check == 0xFC89_1918);
};

// CRC-32/IEEE: poly=0x04C11DB7 (reflected 0xEDB88320), init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xCBF43926
const _: () = {
  let raw = crc32_bitwise_reflected(0xEDB8_8320, !0u32, CHECK_INPUT);
  let check = raw ^ !0u32;
  assert!(check == 0xCBF4_3926);
};

// CRC-64/ECMA-182: poly=0x42F0E1EBA9EA3693, init=0, xorout=0
// Check value: 0x6C40DF5F0B497347
const _: () = {
  let check = crc64_bitwise(0x42F0_E1EB_A9EA_3693, 0, CHECK_INPUT);
  assert!(check == 0x6C40_DF5F_0B49_7347);
};

// CRC-64/XZ: poly reflected 0xC96C5795D7870F42, init and xorout all ones
// Check value: 0x995DC9BBDF1939FA
const _: () = {
  let raw = crc64_bitwise_reflected(0xC96C_5795_D787_0F42, !0u64, CHECK_INPUT);
  let check = raw ^ !0u64;
  assert!(check == 0x995D_C9BB_DF19_39FA);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
