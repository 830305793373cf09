//! Differential fuzzing against reference implementations.
//!
//! Drives the kernels with the CRC-32 (IEEE 802.3) and CRC-64/XZ parameter
//! sets and compares against well-established crates to catch any
//! discrepancies.

#![no_main]

use crcfun::{crc32_update_reflected, crc64_update_reflected, tables};
use libfuzzer_sys::fuzz_target;

const CRC32_IEEE_TABLE: [u32; 256] = tables::crc32_table_reflected(0x04C1_1DB7);
const CRC64_XZ_TABLE: [u64; 256] = tables::crc64_table_reflected(0x42F0_E1EB_A9EA_3693);

fuzz_target!(|data: &[u8]| {
  test_crc32_ieee_differential(data);
  test_crc64_xz_differential(data);
});

fn test_crc32_ieee_differential(data: &[u8]) {
  let raw = crc32_update_reflected(data, !0u32, &CRC32_IEEE_TABLE).expect("256-entry table");
  let ours = raw ^ !0u32;

  let mut hasher = crc32fast::Hasher::new();
  hasher.update(data);
  let reference = hasher.finalize();

  assert_eq!(
    ours,
    reference,
    "CRC-32/IEEE differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc64_xz_differential(data: &[u8]) {
  let raw = crc64_update_reflected(data, !0u64, &CRC64_XZ_TABLE).expect("256-entry table");
  let ours = raw ^ !0u64;

  let mut digest = crc64fast::Digest::new();
  digest.write(data);
  let reference = digest.sum64();

  assert_eq!(
    ours,
    reference,
    "CRC-64/XZ differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours,
    reference,
    data.len()
  );
}
