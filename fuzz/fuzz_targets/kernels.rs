//! Kernel-vs-reference fuzzing across all widths and directions.
//!
//! For arbitrary generator polynomials, initial registers, and inputs, the
//! table-driven kernels must reproduce the bitwise reference exactly, and
//! resuming from any split point must reproduce the one-shot result. The
//! oracle is the bitwise implementation, which is obviously correct by
//! inspection.

#![no_main]

use arbitrary::Arbitrary;
use crcfun::{
  crc8_update, crc8_update_reflected, crc16_update, crc16_update_reflected, crc32_update, crc32_update_reflected,
  crc64_update, crc64_update_reflected, reference, tables,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  poly: u64,
  init: u64,
  /// Split position for the resume check (reduced modulo len + 1).
  split: usize,
}

fuzz_target!(|input: Input| {
  check_crc8(&input);
  check_crc16(&input);
  check_crc32(&input);
  check_crc64(&input);
});

fn split_of(input: &Input) -> usize {
  input.split.strict_rem(input.data.len().strict_add(1))
}

fn check_crc8(input: &Input) {
  let poly = input.poly as u8;
  let init = input.init as u8;
  let data = &input.data;

  let forward = tables::crc8_table(poly);
  let got = crc8_update(data, init, &forward).expect("256-entry table");
  assert_eq!(
    got,
    reference::crc8_bitwise(poly, init, data),
    "crc8 forward mismatch: poly={poly:#04x}, len={}",
    data.len()
  );

  let reflected = tables::crc8_table_reflected(poly);
  let got_r = crc8_update_reflected(data, init, &reflected).expect("256-entry table");
  let poly_r = tables::reflect_bits(poly as u64, 8) as u8;
  assert_eq!(
    got_r,
    reference::crc8_bitwise_reflected(poly_r, init, data),
    "crc8 reflected mismatch: poly={poly:#04x}, len={}",
    data.len()
  );

  // Direction collapses at width 8.
  assert_eq!(
    crc8_update_reflected(data, init, &forward).expect("256-entry table"),
    got,
    "crc8 direction collapse violated"
  );
}

fn check_crc16(input: &Input) {
  let poly = input.poly as u16;
  let init = input.init as u16;
  let data = &input.data;

  let forward = tables::crc16_table(poly);
  let got = crc16_update(data, init, &forward).expect("256-entry table");
  assert_eq!(
    got,
    reference::crc16_bitwise(poly, init, data),
    "crc16 forward mismatch: poly={poly:#06x}, len={}",
    data.len()
  );

  let reflected = tables::crc16_table_reflected(poly);
  let got_r = crc16_update_reflected(data, init, &reflected).expect("256-entry table");
  let poly_r = tables::reflect_bits(poly as u64, 16) as u16;
  assert_eq!(
    got_r,
    reference::crc16_bitwise_reflected(poly_r, init, data),
    "crc16 reflected mismatch: poly={poly:#06x}, len={}",
    data.len()
  );
}

fn check_crc32(input: &Input) {
  let poly = input.poly as u32;
  let init = input.init as u32;
  let data = &input.data;
  let split = split_of(input);

  let forward = tables::crc32_table(poly);
  let got = crc32_update(data, init, &forward).expect("256-entry table");
  assert_eq!(
    got,
    reference::crc32_bitwise(poly, init, data),
    "crc32 forward mismatch: poly={poly:#010x}, len={}",
    data.len()
  );

  // Resume at an arbitrary split.
  let head = crc32_update(&data[..split], init, &forward).expect("256-entry table");
  let resumed = crc32_update(&data[split..], head, &forward).expect("256-entry table");
  assert_eq!(resumed, got, "crc32 resume mismatch at split {split}/{}", data.len());

  let reflected = tables::crc32_table_reflected(poly);
  let got_r = crc32_update_reflected(data, init, &reflected).expect("256-entry table");
  let poly_r = tables::reflect_bits(poly as u64, 32) as u32;
  assert_eq!(
    got_r,
    reference::crc32_bitwise_reflected(poly_r, init, data),
    "crc32 reflected mismatch: poly={poly:#010x}, len={}",
    data.len()
  );
}

fn check_crc64(input: &Input) {
  let poly = input.poly;
  let init = input.init;
  let data = &input.data;
  let split = split_of(input);

  let forward = tables::crc64_table(poly);
  let got = crc64_update(data, init, &forward).expect("256-entry table");
  assert_eq!(
    got,
    reference::crc64_bitwise(poly, init, data),
    "crc64 forward mismatch: poly={poly:#018x}, len={}",
    data.len()
  );

  let reflected = tables::crc64_table_reflected(poly);
  let got_r = crc64_update_reflected(data, init, &reflected).expect("256-entry table");
  let poly_r = tables::reflect_bits(poly, 64);
  assert_eq!(
    got_r,
    reference::crc64_bitwise_reflected(poly_r, init, data),
    "crc64 reflected mismatch: poly={poly:#018x}, len={}",
    data.len()
  );

  // Resume at an arbitrary split, reflected direction.
  let head = crc64_update_reflected(&data[..split], init, &reflected).expect("256-entry table");
  let resumed = crc64_update_reflected(&data[split..], head, &reflected).expect("256-entry table");
  assert_eq!(resumed, got_r, "crc64 resume mismatch at split {split}/{}", data.len());
}
