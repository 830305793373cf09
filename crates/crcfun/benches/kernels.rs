use core::hint::black_box;

use crcfun::{
  crc8_update, crc8_update_reflected, crc16_update, crc16_update_reflected, crc32_update, crc32_update_reflected,
  crc64_update, crc64_update_reflected, reference, tables,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CASES: &[(&str, usize)] = &[("64B", 64), ("4KiB", 4096), ("64KiB", 65536)];

const CRC8_POLY: u8 = 0x07;
const CRC16_POLY: u16 = 0x1021;
const CRC32_POLY: u32 = 0x04C1_1DB7;
const CRC64_POLY: u64 = 0x42F0_E1EB_A9EA_3693;

fn make_data(len: usize) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = 0x2545_F491_4F6C_DD1Du64;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = x as u8;
  }
  out
}

fn bench_crc8_kernels(c: &mut Criterion) {
  let forward = tables::crc8_table(CRC8_POLY);
  let reflected = tables::crc8_table_reflected(0x31);

  let mut group = c.benchmark_group("kernels/crc8");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("forward", label), &data, |b, data| {
      b.iter(|| crc8_update(black_box(data), black_box(0u8), &forward))
    });
    group.bench_with_input(BenchmarkId::new("reflected", label), &data, |b, data| {
      b.iter(|| crc8_update_reflected(black_box(data), black_box(0u8), &reflected))
    });
  }
  group.finish();
}

fn bench_crc16_kernels(c: &mut Criterion) {
  let forward = tables::crc16_table(CRC16_POLY);
  let reflected = tables::crc16_table_reflected(0x8005);

  let mut group = c.benchmark_group("kernels/crc16");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("forward", label), &data, |b, data| {
      b.iter(|| crc16_update(black_box(data), black_box(!0u16), &forward))
    });
    group.bench_with_input(BenchmarkId::new("reflected", label), &data, |b, data| {
      b.iter(|| crc16_update_reflected(black_box(data), black_box(0u16), &reflected))
    });
  }
  group.finish();
}

fn bench_crc32_kernels(c: &mut Criterion) {
  let forward = tables::crc32_table(CRC32_POLY);
  let reflected = tables::crc32_table_reflected(CRC32_POLY);

  let mut group = c.benchmark_group("kernels/crc32");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("forward", label), &data, |b, data| {
      b.iter(|| crc32_update(black_box(data), black_box(!0u32), &forward))
    });
    group.bench_with_input(BenchmarkId::new("reflected", label), &data, |b, data| {
      b.iter(|| crc32_update_reflected(black_box(data), black_box(!0u32), &reflected))
    });
  }
  group.finish();
}

fn bench_crc64_kernels(c: &mut Criterion) {
  let forward = tables::crc64_table(CRC64_POLY);
  let reflected = tables::crc64_table_reflected(CRC64_POLY);

  let mut group = c.benchmark_group("kernels/crc64");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("forward", label), &data, |b, data| {
      b.iter(|| crc64_update(black_box(data), black_box(!0u64), &forward))
    });
    group.bench_with_input(BenchmarkId::new("reflected", label), &data, |b, data| {
      b.iter(|| crc64_update_reflected(black_box(data), black_box(!0u64), &reflected))
    });
  }
  group.finish();
}

/// Bitwise oracle, for the speedup headline rather than for tuning.
fn bench_reference(c: &mut Criterion) {
  let mut group = c.benchmark_group("reference/bitwise");
  for &(label, size) in &[("64B", 64usize), ("4KiB", 4096)] {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32", label), &data, |b, data| {
      b.iter(|| reference::crc32_bitwise_reflected(black_box(0xEDB8_8320), black_box(!0u32), black_box(data)))
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_crc8_kernels,
  bench_crc16_kernels,
  bench_crc32_kernels,
  bench_crc64_kernels,
  bench_reference
);
criterion_main!(benches);
