//! yEnc decode benchmarks.
//!
//! Run: `cargo bench -p yenc -- decode`
//!
//! Two inputs per size: typical encoder output (about 1-2% escapes, CRLF
//! every 128 bytes) and an escape-heavy worst case.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use yenc::{Codec, DecodeState, Mode, StreamDecoder, decode};

const SIZES: [usize; 4] = [1024, 16384, 131072, 786432];

/// Wire bytes with a CRLF every 128 bytes and an escape every `escape_every` bytes.
fn wire(len: usize, escape_every: usize) -> Vec<u8> {
  let mut out = Vec::with_capacity(len);
  let mut x = 0x9E37_79B9u32;
  while out.len() < len {
    if out.len() % 130 == 128 {
      out.extend_from_slice(b"\r\n");
      continue;
    }
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    if out.len() % escape_every == 0 {
      out.push(b'=');
      out.push(b'J');
    } else {
      match x as u8 {
        0 | b'\n' | b'\r' | b'=' => out.push(b'k'),
        b => out.push(b),
      }
    }
  }
  out.truncate(len);
  out
}

fn bench_kernels(c: &mut Criterion) {
  let detected = platform::caps();

  for (label, escape_every) in [("typical", 64), ("escapes", 3)] {
    for candidate in decode::candidates().iter().filter(|k| detected.has(k.requires)) {
      let mut group = c.benchmark_group(format!("decode/{label}/{}", candidate.name));

      for size in SIZES {
        let src = wire(size, escape_every);
        let mut dst = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
          b.iter(|| {
            let mut state = DecodeState::nntp();
            core::hint::black_box((candidate.func)(src, &mut dst, &mut state))
          });
        });
      }

      group.finish();
    }
  }
}

fn bench_stream(c: &mut Criterion) {
  let codec = Codec::detect();
  eprintln!("codec: {codec}");
  let mut group = c.benchmark_group("decode/stream");

  let size = 786432;
  let src = wire(size, 64);
  group.throughput(Throughput::Bytes(size as u64));

  for chunk in [1460, 16384] {
    group.bench_with_input(BenchmarkId::from_parameter(chunk), &src, |b, src| {
      b.iter(|| {
        let mut stream = StreamDecoder::new(&codec, Mode::Nntp);
        for piece in src.chunks(chunk) {
          stream.feed(piece);
        }
        core::hint::black_box(stream.crc32())
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_kernels, bench_stream);
criterion_main!(benches);
