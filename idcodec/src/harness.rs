//! Encode/decode throughput harness.
//!
//! [`bench_codec`] times an encode sub-benchmark and a decode sub-benchmark over the
//! shared pool. The decode side always consumes the buffer its own encode side produced:
//! the buffer is private to a [`CodecRun`], which is bound to one codec.

use crate::{
    codec::{self, IdCodec},
    config::HarnessConfig,
    pool::IdentifierPool,
    result::{Error, Result},
};
use std::{
    collections::BTreeMap,
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};

/// A failed codec call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub iteration: u32,
    /// Pool slot of the identifier.
    pub index: usize,
    pub error: Error,
}

/// Encoded text, one slot per pool identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedBuffer {
    slots: Vec<String>,
}

impl EncodedBuffer {
    fn with_len(len: usize) -> Self {
        Self {
            slots: vec![String::new(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }
}

/// Timing and failures of one sub-benchmark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassStats {
    pub iterations: u32,
    /// Codec calls made: `iterations * pool.len()`.
    pub operations: u64,
    pub elapsed: Duration,
    pub failures: Vec<Failure>,
}

impl PassStats {
    #[allow(clippy::cast_precision_loss)]
    pub fn ns_per_op(&self) -> f64 {
        if self.operations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.operations as f64
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.operations as f64 / secs
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of benchmarking one codec.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecReport {
    pub codec: &'static str,
    pub encode: PassStats,
    pub decode: PassStats,
    /// Round trip failures found after timing.
    pub mismatches: Vec<Failure>,
}

impl CodecReport {
    pub fn is_ok(&self) -> bool {
        self.encode.is_ok() && self.decode.is_ok() && self.mismatches.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.encode
            .failures
            .iter()
            .chain(&self.decode.failures)
            .chain(&self.mismatches)
    }
}

impl fmt::Display for CodecReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, stats) in [("Encode", &self.encode), ("Decode", &self.decode)] {
            writeln!(
                f,
                "{}/{label}\t{}\t{:.1} ns/op\t{:.0} ops/s\t{} failures",
                self.codec,
                stats.operations,
                stats.ns_per_op(),
                stats.ops_per_sec(),
                stats.failures.len()
            )?;
        }
        write!(
            f,
            "{}/RoundTrip\t{} mismatches",
            self.codec,
            self.mismatches.len()
        )
    }
}

/// One codec bound to the pool and its own encoded buffer.
pub struct CodecRun<'a, C: IdCodec + ?Sized> {
    codec: &'a C,
    pool: &'a IdentifierPool,
    buffer: EncodedBuffer,
}

impl<'a, C: IdCodec + ?Sized> CodecRun<'a, C> {
    pub fn new(codec: &'a C, pool: &'a IdentifierPool) -> Self {
        Self {
            codec,
            pool,
            buffer: EncodedBuffer::with_len(pool.len()),
        }
    }

    /// The text written by the latest encode pass.
    pub fn buffer(&self) -> &EncodedBuffer {
        &self.buffer
    }

    /// Encode the pool in order, overwriting the buffer.
    /// A failed slot is cleared and recorded; the pass always runs to the end.
    pub fn encode_pass(&mut self, iteration: u32, failures: &mut Vec<Failure>) {
        for (index, (id, slot)) in self.pool.iter().zip(&mut self.buffer.slots).enumerate() {
            match self.codec.encode(id) {
                Ok(encoded) => *slot = encoded,
                Err(error) => {
                    slot.clear();
                    failures.push(Failure {
                        iteration,
                        index,
                        error,
                    });
                }
            }
        }
    }

    /// Decode the buffer in order. Failures are recorded; the pass always runs to the end.
    pub fn decode_pass(&self, iteration: u32, failures: &mut Vec<Failure>) {
        for (index, encoded) in self.buffer.slots.iter().enumerate() {
            if let Err(error) = black_box(self.codec.decode(black_box(encoded))) {
                failures.push(Failure {
                    iteration,
                    index,
                    error,
                });
            }
        }
    }

    /// Time `iterations` encode passes.
    pub fn encode_iterations(&mut self, iterations: u32) -> PassStats {
        let mut failures = Vec::new();
        let start = Instant::now();
        for iteration in 0..iterations {
            self.encode_pass(iteration, &mut failures);
        }
        let elapsed = start.elapsed();
        self.stats(iterations, elapsed, failures)
    }

    /// Time `iterations` decode passes over the current buffer.
    pub fn decode_iterations(&self, iterations: u32) -> PassStats {
        let mut failures = Vec::new();
        let start = Instant::now();
        for iteration in 0..iterations {
            self.decode_pass(iteration, &mut failures);
        }
        let elapsed = start.elapsed();
        self.stats(iterations, elapsed, failures)
    }

    fn stats(&self, iterations: u32, elapsed: Duration, failures: Vec<Failure>) -> PassStats {
        PassStats {
            iterations,
            operations: u64::from(iterations) * self.pool.len() as u64,
            elapsed,
            failures,
        }
    }
}

/// Benchmark one codec: timed encode passes, then timed decode passes over the
/// resulting buffer, then (if configured) an untimed round trip check.
pub fn bench_codec<C: IdCodec + ?Sized>(
    codec: &C,
    pool: &IdentifierPool,
    config: &HarnessConfig,
) -> CodecReport {
    let name = codec.name();
    let mut run = CodecRun::new(codec, pool);

    debug!(codec = name, pool = pool.len(), iterations = config.iterations, "encode");
    let encode = run.encode_iterations(config.iterations);
    report_failures(name, "encode", &encode.failures);

    debug!(codec = name, pool = pool.len(), iterations = config.iterations, "decode");
    let decode = run.decode_iterations(config.iterations);
    report_failures(name, "decode", &decode.failures);

    let mismatches = if config.verify_round_trip {
        round_trip_failures(codec, pool)
    } else {
        Vec::new()
    };
    report_failures(name, "round trip", &mismatches);

    let report = CodecReport {
        codec: name,
        encode,
        decode,
        mismatches,
    };
    info!(
        codec = name,
        encode_ns_per_op = report.encode.ns_per_op(),
        decode_ns_per_op = report.decode.ns_per_op(),
        ok = report.is_ok(),
        "benchmark finished"
    );
    report
}

/// Benchmark every built-in codec, each with its own buffer.
pub fn bench_all(pool: &IdentifierPool, config: &HarnessConfig) -> Vec<CodecReport> {
    codec::all()
        .into_iter()
        .map(|codec| bench_codec(codec, pool, config))
        .collect()
}

/// Check `decode(encode(pool[i])) == pool[i]` for every slot. Nothing is timed.
pub fn round_trip_failures<C: IdCodec + ?Sized>(codec: &C, pool: &IdentifierPool) -> Vec<Failure> {
    pool.iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let error = match codec.encode(id).and_then(|encoded| codec.decode(&encoded)) {
                Ok(decoded) if decoded == *id => return None,
                Ok(decoded) => Error::RoundTripMismatch {
                    index,
                    expected: id.to_string(),
                    actual: decoded.to_string(),
                },
                Err(error) => error,
            };
            Some(Failure {
                iteration: 0,
                index,
                error,
            })
        })
        .collect()
}

/// Like [`round_trip_failures`], returning the first failure as an error.
pub fn verify_round_trip<C: IdCodec + ?Sized>(codec: &C, pool: &IdentifierPool) -> Result<()> {
    match round_trip_failures(codec, pool).into_iter().next() {
        Some(failure) => Err(failure.error),
        None => Ok(()),
    }
}

/// Log failures, one line per pool slot with its repeat count.
pub fn report_failures(codec: &str, pass: &str, failures: &[Failure]) {
    let mut by_slot: BTreeMap<usize, (&Error, usize)> = BTreeMap::new();
    for failure in failures {
        by_slot.entry(failure.index).or_insert((&failure.error, 0)).1 += 1;
    }
    for (index, (error, count)) in by_slot {
        warn!(codec, pass, index, count, %error, "codec call failed");
    }
}
