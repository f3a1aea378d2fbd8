#[macro_use]
extern crate criterion;

use criterion::{Criterion, Throughput};

use duallog_config::{LoggerConfig, SinkConfig};
use duallog_core::{infof, sprintf, Arg, DualSinkLogger};

fn bench_logger_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_throughput");

    for size in [16, 256, 4096] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("info_{}", size), |b| {
            let dir = tempfile::tempdir().unwrap();
            let config = LoggerConfig {
                sinks: SinkConfig::in_directory(dir.path()),
                ..LoggerConfig::default()
            };
            let logger = DualSinkLogger::new("bench", &config).unwrap();
            let message = "m".repeat(size);
            b.iter(|| logger.info(&message).unwrap());
        });
    }
    group.finish();
}

fn bench_logf(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggerConfig {
        sinks: SinkConfig::in_directory(dir.path()),
        ..LoggerConfig::default()
    };
    let logger = DualSinkLogger::new("bench", &config).unwrap();

    c.bench_function("infof_mixed_args", |b| {
        b.iter(|| infof!(logger, "request %s took %.3fms (%d bytes)", "/health", 1.25, 512).unwrap());
    });
}

fn bench_sprintf(c: &mut Criterion) {
    let args: Vec<Arg> = vec!["worker".into(), 7.into(), 0.5.into(), 'x'.into()];
    c.bench_function("sprintf_render", |b| {
        b.iter(|| sprintf("%-10s|%05d|%8.3e|%q", criterion::black_box(&args)));
    });
}

criterion_group!(benches, bench_logger_write, bench_logf, bench_sprintf);
criterion_main!(benches);
