mod calculator_chainweave;
mod calculator_nom;

use calculator_chainweave::chainweave_parser;
use calculator_nom::nom_parser;
use criterion::{black_box, criterion_group, Criterion};
use log::trace;

const PROGRAM: &str = "1 + 2 * 3 / (3 + 1) * 5;
  ((2 + 2) * 7 - 1.5) / 3 ;
  5 * 5 * (1 - 2 * (3 - 4))";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("calculator_nom", |b| b.iter(|| nom_parser(black_box(PROGRAM))));
}

pub fn bench_chainweave(c: &mut Criterion) {
    c.bench_function("calculator_chainweave", |b| {
        b.iter(|| chainweave_parser(black_box(PROGRAM)))
    });
}

criterion_group!(benches, bench_nom, bench_chainweave);

fn main() {
    env_logger::init();
    trace!(target: "cw", "Logging enabled");
    assert_eq!(nom_parser(PROGRAM), chainweave_parser(PROGRAM));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
