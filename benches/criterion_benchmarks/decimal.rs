use criterion::{black_box, Criterion, criterion_group};

use realpack::io::decimal::parse_z;
use realpack::{frac, Z};

const TEXT: &str = "-341236451927364918723649187236491872364918723649151987234659187346591837465918732465982736598273645982734659287364598712364591873645918734561983746519384756198347561938475619348765134";

pub fn parse_u8(c: &mut Criterion) {
    c.bench_function("parse with 8 bit digits", |b| b.iter(|| {
        parse_z::<u8>(black_box(TEXT))
    }));
}

pub fn parse_u64(c: &mut Criterion) {
    c.bench_function("parse with 64 bit digits", |b| b.iter(|| {
        parse_z::<u64>(black_box(TEXT))
    }));
}

pub fn format_u64(c: &mut Criterion) {
    let value: Z = TEXT.parse().unwrap();
    c.bench_function("format with 64 bit digits", |b| b.iter(|| {
        black_box(&value).to_string()
    }));
}

pub fn fixed_point(c: &mut Criterion) {
    let u: Z<u32> = TEXT.parse().unwrap();
    let v = Z::from(987619238756193487_u64);
    c.bench_function("expand and format a quotient", |b| b.iter(|| {
        frac(black_box(&u), black_box(&v), 20).map(|value| format!("{:.150}", value))
    }));
}

criterion_group!(decimal,
    parse_u8,
    parse_u64,
    format_u64,
    fixed_point,
);
