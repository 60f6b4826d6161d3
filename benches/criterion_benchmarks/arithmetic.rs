use criterion::{black_box, Criterion, criterion_group};

use realpack::{div_z, mul_z, Z};

fn operands() -> (Z, Z) {
    let u = "109374109283740198237409182734019827340918273409182374091827340918263508172365091827350198723509182735019875401983475103456982736459287346592873465928374652983746529837465298374652938475692837465928374652983475629834765293847668713465987173459134616123761732615719784676435123451728341076467632452345923487528345435879619435698132529837456293847562938475629384765293847562934875629348756018723049160928374610928347019283"
        .parse().unwrap();
    let v = "8109283570198236501982375091837409182374091827340918273409182734019865109348751098234710298374102974582863492372901341593476511450143655632123948828963476784393657843768576870603493428511987936789234387410293847012938751092387501928375102938471023984710293847102983741029834701985710983257109847501439875103498571039485710489357109328"
        .parse().unwrap();
    (u, v)
}

pub fn multiply_large(c: &mut Criterion) {
    let (u, v) = operands();
    c.bench_function("multiply 1400 bit by 1100 bit integer", |b| b.iter(|| {
        mul_z(black_box(&u), black_box(&v))
    }));
}

pub fn divide_large(c: &mut Criterion) {
    let (u, v) = operands();
    c.bench_function("divide 1400 bit by 1100 bit integer", |b| b.iter(|| {
        div_z(black_box(&u), black_box(&v))
    }));
}

pub fn divide_short(c: &mut Criterion) {
    let (u, _) = operands();
    let v = Z::from(182734);
    c.bench_function("divide 1400 bit integer by a single digit", |b| b.iter(|| {
        div_z(black_box(&u), black_box(&v))
    }));
}

pub fn power(c: &mut Criterion) {
    let base = Z::<u64>::from(-3);
    c.bench_function("raise to the 1000th power", |b| b.iter(|| {
        black_box(&base).pow(1000)
    }));
}

criterion_group!(arithmetic,
    multiply_large,
    divide_large,
    divide_short,
    power,
);
