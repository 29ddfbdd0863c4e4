use casenorm_core::{convert, to_dot_case, to_kebab_case, CaseOptions, Delimiter, Separator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INPUTS: &[&str] = &[
    "myVariableName",
    "MY_VARIABLE_NAME",
    "XMLHttpRequestHandler",
    "  some spaced   out words  ",
    "already-kebab-case-identifier",
    "mixed_Style-identifierWith SPACES",
];

fn bench_presets(c: &mut Criterion) {
    c.bench_function("to_kebab_case", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(to_kebab_case(black_box(input)));
            }
        })
    });
    c.bench_function("to_dot_case", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(to_dot_case(black_box(input)));
            }
        })
    });
}

fn bench_long_input(c: &mut Criterion) {
    let long = INPUTS.join("_").repeat(64);
    let opts = CaseOptions::kebab()
        .with_delimiter(Delimiter::DOT)
        .with_separator(Separator::HYPHEN);
    c.bench_function("convert_long", |b| {
        b.iter(|| black_box(convert(black_box(&long), &opts)))
    });
}

criterion_group!(benches, bench_presets, bench_long_input);
criterion_main!(benches);
