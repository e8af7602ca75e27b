use criterion::{Criterion, black_box, criterion_group, criterion_main};

const SMALL: &str = "var a = 1 + 2; a++;";

const LOOP_HEAVY: &str = r"
var sum = 0;
for (var i = 0; i < n; i++) {
    if (i % 2 == 0) {
        sum += i * i;
    } else {
        sum -= i;
    }
}
";

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    group.bench_function("small_expression_statement", |b| {
        b.iter(|| gasmeter::transform(black_box(SMALL)).unwrap());
    });
    group.bench_function("loop_with_nested_if", |b| {
        b.iter(|| gasmeter::transform(black_box(LOOP_HEAVY)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
