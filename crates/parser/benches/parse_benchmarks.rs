use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use pedidos_parser::parse_order;

fn bench_parse(c: &mut Criterion) {
    let single_line = "cliente: Ana pedido: 2 arroz";
    let multi_line = "cliente: Luis pedido: 3 kilos de papa 1 pan\n\
                      2 centro\n\
                      5 kilos de queso\n\
                      gracias, paso a las 5";

    let mut group = c.benchmark_group("parse_order");
    group.throughput(Throughput::Bytes(single_line.len() as u64));
    group.bench_function("single_line", |b| {
        b.iter(|| parse_order(black_box(single_line)))
    });
    group.throughput(Throughput::Bytes(multi_line.len() as u64));
    group.bench_function("multi_line", |b| {
        b.iter(|| parse_order(black_box(multi_line)))
    });
    group.finish();

    // Worst-ish case: many alternating digit/description runs on one line.
    let dense: String = (1..200).map(|n| format!("{n} producto{n} ")).collect();
    c.bench_function("parse_order/dense_line", |b| {
        b.iter(|| parse_order(black_box(&dense)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
