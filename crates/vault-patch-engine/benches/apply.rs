use criterion::{Criterion, criterion_group, criterion_main};
use vault_patch_engine::{Operation, apply};
mod common;

fn bench_apply_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);

    group.bench_function("append_prepend", |b| {
        let ops = [Operation::prepend("---\n"), Operation::append("\n- done")];
        b.iter(|| std::hint::black_box(apply(std::hint::black_box(&content), &ops)));
    });

    group.bench_function("insert_after_late_occurrence", |b| {
        let ops = [Operation::insert_after("## Section\n", "new line\n", 90)];
        b.iter(|| std::hint::black_box(apply(std::hint::black_box(&content), &ops)));
    });

    group.bench_function("replace_all", |b| {
        let ops = [Operation::replace_all("Bullet point", "List entry")];
        b.iter(|| std::hint::black_box(apply(std::hint::black_box(&content), &ops)));
    });

    group.bench_function("replace_range", |b| {
        let ops = [Operation::replace_range(1000, 2000, "")];
        b.iter(|| std::hint::black_box(apply(std::hint::black_box(&content), &ops)));
    });

    group.finish();
}

criterion_group!(benches, bench_apply_batches);
criterion_main!(benches);
