use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use billetqc_sheet::{MemorySheet, RedbSheet, SheetStore};

/// Five strands per heat is the largest batch a submission produces.
fn batch_rows() -> Vec<Vec<u8>> {
    (1..=5)
        .map(|i| format!(r#"{{"strand":"S0{}","rh":1.25,"status":"PASS"}}"#, i).into_bytes())
        .collect()
}

fn bench_redb_append_batch(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let sheet = RedbSheet::open(&tmp.path().join("bench.redb")).unwrap();
    let rows = batch_rows();

    c.bench_function("redb_append_batch", |b| {
        b.iter(|| {
            sheet.append(black_box("production_logs"), black_box(&rows)).unwrap();
        });
    });
}

fn bench_redb_read_all(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let sheet = RedbSheet::open(&tmp.path().join("bench.redb")).unwrap();
    let rows = batch_rows();

    // 1000 heats worth of rows.
    for _ in 0..1000 {
        sheet.append("production_logs", &rows).unwrap();
    }

    c.bench_function("redb_read_all_5000", |b| {
        b.iter(|| {
            let all = sheet.read_all(black_box("production_logs")).unwrap();
            assert_eq!(all.len(), 5000);
        });
    });
}

fn bench_memory_append_batch(c: &mut Criterion) {
    let sheet = MemorySheet::new();
    let rows = batch_rows();

    c.bench_function("memory_append_batch", |b| {
        b.iter(|| {
            sheet.append(black_box("production_logs"), black_box(&rows)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_redb_append_batch,
    bench_redb_read_all,
    bench_memory_append_batch,
);
criterion_main!(benches);
