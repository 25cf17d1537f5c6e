//! Benchmarks for path resolution and tree lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nixfolio_vfs::{FsNode, StaticVfs, Vfs, resolve};

fn wide_tree(n_dirs: usize, n_files: usize) -> StaticVfs {
    let dirs = (0..n_dirs)
        .map(|d| {
            let files = (0..n_files)
                .map(|f| FsNode::file(format!("file_{f}.txt"), "x"))
                .collect();
            FsNode::dir(format!("dir_{d}"), files)
        })
        .collect();
    StaticVfs::new(FsNode::dir("", dirs)).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vfs_resolve");
    for (label, path) in [
        ("absolute", "/home/hetav/projects/clickify/README.md"),
        ("relative", "projects/../documents/./resume.txt"),
        ("clamped", "../../../../../../etc"),
    ] {
        group.bench_function(BenchmarkId::new("resolve", label), |b| {
            b.iter(|| resolve(path, "/home/hetav"));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("vfs_lookup");
    for (n_dirs, n_files) in [(10, 10), (100, 100)] {
        let vfs = wide_tree(n_dirs, n_files);
        let last = format!("/dir_{}/file_{}.txt", n_dirs - 1, n_files - 1);
        let label = format!("{n_dirs}x{n_files}");

        group.bench_function(BenchmarkId::new("file_content", &label), |b| {
            b.iter(|| vfs.file_content(&last, "/"));
        });
        group.bench_function(BenchmarkId::new("list_directory", &label), |b| {
            b.iter(|| vfs.list_directory("/dir_0", "/").map(<[FsNode]>::len));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_lookup);
criterion_main!(benches);
