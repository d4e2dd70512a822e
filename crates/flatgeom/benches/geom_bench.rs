//! Criterion benchmarks for the vertex-array core.
//! Focus sizes: ring vertex counts in {4, 16, 64, 256}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flatgeom::prelude::*;

fn ring_bytes(n: u32, seed: u64) -> Vec<u8> {
    let cfg = RingCfg {
        vertices: n,
        ..RingCfg::default()
    };
    let mut buf = vec![0u8; ring_buffer_size(&cfg)];
    draw_ring(&mut buf, cfg, ReplayToken { seed, index: 0 });
    buf
}

fn bench_geom(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_vec");
    for &n in &[4u32, 16, 64, 256] {
        let mut bytes = ring_bytes(n, 17);
        let count = n + 1;

        group.bench_with_input(BenchmarkId::new("serialize_fused", n), &n, |b, _| {
            b.iter(|| {
                let ring = VertexVec::from_buffer(&mut bytes, count);
                let mut cursor = Cursor::with_capacity(ring.serialized_size() as usize);
                let mut bbox = BoundingBox::default();
                ring.serialize_and_update_bounds(&mut cursor, &mut bbox);
                (cursor.position(), bbox)
            })
        });

        group.bench_with_input(BenchmarkId::new("contains_vertex", n), &n, |b, _| {
            b.iter(|| {
                let ring = VertexVec::from_buffer(&mut bytes, count);
                ring.contains_vertex(Vertex::new(0.1, -0.2), true)
            })
        });

        group.bench_with_input(BenchmarkId::new("is_simple", n), &n, |b, _| {
            b.iter(|| {
                let ring = VertexVec::from_buffer(&mut bytes, count);
                ring.is_simple()
            })
        });

        group.bench_with_input(BenchmarkId::new("locate_vertex", n), &n, |b, _| {
            b.iter(|| {
                let ring = VertexVec::from_buffer(&mut bytes, count);
                ring.locate_vertex(Vertex::new(2.0, 2.0))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geom);
criterion_main!(benches);
