use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rsection::data::Outline;
use rsection::compute_shear_centre;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  for n in [20, 1000, 100_000] {
    let outline = Outline::<f64>::random(n, 300.0, &mut rng);
    c.bench_function(&format!("compute_shear_centre({})", n), |b| {
      b.iter(|| compute_shear_centre(black_box(outline.points())))
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
