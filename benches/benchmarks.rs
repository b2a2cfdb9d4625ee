use bucketeer::cards::combos::CardCombinations;
use bucketeer::cards::hand::Hand;
use bucketeer::cards::strength::Strength;
use bucketeer::clustering::distance::Distance;
use bucketeer::clustering::distance::Emd;
use bucketeer::clustering::distance::Euclidean;
use bucketeer::strengths::showdown::showdown_row;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_strength,
        enumerating_villain_pairs,
        computing_showdown_row,
        computing_histogram_emd,
        computing_river_euclidean,
}

fn evaluating_river_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = Hand::from(&[20u8, 21, 0, 14, 31, 37, 46][..]);
        b.iter(|| Strength::from(hand))
    });
}

fn enumerating_villain_pairs(c: &mut criterion::Criterion) {
    c.bench_function("enumerate 990 opposing pairs", |b| {
        let mut villains = CardCombinations::new(2);
        let blocked = [20u8, 21, 0, 14, 31, 37, 46];
        b.iter(|| {
            villains.reset(&blocked);
            let mut count = 0;
            while !villains.done() {
                count += 1;
                villains.advance();
            }
            count
        })
    });
}

fn computing_showdown_row(c: &mut criterion::Criterion) {
    c.bench_function("compute one showdown row", |b| {
        let rollout = [20u8, 21, 0, 14, 31, 37, 46];
        let mut villains = CardCombinations::new(2);
        b.iter(|| showdown_row(&rollout, &mut villains))
    });
}

fn computing_histogram_emd(c: &mut criterion::Criterion) {
    c.bench_function("EMD over 50-bucket histograms", |b| {
        let mut p = [0u16; 50];
        let mut q = [0u16; 50];
        for i in 0..50 {
            p[i] = ((i * 37) % 50) as u16;
            q[49 - i] = ((i * 23) % 50) as u16;
        }
        b.iter(|| Emd::measure(&p, &q))
    });
}

fn computing_river_euclidean(c: &mut criterion::Criterion) {
    c.bench_function("euclidean over 8-cluster equities", |b| {
        let p = [0.1f64, 0.4, 0.3, 0.8, 0.2, 0.9, 0.55, 0.6];
        let q = [0.35f64, 0.2, 0.65, 0.4, 0.7, 0.1, 0.55, 0.3];
        b.iter(|| Euclidean::measure(&p, &q))
    });
}
