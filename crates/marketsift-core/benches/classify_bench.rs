use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marketsift_core::{Classifier, FilterConfig};

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::new(FilterConfig::default()).unwrap();

    let titles = vec![
        "iPhone 16 Pro Max 256GB Desert Titanium",
        "iPhone 16 128GB Black - Excellent Condition $650",
        "iPhone 16 Case MagSafe Clear",
        "Samsung Galaxy S24 Ultra 512GB",
        "Apple iPad 9th Generation 64GB Space Grey WiFi",
        "Redmi Note 10 Pro 128GB Onyx Gray",
        "Samsung S24C360EAE 24 inch Curved Monitor",
        "Nintendo Switch OLED White Console",
    ];

    c.bench_function("classify_single_strict", |b| {
        b.iter(|| classifier.classify(black_box(titles[0]), black_box("iPhone 16")));
    });

    c.bench_function("classify_single_fallback", |b| {
        b.iter(|| classifier.classify(black_box(titles[7]), black_box("nintendo switch oled white")));
    });

    c.bench_function("classify_batch_8", |b| {
        b.iter(|| classifier.classify_batch(black_box(&titles), black_box("iPhone 16")));
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("classifier_new", |b| {
        b.iter(|| Classifier::new(black_box(FilterConfig::default())).unwrap());
    });
}

criterion_group!(benches, bench_classify, bench_construction);
criterion_main!(benches);
