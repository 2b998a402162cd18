use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, TimeZone, Utc};
use marketplace_catalog::{CatalogQuery, SortBy, filter_and_sort};
use marketplace_core::{CategoryId, ProductId, SellerId, SubcategoryId};
use marketplace_products::{Price, Product};

const NAMES: [&str; 6] = ["Sac", "Montre", "Basket", "Robe", "Bague", "Casquette"];

/// Deterministic newest-first snapshot spread over 5 categories.
fn snapshot(size: usize) -> Vec<Product> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let sellers: Vec<SellerId> = (0..20).map(|_| SellerId::new()).collect();
    (0..size)
        .map(|i| {
            let category = (i % 5) as i64 + 1;
            let initial = 1_000 + (i as u64 * 7_919) % 200_000;
            let sale = if i % 3 == 0 { initial * 7 / 10 } else { initial };
            Product {
                id: ProductId::new(),
                name: format!("{} {i}", NAMES[i % NAMES.len()]),
                description: "Article de démonstration".to_string(),
                initial_price: Price::from_units(initial),
                sale_price: Price::from_units(sale.max(1)),
                stock_quantity: (i % 11) as i64,
                images: vec![format!("https://cdn.example/{i}.jpg")],
                category_id: CategoryId::new(category),
                subcategory_id: SubcategoryId::new(category * 10 + (i % 3) as i64),
                seller_id: sellers[i % sellers.len()],
                created_at: start - Duration::minutes(i as i64),
            }
        })
        .collect()
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/filter_and_sort");

    for size in [100usize, 1_000, 10_000] {
        let products = snapshot(size);
        group.throughput(Throughput::Elements(size as u64));

        for (label, query) in [
            ("newest", CatalogQuery::new()),
            ("search", CatalogQuery::new().search("sac")),
            (
                "category+price-asc",
                CatalogQuery::new()
                    .in_category(CategoryId::new(2))
                    .sorted_by(SortBy::PriceAsc),
            ),
            ("price-desc", CatalogQuery::new().sorted_by(SortBy::PriceDesc)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, size), &products, |b, products| {
                b.iter(|| filter_and_sort(black_box(products), black_box(&query)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filter_and_sort);
criterion_main!(benches);
