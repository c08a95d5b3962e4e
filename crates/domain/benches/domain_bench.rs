use criterion::{Criterion, criterion_group, criterion_main};
use domain::{PurchaseSummary, TicketType, TicketTypeRequest};

fn bench_small_purchase(c: &mut Criterion) {
    let requests = vec![
        TicketTypeRequest::new(TicketType::Adult, 2).unwrap(),
        TicketTypeRequest::new(TicketType::Child, 1).unwrap(),
        TicketTypeRequest::new(TicketType::Infant, 1).unwrap(),
    ];

    c.bench_function("domain/summary_small_purchase", |b| {
        b.iter(|| PurchaseSummary::from_requests(&requests));
    });
}

fn bench_full_batch(c: &mut Criterion) {
    // One request per ticket, up to the per-purchase limit.
    let requests: Vec<TicketTypeRequest> = (0..25)
        .map(|i| TicketTypeRequest::new(TicketType::ALL[i % 3], 1).unwrap())
        .collect();

    c.bench_function("domain/summary_full_batch", |b| {
        b.iter(|| PurchaseSummary::from_requests(&requests));
    });
}

criterion_group!(benches, bench_small_purchase, bench_full_batch);
criterion_main!(benches);
