use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use cinema_thirdparty::{InMemoryPaymentGateway, InMemorySeatBooking};
use cinema_tickets::{PricingTable, TicketService, TicketType, TicketTypeRequest, total_seats};

fn requests(lines: usize) -> Vec<TicketTypeRequest> {
    let mut requests = vec![TicketTypeRequest::new(TicketType::Adult, 1).unwrap()];
    for i in 1..lines {
        let ticket_type = TicketType::ALL[i % TicketType::ALL.len()];
        requests.push(TicketTypeRequest::new(ticket_type, 1).unwrap());
    }
    requests
}

fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");
    let table = PricingTable::default();

    for lines in [1usize, 10, 100, 1_000] {
        let input = requests(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("total_cost", lines), &input, |b, input| {
            b.iter(|| table.total_cost(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("total_seats", lines), &input, |b, input| {
            b.iter(|| total_seats(black_box(input)))
        });
    }

    group.finish();
}

fn bench_purchase(c: &mut Criterion) {
    let gateway = InMemoryPaymentGateway::new();
    let booking = InMemorySeatBooking::new();
    let service = TicketService::new(&gateway, &booking);

    // Small enough to stay under the per-purchase limit.
    let accepted = requests(3);
    let rejected = vec![TicketTypeRequest::new(TicketType::Child, 2).unwrap()];

    c.bench_function("purchase_tickets/accepted", |b| {
        b.iter(|| service.purchase_tickets(black_box(1234), black_box(&accepted)))
    });
    c.bench_function("purchase_tickets/rejected", |b| {
        b.iter(|| service.purchase_tickets(black_box(1234), black_box(&rejected)))
    });
}

criterion_group!(benches, bench_pricing, bench_purchase);
criterion_main!(benches);
