use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use rechnung::core::*;
use rechnung::document::compose;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
}

fn company() -> Company {
    CompanyBuilder::new(
        "Musterfirma GbR",
        AddressBuilder::new("Berlin", "10115", "Deutschland")
            .street("Hauptstraße", "12")
            .build(),
    )
    .declaration("Gesellschaft bürgerlichen Rechts")
    .add_shareholder(
        PartyBuilder::new("Max", "Mustermann")
            .contact("max@musterfirma.de", "+49 30 111")
            .build(),
    )
    .add_shareholder(
        PartyBuilder::new("Mia", "Musterfrau")
            .contact("mia@musterfirma.de", "+49 30 222")
            .build(),
    )
    .bank_account("DE89370400440532013000", "COBADEFFXXX", "Commerzbank")
    .tax_number("12/345/67890")
    .build()
}

fn order_with_lines(lines: usize) -> Order {
    let customer = PartyBuilder::new("Erika", "Beispiel")
        .address(
            AddressBuilder::new("München", "80331", "Deutschland")
                .street("Marienplatz", "1")
                .build(),
        )
        .contact("erika@example.com", "+49 89 999")
        .build_customer(4711);
    let mut builder = OrderBuilder::new("1007", test_date(), customer);
    for i in 0..lines {
        builder = builder.add_product(format!("Artikel {i}"), dec!(9.99), 3);
    }
    builder.add_product("Versand", dec!(4.50), 1).build()
}

fn bench_compose(c: &mut Criterion) {
    let config = InvoiceConfig::default();
    let company = company();
    let small = order_with_lines(10);
    let large = order_with_lines(1000);

    c.bench_function("compose_10_lines", |b| {
        b.iter(|| compose(&config, &company, black_box(&small), test_date()).unwrap())
    });

    c.bench_function("compose_1000_lines", |b| {
        b.iter(|| compose(&config, &company, black_box(&large), test_date()).unwrap())
    });
}

fn bench_formatting(c: &mut Criterion) {
    let pattern = DecimalPattern::parse("#,##0.00 €").unwrap();
    let symbols = DecimalSymbols::default();

    c.bench_function("format_currency", |b| {
        b.iter(|| pattern.format(black_box(dec!(1234567.891)), &symbols))
    });

    let date_pattern = DatePattern::parse("dd.MM.yyyy").unwrap();
    c.bench_function("format_date", |b| {
        b.iter(|| date_pattern.format(black_box(test_date())))
    });
}

criterion_group!(benches, bench_compose, bench_formatting);
criterion_main!(benches);
