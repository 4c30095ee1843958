use chrono::NaiveDate;
use rechnung::core::*;
use rechnung::document::{InvoiceGenerator, TextRenderer};
use rust_decimal_macros::dec;

fn main() {
    let company = CompanyBuilder::new(
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
    .build();

    let customer = PartyBuilder::new("Erika", "Beispiel")
        .address(
            AddressBuilder::new("München", "80331", "Deutschland")
                .street("Marienplatz", "1")
                .build(),
        )
        .contact("erika@example.com", "+49 89 999")
        .build_customer(4711);

    let order = OrderBuilder::new(
        "1007",
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        customer,
    )
    .add_product("Widget", dec!(9.99), 3)
    .add_product("Versand", dec!(4.50), 1)
    .build();

    let config = InvoiceConfig::default();
    let generator = InvoiceGenerator::new(
        &config,
        &company,
        &order,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    )
    .expect("configuration should be valid");

    println!("invoice id:  {}", generator.invoice_id());
    println!("output path: {}", generator.output_path().display());

    // Compose without rendering and show the textual rendition. A real
    // deployment plugs a PDF adapter into the same RenderBackend seam.
    let document = generator.document().expect("composition should succeed");
    println!("\n{}", TextRenderer::new().render_to_string(&document));
}
