//! Orchestrator and batch driver tests against the plain-text backend.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rechnung::batch;
use rechnung::core::*;
use rechnung::document::{Document, InvoiceGenerator, RenderBackend, TextRenderer};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
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

fn order(number: &str) -> Order {
    let customer = PartyBuilder::new("Erika", "Beispiel")
        .address(
            AddressBuilder::new("München", "80331", "Deutschland")
                .street("Marienplatz", "1")
                .build(),
        )
        .contact("erika@example.com", "+49 89 999")
        .build_customer(4711);
    OrderBuilder::new(number, date(2024, 3, 2), customer)
        .add_product("Widget", dec!(9.99), 3)
        .add_product("Versand", dec!(4.50), 1)
        .build()
}

/// A scratch directory under the system temp dir with the three
/// configured images present.
fn workspace(test: &str) -> (PathBuf, InvoiceConfig) {
    let dir = std::env::temp_dir().join("rechnung-tests").join(test);
    fs::create_dir_all(&dir).unwrap();
    let image = |name: &str| {
        let path = dir.join(name);
        fs::write(&path, b"png").unwrap();
        path.to_str().unwrap().to_string()
    };
    let config = InvoiceConfig {
        output_path: format!("{}/", dir.display()),
        logo_path: image("logo.png"),
        lettering_path: image("lettering.png"),
        signature_path: image("signature.png"),
        ..Default::default()
    };
    (dir, config)
}

#[test]
fn identity_is_available_from_construction() {
    let (_dir, config) = workspace("identity");
    let company = company();
    let order = order("1007");
    let generator = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5)).unwrap();
    assert_eq!(generator.invoice_id(), "20240302-1007");
    assert!(
        generator
            .output_path()
            .to_str()
            .unwrap()
            .ends_with("20240302-1007.pdf")
    );
}

#[test]
fn artifact_before_generation_is_a_sequencing_error() {
    let (_dir, config) = workspace("not-generated");
    let company = company();
    let order = order("1007");
    let generator = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5)).unwrap();
    assert!(matches!(
        generator.artifact(),
        Err(InvoiceError::NotGenerated(_))
    ));
}

#[test]
fn generate_writes_the_derived_file() {
    let (dir, config) = workspace("generate");
    let company = company();
    let order = order("1007");
    let mut generator = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5)).unwrap();
    let artifact = generator.generate(&TextRenderer::new()).unwrap();

    assert_eq!(artifact.id, "20240302-1007");
    assert_eq!(artifact.path, dir.join("20240302-1007.pdf"));
    assert!(artifact.path.is_file());
    assert_eq!(generator.artifact().unwrap(), &artifact);

    let rendition = fs::read_to_string(&artifact.path).unwrap();
    assert!(rendition.contains("Rechnung 20240302-1007"));
    assert!(rendition.contains("34,47 €"));
}

#[test]
fn rerunning_overwrites_the_same_file() {
    let (dir, config) = workspace("rerun");
    let company = company();
    let order = order("1008");
    let backend = TextRenderer::new();

    let first = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5))
        .unwrap()
        .generate(&backend)
        .unwrap();
    let second = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5))
        .unwrap()
        .generate(&backend)
        .unwrap();
    assert_eq!(first, second);

    let matching = fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_str().unwrap().starts_with("20240302-1008"))
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn repeated_composition_yields_identical_models() {
    let (_dir, config) = workspace("determinism");
    let company = company();
    let order = order("1009");
    let generator = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5)).unwrap();
    assert_eq!(
        generator.document().unwrap(),
        generator.document().unwrap()
    );
}

#[test]
fn missing_image_fails_generation_with_a_resource_error() {
    let (_dir, mut config) = workspace("missing-image");
    config.logo_path = "nowhere/logo.png".into();
    let company = company();
    let order = order("1010");
    let mut generator = InvoiceGenerator::new(&config, &company, &order, date(2024, 3, 5)).unwrap();

    let err = generator.generate(&TextRenderer::new()).unwrap_err();
    assert!(matches!(err, InvoiceError::Resource(_)));
    assert!(matches!(
        generator.artifact(),
        Err(InvoiceError::NotGenerated(_))
    ));
}

#[test]
fn one_shareholder_fails_before_any_output() {
    let (dir, config) = workspace("sole-shareholder");
    let sole = CompanyBuilder::new(
        "Einzelfirma",
        AddressBuilder::new("Berlin", "10115", "Deutschland").build(),
    )
    .add_shareholder(PartyBuilder::new("Max", "Mustermann").build())
    .build();
    let order = order("1011");

    let err = InvoiceGenerator::new(&config, &sole, &order, date(2024, 3, 5)).unwrap_err();
    assert!(matches!(err, InvoiceError::Config(_)));
    assert!(!dir.join("20240302-1011.pdf").exists());
}

// --- Batch driver ---

/// Backend that refuses paths containing a marker, for failure-path
/// testing.
struct FailingFor<'a> {
    marker: &'a str,
    inner: TextRenderer,
}

impl RenderBackend for FailingFor<'_> {
    fn render(&self, document: &Document, path: &Path) -> Result<(), InvoiceError> {
        if path.to_str().unwrap().contains(self.marker) {
            return Err(InvoiceError::Render("simulated backend failure".into()));
        }
        self.inner.render(document, path)
    }
}

#[test]
fn batch_continues_past_failures() {
    let (_dir, config) = workspace("batch");
    let company = company();
    let orders = vec![order("2001"), order("2002"), order("2003")];
    let backend = FailingFor {
        marker: "2002",
        inner: TextRenderer::new(),
    };

    let outcome = batch::generate_all(&config, &company, &orders, date(2024, 3, 5), &backend);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.artifacts.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].order_number, "2002");
    assert!(matches!(
        outcome.failures[0].error,
        InvoiceError::Render(_)
    ));
}

#[test]
fn batch_of_valid_orders_is_complete() {
    let (_dir, config) = workspace("batch-ok");
    let company = company();
    let orders = vec![order("3001"), order("3002")];

    let outcome = batch::generate_all(
        &config,
        &company,
        &orders,
        date(2024, 3, 5),
        &TextRenderer::new(),
    );
    assert!(outcome.is_complete());
    assert_eq!(outcome.artifacts.len(), 2);
    assert_eq!(outcome.artifacts[0].id, "20240302-3001");
}
