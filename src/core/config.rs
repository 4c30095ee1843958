use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::format::{DatePattern, DecimalPattern, DecimalSymbols};

/// Complete layout and text configuration for invoice documents.
///
/// Field names follow the configuration JSON (`invoice.json`). Every
/// label and paragraph string is used verbatim in the output; the format
/// patterns follow the grammars documented in [`crate::core::format`].
///
/// [`InvoiceConfig::validate`] reports all problems at once; the
/// orchestrator refuses to construct with an invalid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceConfig {
    /// Prefix prepended to the invoice identifier to form the output
    /// file path. May be a directory (with trailing separator) or a
    /// filename prefix.
    pub output_path: String,
    pub logo_path: String,
    pub lettering_path: String,
    pub signature_path: String,
    pub logo_scale_percent: u32,
    pub lettering_scale_percent: u32,
    pub signature_scale_percent: u32,
    /// Human-readable date pattern used in document body text.
    pub date_format_readable: String,
    /// Compact date pattern used in the invoice identifier and filename.
    /// Must be filesystem-safe and free of `-` literals.
    pub date_format: String,
    pub currency_format: String,
    pub quantity_format: String,
    #[serde(default)]
    pub decimal_separator: Option<char>,
    #[serde(default)]
    pub grouping_separator: Option<char>,
    pub header_font_size: u32,
    pub heading_font_size: u32,
    pub paragraph_font_size: u32,
    pub footer_font_size: u32,
    /// Content width as a percentage of the page width.
    pub content_width: u32,
    pub default_spacing: u32,
    pub line_separator_width: u32,
    pub line_separator_offset: i32,
    /// Column-width weights for the nested lettering/logo table.
    pub header_table_proportions: Vec<u32>,
    /// Column-width weights for the customer/company data table.
    pub data_table_proportions: Vec<u32>,
    /// Column-width weights for the nested contact/number table.
    pub inner_data_table_proportions: Vec<u32>,
    pub header: String,
    pub heading: String,
    pub phone_label: String,
    pub email_label: String,
    pub invoice_number_label: String,
    pub customer_id_label: String,
    pub invoice_date_label: String,
    pub performance_date_label: String,
    pub product_declaration_label: String,
    pub product_quantity_label: String,
    pub product_single_price_label: String,
    pub product_sum_price_label: String,
    pub products_sum_price_label: String,
    pub iban_label: String,
    pub bic_label: String,
    pub bank_label: String,
    pub tax_number_label: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            output_path: String::new(),
            logo_path: "logo.png".into(),
            lettering_path: "lettering.png".into(),
            signature_path: "signature.png".into(),
            logo_scale_percent: 25,
            lettering_scale_percent: 35,
            signature_scale_percent: 40,
            date_format_readable: "dd.MM.yyyy".into(),
            date_format: "yyyyMMdd".into(),
            currency_format: "#,##0.00 €".into(),
            quantity_format: "0".into(),
            decimal_separator: None,
            grouping_separator: None,
            header_font_size: 18,
            heading_font_size: 14,
            paragraph_font_size: 11,
            footer_font_size: 8,
            content_width: 100,
            default_spacing: 30,
            line_separator_width: 1,
            line_separator_offset: -4,
            header_table_proportions: vec![1, 1],
            data_table_proportions: vec![1, 1],
            inner_data_table_proportions: vec![1, 1],
            header: "Rechnung".into(),
            heading: "Rechnung".into(),
            phone_label: "Telefon".into(),
            email_label: "E-Mail".into(),
            invoice_number_label: "Rechnungsnummer".into(),
            customer_id_label: "Kundennummer".into(),
            invoice_date_label: "Rechnungsdatum".into(),
            performance_date_label: "Leistungsdatum".into(),
            product_declaration_label: "Bezeichnung".into(),
            product_quantity_label: "Anzahl".into(),
            product_single_price_label: "Einzelpreis".into(),
            product_sum_price_label: "Gesamtpreis".into(),
            products_sum_price_label: "Summe".into(),
            iban_label: "IBAN".into(),
            bic_label: "BIC".into(),
            bank_label: "Bank".into(),
            tax_number_label: "Steuernummer".into(),
            paragraph1: "Sehr geehrte/r Frau/Herr".into(),
            paragraph2: "vielen Dank für Ihre Bestellung. \
                Wir stellen Ihnen hiermit die folgenden Positionen in Rechnung."
                .into(),
            paragraph3: "Mit freundlichen Grüßen".into(),
        }
    }
}

/// Number of columns in each of the three configurable tables.
pub const TABLE_COLUMNS: usize = 2;

impl InvoiceConfig {
    /// The separator symbols the numeric formatters render with.
    pub fn decimal_symbols(&self) -> DecimalSymbols {
        let defaults = DecimalSymbols::default();
        DecimalSymbols {
            decimal: self.decimal_separator.unwrap_or(defaults.decimal),
            grouping: self.grouping_separator.unwrap_or(defaults.grouping),
        }
    }

    /// Validate the configuration. Returns all errors found (not just
    /// the first); an empty result means the configuration is usable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match DatePattern::parse(&self.date_format) {
            Ok(pattern) => {
                if pattern
                    .literals()
                    .any(|c| matches!(c, '/' | '\\' | ':' | '-'))
                {
                    errors.push(ValidationError::new(
                        "dateFormat",
                        "compact pattern must be filesystem-safe and free of '-' literals",
                    ));
                }
            }
            Err(e) => errors.push(ValidationError::new("dateFormat", e.to_string())),
        }
        if let Err(e) = DatePattern::parse(&self.date_format_readable) {
            errors.push(ValidationError::new("dateFormatReadable", e.to_string()));
        }
        if let Err(e) = DecimalPattern::parse(&self.currency_format) {
            errors.push(ValidationError::new("currencyFormat", e.to_string()));
        }
        if let Err(e) = DecimalPattern::parse(&self.quantity_format) {
            errors.push(ValidationError::new("quantityFormat", e.to_string()));
        }

        validate_proportions(
            "headerTableProportions",
            &self.header_table_proportions,
            &mut errors,
        );
        validate_proportions(
            "dataTableProportions",
            &self.data_table_proportions,
            &mut errors,
        );
        validate_proportions(
            "innerDataTableProportions",
            &self.inner_data_table_proportions,
            &mut errors,
        );

        for (field, value) in [
            ("logoScalePercent", self.logo_scale_percent),
            ("letteringScalePercent", self.lettering_scale_percent),
            ("signatureScalePercent", self.signature_scale_percent),
        ] {
            if value == 0 {
                errors.push(ValidationError::new(field, "scale percent must be positive"));
            }
        }

        for (field, value) in [
            ("headerFontSize", self.header_font_size),
            ("headingFontSize", self.heading_font_size),
            ("paragraphFontSize", self.paragraph_font_size),
            ("footerFontSize", self.footer_font_size),
        ] {
            if value == 0 {
                errors.push(ValidationError::new(field, "font size must be positive"));
            }
        }

        if !(1..=100).contains(&self.content_width) {
            errors.push(ValidationError::new(
                "contentWidth",
                "content width must be between 1 and 100 percent",
            ));
        }

        errors
    }
}

fn validate_proportions(field: &str, proportions: &[u32], errors: &mut Vec<ValidationError>) {
    if proportions.len() != TABLE_COLUMNS {
        errors.push(ValidationError::new(
            field,
            format!(
                "expected {} column weights, got {}",
                TABLE_COLUMNS,
                proportions.len()
            ),
        ));
    } else if proportions.contains(&0) {
        errors.push(ValidationError::new(field, "column weights must be positive"));
    }
}
