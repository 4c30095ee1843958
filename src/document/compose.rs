//! Pure composition of the invoice document model.
//!
//! [`compose`] turns the typed business records and the layout
//! configuration into the full block sequence of an invoice: header,
//! address block, itemized product table, closing text, signature, and
//! footer. No I/O happens here; images stay path references and the
//! output file is the orchestrator's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{
    Company, DatePattern, DecimalPattern, DecimalSymbols, InvoiceConfig, InvoiceError,
    InvoiceIdentity, Order,
};

use super::model::*;

/// Build the document model for one invoice.
///
/// Fails fast on an invalid configuration or a company with fewer than
/// two shareholders; nothing is partially composed on error.
pub fn compose(
    config: &InvoiceConfig,
    company: &Company,
    order: &Order,
    performance_date: NaiveDate,
) -> Result<Document, InvoiceError> {
    Composer::new(config, company, order, performance_date)?.document()
}

#[derive(Debug)]
pub(crate) struct Composer<'a> {
    config: &'a InvoiceConfig,
    company: &'a Company,
    order: &'a Order,
    invoice_date: NaiveDate,
    performance_date: NaiveDate,
    identity: InvoiceIdentity,
    readable: DatePattern,
    currency: DecimalPattern,
    quantity: DecimalPattern,
    symbols: DecimalSymbols,
    header_font: FontSpec,
    heading_font: FontSpec,
    paragraph_font: FontSpec,
    footer_font: FontSpec,
    rule: Rule,
}

impl<'a> Composer<'a> {
    pub(crate) fn new(
        config: &'a InvoiceConfig,
        company: &'a Company,
        order: &'a Order,
        performance_date: NaiveDate,
    ) -> Result<Self, InvoiceError> {
        let issues = config.validate();
        if !issues.is_empty() {
            return Err(InvoiceError::from_validation(&issues));
        }
        if company.shareholders.len() < 2 {
            return Err(InvoiceError::Config(format!(
                "company '{}' has {} shareholder(s), the invoice layout needs two",
                company.name,
                company.shareholders.len()
            )));
        }

        let wrap = |e: crate::core::PatternError| InvoiceError::Config(e.to_string());
        let compact = DatePattern::parse(&config.date_format).map_err(wrap)?;
        let readable = DatePattern::parse(&config.date_format_readable).map_err(wrap)?;
        let currency = DecimalPattern::parse(&config.currency_format).map_err(wrap)?;
        let quantity = DecimalPattern::parse(&config.quantity_format).map_err(wrap)?;

        let identity =
            InvoiceIdentity::derive(&order.number, order.date, &compact, &config.output_path);

        Ok(Self {
            config,
            company,
            order,
            invoice_date: order.date,
            performance_date,
            identity,
            readable,
            currency,
            quantity,
            symbols: config.decimal_symbols(),
            header_font: FontSpec::primary(config.header_font_size),
            heading_font: FontSpec::primary(config.heading_font_size),
            paragraph_font: FontSpec::primary(config.paragraph_font_size),
            footer_font: FontSpec::secondary(config.footer_font_size),
            rule: Rule {
                thickness: config.line_separator_width,
                width_percent: config.content_width,
                offset: config.line_separator_offset,
            },
        })
    }

    pub(crate) fn identity(&self) -> &InvoiceIdentity {
        &self.identity
    }

    pub(crate) fn document(&self) -> Result<Document, InvoiceError> {
        let config = self.config;
        let first = &self.company.shareholders[0];

        let blocks = vec![
            Block::Table(self.header()?),
            Block::Rule(self.rule),
            Block::Table(self.data_table()?),
            Block::Rule(self.rule),
            Block::Paragraph(self.heading()),
            Block::Blank,
            Block::Paragraph(Paragraph::new(
                format!(
                    "{} {},",
                    config.paragraph1, self.order.customer.party.last_name
                ),
                self.paragraph_font,
            )),
            Block::Blank,
            Block::Paragraph(Paragraph::new(&config.paragraph2, self.paragraph_font)),
            Block::Table(self.product_table()?),
            Block::Paragraph(Paragraph::new(&config.paragraph3, self.paragraph_font)),
            Block::Image(ImageNode::new(
                &config.signature_path,
                config.signature_scale_percent,
            )),
            Block::Paragraph(Paragraph::new(
                format!(
                    "{} ({}, {})",
                    first.full_name(),
                    self.company.address.location,
                    self.readable.format(self.invoice_date)
                ),
                self.paragraph_font,
            )),
            Block::Table(self.footer()?),
        ];

        Ok(Document { blocks })
    }

    fn heading(&self) -> Paragraph {
        Paragraph::new(
            format!("{} {}", self.config.heading, self.identity.id()),
            self.heading_font,
        )
        .spacing_before(self.config.default_spacing)
    }

    fn header(&self) -> Result<Table, InvoiceError> {
        let config = self.config;

        let title = Cell::text(&config.header, self.header_font)
            .v_align(VAlign::Middle)
            .borderless();

        let lettering = Cell::image(ImageNode::new(
            &config.lettering_path,
            config.lettering_scale_percent,
        ))
        .h_align(HAlign::Center)
        .v_align(VAlign::Middle)
        .borderless();
        let logo = Cell::image(ImageNode::new(&config.logo_path, config.logo_scale_percent))
            .h_align(HAlign::Center)
            .v_align(VAlign::Middle)
            .borderless();

        let images = Table::new(config.header_table_proportions.clone(), vec![lettering, logo])?;

        Ok(
            Table::new(vec![1, 1], vec![title, Cell::table(images).borderless()])?
                .width_percent(config.content_width),
        )
    }

    fn data_table(&self) -> Result<Table, InvoiceError> {
        let customer = self.customer_information();
        let company = self.company_information(self.paragraph_font);
        let [cust_name, cust_street, cust_location, cust_country] = customer;
        let [comp_name, comp_declaration, comp_street, comp_location, comp_country] = company;

        let cells = vec![
            cust_name,
            comp_name,
            cust_street,
            comp_declaration,
            cust_location,
            comp_street,
            cust_country,
            comp_location,
            self.empty_cell(),
            comp_country,
            self.empty_cell(),
            self.empty_cell(),
            self.empty_cell(),
            Cell::table(self.inner_data_table()?).borderless(),
        ];

        Ok(
            Table::new(self.config.data_table_proportions.clone(), cells)?
                .width_percent(self.config.content_width)
                .spacing_before(self.config.default_spacing),
        )
    }

    fn inner_data_table(&self) -> Result<Table, InvoiceError> {
        let config = self.config;
        let first = &self.company.shareholders[0];
        let second = &self.company.shareholders[1];

        let cells = vec![
            self.text_cell(format!("{} ({}):", config.phone_label, first.last_name)),
            self.text_cell(first.contact.phone.clone()),
            self.text_cell(format!("{} ({}):", config.phone_label, second.last_name)),
            self.text_cell(second.contact.phone.clone()),
            self.text_cell(format!("{}:", config.email_label)),
            self.text_cell(second.contact.email.clone()),
            self.text_cell(format!("{}:", config.invoice_number_label)),
            self.text_cell(self.identity.id().to_string()),
            self.text_cell(format!("{}:", config.customer_id_label)),
            self.text_cell(self.order.customer.id.to_string()),
            self.text_cell(format!("{}:", config.invoice_date_label)),
            self.text_cell(self.readable.format(self.invoice_date)),
            self.text_cell(format!("{}:", config.performance_date_label)),
            self.text_cell(self.readable.format(self.performance_date)),
        ];

        Table::new(config.inner_data_table_proportions.clone(), cells)
    }

    fn product_table(&self) -> Result<Table, InvoiceError> {
        let config = self.config;
        let mut cells = vec![
            Cell::text(&config.product_declaration_label, self.paragraph_font),
            Cell::text(&config.product_quantity_label, self.paragraph_font),
            Cell::text(&config.product_single_price_label, self.paragraph_font),
            Cell::text(&config.product_sum_price_label, self.paragraph_font),
        ];

        let mut sum = Decimal::ZERO;
        for product in &self.order.products {
            cells.push(Cell::text(&product.name, self.paragraph_font));
            cells.push(Cell::text(
                self.quantity
                    .format(Decimal::from(product.quantity), &self.symbols),
                self.paragraph_font,
            ));
            cells.push(Cell::text(
                self.currency.format(product.unit_price, &self.symbols),
                self.paragraph_font,
            ));
            cells.push(Cell::text(
                self.currency.format(product.line_total(), &self.symbols),
                self.paragraph_font,
            ));
            sum += product.line_total();
        }

        cells.push(Cell::text(" ", self.paragraph_font));
        cells.push(Cell::text(" ", self.paragraph_font));
        cells.push(Cell::text(
            format!("{}:", config.products_sum_price_label),
            self.paragraph_font,
        ));
        cells.push(Cell::text(
            self.currency.format(sum, &self.symbols),
            self.paragraph_font,
        ));

        Ok(Table::new(vec![1, 1, 1, 1], cells)?
            .width_percent(config.content_width)
            .spacing_before(config.default_spacing)
            .spacing_after(config.default_spacing.saturating_sub(10))
            .header_rows(1))
    }

    fn footer(&self) -> Result<Table, InvoiceError> {
        let [name, declaration, street, location, _country] =
            self.company_information(self.footer_font);
        let [iban, bic, bank, tax] = self.company_financial_information();

        let cells = vec![name, iban, declaration, bic, street, bank, location, tax];

        Ok(Table::new(vec![1, 1], cells)?
            .width_percent(self.config.content_width)
            .spacing_before(self.config.default_spacing))
    }

    fn customer_information(&self) -> [Cell; 4] {
        let customer = &self.order.customer.party;
        [
            self.text_cell(customer.full_name()),
            self.text_cell(customer.address.street_line()),
            self.text_cell(customer.address.location_line()),
            self.text_cell(customer.address.country.clone()),
        ]
    }

    fn company_information(&self, font: FontSpec) -> [Cell; 5] {
        let company = self.company;
        let cell = |text: String| Cell::text(text, font).borderless();
        [
            cell(company.name.clone()),
            cell(company.declaration.clone()),
            cell(company.address.street_line()),
            cell(company.address.location_line()),
            cell(company.address.country.clone()),
        ]
    }

    fn company_financial_information(&self) -> [Cell; 4] {
        let config = self.config;
        let account = &self.company.bank_account;
        let cell = |text: String| {
            Cell::text(text, self.footer_font)
                .h_align(HAlign::Right)
                .borderless()
        };
        [
            cell(format!("{}: {}", config.iban_label, account.iban)),
            cell(format!("{}: {}", config.bic_label, account.bic)),
            cell(format!("{}: {}", config.bank_label, account.bank_name)),
            cell(format!(
                "{}: {}",
                config.tax_number_label, self.company.tax_number
            )),
        ]
    }

    fn text_cell(&self, text: impl Into<String>) -> Cell {
        Cell::text(text, self.paragraph_font).borderless()
    }

    fn empty_cell(&self) -> Cell {
        self.text_cell(" ")
    }
}
