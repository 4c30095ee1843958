use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Postal address of a customer, company, or shareholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub street_number: String,
    pub zip_code: String,
    /// City name.
    pub location: String,
    pub country: String,
}

impl Address {
    /// "Hauptstraße 12", the street line as printed on the invoice.
    pub fn street_line(&self) -> String {
        format!("{} {}", self.street, self.street_number)
    }

    /// "10115 Berlin", zip and city as printed on the invoice.
    pub fn location_line(&self) -> String {
        format!("{} {}", self.zip_code, self.location)
    }
}

/// Reachability data attached to every party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// A natural person, customer or shareholder.
///
/// Customers carry an additional numeric identifier; see [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub contact: Contact,
}

impl Party {
    /// "Max Mustermann", the full name as printed on the invoice.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A party with the numeric customer identifier derived by the loader.
///
/// The identifier is stable per distinct first+last name pair and
/// non-negative; uniqueness under hash collisions is the loader's
/// concern, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub party: Party,
    pub id: u32,
}

/// Bank details printed in the invoice footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub iban: String,
    pub bic: String,
    pub bank_name: String,
}

/// The issuing company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Short display label, distinct from the legal name.
    pub label: String,
    /// Legal name as printed on the invoice.
    pub name: String,
    /// Legal declaration text (e.g. "GbR" appendix).
    pub declaration: String,
    pub address: Address,
    /// Ordered shareholders. The invoice layout prints the first two;
    /// composition fails for companies with fewer.
    pub shareholders: Vec<Party>,
    pub bank_account: BankAccount,
    pub tax_number: String,
}

/// One order line. The shipping line is an ordinary trailing product
/// appended by the loader (quantity 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl Product {
    /// Exact line total, unrounded. Display rounding happens in the
    /// currency formatter only.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A customer order, one invoice per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, used verbatim in the invoice identifier.
    pub number: String,
    pub customer: Customer,
    /// Insertion order is display order, shipping line last.
    pub products: Vec<Product>,
    pub date: NaiveDate,
}

impl Order {
    /// Grand total over all products including shipping.
    pub fn grand_total(&self) -> Decimal {
        self.products.iter().map(Product::line_total).sum()
    }
}
