//! Loader for WooCommerce order exports.

use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{Address, Contact, Customer, InvoiceError, Order, Party, Product};

const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const DEFAULT_SHIPPING_NAME: &str = "Versand";
const SHIPPING_QUANTITY: u32 = 1;

#[derive(Debug, Deserialize)]
struct RawOrder {
    order_number: String,
    order_date: String,
    billing_first_name: String,
    billing_last_name: String,
    billing_address: String,
    billing_postcode: String,
    billing_city: String,
    billing_country: String,
    billing_email: String,
    billing_phone: String,
    products: Vec<RawProduct>,
    order_shipping: f64,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    name: String,
    item_price: f64,
    qty: String,
}

/// Turns a WooCommerce export into [`Order`] records.
///
/// Appends the shipping line as a trailing quantity-1 product and
/// derives the stable numeric customer identifier from the customer's
/// name. The shipping label defaults to `"Versand"`.
#[derive(Debug, Clone)]
pub struct OrdersLoader {
    shipping_label: String,
}

impl Default for OrdersLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OrdersLoader {
    pub fn new() -> Self {
        Self {
            shipping_label: DEFAULT_SHIPPING_NAME.into(),
        }
    }

    pub fn shipping_label(mut self, label: impl Into<String>) -> Self {
        self.shipping_label = label.into();
        self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Order>, InvoiceError> {
        let path = path.as_ref();
        let raw: Vec<RawOrder> =
            serde_json::from_str(&super::read(path)?).map_err(|e| super::data_error(path, e))?;
        raw.into_iter().map(|order| self.convert(order)).collect()
    }

    /// Parse orders from an in-memory export.
    pub fn from_json(&self, json: &str) -> Result<Vec<Order>, InvoiceError> {
        let raw: Vec<RawOrder> =
            serde_json::from_str(json).map_err(|e| InvoiceError::Data(e.to_string()))?;
        raw.into_iter().map(|order| self.convert(order)).collect()
    }

    fn convert(&self, raw: RawOrder) -> Result<Order, InvoiceError> {
        let context = |what: &str| format!("order {}: {what}", raw.order_number);

        let date = NaiveDateTime::parse_from_str(&raw.order_date, EXPORT_DATE_FORMAT)
            .map(|dt| dt.date())
            .map_err(|e| InvoiceError::Data(context(&format!("bad order_date: {e}"))))?;

        // Street numbers come glued to the street name; the number is
        // the last whitespace-separated token.
        let (street, street_number) = match raw.billing_address.rsplit_once(' ') {
            Some((street, number)) => (street.to_string(), number.to_string()),
            None => (raw.billing_address.clone(), String::new()),
        };

        let mut products = Vec::with_capacity(raw.products.len() + 1);
        for product in &raw.products {
            let quantity: u32 = product.qty.trim().parse().map_err(|e| {
                InvoiceError::Data(context(&format!("bad qty '{}': {e}", product.qty)))
            })?;
            products.push(Product {
                name: product.name.clone(),
                unit_price: price(product.item_price, &context("bad item_price"))?,
                quantity,
            });
        }
        products.push(Product {
            name: self.shipping_label.clone(),
            unit_price: price(raw.order_shipping, &context("bad order_shipping"))?,
            quantity: SHIPPING_QUANTITY,
        });

        let id = customer_id(&raw.billing_first_name, &raw.billing_last_name);
        let customer = Customer {
            party: Party {
                first_name: raw.billing_first_name,
                last_name: raw.billing_last_name,
                address: Address {
                    street,
                    street_number,
                    zip_code: raw.billing_postcode,
                    location: raw.billing_city,
                    country: raw.billing_country,
                },
                contact: Contact {
                    email: raw.billing_email,
                    phone: raw.billing_phone,
                },
            },
            id,
        };

        Ok(Order {
            number: raw.order_number,
            customer,
            products,
            date,
        })
    }
}

/// Load orders with the default shipping label.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, InvoiceError> {
    OrdersLoader::new().load(path)
}

fn price(value: f64, context: &str) -> Result<Decimal, InvoiceError> {
    Decimal::try_from(value).map_err(|e| InvoiceError::Data(format!("{context}: {e}")))
}

/// Stable, non-negative identifier derived from the customer's name.
/// Collisions between distinct names are possible; deduplicating them
/// is the data source's concern.
fn customer_id(first_name: &str, last_name: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in first_name.chars().chain(last_name.chars()) {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    (hash & 0x0fff_ffff) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_is_stable_and_non_negative() {
        let a = customer_id("Erika", "Beispiel");
        let b = customer_id("Erika", "Beispiel");
        assert_eq!(a, b);
        assert!(a <= 0x0fff_ffff);
        assert_ne!(customer_id("Erika", "Beispiel"), customer_id("Max", "Beispiel"));
    }
}
