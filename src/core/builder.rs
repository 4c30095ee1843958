use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for [`Party`].
///
/// ```
/// use rechnung::core::*;
///
/// let party = PartyBuilder::new("Max", "Mustermann")
///     .address(AddressBuilder::new("Berlin", "10115", "Deutschland")
///         .street("Hauptstraße", "12")
///         .build())
///     .contact("max@example.com", "+49 30 12345")
///     .build();
/// assert_eq!(party.full_name(), "Max Mustermann");
/// ```
pub struct PartyBuilder {
    first_name: String,
    last_name: String,
    address: Address,
    contact: Contact,
}

impl PartyBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: AddressBuilder::new("", "", "").build(),
            contact: Contact {
                email: String::new(),
                phone: String::new(),
            },
        }
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact = Contact {
            email: email.into(),
            phone: phone.into(),
        };
        self
    }

    pub fn build(self) -> Party {
        Party {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            contact: self.contact,
        }
    }

    /// Build a [`Customer`] carrying the given loader-derived identifier.
    pub fn build_customer(self, id: u32) -> Customer {
        Customer {
            party: self.build(),
            id,
        }
    }
}

/// Builder for [`Address`].
pub struct AddressBuilder {
    street: String,
    street_number: String,
    zip_code: String,
    location: String,
    country: String,
}

impl AddressBuilder {
    pub fn new(
        location: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: String::new(),
            street_number: String::new(),
            zip_code: zip_code.into(),
            location: location.into(),
            country: country.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>, number: impl Into<String>) -> Self {
        self.street = street.into();
        self.street_number = number.into();
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            street_number: self.street_number,
            zip_code: self.zip_code,
            location: self.location,
            country: self.country,
        }
    }
}

/// Builder for [`Company`].
pub struct CompanyBuilder {
    label: String,
    name: String,
    declaration: String,
    address: Address,
    shareholders: Vec<Party>,
    bank_account: BankAccount,
    tax_number: String,
}

impl CompanyBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            declaration: String::new(),
            address,
            shareholders: Vec::new(),
            bank_account: BankAccount {
                iban: String::new(),
                bic: String::new(),
                bank_name: String::new(),
            },
            tax_number: String::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = declaration.into();
        self
    }

    pub fn add_shareholder(mut self, shareholder: Party) -> Self {
        self.shareholders.push(shareholder);
        self
    }

    pub fn bank_account(
        mut self,
        iban: impl Into<String>,
        bic: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        self.bank_account = BankAccount {
            iban: iban.into(),
            bic: bic.into(),
            bank_name: bank_name.into(),
        };
        self
    }

    pub fn tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.tax_number = tax_number.into();
        self
    }

    pub fn build(self) -> Company {
        Company {
            label: self.label,
            name: self.name,
            declaration: self.declaration,
            address: self.address,
            shareholders: self.shareholders,
            bank_account: self.bank_account,
            tax_number: self.tax_number,
        }
    }
}

/// Builder for [`Order`].
pub struct OrderBuilder {
    number: String,
    customer: Customer,
    products: Vec<Product>,
    date: NaiveDate,
}

impl OrderBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate, customer: Customer) -> Self {
        Self {
            number: number.into(),
            customer,
            products: Vec::new(),
            date,
        }
    }

    pub fn add_product(
        mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        self.products.push(Product {
            name: name.into(),
            unit_price,
            quantity,
        });
        self
    }

    pub fn build(self) -> Order {
        Order {
            number: self.number,
            customer: self.customer,
            products: self.products,
            date: self.date,
        }
    }
}
