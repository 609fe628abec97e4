//! Login and signup form models and their JSON payloads.
//!
//! PAYLOAD RULES
//! =============
//! - Login trims the username and sends the password untouched.
//! - Signup sends every named field as entered. A blank `credit_card` is
//!   dropped from the payload entirely, and a select still on its
//!   placeholder contributes no key.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use super::options::{SelectControl, populate};

/// Field name to value, serialized as a flat JSON object.
pub type Payload = BTreeMap<String, String>;

pub const CREDIT_CARD_FIELD: &str = "credit_card";

/// Free-text inputs on the signup form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Username,
    Password,
    Email,
    PhoneNumber,
    Address,
    CreditCard,
}

impl TextField {
    pub const SIGNUP: [Self; 6] = [
        Self::Username,
        Self::Password,
        Self::Email,
        Self::PhoneNumber,
        Self::Address,
        Self::CreditCard,
    ];

    /// Form field name, also the payload key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Address => "address",
            Self::CreditCard => CREDIT_CARD_FIELD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone number",
            Self::Address => "Address",
            Self::CreditCard => "Credit card (optional)",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Email => "email",
            Self::PhoneNumber => "tel",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::CreditCard)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn payload(&self) -> Payload {
        Payload::from([
            ("username".to_owned(), self.username.trim().to_owned()),
            ("password".to_owned(), self.password.clone()),
        ])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub industry: SelectControl,
    pub profession: SelectControl,
    pub credit_card: String,
}

impl SignupForm {
    /// Blank form with both selects populated from their catalogs.
    pub fn new(industries: &[&str], professions: &[&str]) -> Self {
        Self {
            industry: SelectControl::with_catalog(industries),
            profession: SelectControl::with_catalog(professions),
            ..Self::default()
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Username => &self.username,
            TextField::Password => &self.password,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Address => &self.address,
            TextField::CreditCard => &self.credit_card,
        }
    }

    pub fn set_field(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Username => &mut self.username,
            TextField::Password => &mut self.password,
            TextField::Email => &mut self.email,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::Address => &mut self.address,
            TextField::CreditCard => &mut self.credit_card,
        };
        *slot = value;
    }

    pub fn payload(&self) -> Payload {
        let mut payload: Payload = TextField::SIGNUP
            .iter()
            .map(|f| (f.name().to_owned(), self.field(*f).to_owned()))
            .collect();
        if let Some(industry) = self.industry.value() {
            payload.insert("industry".to_owned(), industry.to_owned());
        }
        if let Some(profession) = self.profession.value() {
            payload.insert("profession".to_owned(), profession.to_owned());
        }
        if payload.get(CREDIT_CARD_FIELD).is_some_and(String::is_empty) {
            payload.remove(CREDIT_CARD_FIELD);
        }
        payload
    }

    /// Blank every input and repopulate both selects.
    pub fn reset(&mut self, industries: &[&str], professions: &[&str]) {
        for field in TextField::SIGNUP {
            self.set_field(field, String::new());
        }
        populate(&mut self.industry, industries);
        populate(&mut self.profession, professions);
    }
}
