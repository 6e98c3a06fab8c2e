//! Configuration options for field normalization.

use serde::{Deserialize, Serialize};

/// Country-code literals stripped from phone numbers by default.
pub const DEFAULT_COUNTRY_CODES: &[&str] = &["+91", "0091", "91"];

/// Digits in a national mobile number.
pub const DEFAULT_NATIONAL_LENGTH: usize = 10;

/// Options for phone normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneOptions {
    /// Country-code literals that may prefix a number.
    pub country_codes: Vec<String>,

    /// When set, a country code is only stripped if exactly this many
    /// digits remain. This keeps the normalizer idempotent for national
    /// numbers that happen to start with the code's digits.
    pub national_length: Option<usize>,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            country_codes: DEFAULT_COUNTRY_CODES
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
            national_length: Some(DEFAULT_NATIONAL_LENGTH),
        }
    }
}

/// How an ambiguous `NN/NN/YYYY` date is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateOrder {
    /// `01/05/2023` is 1 May 2023.
    #[default]
    DayFirst,
    /// `01/05/2023` is 5 January 2023.
    MonthFirst,
}

/// Options for normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    pub phone: PhoneOptions,
    pub date_order: DateOrder,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country_codes(mut self, codes: Vec<String>) -> Self {
        self.phone.country_codes = codes;
        self
    }

    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    pub fn with_national_length(mut self, length: Option<usize>) -> Self {
        self.phone.national_length = length;
        self
    }
}
