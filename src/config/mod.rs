//! Fixed per-command amounts.
//!
//! Amounts are configuration, never user input. Validation uses
//! Stillwater's `Validation` so that every bad field is reported in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use bankstate::config::AccountConfig;
//!
//! let config = AccountConfig::from_json(r#"{ "loanAmount": 1000 }"#).unwrap();
//! assert_eq!(config.loan_amount, 1000);
//! assert_eq!(config.opening_deposit, 500);
//! ```

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest amount a configuration accepts.
pub const MAX_AMOUNT: i64 = i64::MAX / 4;

/// Amounts used by the account machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountConfig {
    /// Credited when the account is opened.
    pub opening_deposit: i64,
    pub deposit_amount: i64,
    pub withdraw_amount: i64,
    pub loan_amount: i64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            opening_deposit: 500,
            deposit_amount: 150,
            withdraw_amount: 50,
            loan_amount: 5000,
        }
    }
}

impl AccountConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a JSON document. Missing keys take their default value; the
    /// result is validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AccountConfig = serde_json::from_str(json)?;
        config.checked()
    }

    /// Check every amount is in `1..=MAX_AMOUNT`, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            in_range("openingDeposit", self.opening_deposit),
            in_range("depositAmount", self.deposit_amount),
            in_range("withdrawAmount", self.withdraw_amount),
            in_range("loanAmount", self.loan_amount),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, converting the accumulated failures into a `ConfigError`.
    pub fn checked(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn in_range(field: &'static str, value: i64) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if value <= 0 {
        Validation::fail(ConfigViolation::NonPositiveAmount { field, value })
    } else if value > MAX_AMOUNT {
        Validation::fail(ConfigViolation::AmountTooLarge {
            field,
            value,
            max: MAX_AMOUNT,
        })
    } else {
        Validation::success(())
    }
}
