//! Builder for account configurations.

use crate::config::error::ConfigError;
use crate::config::AccountConfig;

/// Fluent builder for `AccountConfig`. Unset amounts keep their default.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    opening_deposit: Option<i64>,
    deposit_amount: Option<i64>,
    withdraw_amount: Option<i64>,
    loan_amount: Option<i64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount credited when the account is opened.
    pub fn opening_deposit(mut self, amount: i64) -> Self {
        self.opening_deposit = Some(amount);
        self
    }

    pub fn deposit_amount(mut self, amount: i64) -> Self {
        self.deposit_amount = Some(amount);
        self
    }

    pub fn withdraw_amount(mut self, amount: i64) -> Self {
        self.withdraw_amount = Some(amount);
        self
    }

    pub fn loan_amount(mut self, amount: i64) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AccountConfig, ConfigError> {
        let defaults = AccountConfig::default();

        AccountConfig {
            opening_deposit: self.opening_deposit.unwrap_or(defaults.opening_deposit),
            deposit_amount: self.deposit_amount.unwrap_or(defaults.deposit_amount),
            withdraw_amount: self.withdraw_amount.unwrap_or(defaults.withdraw_amount),
            loan_amount: self.loan_amount.unwrap_or(defaults.loan_amount),
        }
        .checked()
    }
}
