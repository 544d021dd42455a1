//! The account that owns contracts.

use super::contract::Contract;
use crate::domain::{FederalTaxNumber, Input, StateTaxNumber};
use crate::error::ModelResult;
use serde::Serialize;

/// A company using the postal services, identified by its CNPJ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub name: String,

    pub federal_tax_number: FederalTaxNumber,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_tax_number: Option<StateTaxNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contracts: Vec<Contract>,
}

impl User {
    /// Create a user. The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` if the federal tax number is invalid.
    pub fn new<'a>(
        name: &str,
        federal_tax_number: impl Into<Input<'a, FederalTaxNumber>>,
    ) -> ModelResult<Self> {
        Ok(Self {
            name: name.trim().to_string(),
            federal_tax_number: federal_tax_number.into().resolve()?,
            state_tax_number: None,
            status_number: None,
            contracts: Vec::new(),
        })
    }

    pub fn with_state_tax_number<'a>(
        mut self,
        state_tax_number: impl Into<Input<'a, StateTaxNumber>>,
    ) -> ModelResult<Self> {
        self.state_tax_number = Some(state_tax_number.into().resolve()?);
        Ok(self)
    }

    pub fn with_status_number<'a>(mut self, status_number: impl Into<Input<'a, u32>>) -> ModelResult<Self> {
        self.status_number = Some(status_number.into().resolve()?);
        Ok(self)
    }

    pub fn with_contracts(mut self, contracts: Vec<Contract>) -> Self {
        self.contracts = contracts;
        self
    }

    pub fn add_contract(&mut self, contract: Contract) {
        self.contracts.push(contract);
    }
}
