//! Customer contracts and the posting cards issued under them.

use super::direction::{Direction, DirectionKey};
use super::service::{Service, ServiceKey};
use crate::domain::{Input, ValidationResult};
use crate::error::ModelResult;
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt;

/// Width of a displayed posting card number.
pub const POSTING_CARD_NUMBER_WIDTH: usize = 10;

/// Width of a displayed administrative code.
pub const ADMINISTRATIVE_CODE_WIDTH: usize = 8;

type Date = DateTime<FixedOffset>;

fn resolve_date(date: Option<Input<'_, Date>>) -> ValidationResult<Option<Date>> {
    date.map(Input::resolve).transpose()
}

/// A customer contract with the postal operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contract {
    pub number: u64,

    /// Customer code assigned by the operator
    pub customer_code: u64,

    /// Regional direction the contract is bound to
    pub direction: Direction,

    pub status_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Posting cards issued under this contract
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posting_cards: Vec<PostingCard>,
}

/// Parameters for creating a [`Contract`].
#[derive(Debug, Clone)]
pub struct ContractParams<'a> {
    pub number: Input<'a, u64>,
    pub customer_code: u64,
    pub direction: DirectionKey<'a>,
    pub status_code: &'a str,
    pub start_date: Option<Input<'a, Date>>,
    pub end_date: Option<Input<'a, Date>>,
}

impl Contract {
    /// Create a contract, resolving its direction against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` for a malformed number or date and
    /// `ModelError::Catalog` for an unknown direction.
    pub fn new(params: ContractParams<'_>) -> ModelResult<Self> {
        Ok(Self {
            number: params.number.resolve()?,
            customer_code: params.customer_code,
            direction: Direction::get(params.direction)?.clone(),
            status_code: params.status_code.to_string(),
            start_date: resolve_date(params.start_date)?,
            end_date: resolve_date(params.end_date)?,
            posting_cards: Vec::new(),
        })
    }

    pub fn direction_number(&self) -> u32 {
        self.direction.number()
    }

    /// Register a posting card and return the registered entry.
    ///
    /// If a card with the same number and administrative code is already
    /// registered, that card is returned unchanged and `card` is dropped,
    /// including any status, unit or dates that differ from the registered
    /// card. The differing fields are reported in a `debug!` event.
    pub fn add_posting_card(&mut self, mut card: PostingCard) -> &mut PostingCard {
        card.contract_number = self.number;

        let existing = self.posting_cards.iter().position(|registered| {
            registered.number == card.number
                && registered.administrative_code == card.administrative_code
        });

        let index = match existing {
            Some(index) => {
                let dropped = self.posting_cards[index].differing_fields(&card);
                if dropped.is_empty() {
                    tracing::trace!(
                        contract = self.number,
                        posting_card = card.number,
                        "Posting card already registered"
                    );
                } else {
                    tracing::debug!(
                        contract = self.number,
                        posting_card = card.number,
                        dropped = ?dropped,
                        "Posting card already registered, keeping registered fields"
                    );
                }
                index
            }
            None => {
                tracing::trace!(
                    contract = self.number,
                    posting_card = card.number,
                    "Registering posting card"
                );
                self.posting_cards.push(card);
                self.posting_cards.len() - 1
            }
        };

        &mut self.posting_cards[index]
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// An authorization to post shipments under a contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingCard {
    contract_number: u64,

    #[serde(serialize_with = "serialize_card_number")]
    number: u64,

    #[serde(serialize_with = "serialize_administrative_code")]
    administrative_code: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    pub status: u32,

    pub status_code: String,

    /// Posting unit
    pub unit: u32,

    /// Services enabled on this card
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

/// Parameters for creating a [`PostingCard`].
#[derive(Debug, Clone)]
pub struct PostingCardParams<'a> {
    pub number: Input<'a, u64>,
    pub administrative_code: Input<'a, u64>,
    pub start_date: Option<Input<'a, Date>>,
    pub end_date: Option<Input<'a, Date>>,
    pub status: Input<'a, u32>,
    pub status_code: &'a str,
    pub unit: Input<'a, u32>,
}

fn serialize_card_number<S>(number: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:0width$}", number, width = POSTING_CARD_NUMBER_WIDTH))
}

fn serialize_administrative_code<S>(code: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:0width$}", code, width = ADMINISTRATIVE_CODE_WIDTH))
}

impl PostingCard {
    /// Create a posting card and register it on `contract`.
    ///
    /// Returns the card as registered on the contract. Creating the same card
    /// (number and administrative code) twice registers it only once.
    ///
    /// # Example
    ///
    /// ```
    /// use correios_models::models::{Contract, ContractParams, PostingCard, PostingCardParams};
    ///
    /// let mut contract = Contract::new(ContractParams {
    ///     number: "9912208555".into(),
    ///     customer_code: 279311,
    ///     direction: "10".into(),
    ///     status_code: "A",
    ///     start_date: None,
    ///     end_date: None,
    /// })
    /// .unwrap();
    ///
    /// let card = PostingCard::new(&mut contract, PostingCardParams {
    ///     number: "57018901".into(),
    ///     administrative_code: 8082650u64.into(),
    ///     start_date: None,
    ///     end_date: None,
    ///     status: 1u32.into(),
    ///     status_code: "I",
    ///     unit: "08".into(),
    /// })
    /// .unwrap();
    /// assert_eq!(card.number(), "0057018901");
    /// assert_eq!(card.administrative_code(), "08082650");
    /// ```
    pub fn new<'c>(
        contract: &'c mut Contract,
        params: PostingCardParams<'_>,
    ) -> ModelResult<&'c mut PostingCard> {
        let card = Self {
            contract_number: contract.number,
            number: params.number.resolve()?,
            administrative_code: params.administrative_code.resolve()?,
            start_date: resolve_date(params.start_date)?,
            end_date: resolve_date(params.end_date)?,
            status: params.status.resolve()?,
            status_code: params.status_code.to_string(),
            unit: params.unit.resolve()?,
            services: Vec::new(),
        };

        Ok(contract.add_posting_card(card))
    }

    /// Names of the registration fields whose values differ from `other`.
    fn differing_fields(&self, other: &PostingCard) -> Vec<&'static str> {
        [
            ("start_date", self.start_date != other.start_date),
            ("end_date", self.end_date != other.end_date),
            ("status", self.status != other.status),
            ("status_code", self.status_code != other.status_code),
            ("unit", self.unit != other.unit),
        ]
        .into_iter()
        .filter_map(|(field, differs)| differs.then_some(field))
        .collect()
    }

    /// Number of the contract this card belongs to.
    pub fn contract_number(&self) -> u64 {
        self.contract_number
    }

    /// Card number, zero-padded to 10 digits.
    pub fn number(&self) -> String {
        format!("{:0width$}", self.number, width = POSTING_CARD_NUMBER_WIDTH)
    }

    /// Administrative code, zero-padded to 8 digits.
    pub fn administrative_code(&self) -> String {
        format!(
            "{:0width$}",
            self.administrative_code,
            width = ADMINISTRATIVE_CODE_WIDTH
        )
    }

    /// Resolve a service against the catalog and enable it on this card.
    pub fn add_service<'a>(&mut self, service: impl Into<ServiceKey<'a>>) -> ModelResult<()> {
        let service = Service::get(service)?;
        self.services.push(service.clone());
        Ok(())
    }
}

impl fmt::Display for PostingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SERVICE_PAC, SERVICE_SEDEX};
    use crate::domain::ValidationError;
    use crate::error::{CatalogError, ModelError};

    fn contract() -> Contract {
        Contract::new(ContractParams {
            number: 9912208555u64.into(),
            customer_code: 279311,
            direction: 10u32.into(),
            status_code: "A",
            start_date: Some("2014-05-09 00:00:00-03:00".into()),
            end_date: Some("2018-05-16 00:00:00-03:00".into()),
        })
        .unwrap()
    }

    fn card_params() -> PostingCardParams<'static> {
        PostingCardParams {
            number: "0057018901".into(),
            administrative_code: "08082650".into(),
            start_date: None,
            end_date: None,
            status: 1u32.into(),
            status_code: "I",
            unit: " 8 ".into(),
        }
    }

    #[test]
    fn test_contract_resolves_direction() {
        let contract = contract();
        assert_eq!(contract.direction_number(), 10);
        assert_eq!(contract.direction.code(), "BSB");
        assert!(contract.start_date < contract.end_date);
        assert_eq!(contract.to_string(), "9912208555");
    }

    #[test]
    fn test_contract_unknown_direction() {
        let result = Contract::new(ContractParams {
            number: 1u64.into(),
            customer_code: 1,
            direction: "ZZZ".into(),
            status_code: "A",
            start_date: None,
            end_date: None,
        });
        assert!(matches!(
            result,
            Err(ModelError::Catalog(CatalogError::InvalidDirection(_)))
        ));
    }

    #[test]
    fn test_contract_invalid_number_and_date() {
        let result = Contract::new(ContractParams {
            number: "99A".into(),
            customer_code: 1,
            direction: 10u32.into(),
            status_code: "A",
            start_date: None,
            end_date: None,
        });
        assert!(matches!(result, Err(ModelError::Validation(_))));

        let result = Contract::new(ContractParams {
            number: 1u64.into(),
            customer_code: 1,
            direction: 10u32.into(),
            status_code: "A",
            start_date: Some("09/05/2014".into()),
            end_date: None,
        });
        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[test]
    fn test_posting_card_registers_on_contract() {
        let mut contract = contract();
        let card = PostingCard::new(&mut contract, card_params()).unwrap();
        assert_eq!(card.contract_number(), 9912208555);
        assert_eq!(card.number(), "0057018901");
        assert_eq!(card.administrative_code(), "08082650");
        assert_eq!(card.to_string(), "0057018901");
        assert_eq!(contract.posting_cards.len(), 1);
    }

    #[test]
    fn test_posting_card_is_registered_once() {
        let mut contract = contract();
        PostingCard::new(&mut contract, card_params()).unwrap();
        PostingCard::new(&mut contract, card_params()).unwrap();
        assert_eq!(contract.posting_cards.len(), 1);

        let other = PostingCardParams {
            administrative_code: 8082651u64.into(),
            ..card_params()
        };
        PostingCard::new(&mut contract, other).unwrap();
        assert_eq!(contract.posting_cards.len(), 2);
    }

    #[test]
    fn test_duplicate_card_keeps_registered_fields() {
        let mut contract = contract();
        PostingCard::new(&mut contract, card_params()).unwrap();

        let changed = PostingCardParams {
            status: "9".into(),
            start_date: Some("2020-01-01 00:00:00-03:00".into()),
            ..card_params()
        };
        let card = PostingCard::new(&mut contract, changed).unwrap();
        assert_eq!(card.status, 1);
        assert!(card.start_date.is_none());
        assert_eq!(contract.posting_cards.len(), 1);
    }

    #[test]
    fn test_differing_fields() {
        let mut first = contract();
        let mut second = contract();
        let registered = PostingCard::new(&mut first, card_params()).unwrap().clone();
        let same = PostingCard::new(&mut second, card_params()).unwrap().clone();
        assert!(registered.differing_fields(&same).is_empty());

        let changed = PostingCardParams {
            status: 9u32.into(),
            unit: "10".into(),
            ..card_params()
        };
        let mut third = contract();
        let changed = PostingCard::new(&mut third, changed).unwrap();
        assert_eq!(registered.differing_fields(changed), vec!["status", "unit"]);
    }

    #[test]
    fn test_posting_card_status_and_unit_from_text() {
        let mut contract = contract();
        let card = PostingCard::new(&mut contract, card_params()).unwrap();
        assert_eq!(card.status, 1);
        assert_eq!(card.unit, 8);

        let result = PostingCard::new(
            &mut contract,
            PostingCardParams {
                number: 1u64.into(),
                unit: "eight".into(),
                ..card_params()
            },
        );
        assert!(matches!(
            result,
            Err(ModelError::Validation(ValidationError::InvalidNumber(_)))
        ));
    }

    #[test]
    fn test_posting_card_services() {
        let mut contract = contract();
        let card = PostingCard::new(&mut contract, card_params()).unwrap();
        card.add_service(SERVICE_SEDEX).unwrap();
        card.add_service("41068").unwrap();
        assert!(card.add_service(1u32).is_err());

        let codes: Vec<u32> = contract.posting_cards[0]
            .services
            .iter()
            .map(|service| service.code)
            .collect();
        assert_eq!(codes, vec![SERVICE_SEDEX, SERVICE_PAC]);
    }

    #[test]
    fn test_posting_card_serializes_padded() {
        let mut contract = contract();
        let card = PostingCard::new(&mut contract, card_params()).unwrap();
        let json = serde_json::to_value(&*card).unwrap();
        assert_eq!(json["number"], "0057018901");
        assert_eq!(json["administrative_code"], "08082650");
        assert_eq!(json["contract_number"], 9912208555u64);
    }
}
