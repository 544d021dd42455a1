//! Postal addresses and zip-code lookup results.

use crate::domain::{Input, Phone, State, ValidationError, ValidationResult, ZipCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MAX_LATITUDE: i64 = 90;
const MAX_LONGITUDE: i64 = 180;

/// A full postal address, as printed on a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Recipient or sender name
    pub name: String,

    pub street: String,

    /// House number; free text since "S/N" and "123-A" are common
    pub number: String,

    pub city: String,

    pub state: State,

    pub zip_code: ZipCode,

    #[serde(default)]
    pub complement: String,

    #[serde(default)]
    pub neighborhood: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellphone: Option<Phone>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub latitude: Decimal,

    #[serde(default)]
    pub longitude: Decimal,
}

impl Address {
    /// Create an address from its required parts.
    ///
    /// State and zip code may be given validated or as raw text.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first field that fails.
    ///
    /// # Example
    ///
    /// ```
    /// use correios_models::models::Address;
    ///
    /// let address = Address::new("Maria", "Rua Vergueiro", "1000", "São Paulo", "sp", "01504-001")
    ///     .unwrap()
    ///     .with_phone("(11) 3030-3030")
    ///     .unwrap();
    /// assert_eq!(address.state.code(), "SP");
    /// assert_eq!(address.zip_code.code(), "01504001");
    /// assert!(address.phone.is_some());
    /// ```
    pub fn new<'a>(
        name: &str,
        street: &str,
        number: &str,
        city: &str,
        state: impl Into<Input<'a, State>>,
        zip_code: impl Into<Input<'a, ZipCode>>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            name: name.to_string(),
            street: street.to_string(),
            number: number.to_string(),
            city: city.to_string(),
            state: state.into().resolve()?,
            zip_code: zip_code.into().resolve()?,
            complement: String::new(),
            neighborhood: String::new(),
            phone: None,
            cellphone: None,
            email: String::new(),
            latitude: Decimal::ZERO,
            longitude: Decimal::ZERO,
        })
    }

    pub fn with_complement(mut self, complement: &str) -> Self {
        self.complement = complement.to_string();
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: &str) -> Self {
        self.neighborhood = neighborhood.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Set the landline. Blank text clears it.
    pub fn with_phone<'a>(mut self, phone: impl Into<Input<'a, Phone>>) -> ValidationResult<Self> {
        self.phone = optional_phone(phone.into())?;
        Ok(self)
    }

    /// Set the mobile number. Blank text clears it.
    pub fn with_cellphone<'a>(
        mut self,
        cellphone: impl Into<Input<'a, Phone>>,
    ) -> ValidationResult<Self> {
        self.cellphone = optional_phone(cellphone.into())?;
        Ok(self)
    }

    /// Set the geographic position.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCoordinate` for non-numeric text or a
    /// value outside ±90 (latitude) / ±180 (longitude).
    pub fn with_coordinates<'a>(
        mut self,
        latitude: impl Into<Input<'a, Decimal>>,
        longitude: impl Into<Input<'a, Decimal>>,
    ) -> ValidationResult<Self> {
        let latitude = latitude.into().resolve()?;
        let longitude = longitude.into().resolve()?;

        if latitude.abs() > Decimal::from(MAX_LATITUDE) {
            return Err(ValidationError::InvalidCoordinate(latitude.to_string()));
        }
        if longitude.abs() > Decimal::from(MAX_LONGITUDE) {
            return Err(ValidationError::InvalidCoordinate(longitude.to_string()));
        }

        self.latitude = latitude;
        self.longitude = longitude;
        Ok(self)
    }
}

fn optional_phone(input: Input<'_, Phone>) -> ValidationResult<Option<Phone>> {
    match input {
        Input::Raw(raw) if raw.trim().is_empty() => Ok(None),
        input => input.resolve().map(Some),
    }
}

/// The address a zip code resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipAddress {
    pub id: u64,
    pub zip_code: ZipCode,
    pub state: State,
    pub city: String,
    pub district: String,
    pub address: String,

    /// Extra address lines; never contains empty entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complements: Vec<String>,
}

/// Parameters for building a [`ZipAddress`].
#[derive(Debug, Clone)]
pub struct ZipAddressParams<'a> {
    pub id: u64,
    pub zip_code: Input<'a, ZipCode>,
    pub state: Input<'a, State>,
    pub city: &'a str,
    pub district: &'a str,
    pub address: &'a str,
    pub complements: Vec<String>,
}

impl ZipAddress {
    /// Build a lookup result, dropping blank complements.
    pub fn new(params: ZipAddressParams<'_>) -> ValidationResult<Self> {
        Ok(Self {
            id: params.id,
            zip_code: params.zip_code.resolve()?,
            state: params.state.resolve()?,
            city: params.city.to_string(),
            district: params.district.to_string(),
            address: params.address.to_string(),
            complements: params
                .complements
                .into_iter()
                .filter(|complement| !complement.trim().is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn address() -> Address {
        Address::new(
            "Maria",
            "Rua Vergueiro",
            "1000",
            "São Paulo",
            "São Paulo",
            "01504-001",
        )
        .unwrap()
    }

    #[test]
    fn test_address_normalizes_state_and_zip() {
        let address = address();
        assert_eq!(address.state, "SP");
        assert_eq!(address.zip_code.display(), "01504-001");
        assert_eq!(address.latitude, Decimal::ZERO);
        assert_eq!(address.phone, None);
    }

    #[test]
    fn test_address_accepts_validated_values() {
        let state = State::new("RJ").unwrap();
        let zip = ZipCode::new("20010-000").unwrap();
        let address = Address::new("João", "Rua 1", "S/N", "Rio de Janeiro", state, zip).unwrap();
        assert_eq!(address.state.code(), "RJ");
    }

    #[test]
    fn test_address_invalid_fields() {
        assert!(matches!(
            Address::new("x", "x", "1", "x", "XX", "01504-001"),
            Err(ValidationError::InvalidState(_))
        ));
        assert!(matches!(
            Address::new("x", "x", "1", "x", "SP", "1504-001"),
            Err(ValidationError::InvalidZipCode(_))
        ));
    }

    #[test]
    fn test_blank_phone_is_none() {
        let address = address()
            .with_phone("  ")
            .unwrap()
            .with_cellphone("(11) 99999-8888")
            .unwrap();
        assert!(address.phone.is_none());
        assert_eq!(address.cellphone.unwrap(), "+55 11 99999-8888");
    }

    #[test]
    fn test_invalid_phone() {
        assert!(matches!(
            address().with_phone("abc"),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_coordinates() {
        let address = address()
            .with_coordinates("-23.5505", Decimal::from_str("-46.6333").unwrap())
            .unwrap();
        assert_eq!(address.latitude, Decimal::from_str("-23.5505").unwrap());

        assert!(matches!(
            self::address().with_coordinates("91", "0"),
            Err(ValidationError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            self::address().with_coordinates("north", "0"),
            Err(ValidationError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_address_json_round_trip() {
        let address = address().with_complement("Apto 12").with_email("maria@example.com");
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"state\":\"SP\""));
        assert!(json.contains("\"zip_code\":\"01504001\""));

        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_zip_address_drops_blank_complements() {
        let zip_address = ZipAddress::new(ZipAddressParams {
            id: 1,
            zip_code: "70002-900".into(),
            state: "df".into(),
            city: "Brasília",
            district: "Asa Norte",
            address: "SBN Quadra 1 Bloco A",
            complements: vec!["".to_string(), "Edifício Sede".to_string(), " ".to_string()],
        })
        .unwrap();
        assert_eq!(zip_address.state, "DF");
        assert_eq!(zip_address.complements, vec!["Edifício Sede".to_string()]);
    }
}
