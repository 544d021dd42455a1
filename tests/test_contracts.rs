//! Tests for the user / contract / posting card hierarchy.

use correios_models::models::{
    Address, Contract, ContractParams, PostingCard, PostingCardParams, User,
};
use correios_models::{CatalogError, ModelError, ValidationError, SERVICE_PAC, SERVICE_SEDEX};

fn contract_params(number: &str) -> ContractParams<'_> {
    ContractParams {
        number: number.into(),
        customer_code: 279311,
        direction: "BSB".into(),
        status_code: "A",
        start_date: Some("2014-05-09 00:00:00-03:00".into()),
        end_date: Some("2018-05-16 00:00:00-03:00".into()),
    }
}

fn card_params(number: u64) -> PostingCardParams<'static> {
    PostingCardParams {
        number: number.into(),
        administrative_code: "08082650".into(),
        start_date: Some("2014-05-09 00:00:00-0300".into()),
        end_date: Some("2018-05-16T00:00:00-03:00".into()),
        status: 1u32.into(),
        status_code: "I",
        unit: 8u32.into(),
    }
}

/// Test the full hierarchy can be built from raw values.
///
/// This test validates:
/// - Contract numbers and directions resolve from text
/// - Posting cards register on their contract
/// - Contracts attach to a user
#[test]
fn test_build_user_with_contracts() {
    let mut contract = Contract::new(contract_params(" 9912208555 ")).unwrap();
    assert_eq!(contract.number, 9912208555);
    assert_eq!(contract.direction_number(), 10);

    let card = PostingCard::new(&mut contract, card_params(57018901)).unwrap();
    card.add_service(SERVICE_SEDEX).unwrap();
    card.add_service(SERVICE_PAC).unwrap();
    assert_eq!(card.contract_number(), 9912208555);

    let user = User::new("ECT", "34.028.316/0001-03")
        .unwrap()
        .with_state_tax_number("0733382100116")
        .unwrap()
        .with_contracts(vec![contract]);

    assert_eq!(user.contracts.len(), 1);
    assert_eq!(user.contracts[0].posting_cards.len(), 1);
    assert_eq!(user.contracts[0].posting_cards[0].services.len(), 2);
}

/// Test a posting card built twice is registered once.
#[test]
fn test_posting_card_deduplication() {
    let mut contract = Contract::new(contract_params("9912208555")).unwrap();

    for _ in 0..3 {
        let card = PostingCard::new(&mut contract, card_params(57018901)).unwrap();
        assert_eq!(card.number(), "0057018901");
    }
    assert_eq!(contract.posting_cards.len(), 1);

    PostingCard::new(&mut contract, card_params(57018902)).unwrap();
    assert_eq!(contract.posting_cards.len(), 2);
}

#[test]
fn test_registered_card_keeps_services() {
    let mut contract = Contract::new(contract_params("9912208555")).unwrap();
    PostingCard::new(&mut contract, card_params(57018901))
        .unwrap()
        .add_service(SERVICE_PAC)
        .unwrap();

    let again = PostingCard::new(&mut contract, card_params(57018901)).unwrap();
    assert_eq!(again.services.len(), 1);
    assert_eq!(again.services[0].code, SERVICE_PAC);
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Contract::new(ContractParams {
            direction: "XYZ".into(),
            ..contract_params("1")
        }),
        Err(ModelError::Catalog(CatalogError::InvalidDirection(_)))
    ));

    let mut contract = Contract::new(contract_params("1")).unwrap();
    let result = PostingCard::new(
        &mut contract,
        PostingCardParams {
            start_date: Some("yesterday".into()),
            ..card_params(1)
        },
    );
    assert!(matches!(
        result,
        Err(ModelError::Validation(ValidationError::InvalidDate(_)))
    ));
    assert!(contract.posting_cards.is_empty());

    let card = PostingCard::new(&mut contract, card_params(1)).unwrap();
    assert!(matches!(
        card.add_service(12u32),
        Err(ModelError::Catalog(CatalogError::InvalidService(_)))
    ));
}

#[test]
fn test_contract_serializes() {
    let mut contract = Contract::new(contract_params("9912208555")).unwrap();
    PostingCard::new(&mut contract, card_params(57018901)).unwrap();

    let json = serde_json::to_value(&contract).unwrap();
    assert_eq!(json["number"], 9912208555u64);
    assert_eq!(json["direction"]["code"], "BSB");
    assert_eq!(json["posting_cards"][0]["number"], "0057018901");
}

#[test]
fn test_sender_address() {
    let address = Address::new(
        "ECT",
        "SBN Quadra 1 Bloco A",
        "S/N",
        "Brasília",
        "Distrito Federal",
        "70002-900",
    )
    .unwrap()
    .with_neighborhood("Asa Norte")
    .with_cellphone("+55 61 99999-0000")
    .unwrap();

    assert_eq!(address.state.code(), "DF");
    assert_eq!(address.cellphone.unwrap().country_code(), 55);
}
