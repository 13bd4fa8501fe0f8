//! Integration tests over a realistic payload: nested objects, arrays of
//! objects, mixed arrays, timestamps, and numbers beyond machine range.
//!
//! The same expectations are checked twice: once for a document arriving as
//! JSON text, once for one arriving as a `Serialize` object model.

#![cfg(feature = "json")]

use chrono::{DateTime, Utc};
use jsonmask::{MaskingConfig, json::JsonMasker};
use serde::Serialize;
use serde_json::json;

const UNMASKED: &str = r#"{
    "id": "ABC123",
    "timestamp": "2025-07-01T12:34:56.789Z",
    "active": true,
    "score": 95.5,
    "name": "John Doe",
    "age": 30,
    "largeNumber": 9223372036854775808,
    "preciseDecimal": 123456.789,
    "contact": {
        "email": "john@example.com",
        "phone": "123-456-7890",
        "verified": false,
        "accountBalance": 999999.99
    },
    "addresses": [
        {
            "type": "home",
            "street": "123 Main St",
            "city": "Springfield",
            "zipCode": 12345,
            "propertyValue": 1234567.89,
            "buildingNumber": 18446744073709551615
        },
        {
            "type": "work",
            "street": "456 Corp Ave",
            "city": "Business City",
            "zipCode": 67890,
            "propertyValue": 1234567.89,
            "buildingNumber": 18446744073709551615
        }
    ],
    "tags": ["premium", "verified", "active"],
    "scores": [88, 92, 95],
    "metadata": {
        "lastUpdated": "2025-07-01",
        "version": 2,
        "settings": {
            "notifications": true,
            "theme": "dark"
        }
    },
    "payment": {
        "cardNumber": "4111111111111111",
        "cvv": "123",
        "amount": 999999.999999,
        "mixed": [
            "secret1",
            42,
            true,
            {
                "nestedKey": "nestedValue",
                "hugeValue": 340282366920938463463374607431768211455
            }
        ]
    },
    "nullField": null,
    "emptyObject": {},
    "emptyArray": []
}"#;

const MASKED: &str = r#"{
    "id": "*****",
    "timestamp": "*****",
    "active": false,
    "score": 0.0,
    "name": "*****",
    "age": 0,
    "largeNumber": 0,
    "preciseDecimal": 0.0,
    "contact": {
        "email": "*****",
        "phone": "*****",
        "verified": false,
        "accountBalance": 0.0
    },
    "addresses": [
        {
            "type": "*****",
            "street": "*****",
            "city": "*****",
            "zipCode": 0,
            "propertyValue": 0.0,
            "buildingNumber": 0
        },
        {
            "type": "*****",
            "street": "*****",
            "city": "*****",
            "zipCode": 0,
            "propertyValue": 0.0,
            "buildingNumber": 0
        }
    ],
    "tags": ["*****", "*****", "*****"],
    "scores": [0, 0, 0],
    "metadata": {
        "lastUpdated": "*****",
        "version": 0,
        "settings": {
            "notifications": false,
            "theme": "*****"
        }
    },
    "payment": {
        "cardNumber": "*****",
        "cvv": "*****",
        "amount": 0.0,
        "mixed": [
            "*****",
            0,
            false,
            {
                "nestedKey": "*****",
                "hugeValue": 0
            }
        ]
    },
    "nullField": null,
    "emptyObject": {},
    "emptyArray": []
}"#;

fn normalize(document: &str) -> String {
    jsonmask::json::to_string(&jsonmask::json::parse(document).unwrap()).unwrap()
}

// Object model mirroring the fixture, field for field.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestData {
    id: String,
    timestamp: DateTime<Utc>,
    active: bool,
    score: f64,
    name: String,
    age: u32,
    large_number: u128,
    precise_decimal: f64,
    contact: Contact,
    addresses: Vec<Address>,
    tags: Vec<String>,
    scores: Vec<u32>,
    metadata: Metadata,
    payment: Payment,
    null_field: Option<String>,
    empty_object: serde_json::Map<String, serde_json::Value>,
    empty_array: Vec<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Contact {
    email: String,
    phone: String,
    verified: bool,
    account_balance: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Address {
    r#type: String,
    street: String,
    city: String,
    zip_code: u32,
    property_value: f64,
    building_number: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    last_updated: String,
    version: u32,
    settings: Settings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Settings {
    notifications: bool,
    theme: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payment {
    card_number: String,
    cvv: String,
    amount: f64,
    mixed: Vec<serde_json::Value>,
}

fn sample() -> TestData {
    let address = |kind: &str, street: &str, city: &str, zip: u32| Address {
        r#type: kind.to_owned(),
        street: street.to_owned(),
        city: city.to_owned(),
        zip_code: zip,
        property_value: 1234567.89,
        building_number: u64::MAX,
    };

    TestData {
        id: "ABC123".to_owned(),
        timestamp: "2025-07-01T12:34:56.789Z".parse().unwrap(),
        active: true,
        score: 95.5,
        name: "John Doe".to_owned(),
        age: 30,
        large_number: 9_223_372_036_854_775_808,
        precise_decimal: 123456.789,
        contact: Contact {
            email: "john@example.com".to_owned(),
            phone: "123-456-7890".to_owned(),
            verified: false,
            account_balance: 999999.99,
        },
        addresses: vec![
            address("home", "123 Main St", "Springfield", 12345),
            address("work", "456 Corp Ave", "Business City", 67890),
        ],
        tags: ["premium", "verified", "active"]
            .map(str::to_owned)
            .to_vec(),
        scores: vec![88, 92, 95],
        metadata: Metadata {
            last_updated: "2025-07-01".to_owned(),
            version: 2,
            settings: Settings {
                notifications: true,
                theme: "dark".to_owned(),
            },
        },
        payment: Payment {
            card_number: "4111111111111111".to_owned(),
            cvv: "123".to_owned(),
            amount: 999999.999999,
            mixed: vec![
                json!("secret1"),
                json!(42),
                json!(true),
                serde_json::to_value(NestedMixed {
                    nested_key: "nestedValue".to_owned(),
                    huge_value: u128::MAX,
                })
                .unwrap(),
            ],
        },
        null_field: None,
        empty_object: serde_json::Map::new(),
        empty_array: Vec::new(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NestedMixed {
    nested_key: String,
    huge_value: u128,
}

mod whitelist {
    use super::*;

    #[test]
    fn masks_the_document_from_text() {
        let masker = JsonMasker::new(MaskingConfig::whitelist().build());
        assert_eq!(masker.mask_str(UNMASKED).unwrap(), normalize(MASKED));
    }

    #[test]
    fn masks_the_document_from_an_object() {
        let masker = JsonMasker::new(MaskingConfig::whitelist().build());
        assert_eq!(
            masker.mask_serializable(&sample()).unwrap(),
            normalize(MASKED)
        );
    }
}

mod blacklist {
    use super::*;

    #[test]
    fn leaves_the_document_unchanged_from_text() {
        let masker = JsonMasker::new(MaskingConfig::blacklist().build());
        assert_eq!(masker.mask_str(UNMASKED).unwrap(), normalize(UNMASKED));
    }

    #[test]
    fn leaves_the_document_unchanged_from_an_object() {
        // Compare against the object's own serialization: the point is that
        // an empty blacklist is a no-op, whatever the encoders produced.
        let masker = JsonMasker::new(MaskingConfig::blacklist().build());
        let tree = jsonmask::json::to_value(&sample()).unwrap();
        assert_eq!(
            masker.mask_serializable(&sample()).unwrap(),
            jsonmask::json::to_string(&tree).unwrap()
        );
    }
}

mod field_selection {
    use super::*;

    #[test]
    fn blacklisting_payment_fields_masks_only_those() {
        let masker = JsonMasker::new(
            MaskingConfig::blacklist()
                .add_fields(["cardNumber", "cvv", "email", "phone"])
                .build(),
        );

        let masked = jsonmask::json::parse(&masker.mask_str(UNMASKED).unwrap()).unwrap();
        let payment = masked.get("payment").unwrap();
        assert_eq!(payment.get("cardNumber").unwrap().as_str(), Some("*****"));
        assert_eq!(payment.get("cvv").unwrap().as_str(), Some("*****"));
        assert_eq!(
            payment.get("amount").unwrap().as_number().unwrap().as_str(),
            "999999.999999"
        );

        let contact = masked.get("contact").unwrap();
        assert_eq!(contact.get("email").unwrap().as_str(), Some("*****"));
        assert_eq!(contact.get("phone").unwrap().as_str(), Some("*****"));

        // Untouched remainder keeps its exact literals.
        assert_eq!(masked.get("id").unwrap().as_str(), Some("ABC123"));
        assert_eq!(
            masked
                .get("largeNumber")
                .unwrap()
                .as_number()
                .unwrap()
                .as_str(),
            "9223372036854775808"
        );
    }

    #[test]
    fn whitelisting_structural_fields_keeps_them_visible() {
        let masker = JsonMasker::new(
            MaskingConfig::whitelist()
                .add_fields(["id", "tags", "scores"])
                .build(),
        );

        let masked = jsonmask::json::parse(&masker.mask_str(UNMASKED).unwrap()).unwrap();
        assert_eq!(masked.get("id").unwrap().as_str(), Some("ABC123"));
        assert_eq!(
            masked.get("tags").unwrap().as_array().unwrap()[0].as_str(),
            Some("premium")
        );
        assert_eq!(
            masked.get("scores").unwrap().as_array().unwrap()[0]
                .as_number()
                .unwrap()
                .as_str(),
            "88"
        );
        assert_eq!(masked.get("name").unwrap().as_str(), Some("*****"));
    }
}
