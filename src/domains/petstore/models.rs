//! Petstore value types.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A pet record as stored by the core service.
///
/// Decoding takes `_id` when present and falls back to `id`. Records carrying
/// both (virtual `id` alongside the stored `_id`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Pet {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Pet name.
    pub name: String,

    /// Pet breed.
    pub breed: String,

    /// Pet age in years.
    pub age: u32,
}

/// Wire shape of a pet record, before the identifier is resolved.
#[derive(Deserialize)]
struct PetRecord {
    #[serde(rename = "_id")]
    stored_id: Option<String>,
    id: Option<String>,
    name: String,
    breed: String,
    age: u32,
}

impl<'de> Deserialize<'de> for Pet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = PetRecord::deserialize(deserializer)?;
        let id = record
            .stored_id
            .or(record.id)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("_id"))?;
        Ok(Self {
            id,
            name: record.name,
            breed: record.breed,
            age: record.age,
        })
    }
}

/// Payload for creating a pet. The core service assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDraft {
    pub name: String,
    pub breed: String,
    pub age: u32,
}

impl PetDraft {
    pub fn new(name: impl Into<String>, breed: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            age,
        }
    }
}

/// Opaque token issued by the auth service for a single tool call.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tokens never show up in logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_decodes_underscore_id() {
        let json = r#"{"_id":"64f1","name":"Rex","breed":"Beagle","age":3,"__v":0}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "64f1");
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.breed, "Beagle");
        assert_eq!(pet.age, 3);
    }

    #[test]
    fn test_pet_accepts_plain_id() {
        let json = r#"{"id":"42","name":"Luna","breed":"Pug","age":1}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "42");
    }

    #[test]
    fn test_pet_accepts_both_ids() {
        let json = r#"{"_id":"64f1","id":"64f1","name":"Rex","breed":"Beagle","age":3}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "64f1");
    }

    #[test]
    fn test_pet_prefers_underscore_id() {
        let json = r#"{"id":"virtual","_id":"stored","name":"Rex","breed":"Beagle","age":3}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "stored");
    }

    #[test]
    fn test_pet_without_id_is_rejected() {
        let json = r#"{"name":"Rex","breed":"Beagle","age":3}"#;
        let err = serde_json::from_str::<Pet>(json).unwrap_err();
        assert!(err.to_string().contains("_id"));
    }

    #[test]
    fn test_pet_serializes_underscore_id() {
        let pet = Pet {
            id: "7".to_string(),
            name: "Rex".to_string(),
            breed: "Beagle".to_string(),
            age: 3,
        };
        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(value["_id"], "7");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_pet_rejects_negative_age() {
        let json = r#"{"_id":"1","name":"Rex","breed":"Beagle","age":-2}"#;
        assert!(serde_json::from_str::<Pet>(json).is_err());
    }

    #[test]
    fn test_draft_has_no_id() {
        let draft = PetDraft::new("Rex", "Beagle", 3);
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Rex", "breed": "Beagle", "age": 3})
        );
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let token = Token::new("eyJhbGciOi.secret");
        let debug_str = format!("{:?}", token);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("secret"));
        assert_eq!(token.as_str(), "eyJhbGciOi.secret");
    }
}
