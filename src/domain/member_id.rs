use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn parse(id: String) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::new(
                "Member ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn test_valid_ids() {
    let valid_ids = ["1", "5e90ca28-e1ad-4795-a190-089959c16e0b", "rec_xyz"];
    for valid_id in valid_ids.iter() {
        let parsed =
            MemberId::parse(valid_id.to_string()).expect(valid_id);
        assert_eq!(parsed.as_ref(), *valid_id, "ID does not match expected value");
    }
}

#[test]
fn test_empty_ids() {
    for invalid_id in ["", "   "] {
        let error = MemberId::parse(invalid_id.to_string())
            .expect_err(invalid_id);
        assert_eq!(error.as_ref(), "Member ID cannot be empty");
    }
}
