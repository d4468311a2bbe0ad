use serde::{Deserialize, Serialize};

/// A GHS hazard statement (`H225`, `H314`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HazardCode {
    pub code: String,
    pub statement: String,
}

/// A GHS precautionary statement (`P210`, `P301+P330+P331`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrecautionCode {
    pub code: String,
    pub statement: String,
}

impl HazardCode {
    #[must_use]
    pub fn new(code: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            statement: statement.into(),
        }
    }
}

impl PrecautionCode {
    #[must_use]
    pub fn new(code: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            statement: statement.into(),
        }
    }
}
