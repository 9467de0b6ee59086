use serde::{Deserialize, Serialize};

/// Countries offered by the phone selectors and the dashboard filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneCountry {
    #[default]
    #[serde(rename = "MA")]
    Morocco,
    #[serde(rename = "FR")]
    France,
}

impl PhoneCountry {
    pub const ALL: [PhoneCountry; 2] = [PhoneCountry::Morocco, PhoneCountry::France];

    /// ISO 3166 alpha-2 code, as sent on the wire.
    pub fn code(self) -> &'static str {
        match self {
            PhoneCountry::Morocco => "MA",
            PhoneCountry::France => "FR",
        }
    }

    pub fn dial_code(self) -> &'static str {
        match self {
            PhoneCountry::Morocco => "+212",
            PhoneCountry::France => "+33",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhoneCountry::Morocco => "Morocco",
            PhoneCountry::France => "France",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Local number prefixed with the country's dial code.
    pub fn international(self, local_number: &str) -> String {
        format!("{}{}", self.dial_code(), local_number)
    }
}
