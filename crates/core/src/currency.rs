use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency code attached to a detected price.
///
/// Only the currencies whose markers the parser recognizes are
/// represented; anything unmarked is assumed to be USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" | "$" => Ok(Currency::Usd),
            "EUR" | "€" => Ok(Currency::Eur),
            "GBP" | "£" => Ok(Currency::Gbp),
            other => Err(format!("Unknown currency marker: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.code(), "GBP");
    }

    #[test]
    fn from_str_accepts_symbols_and_codes() {
        assert_eq!(Currency::from_str("$").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert!(Currency::from_str("JPY").is_err());
    }

    #[test]
    fn serializes_as_upper_case_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }
}
