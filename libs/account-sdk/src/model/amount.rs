use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::{AccResult, AccountErrKind};

/// A decimal amount exactly as the account service writes it.
///
/// The string is never parsed into floating point. Use [Amount::to_decimal] when arithmetic is
/// needed; the wire form is always the original text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(amount: impl Into<String>) -> Self {
        Self(amount.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_decimal(&self) -> AccResult<Decimal> {
        Decimal::from_str(&self.0).map_err(|_| AccountErrKind::InvalidParams.into())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(amount: &str) -> Self {
        Self::new(amount)
    }
}

impl From<String> for Amount {
    fn from(amount: String) -> Self {
        Self(amount)
    }
}

impl From<Decimal> for Amount {
    fn from(amount: Decimal) -> Self {
        Self(amount.to_string())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default().as_str(), "0");
    }

    #[test]
    fn precision_survives_json() {
        let amount = Amount::new("0.100000000000000000000000001");
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"0.100000000000000000000000001\"");
        assert_eq!(serde_json::from_str::<Amount>(&json).unwrap(), amount);
    }

    #[test]
    fn decimal_view() {
        let amount = Amount::new("12.50");
        assert_eq!(amount.to_decimal().unwrap(), Decimal::new(1250, 2));
        // trailing zeros are kept on the wire form
        assert_eq!(amount.to_string(), "12.50");
    }

    #[test]
    fn decimal_view_rejects_garbage() {
        assert!(Amount::new("twelve").to_decimal().unwrap_err().is_invalid_params());
    }
}
