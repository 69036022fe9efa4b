//! Closed vocabularies shared by the wire shapes and the storage layer.
//!
//! Each enum serializes to the symbol the original clients expect (the
//! currency symbols in particular) and converts to a stable ASCII code
//! for database storage via [`as_str`] / `TryFrom<&str>`.
//!
//! [`as_str`]: Currency::code

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored enum value that does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Currency of a monetary amount.
///
/// The wire representation keeps the original symbols ("€", "₿", ...);
/// the database stores the canonical code returned by [`code`].
///
/// [`code`]: Currency::code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "€")]
    Euro,
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "¥")]
    Yuan,
    #[serde(rename = "₿")]
    Bitcoin,
    #[serde(rename = "Ξ")]
    Ethereum,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "DOGE")]
    Dogecoin,
    #[serde(rename = "LTC")]
    Litecoin,
    #[serde(rename = "XRP")]
    Ripple,
    #[serde(rename = "XLM")]
    Stellar,
    #[serde(rename = "ADA")]
    Cardano,
    #[serde(rename = "DOT")]
    Polkadot,
    #[serde(rename = "SOL")]
    Solana,
    #[serde(rename = "SHIB")]
    ShibaInu,
    #[serde(rename = "TRX")]
    Tron,
}

impl Currency {
    /// Canonical code used in the database column.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Euro => "EUR",
            Currency::Dollar => "USD",
            Currency::Yuan => "CNY",
            Currency::Bitcoin => "BTC",
            Currency::Ethereum => "ETH",
            Currency::Usdc => "USDC",
            Currency::Dogecoin => "DOGE",
            Currency::Litecoin => "LTC",
            Currency::Ripple => "XRP",
            Currency::Stellar => "XLM",
            Currency::Cardano => "ADA",
            Currency::Polkadot => "DOT",
            Currency::Solana => "SOL",
            Currency::ShibaInu => "SHIB",
            Currency::Tron => "TRX",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Euro),
            "USD" => Ok(Currency::Dollar),
            "CNY" => Ok(Currency::Yuan),
            "BTC" => Ok(Currency::Bitcoin),
            "ETH" => Ok(Currency::Ethereum),
            "USDC" => Ok(Currency::Usdc),
            "DOGE" => Ok(Currency::Dogecoin),
            "LTC" => Ok(Currency::Litecoin),
            "XRP" => Ok(Currency::Ripple),
            "XLM" => Ok(Currency::Stellar),
            "ADA" => Ok(Currency::Cardano),
            "DOT" => Ok(Currency::Polkadot),
            "SOL" => Ok(Currency::Solana),
            "SHIB" => Ok(Currency::ShibaInu),
            "TRX" => Ok(Currency::Tron),
            other => Err(UnknownVariant::new("currency", other)),
        }
    }
}

/// Application-level role of a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Administrator,
    Editor,
    #[default]
    User,
    Guest,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::Editor => "editor",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "administrator" => Ok(UserRole::Administrator),
            "editor" => Ok(UserRole::Editor),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => Err(UnknownVariant::new("user role", other)),
        }
    }
}

/// Role of a member inside a household.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseholdRole {
    Husband,
    Wife,
    Child,
    #[default]
    Other,
}

impl HouseholdRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HouseholdRole::Husband => "husband",
            HouseholdRole::Wife => "wife",
            HouseholdRole::Child => "child",
            HouseholdRole::Other => "other",
        }
    }
}

impl TryFrom<&str> for HouseholdRole {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "husband" => Ok(HouseholdRole::Husband),
            "wife" => Ok(HouseholdRole::Wife),
            "child" => Ok(HouseholdRole::Child),
            "other" => Ok(HouseholdRole::Other),
            other => Err(UnknownVariant::new("household role", other)),
        }
    }
}

/// What kind of money movement a source feeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Income,
    Saving,
    Investment,
    Expense,
    #[default]
    Other,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceKind::Income => "income",
            SourceKind::Saving => "saving",
            SourceKind::Investment => "investment",
            SourceKind::Expense => "expense",
            SourceKind::Other => "other",
        }
    }
}

impl TryFrom<&str> for SourceKind {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(SourceKind::Income),
            "saving" => Ok(SourceKind::Saving),
            "investment" => Ok(SourceKind::Investment),
            "expense" => Ok(SourceKind::Expense),
            "other" => Ok(SourceKind::Other),
            other => Err(UnknownVariant::new("source kind", other)),
        }
    }
}

/// Action recorded by an investment log entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentAction {
    Buy,
    Sell,
    Transfer,
    Deposit,
    Withdraw,
    #[default]
    Hold,
}

impl InvestmentAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InvestmentAction::Buy => "buy",
            InvestmentAction::Sell => "sell",
            InvestmentAction::Transfer => "transfer",
            InvestmentAction::Deposit => "deposit",
            InvestmentAction::Withdraw => "withdraw",
            InvestmentAction::Hold => "hold",
        }
    }
}

impl TryFrom<&str> for InvestmentAction {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "buy" => Ok(InvestmentAction::Buy),
            "sell" => Ok(InvestmentAction::Sell),
            "transfer" => Ok(InvestmentAction::Transfer),
            "deposit" => Ok(InvestmentAction::Deposit),
            "withdraw" => Ok(InvestmentAction::Withdraw),
            "hold" => Ok(InvestmentAction::Hold),
            other => Err(UnknownVariant::new("investment action", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_roundtrips_through_code() {
        for currency in [Currency::Euro, Currency::Bitcoin, Currency::Tron] {
            assert_eq!(Currency::try_from(currency.code()), Ok(currency));
        }
    }

    #[test]
    fn currency_serializes_to_symbol() {
        assert_eq!(serde_json::to_string(&Currency::Euro).unwrap(), "\"€\"");
        assert_eq!(serde_json::to_string(&Currency::Bitcoin).unwrap(), "\"₿\"");
    }

    #[test]
    fn unknown_currency_is_rejected() {
        assert!(Currency::try_from("GBP").is_err());
    }

    #[test]
    fn roles_parse_case_sensitively() {
        assert_eq!(UserRole::try_from("guest"), Ok(UserRole::Guest));
        assert!(UserRole::try_from("Guest").is_err());
    }
}
