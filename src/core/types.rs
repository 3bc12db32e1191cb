use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CotizaError;

/// Kind of business record. Determines the heading label on the rendered
/// document, the validity-notice logic, and the backing collection name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Quote,
    Order,
    Preorder,
}

impl RecordType {
    /// Backing collection in the store.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Quote => "quotes",
            Self::Order => "orders",
            Self::Preorder => "preorders",
        }
    }

    /// Discriminator value as stored on the record (`type` field).
    pub fn stored_code(&self) -> &'static str {
        match self {
            Self::Quote => "QUOTE",
            Self::Order => "ORDER",
            Self::Preorder => "PREORDER",
        }
    }

    /// Parse the stored discriminator.
    pub fn from_stored_code(code: &str) -> Option<Self> {
        match code {
            "QUOTE" => Some(Self::Quote),
            "ORDER" => Some(Self::Order),
            "PREORDER" => Some(Self::Preorder),
            _ => None,
        }
    }

    /// Parse the lowercase CLI code. Anything unrecognized is rejected up
    /// front, before any output is produced.
    pub fn from_cli_code(code: &str) -> Result<Self, CotizaError> {
        match code {
            "quote" => Ok(Self::Quote),
            "order" => Ok(Self::Order),
            "preorder" => Ok(Self::Preorder),
            other => Err(CotizaError::InvalidInput(format!(
                "unrecognized record type `{other}` (expected quote, order, or preorder)"
            ))),
        }
    }
}

/// A quote, order, or preorder as this crate consumes it. Owned by the
/// external store; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub record_type: RecordType,
    /// Display code, e.g. the quote number.
    pub number: String,
    /// Set by the order-management system at creation; immutable afterwards.
    /// Always UTC — converted to Bogotá time only for display.
    pub created_at: DateTime<Utc>,
    pub client: ClientInfo,
    pub company: CompanyInfo,
    /// Arbitrary supplementary key/value pairs. Only a JSON object renders
    /// the extra table; any other shape skips the block entirely.
    pub content: Option<serde_json::Value>,
    pub line_items: Vec<LineItem>,
}

/// Client display fields. Every field is optional and renders as an empty
/// string when absent — the row label still appears.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    pub names: Option<String>,
    pub last_names: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl ClientInfo {
    /// `"{names} {last_names}"` with empty-string fallbacks, as printed in
    /// the client column and in alert lines.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.names.as_deref().unwrap_or(""),
            self.last_names.as_deref().unwrap_or("")
        )
    }
}

/// Issuing company fields. Required, no defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
}

impl CompanyInfo {
    /// The fixed AMAS Ferretería identity used when the record carries no
    /// company override.
    pub fn amas() -> Self {
        Self {
            name: "AMAS Ferretería".into(),
            phone: String::new(),
            address: String::new(),
            tax_id: String::new(),
        }
    }
}

/// One product entry within a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Tax percentage, 0–100. Zero is valid and yields zero tax.
    pub tax_rate_percent: Decimal,
    /// Warehouse entries. Only the first location's price is used
    /// (single-warehouse assumption inherited from the store schema).
    pub locations: Vec<StockLocation>,
}

impl LineItem {
    /// Tax-inclusive unit price, first-location-wins. An empty location list
    /// prices the line at zero rather than failing the whole document.
    pub fn unit_price_incl_tax(&self) -> Decimal {
        self.locations
            .first()
            .map(|l| l.unit_price_incl_tax)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Per-warehouse pricing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLocation {
    pub unit_price_incl_tax: Decimal,
}
