use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::unit::Unit;

/// One purchase record recovered from the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Cleaned description, never a reserved keyword.
    pub item: String,
    pub quantity: u32,
    pub unit: Option<Unit>,
    pub price: Decimal,
    pub currency: Currency,
    /// First standalone digit run in the description, if any.
    pub sku: Option<String>,
}

/// The synthesized trailing total row. Its amount is always recomputed
/// from the items, never read from the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Total {
    pub price: Decimal,
    pub currency: Currency,
}

impl Total {
    pub fn of(items: &[LineItem]) -> Self {
        Total {
            price: items.iter().map(|i| i.price).sum(),
            // The base currency is fixed; non-USD items are summed as-is
            // and flagged upstream.
            currency: Currency::Usd,
        }
    }
}

/// Ordered line items plus the synthesized total and receipt-level
/// metadata. All fields are immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTable {
    pub store_name: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub total: Total,
}

impl ReceiptTable {
    pub fn new(
        items: Vec<LineItem>,
        store_name: Option<String>,
        purchase_date: Option<NaiveDate>,
    ) -> Self {
        let total = Total::of(&items);
        ReceiptTable {
            store_name,
            purchase_date,
            items,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
