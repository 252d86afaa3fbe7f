//! Receipt transcript parsing: turns the raw, noisy text an OCR engine
//! produced for one receipt into a [`ReceiptTable`] of line items plus
//! store-name and purchase-date metadata.
//!
//! Four stages run in sequence over the input string: line
//! classification with continuation merging ([`classify`]), field
//! extraction ([`fields`]), price normalization ([`normalize`]), and
//! metadata extraction ([`metadata`]). The whole parse is a pure
//! function of its input; independent transcripts can be parsed from
//! any number of threads.

use slip_core::{Currency, KeywordSet, LineItem, ReceiptTable};

// OnceLock-cached compiled regex, shared by the stage modules.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        pub(crate) fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}
pub(crate) use re;

pub mod classify;
pub mod fields;
pub mod metadata;
pub mod normalize;

pub use classify::{candidate_lines, CandidateLine};
pub use fields::{FieldExtractor, ItemFields};
pub use normalize::{normalize_price, PriceError};

/// The assembled four-stage parser. Construction fixes the reserved
/// keyword configuration; parsing itself holds no other state.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    extractor: FieldExtractor,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    /// Parser with a locale-specific reserved keyword set.
    pub fn with_keywords(reserved: KeywordSet) -> Self {
        Parser {
            extractor: FieldExtractor::new(reserved),
        }
    }

    /// Parse one transcript into a table. Never fails: a garbage or
    /// empty transcript yields an empty item list with a zero total,
    /// and a single malformed price drops only its own line.
    pub fn parse(&self, transcript: &str) -> ReceiptTable {
        let mut items = Vec::new();
        for candidate in candidate_lines(transcript) {
            let Some(fields) = self.extractor.extract(&candidate.text) else {
                continue;
            };
            match normalize_price(&fields.raw_price) {
                Ok((price, currency)) => items.push(LineItem {
                    item: fields.description,
                    quantity: fields.quantity,
                    unit: fields.unit,
                    price,
                    currency,
                    sku: fields.sku,
                }),
                Err(e) => {
                    tracing::debug!(line = %candidate.text, "dropping line item: {e}");
                }
            }
        }
        if items.iter().any(|i| i.currency != Currency::Usd) {
            // The total row is always stamped USD; make the coercion visible.
            tracing::warn!("non-USD line items present; total is stamped USD");
        }
        ReceiptTable::new(
            items,
            metadata::store_name(transcript),
            metadata::purchase_date(transcript),
        )
    }
}
