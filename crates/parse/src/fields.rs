use slip_core::{KeywordSet, Unit};

use crate::classify;
use crate::re;

re!(re_quantity, r"\b(\d+)\s?(lb|oz|kg|g|ea|each|bag|doz|ct)\b");
re!(re_sku, r"\b(\d+)\b");
re!(re_spaces, r"\s+");
re!(re_punct, r"[^a-zA-Z0-9\s]");

/// Working state threaded through the extraction pipeline: the
/// description being whittled down plus the fields pulled out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Extraction {
    description: String,
    quantity: u32,
    unit: Option<Unit>,
    sku: Option<String>,
}

/// The pipeline steps, in the order they run. Each step rewrites the
/// description before the next one sees it: quantity stripping must
/// precede SKU detection so a quantity number is never read as a SKU,
/// and cleanup runs last over whatever the removals left behind.
const PIPELINE: [fn(Extraction) -> Extraction; 3] = [take_quantity, take_sku, clean];

fn take_quantity(mut ex: Extraction) -> Extraction {
    if let Some(caps) = re_quantity().captures(&ex.description) {
        if let Ok(quantity) = caps[1].parse() {
            ex.quantity = quantity;
            ex.unit = caps[2].parse().ok();
            ex.description = re_quantity().replace_all(&ex.description, "").into_owned();
        }
    }
    ex
}

fn take_sku(mut ex: Extraction) -> Extraction {
    if let Some(caps) = re_sku().captures(&ex.description) {
        ex.sku = Some(caps[1].to_string());
        ex.description = re_sku().replace_all(&ex.description, "").into_owned();
    }
    ex
}

fn clean(mut ex: Extraction) -> Extraction {
    ex.description = clean_description(&ex.description);
    ex
}

/// Whitespace collapse followed by punctuation strip. Stripping can
/// expose doubled spaces, so the collapse is applied once more at the
/// end; cleaning an already-clean string is then a no-op.
pub fn clean_description(text: &str) -> String {
    let collapsed = re_spaces().replace_all(text, " ");
    let stripped = re_punct().replace_all(collapsed.trim(), "");
    re_spaces().replace_all(&stripped, " ").trim().to_string()
}

/// Everything the Field Extractor recovers from one candidate line.
/// The price substring is left untouched here; normalization is the
/// next stage's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub description: String,
    pub quantity: u32,
    pub unit: Option<Unit>,
    pub sku: Option<String>,
    pub raw_price: String,
}

/// Pulls quantity, unit, SKU, and the raw price substring out of a
/// candidate line, leaving a cleaned description. Owns the reserved
/// keyword set so the noise filter is explicit configuration.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    reserved: KeywordSet,
}

impl FieldExtractor {
    pub fn new(reserved: KeywordSet) -> Self {
        FieldExtractor { reserved }
    }

    /// Returns `None` when the line is not an item: the item pattern
    /// does not match, or the cleaned description is empty or one of
    /// the reserved payment/tax keywords.
    pub fn extract(&self, line: &str) -> Option<ItemFields> {
        let caps = classify::item_line().captures(line)?;
        let raw_price = caps[2].to_string();
        let mut ex = Extraction {
            description: caps[1].trim().to_string(),
            quantity: 1,
            unit: None,
            sku: None,
        };
        for step in PIPELINE {
            ex = step(ex);
        }
        if ex.description.is_empty() || self.reserved.contains(&ex.description) {
            return None;
        }
        Some(ItemFields {
            description: ex.description,
            quantity: ex.quantity,
            unit: ex.unit,
            sku: ex.sku,
            raw_price,
        })
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        FieldExtractor::new(KeywordSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> Option<ItemFields> {
        FieldExtractor::default().extract(line)
    }

    #[test]
    fn quantity_with_unit_is_captured_and_stripped() {
        let f = extract("bananas 2lb 1.99").unwrap();
        assert_eq!(f.description, "bananas");
        assert_eq!(f.quantity, 2);
        assert_eq!(f.unit, Some(Unit::Lb));
        assert_eq!(f.sku, None);
        assert_eq!(f.raw_price, "1.99");
    }

    #[test]
    fn bare_digit_run_is_a_sku_not_a_quantity() {
        let f = extract("milk 4032 3.49").unwrap();
        assert_eq!(f.description, "milk");
        assert_eq!(f.quantity, 1);
        assert_eq!(f.unit, None);
        assert_eq!(f.sku.as_deref(), Some("4032"));
        assert_eq!(f.raw_price, "3.49");
    }

    #[test]
    fn quantity_and_sku_never_consume_the_same_token() {
        // The quantity token is removed before the SKU search runs.
        let f = extract("apples 3bag 1234 2.50").unwrap();
        assert_eq!(f.quantity, 3);
        assert_eq!(f.unit, Some(Unit::Bag));
        assert_eq!(f.sku.as_deref(), Some("1234"));
        assert_eq!(f.description, "apples");
    }

    #[test]
    fn quantity_defaults_to_one() {
        let f = extract("eggs 2.99").unwrap();
        assert_eq!(f.quantity, 1);
        assert_eq!(f.unit, None);
    }

    #[test]
    fn unit_separated_by_a_space_still_counts() {
        let f = extract("flour 2 kg 4.25").unwrap();
        assert_eq!(f.quantity, 2);
        assert_eq!(f.unit, Some(Unit::Kg));
        assert_eq!(f.description, "flour");
    }

    #[test]
    fn sku_removal_is_global() {
        // Only the first digit run becomes the SKU, but every digit run
        // is scrubbed from the description.
        let f = extract("soda 111 222 0.99").unwrap();
        assert_eq!(f.sku.as_deref(), Some("111"));
        assert_eq!(f.description, "soda");
    }

    #[test]
    fn punctuation_is_stripped_from_description() {
        let f = extract("choc-chip cookies!! 3.99").unwrap();
        assert_eq!(f.description, "chocchip cookies");
    }

    #[test]
    fn reserved_keywords_are_rejected() {
        assert!(extract("total 12.50").is_none());
        assert!(extract("tax 0.83").is_none());
        assert!(extract("american express 45.00").is_none());
    }

    #[test]
    fn empty_description_after_cleaning_is_rejected() {
        assert!(extract("-- 1.99").is_none());
        assert!(extract("4032 2.49").is_none()); // SKU-only line
    }

    #[test]
    fn non_matching_line_is_not_an_item() {
        assert!(extract("thank you for shopping").is_none());
    }

    #[test]
    fn custom_keyword_set_overrides_the_default() {
        let ex = FieldExtractor::new(KeywordSet::new(["summe"]));
        assert!(ex.extract("summe 9.99").is_none());
        // The stock keywords no longer apply.
        assert!(ex.extract("total 12.50").is_some());
    }

    #[test]
    fn cleaning_is_idempotent() {
        for raw in ["  a - b  ", "choc-chip!!", "plain words", "a\t b\u{a0}c"] {
            let once = clean_description(raw);
            assert_eq!(clean_description(&once), once, "raw = {raw:?}");
        }
    }
}
