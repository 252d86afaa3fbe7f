pub mod currency;
pub mod keywords;
pub mod table;
pub mod unit;

pub use currency::Currency;
pub use keywords::{KeywordError, KeywordSet};
pub use table::{LineItem, ReceiptTable, Total};
pub use unit::Unit;
