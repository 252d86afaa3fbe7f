use anyhow::Result;

use slip_core::ReceiptTable;

pub fn to_json(table: &ReceiptTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Row-oriented rendering: one record per item, the synthesized Total
/// as the last row with its quantity/unit/SKU columns left empty.
pub fn to_csv(table: &ReceiptTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["Item", "Quantity", "Unit", "Price", "Currency", "SKU"])?;
    for item in &table.items {
        let quantity = item.quantity.to_string();
        let price = item.price.to_string();
        writer.write_record([
            item.item.as_str(),
            quantity.as_str(),
            item.unit.map(|u| u.token()).unwrap_or(""),
            price.as_str(),
            item.currency.code(),
            item.sku.as_deref().unwrap_or(""),
        ])?;
    }
    let total = table.total.price.to_string();
    writer.write_record(["Total", "", "", total.as_str(), table.total.currency.code(), ""])?;
    writer.flush()?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use slip_core::{Currency, LineItem, Unit};
    use std::str::FromStr;

    fn sample() -> ReceiptTable {
        ReceiptTable::new(
            vec![
                LineItem {
                    item: "bananas".to_string(),
                    quantity: 2,
                    unit: Some(Unit::Lb),
                    price: Decimal::from_str("1.99").unwrap(),
                    currency: Currency::Usd,
                    sku: None,
                },
                LineItem {
                    item: "milk".to_string(),
                    quantity: 1,
                    unit: None,
                    price: Decimal::from_str("3.49").unwrap(),
                    currency: Currency::Usd,
                    sku: Some("4032".to_string()),
                },
            ],
            Some("CORNER MARKET".to_string()),
            NaiveDate::from_ymd_opt(2023, 7, 4),
        )
    }

    #[test]
    fn json_carries_metadata_and_total() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["store_name"], "CORNER MARKET");
        assert_eq!(json["purchase_date"], "2023-07-04");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["total"]["price"], "5.48");
        assert_eq!(json["total"]["currency"], "USD");
    }

    #[test]
    fn csv_appends_total_row_with_empty_columns() {
        let out = to_csv(&sample()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Item,Quantity,Unit,Price,Currency,SKU");
        assert_eq!(lines[1], "bananas,2,lb,1.99,USD,");
        assert_eq!(lines[2], "milk,1,,3.49,USD,4032");
        assert_eq!(lines[3], "Total,,,5.48,USD,");
        assert_eq!(lines.len(), 4);
    }
}
