//! 實體共通能力：穩定識別碼與表格列投影

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{CourierError, Result};

/// 具有穩定識別碼的實體
pub trait Identifiable {
    /// 實體ID（在所屬倉庫內唯一）
    fn id(&self) -> &str;
}

/// 可投影為表格列的實體
pub trait TableRow {
    /// 欄位名稱（與 `to_row` 的順序一致）
    const HEADERS: &'static [&'static str];

    /// 將欄位轉為字串列
    fn to_row(&self) -> Vec<String>;
}

/// 解析重量/載重（公斤）
///
/// 前後空白會被忽略；無法解析時回傳 [`CourierError::InvalidNumber`]。
pub fn parse_weight_kg(field: &str, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| CourierError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// 解析取件點偏好值（整數）
pub fn parse_bias(field: &str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CourierError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
