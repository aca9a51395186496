//! 包裹模型

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::{Identifiable, TableRow};
use crate::CourierError;

/// 目的地字串中的取件點標記（`PICKUP:<pickup_id>`）
pub const PICKUP_MARKER: &str = "PICKUP:";

/// 包裹優先級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// 急件（每個樞紐內一律先於普通件處理）
    Express,
    /// 普通件
    Normal,
}

impl Priority {
    /// 處理順序：急件在前
    pub const ORDER: [Priority; 2] = [Priority::Express, Priority::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Express => "EXPRESS",
            Priority::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 不分大小寫解析（`"express"` → `EXPRESS`）
impl FromStr for Priority {
    type Err = CourierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EXPRESS" => Ok(Priority::Express),
            "NORMAL" => Ok(Priority::Normal),
            _ => Err(CourierError::UnknownPriority(s.to_string())),
        }
    }
}

/// 包裹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// 包裹ID
    pub parcel_id: String,

    /// 收件人
    pub recipient: String,

    /// 優先級
    pub priority: Priority,

    /// 出發樞紐
    pub hub_id: String,

    /// 目的地（可能含 `PICKUP:<id>` 標記）
    pub destination: String,

    /// 重量（公斤）
    pub weight_kg: Decimal,
}

impl Parcel {
    /// 創建新的包裹
    pub fn new(
        parcel_id: String,
        recipient: String,
        priority: Priority,
        hub_id: String,
        destination: String,
        weight_kg: Decimal,
    ) -> Self {
        Self {
            parcel_id,
            recipient,
            priority,
            hub_id,
            destination,
            weight_kg,
        }
    }

    /// 檢查是否為急件
    pub fn is_express(&self) -> bool {
        self.priority == Priority::Express
    }

    /// 取出目的地中引用的取件點ID
    ///
    /// 取第一個標記之後、下一個標記（或字串結尾）之前的內容；
    /// 沒有標記時回傳 `None`。
    pub fn pickup_ref(&self) -> Option<&str> {
        self.destination.split(PICKUP_MARKER).nth(1)
    }
}

impl Identifiable for Parcel {
    fn id(&self) -> &str {
        &self.parcel_id
    }
}

impl TableRow for Parcel {
    const HEADERS: &'static [&'static str] = &[
        "parcel_id",
        "recipient",
        "priority",
        "hub_id",
        "destination",
        "weight_kg",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.parcel_id.clone(),
            self.recipient.clone(),
            self.priority.to_string(),
            self.hub_id.clone(),
            self.destination.clone(),
            self.weight_kg.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parcel(destination: &str) -> Parcel {
        Parcel::new(
            "P1".to_string(),
            "Student A".to_string(),
            Priority::Express,
            "H1".to_string(),
            destination.to_string(),
            Decimal::new(15, 1),
        )
    }

    #[rstest]
    #[case("EXPRESS", Priority::Express)]
    #[case("express", Priority::Express)]
    #[case("Normal", Priority::Normal)]
    #[case(" normal ", Priority::Normal)]
    fn test_priority_case_insensitive(#[case] raw: &str, #[case] expected: Priority) {
        assert_eq!(raw.parse::<Priority>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_priority() {
        let err = "URGENT".parse::<Priority>().unwrap_err();
        assert!(matches!(err, CourierError::UnknownPriority(p) if p == "URGENT"));
    }

    #[rstest]
    #[case("Sabiiti Hostel", None)]
    #[case("PICKUP:K1", Some("K1"))]
    #[case("Sabiiti PICKUP:L2", Some("L2"))]
    #[case("PICKUP:K1 then PICKUP:D1", Some("K1 then "))]
    #[case("PICKUP:", Some(""))]
    fn test_pickup_ref(#[case] destination: &str, #[case] expected: Option<&str>) {
        assert_eq!(parcel(destination).pickup_ref(), expected);
    }

    #[test]
    fn test_parcel_row() {
        let p = parcel("Nkoyoyo Hall");
        assert_eq!(p.id(), "P1");
        assert!(p.is_express());
        assert_eq!(
            p.to_row(),
            vec!["P1", "Student A", "EXPRESS", "H1", "Nkoyoyo Hall", "1.5"]
        );
    }

    #[test]
    fn test_priority_serializes_upper_case() {
        let json = serde_json::to_string(&Priority::Normal).unwrap();
        assert_eq!(json, "\"NORMAL\"");
    }
}
