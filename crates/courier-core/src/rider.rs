//! 騎手模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::{Identifiable, TableRow};

/// 騎手
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    /// 騎手ID
    pub rider_id: String,

    /// 姓名
    pub name: String,

    /// 最大載重（公斤）
    pub max_load_kg: Decimal,

    /// 駐點樞紐
    pub home_hub_id: String,
}

impl Rider {
    /// 創建新的騎手
    pub fn new(rider_id: String, name: String, max_load_kg: Decimal, home_hub_id: String) -> Self {
        Self {
            rider_id,
            name,
            max_load_kg,
            home_hub_id,
        }
    }

    /// 在目前載重下能否再承載指定重量
    ///
    /// 相加溢位視為無法承載。
    pub fn can_carry(&self, current_load_kg: Decimal, weight_kg: Decimal) -> bool {
        current_load_kg
            .checked_add(weight_kg)
            .is_some_and(|total| total <= self.max_load_kg)
    }
}

impl Identifiable for Rider {
    fn id(&self) -> &str {
        &self.rider_id
    }
}

impl TableRow for Rider {
    const HEADERS: &'static [&'static str] = &["rider_id", "name", "max_load_kg", "home_hub_id"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.rider_id.clone(),
            self.name.clone(),
            self.max_load_kg.to_string(),
            self.home_hub_id.clone(),
        ]
    }
}
