//! 樞紐模型

use serde::{Deserialize, Serialize};

use crate::record::{Identifiable, TableRow};

/// 樞紐（包裹出發點，騎手駐點）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    /// 樞紐ID
    pub hub_id: String,

    /// 樞紐名稱
    pub hub_name: String,

    /// 所屬校區
    pub campus: String,
}

impl Hub {
    /// 創建新的樞紐
    pub fn new(hub_id: String, hub_name: String, campus: String) -> Self {
        Self {
            hub_id,
            hub_name,
            campus,
        }
    }

    /// 檢查是否位於指定校區
    pub fn is_on_campus(&self, campus: &str) -> bool {
        self.campus == campus
    }
}

impl Identifiable for Hub {
    fn id(&self) -> &str {
        &self.hub_id
    }
}

impl TableRow for Hub {
    const HEADERS: &'static [&'static str] = &["hub_id", "hub_name", "campus"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.hub_id.clone(),
            self.hub_name.clone(),
            self.campus.clone(),
        ]
    }
}
