//! 派送配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CourierError, Result};

/// 輪詢游標推進規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeCursor {
    /// 每次試探後推進一格（不論成功與否），每個包裹結束後再推進一格
    AdvancePerProbe,

    /// 只有試探失敗才推進，每個包裹結束後再推進一格
    AdvanceOnMiss,
}

/// 派送參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// 預設取件點所屬校區
    pub default_campus: String,

    /// 產生預設取件點的樞紐數量上限
    pub default_pickup_hubs: usize,

    /// 預覽時「重件優先」的重量門檻（公斤）
    pub preview_threshold_kg: Decimal,

    /// 輪詢游標規則
    pub probe_cursor: ProbeCursor,

    /// 是否以樞紐為單位並行計算
    pub parallel: bool,
}

impl DispatchConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            default_campus: "UCU".to_string(),
            default_pickup_hubs: 3,
            preview_threshold_kg: Decimal::new(20, 1),
            probe_cursor: ProbeCursor::AdvancePerProbe,
            parallel: false,
        }
    }

    /// 建構器模式：設置預設校區
    pub fn with_default_campus(mut self, campus: String) -> Self {
        self.default_campus = campus;
        self
    }

    /// 建構器模式：設置預設取件點樞紐數量
    pub fn with_default_pickup_hubs(mut self, count: usize) -> Self {
        self.default_pickup_hubs = count;
        self
    }

    /// 建構器模式：設置預覽重量門檻
    pub fn with_preview_threshold(mut self, threshold_kg: Decimal) -> Self {
        self.preview_threshold_kg = threshold_kg;
        self
    }

    /// 建構器模式：設置游標規則
    pub fn with_probe_cursor(mut self, cursor: ProbeCursor) -> Self {
        self.probe_cursor = cursor;
        self
    }

    /// 建構器模式：設置是否並行
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 從 JSON 讀取配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use courier_core::{DispatchConfig, ProbeCursor};
    /// let config = DispatchConfig::from_json_str(r#"{"probe_cursor": "advance_on_miss"}"#).unwrap();
    /// assert_eq!(config.probe_cursor, ProbeCursor::AdvanceOnMiss);
    /// assert_eq!(config.default_campus, "UCU");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.default_campus.trim().is_empty() {
            return Err(CourierError::InvalidConfig("預設校區不可為空".to_string()));
        }
        if self.preview_threshold_kg < Decimal::ZERO {
            return Err(CourierError::InvalidConfig(format!(
                "預覽重量門檻不可為負數: {}",
                self.preview_threshold_kg
            )));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
