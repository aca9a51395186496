//! # Courier Core
//!
//! 核心資料模型與類型定義（樞紐、包裹、騎手、取件點）

pub mod config;
pub mod hub;
pub mod parcel;
pub mod pickup;
pub mod record;
pub mod repository;
pub mod rider;

// Re-export 主要類型
pub use config::{DispatchConfig, ProbeCursor};
pub use hub::Hub;
pub use parcel::{Parcel, Priority, PICKUP_MARKER};
pub use pickup::{PickupKind, PickupPoint};
pub use record::{parse_bias, parse_weight_kg, Identifiable, TableRow};
pub use repository::{HubRepo, ParcelRepo, PickupRepo, Repository, RiderRepo};
pub use rider::Rider;

/// 派送錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error("未知的優先級: {0}")]
    UnknownPriority(String),

    #[error("欄位 {field} 的數值無效: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("配置無效: {0}")]
    InvalidConfig(String),

    #[error("配置解析失敗: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CourierError>;
