//! # Courier Dispatch Engine
//!
//! 核心派送計算引擎：分組、取件點偏好排序、輪詢分派、預覽排序、載重累計

pub mod assignment;
pub mod grouping;
pub mod load;
pub mod pickup_bias;
pub mod sequencing;

use std::collections::{BTreeMap, BTreeSet};

use courier_core::Parcel;
use rust_decimal::Decimal;
use serde::Serialize;

// Re-export 主要類型
pub use assignment::{assign_parcels, DispatchCalculator};
pub use grouping::{GroupingCalculator, PriorityBuckets};
pub use load::{LoadStep, RiderLoadIterator};
pub use pickup_bias::PickupBias;
pub use sequencing::{express_then_normal, heavy_first, preview_order, stable_partition, StablePartition};

/// 派送計算結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DispatchResult {
    /// 騎手ID → 已分派包裹（分派順序）；只含至少分到一件的騎手
    pub assignments: BTreeMap<String, Vec<Parcel>>,

    /// 無騎手可承載的包裹
    pub unassigned: BTreeSet<String>,

    /// 所屬樞紐沒有任何騎手的包裹（不屬於上面兩者）
    pub orphaned: BTreeSet<String>,

    /// 警告信息
    pub warnings: Vec<DispatchWarning>,
}

impl DispatchResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: DispatchWarning) {
        self.warnings.push(warning);
    }

    /// 指定騎手的已分派包裹（沒有時為空）
    pub fn parcels_for(&self, rider_id: &str) -> &[Parcel] {
        self.assignments
            .get(rider_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 指定騎手的總載重（溢位時停在 `Decimal::MAX`）
    pub fn total_load(&self, rider_id: &str) -> Decimal {
        self.parcels_for(rider_id)
            .iter()
            .fold(Decimal::ZERO, |total, p| total.saturating_add(p.weight_kg))
    }

    /// 指定騎手的累計載重迭代器
    pub fn load_iter(&self, rider_id: &str) -> RiderLoadIterator<'_> {
        RiderLoadIterator::new(self.parcels_for(rider_id))
    }

    /// 所有已分派包裹ID
    pub fn assigned_ids(&self) -> BTreeSet<&str> {
        self.assignments
            .values()
            .flatten()
            .map(|p| p.parcel_id.as_str())
            .collect()
    }

    /// 已分派包裹數量
    pub fn assigned_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }
}

/// 派送警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchWarning {
    pub subject_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl DispatchWarning {
    pub fn new(subject_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject_id,
            message,
            severity,
        }
    }

    pub fn info(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Info)
    }

    pub fn warning(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
