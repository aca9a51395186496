//! 分組：騎手依駐點樞紐、包裹依樞紐與優先級

use std::collections::BTreeMap;

use courier_core::{Parcel, ParcelRepo, Priority, Rider, RiderRepo};

/// 單一樞紐的包裹，依優先級分桶（保留倉庫中的順序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorityBuckets {
    express: Vec<Parcel>,
    normal: Vec<Parcel>,
}

impl PriorityBuckets {
    /// 依包裹優先級放入對應的桶
    pub fn push(&mut self, parcel: Parcel) {
        match parcel.priority {
            Priority::Express => self.express.push(parcel),
            Priority::Normal => self.normal.push(parcel),
        }
    }

    /// 取得指定優先級的桶
    pub fn bucket(&self, priority: Priority) -> &[Parcel] {
        match priority {
            Priority::Express => &self.express,
            Priority::Normal => &self.normal,
        }
    }

    /// 所有包裹（急件在前）
    pub fn iter(&self) -> impl Iterator<Item = &Parcel> {
        self.express.iter().chain(self.normal.iter())
    }

    pub fn len(&self) -> usize {
        self.express.len() + self.normal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.express.is_empty() && self.normal.is_empty()
    }
}

/// 分組計算器
pub struct GroupingCalculator;

impl GroupingCalculator {
    /// 按駐點樞紐分組騎手，組內依騎手ID遞增排序（決定輪詢起點）
    pub fn riders_by_hub(riders: &RiderRepo) -> BTreeMap<String, Vec<Rider>> {
        let mut grouped: BTreeMap<String, Vec<Rider>> = BTreeMap::new();
        for rider in riders.all() {
            grouped
                .entry(rider.home_hub_id.clone())
                .or_default()
                .push(rider.clone());
        }
        for hub_riders in grouped.values_mut() {
            hub_riders.sort_by(|a, b| a.rider_id.cmp(&b.rider_id));
        }
        grouped
    }

    /// 按樞紐與優先級分組包裹
    pub fn parcels_by_hub(parcels: &ParcelRepo) -> BTreeMap<String, PriorityBuckets> {
        let mut grouped: BTreeMap<String, PriorityBuckets> = BTreeMap::new();
        for parcel in parcels.all() {
            grouped
                .entry(parcel.hub_id.clone())
                .or_default()
                .push(parcel.clone());
        }
        grouped
    }
}
