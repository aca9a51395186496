//! 派送主計算器：依樞紐輪詢分派包裹給騎手

use std::collections::{BTreeMap, BTreeSet, HashMap};

use courier_core::{
    DispatchConfig, HubRepo, Parcel, ParcelRepo, PickupRepo, Priority, ProbeCursor, Rider,
    RiderRepo,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::grouping::{GroupingCalculator, PriorityBuckets};
use crate::pickup_bias::PickupBias;
use crate::{DispatchResult, DispatchWarning};

/// 以預設配置分派包裹
pub fn assign_parcels(
    hubs: &HubRepo,
    riders: &RiderRepo,
    parcels: &ParcelRepo,
    pickups: &PickupRepo,
) -> DispatchResult {
    DispatchCalculator::new(DispatchConfig::default()).calculate(hubs, riders, parcels, pickups)
}

/// 派送計算器
pub struct DispatchCalculator {
    config: DispatchConfig,
}

/// 單一樞紐的分派結果
#[derive(Debug, Default)]
struct HubOutcome {
    assignments: BTreeMap<String, Vec<Parcel>>,
    unassigned: BTreeSet<String>,
    warnings: Vec<DispatchWarning>,
}

/// 樞紐內的輪詢游標，跨包裹與跨優先級保留位置
#[derive(Debug)]
struct RoundRobinCursor {
    position: usize,
    len: usize,
    rule: ProbeCursor,
}

impl RoundRobinCursor {
    fn new(len: usize, rule: ProbeCursor) -> Self {
        Self {
            position: 0,
            len,
            rule,
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self) {
        self.position = (self.position + 1) % self.len;
    }

    /// 一次試探之後
    fn after_probe(&mut self, placed: bool) {
        match self.rule {
            ProbeCursor::AdvancePerProbe => self.advance(),
            ProbeCursor::AdvanceOnMiss => {
                if !placed {
                    self.advance();
                }
            }
        }
    }

    /// 一個包裹處理完畢之後（不論是否分派成功）
    fn after_parcel(&mut self) {
        self.advance();
    }
}

impl DispatchCalculator {
    /// 創建新的派送計算器
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// 主派送計算入口
    ///
    /// 結果只取決於輸入內容；同一組倉庫重複計算會得到相同結果。
    pub fn calculate(
        &self,
        hubs: &HubRepo,
        riders: &RiderRepo,
        parcels: &ParcelRepo,
        pickups: &PickupRepo,
    ) -> DispatchResult {
        tracing::info!(
            "開始派送計算：樞紐 {} 個，騎手 {} 位，包裹 {} 件，取件點 {} 個",
            hubs.len(),
            riders.len(),
            parcels.len(),
            pickups.len()
        );

        // Step 1: 騎手依樞紐分組並排序
        tracing::debug!("Step 1: 騎手分組");
        let riders_by_hub = GroupingCalculator::riders_by_hub(riders);

        // Step 2: 包裹依樞紐、優先級分組
        tracing::debug!("Step 2: 包裹分組");
        let parcels_by_hub = GroupingCalculator::parcels_by_hub(parcels);

        let mut result = DispatchResult::empty();

        let referenced: BTreeSet<&String> = riders_by_hub.keys().chain(parcels_by_hub.keys()).collect();
        for hub_id in referenced {
            if !hubs.exists(hub_id) {
                tracing::debug!("樞紐 {} 不在樞紐清單中，照常分組", hub_id);
                result.add_warning(DispatchWarning::info(
                    hub_id.clone(),
                    "樞紐不在樞紐清單中".to_string(),
                ));
            }
        }

        // 沒有騎手的樞紐：包裹既不分派也不列為未分派
        for (hub_id, buckets) in &parcels_by_hub {
            if riders_by_hub.contains_key(hub_id) {
                continue;
            }
            tracing::warn!("樞紐 {} 沒有騎手，{} 件包裹未納入分派", hub_id, buckets.len());
            result
                .orphaned
                .extend(buckets.iter().map(|p| p.parcel_id.clone()));
            result.add_warning(DispatchWarning::warning(
                hub_id.clone(),
                format!("樞紐沒有騎手，{} 件包裹未納入分派", buckets.len()),
            ));
        }

        // Step 3: 逐樞紐輪詢分派
        tracing::debug!("Step 3: 逐樞紐分派（並行: {}）", self.config.parallel);
        let hub_groups: Vec<(&String, &Vec<Rider>)> = riders_by_hub.iter().collect();
        let outcomes: Vec<HubOutcome> = if self.config.parallel {
            hub_groups
                .par_iter()
                .map(|(hub_id, hub_riders)| {
                    self.assign_hub(hub_id, hub_riders, parcels_by_hub.get(*hub_id), pickups)
                })
                .collect()
        } else {
            hub_groups
                .iter()
                .map(|(hub_id, hub_riders)| {
                    self.assign_hub(hub_id, hub_riders, parcels_by_hub.get(*hub_id), pickups)
                })
                .collect()
        };

        // 依樞紐ID順序合併，並行與否結果一致
        for outcome in outcomes {
            result.assignments.extend(outcome.assignments);
            result.unassigned.extend(outcome.unassigned);
            result.warnings.extend(outcome.warnings);
        }

        tracing::info!(
            "派送計算完成：已分派 {} 件，未分派 {} 件，無騎手樞紐包裹 {} 件",
            result.assigned_count(),
            result.unassigned.len(),
            result.orphaned.len()
        );

        result
    }

    /// 單一樞紐分派
    fn assign_hub(
        &self,
        hub_id: &str,
        hub_riders: &[Rider],
        buckets: Option<&PriorityBuckets>,
        pickups: &PickupRepo,
    ) -> HubOutcome {
        let mut outcome = HubOutcome::default();
        let Some(buckets) = buckets else {
            tracing::debug!("樞紐 {} 沒有包裹", hub_id);
            return outcome;
        };
        if hub_riders.is_empty() {
            return outcome;
        }

        let mut cursor = RoundRobinCursor::new(hub_riders.len(), self.config.probe_cursor);
        let mut loads: HashMap<&str, Decimal> = HashMap::new();

        let sequence = Self::hub_sequence(hub_id, buckets, pickups, &mut outcome.warnings);
        for parcel in sequence {
            let mut placed = false;

            for _ in 0..hub_riders.len() {
                let rider = &hub_riders[cursor.position()];
                let load = loads.entry(rider.rider_id.as_str()).or_insert(Decimal::ZERO);
                let fits = rider.can_carry(*load, parcel.weight_kg);
                if fits {
                    *load += parcel.weight_kg;
                    outcome
                        .assignments
                        .entry(rider.rider_id.clone())
                        .or_default()
                        .push(parcel.clone());
                    tracing::debug!(
                        "分派: {} → {} (重量: {}, 累計: {})",
                        parcel.parcel_id,
                        rider.rider_id,
                        parcel.weight_kg,
                        *load
                    );
                }
                cursor.after_probe(fits);
                if fits {
                    placed = true;
                    break;
                }
            }

            if !placed {
                tracing::debug!("包裹 {} 無騎手可承載", parcel.parcel_id);
                outcome.unassigned.insert(parcel.parcel_id.clone());
            }
            cursor.after_parcel();
        }

        outcome
    }

    /// 各樞紐（有騎手者）包裹的嘗試順序：樞紐ID → 包裹ID
    ///
    /// 與 [`calculate`](Self::calculate) 使用同一套排序：急件整桶在前，桶內依取件點偏好值遞減、包裹ID遞增。
    pub fn attempt_order(
        riders: &RiderRepo,
        parcels: &ParcelRepo,
        pickups: &PickupRepo,
    ) -> BTreeMap<String, Vec<String>> {
        let riders_by_hub = GroupingCalculator::riders_by_hub(riders);
        let mut ignored = Vec::new();

        GroupingCalculator::parcels_by_hub(parcels)
            .iter()
            .filter(|(hub_id, _)| riders_by_hub.contains_key(*hub_id))
            .map(|(hub_id, buckets)| {
                let ids = Self::hub_sequence(hub_id, buckets, pickups, &mut ignored)
                    .into_iter()
                    .map(|p| p.parcel_id.clone())
                    .collect();
                (hub_id.clone(), ids)
            })
            .collect()
    }

    /// 單一樞紐的完整嘗試順序
    fn hub_sequence<'a>(
        hub_id: &str,
        buckets: &'a PriorityBuckets,
        pickups: &PickupRepo,
        warnings: &mut Vec<DispatchWarning>,
    ) -> Vec<&'a Parcel> {
        let mut sequence = Vec::with_capacity(buckets.len());
        for priority in Priority::ORDER {
            let ordered = Self::order_bucket(buckets.bucket(priority), pickups, warnings);
            tracing::debug!("樞紐 {} {} 包裹: {} 件", hub_id, priority, ordered.len());
            sequence.extend(ordered);
        }
        sequence
    }

    /// 桶內排序：取件點偏好值高者優先，再依包裹ID遞增
    fn order_bucket<'a>(
        bucket: &'a [Parcel],
        pickups: &PickupRepo,
        warnings: &mut Vec<DispatchWarning>,
    ) -> Vec<&'a Parcel> {
        let mut keyed: Vec<(i32, &Parcel)> = bucket
            .iter()
            .map(|parcel| {
                let bias = PickupBias::resolve(parcel, pickups);
                if let PickupBias::Unresolved { pickup_id } = &bias {
                    tracing::warn!("未知的取件點 {}（包裹 {}），以偏好值 0 計", pickup_id, parcel.parcel_id);
                    warnings.push(DispatchWarning::warning(
                        parcel.parcel_id.clone(),
                        format!("未知的取件點 {}", pickup_id),
                    ));
                }
                (bias.value(), parcel)
            })
            .collect();

        keyed.sort_by(|(bias_a, a), (bias_b, b)| {
            bias_b
                .cmp(bias_a)
                .then_with(|| a.parcel_id.cmp(&b.parcel_id))
        });

        keyed.into_iter().map(|(_, parcel)| parcel).collect()
    }
}
