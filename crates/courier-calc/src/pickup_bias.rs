//! 取件點偏好值解析

use courier_core::{Parcel, PickupRepo};

/// 包裹的取件點偏好解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupBias {
    /// 目的地沒有取件點標記
    NoReference,
    /// 找到對應的取件點
    Resolved { pickup_id: String, bias: i32 },
    /// 標記引用了不存在的取件點（以 0 計）
    Unresolved { pickup_id: String },
}

impl PickupBias {
    /// 解析包裹目的地中的取件點標記
    pub fn resolve(parcel: &Parcel, pickups: &PickupRepo) -> Self {
        match parcel.pickup_ref() {
            None => PickupBias::NoReference,
            Some(pickup_id) => match pickups.get(pickup_id) {
                Some(point) => PickupBias::Resolved {
                    pickup_id: pickup_id.to_string(),
                    bias: point.base_priority_bias(),
                },
                None => PickupBias::Unresolved {
                    pickup_id: pickup_id.to_string(),
                },
            },
        }
    }

    /// 排序用偏好值
    pub fn value(&self) -> i32 {
        match self {
            PickupBias::Resolved { bias, .. } => *bias,
            PickupBias::NoReference | PickupBias::Unresolved { .. } => 0,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, PickupBias::Unresolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{PickupPoint, Priority};
    use rust_decimal::Decimal;

    fn parcel(destination: &str) -> Parcel {
        Parcel::new(
            "P1".to_string(),
            "Student".to_string(),
            Priority::Normal,
            "H1".to_string(),
            destination.to_string(),
            Decimal::ONE,
        )
    }

    fn pickups() -> PickupRepo {
        vec![
            PickupPoint::campus_kiosk("K1".to_string(), "H1".to_string(), "Kiosk".to_string()),
            PickupPoint::office_desk("D1".to_string(), "H1".to_string(), "Desk".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolved_bias() {
        let bias = PickupBias::resolve(&parcel("Sabiiti PICKUP:K1"), &pickups());
        assert_eq!(
            bias,
            PickupBias::Resolved {
                pickup_id: "K1".to_string(),
                bias: 1
            }
        );
        assert_eq!(PickupBias::resolve(&parcel("PICKUP:D1"), &pickups()).value(), -1);
    }

    #[test]
    fn test_missing_and_unresolved_default_to_zero() {
        let none = PickupBias::resolve(&parcel("Nkoyoyo Hall"), &pickups());
        assert_eq!(none, PickupBias::NoReference);
        assert_eq!(none.value(), 0);

        let unknown = PickupBias::resolve(&parcel("PICKUP:Z9"), &pickups());
        assert!(unknown.is_unresolved());
        assert_eq!(unknown.value(), 0);
    }
}
