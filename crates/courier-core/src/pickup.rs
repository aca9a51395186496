//! 取件點模型

use serde::{Deserialize, Serialize};

use crate::record::{Identifiable, TableRow};

/// 取件點類型
///
/// 偏好值只作為同優先級內的次要排序鍵，不是獨立的優先級。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// 校園服務亭（+1）
    CampusKiosk,
    /// 宿舍置物櫃（0）
    DormLocker,
    /// 辦公室櫃台（-1）
    OfficeDesk,
    /// 自訂偏好值（來自取件點檔案）
    Custom(i32),
}

impl PickupKind {
    /// 偏好值
    pub fn bias(&self) -> i32 {
        match self {
            PickupKind::CampusKiosk => 1,
            PickupKind::DormLocker => 0,
            PickupKind::OfficeDesk => -1,
            PickupKind::Custom(bias) => *bias,
        }
    }
}

/// 取件點
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    /// 取件點ID
    pub pickup_id: String,

    /// 所屬樞紐
    pub hub_id: String,

    /// 標籤
    pub label: String,

    /// 類型
    pub kind: PickupKind,
}

impl PickupPoint {
    /// 創建新的取件點
    pub fn new(pickup_id: String, hub_id: String, label: String, kind: PickupKind) -> Self {
        Self {
            pickup_id,
            hub_id,
            label,
            kind,
        }
    }

    pub fn campus_kiosk(pickup_id: String, hub_id: String, label: String) -> Self {
        Self::new(pickup_id, hub_id, label, PickupKind::CampusKiosk)
    }

    pub fn dorm_locker(pickup_id: String, hub_id: String, label: String) -> Self {
        Self::new(pickup_id, hub_id, label, PickupKind::DormLocker)
    }

    pub fn office_desk(pickup_id: String, hub_id: String, label: String) -> Self {
        Self::new(pickup_id, hub_id, label, PickupKind::OfficeDesk)
    }

    /// 基礎偏好值
    pub fn base_priority_bias(&self) -> i32 {
        self.kind.bias()
    }
}

impl Identifiable for PickupPoint {
    fn id(&self) -> &str {
        &self.pickup_id
    }
}

impl TableRow for PickupPoint {
    const HEADERS: &'static [&'static str] = &["pickup_id", "label", "hub_id", "bias"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.pickup_id.clone(),
            self.label.clone(),
            self.hub_id.clone(),
            self.base_priority_bias().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PickupKind::CampusKiosk, 1)]
    #[case(PickupKind::DormLocker, 0)]
    #[case(PickupKind::OfficeDesk, -1)]
    #[case(PickupKind::Custom(3), 3)]
    fn test_kind_bias(#[case] kind: PickupKind, #[case] expected: i32) {
        assert_eq!(kind.bias(), expected);
    }

    #[test]
    fn test_pickup_row() {
        let kiosk = PickupPoint::campus_kiosk(
            "K1".to_string(),
            "H1".to_string(),
            "Kiosk at Haviz Cafe".to_string(),
        );

        assert_eq!(kiosk.id(), "K1");
        assert_eq!(kiosk.base_priority_bias(), 1);
        assert_eq!(kiosk.to_row(), vec!["K1", "Kiosk at Haviz Cafe", "H1", "1"]);
    }
}
