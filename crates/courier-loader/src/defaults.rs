//! 預設取件點

use courier_core::{HubRepo, PickupPoint, PickupRepo};

/// 為指定校區的前 `max_hubs` 個樞紐（依載入順序）各建立一組取件點
///
/// 每個樞紐：服務亭 `K{n}`、置物櫃 `L{n}`、櫃台 `D{n}`，`n` 從 1 起算。
pub fn default_pickups(hubs: &HubRepo, campus: &str, max_hubs: usize) -> PickupRepo {
    let mut pickups = PickupRepo::new();

    for (i, hub) in hubs
        .all()
        .iter()
        .filter(|hub| hub.is_on_campus(campus))
        .take(max_hubs)
        .enumerate()
    {
        let n = i + 1;
        pickups.add(PickupPoint::campus_kiosk(
            format!("K{n}"),
            hub.hub_id.clone(),
            format!("Kiosk at {}", hub.hub_name),
        ));
        pickups.add(PickupPoint::dorm_locker(
            format!("L{n}"),
            hub.hub_id.clone(),
            format!("Locker at {}", hub.hub_name),
        ));
        pickups.add(PickupPoint::office_desk(
            format!("D{n}"),
            hub.hub_id.clone(),
            format!("Desk at {}", hub.hub_name),
        ));
    }

    pickups
}
