//! 簡單派送計算示例
//!
//! 展示從建立樞紐、騎手、包裹到分派與預覽的完整流程

use courier::report::{render_assignments, render_loads, render_preview};
use courier::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("===== Campus Courier Dispatch Example =====\n");

    // 步驟 1: 建立樞紐
    println!("[1] Create Hubs");
    let hubs: HubRepo = vec![
        Hub::new("H1".to_string(), "Haviz Cafe".to_string(), "UCU".to_string()),
        Hub::new("H2".to_string(), "JLuxe".to_string(), "UCU".to_string()),
    ]
    .into_iter()
    .collect();
    println!("    Hubs: {}\n", hubs.len());

    // 步驟 2: 建立騎手（機車 15kg、步行 5kg）
    println!("[2] Create Riders");
    let riders: RiderRepo = vec![
        Rider::new("R1".to_string(), "Sunday".to_string(), Decimal::from(15), "H1".to_string()),
        Rider::new("R2".to_string(), "Cole".to_string(), Decimal::from(5), "H1".to_string()),
        Rider::new("R3".to_string(), "Amos".to_string(), Decimal::from(8), "H2".to_string()),
    ]
    .into_iter()
    .collect();
    println!("    Riders: {}\n", riders.len());

    // 步驟 3: 建立取件點
    println!("[3] Create Pickup Points");
    let pickups: PickupRepo = vec![
        PickupPoint::campus_kiosk("K1".to_string(), "H1".to_string(), "Kiosk at Haviz Cafe".to_string()),
        PickupPoint::office_desk("D1".to_string(), "H1".to_string(), "Desk at Haviz Cafe".to_string()),
    ]
    .into_iter()
    .collect();
    println!("    Pickups: {}\n", pickups.len());

    // 步驟 4: 建立包裹
    println!("[4] Create Parcels");
    let parcels: ParcelRepo = vec![
        Parcel::new("P1".to_string(), "Student A".to_string(), Priority::Express, "H1".to_string(), "Sabiiti PICKUP:K1".to_string(), Decimal::new(35, 1)),
        Parcel::new("P2".to_string(), "Student B".to_string(), Priority::Express, "H1".to_string(), "Nkoyoyo Hall".to_string(), Decimal::from(6)),
        Parcel::new("P3".to_string(), "Student C".to_string(), Priority::Normal, "H1".to_string(), "Office PICKUP:D1".to_string(), Decimal::from(4)),
        Parcel::new("P4".to_string(), "Student D".to_string(), Priority::Normal, "H1".to_string(), "Library".to_string(), Decimal::from(7)),
        Parcel::new("P5".to_string(), "Student E".to_string(), Priority::Express, "H2".to_string(), "Mitchell Hall".to_string(), Decimal::from(2)),
    ]
    .into_iter()
    .collect();
    println!("    Parcels: {}\n", parcels.len());

    // 步驟 5: 執行派送
    println!("[5] Assign Parcels");
    let config = DispatchConfig::default();
    let result = DispatchCalculator::new(config.clone()).calculate(&hubs, &riders, &parcels, &pickups);
    for line in render_assignments(&result) {
        println!("    {line}");
    }
    println!();

    // 步驟 6: 預覽與載重累計
    println!("[6] Preview (threshold {}kg)", config.preview_threshold_kg);
    for rider in riders.all() {
        for line in render_preview(&rider.rider_id, result.parcels_for(&rider.rider_id), config.preview_threshold_kg) {
            println!("    {line}");
        }
        for line in render_loads(&rider.rider_id, &result) {
            println!("    {line}");
        }
    }

    Ok(())
}
