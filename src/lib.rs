//! # Courier
//!
//! 校園快遞派送：載入資料、依樞紐分派包裹、輸出報表與預覽

pub mod report;

// Re-export 主要類型
pub use courier_calc::{
    assign_parcels, express_then_normal, heavy_first, preview_order, DispatchCalculator,
    DispatchResult, DispatchWarning, LoadStep, RiderLoadIterator,
};
pub use courier_core::{
    DispatchConfig, Hub, HubRepo, Parcel, ParcelRepo, PickupKind, PickupPoint, PickupRepo,
    Priority, ProbeCursor, Rider, RiderRepo,
};
pub use courier_loader::{load_dataset, DataPaths, Dataset, LoadWarning};
