//! # Courier Loader
//!
//! 從 CSV 載入樞紐、包裹、騎手與取件點；格式錯誤的資料列略過並記錄警告

pub mod defaults;
pub mod reader;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use courier_core::{
    parse_bias, parse_weight_kg, DispatchConfig, Hub, HubRepo, Parcel, ParcelRepo, PickupKind,
    PickupPoint, PickupRepo, Priority, Rider, RiderRepo,
};

// Re-export 主要類型
pub use defaults::default_pickups;
pub use reader::{field, read_rows};

/// 載入錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("無法開啟檔案 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV 讀取錯誤: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// 資料列層級的載入警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// 資料來源（hubs / parcels / riders / pickups）
    pub source: String,
    /// 行號（無法定位時為 0）
    pub line: u64,
    pub message: String,
}

impl LoadWarning {
    pub fn new(source: &str, line: u64, message: String) -> Self {
        Self {
            source: source.to_string(),
            line,
            message,
        }
    }
}

/// 載入結果：倉庫與略過資料列的警告
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub repo: T,
    pub warnings: Vec<LoadWarning>,
}

/// 四個資料來源的路徑
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub hubs: PathBuf,
    pub parcels: PathBuf,
    pub riders: PathBuf,
    pub pickups: Option<PathBuf>,
}

/// 一次派送所需的全部資料
#[derive(Debug, Clone)]
pub struct Dataset {
    pub hubs: HubRepo,
    pub parcels: ParcelRepo,
    pub riders: RiderRepo,
    pub pickups: PickupRepo,
    pub warnings: Vec<LoadWarning>,
}

const HUB_COLUMNS: usize = 3;
const PARCEL_COLUMNS: usize = 6;
const RIDER_COLUMNS: usize = 4;
const PICKUP_COLUMNS: usize = 4;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// 載入樞紐（hub_id, hub_name, campus）
pub fn load_hubs(path: impl AsRef<Path>) -> Result<Loaded<HubRepo>> {
    load_hubs_from_reader(open(path.as_ref())?)
}

pub fn load_hubs_from_reader<R: io::Read>(reader: R) -> Result<Loaded<HubRepo>> {
    read_rows(reader, "hubs", HUB_COLUMNS, |record| {
        Ok(Hub::new(
            field(record, 0).to_string(),
            field(record, 1).to_string(),
            field(record, 2).to_string(),
        ))
    })
}

/// 載入包裹（parcel_id, recipient, priority, hub_id, destination, weight_kg）
pub fn load_parcels(path: impl AsRef<Path>) -> Result<Loaded<ParcelRepo>> {
    load_parcels_from_reader(open(path.as_ref())?)
}

pub fn load_parcels_from_reader<R: io::Read>(reader: R) -> Result<Loaded<ParcelRepo>> {
    read_rows(reader, "parcels", PARCEL_COLUMNS, |record| {
        let priority: Priority = field(record, 2).parse()?;
        let weight_kg = parse_weight_kg("weight_kg", field(record, 5))?;
        Ok(Parcel::new(
            field(record, 0).to_string(),
            field(record, 1).to_string(),
            priority,
            field(record, 3).to_string(),
            field(record, 4).to_string(),
            weight_kg,
        ))
    })
}

/// 載入騎手（rider_id, name, max_load_kg, home_hub_id）
pub fn load_riders(path: impl AsRef<Path>) -> Result<Loaded<RiderRepo>> {
    load_riders_from_reader(open(path.as_ref())?)
}

pub fn load_riders_from_reader<R: io::Read>(reader: R) -> Result<Loaded<RiderRepo>> {
    read_rows(reader, "riders", RIDER_COLUMNS, |record| {
        let max_load_kg = parse_weight_kg("max_load_kg", field(record, 2))?;
        Ok(Rider::new(
            field(record, 0).to_string(),
            field(record, 1).to_string(),
            max_load_kg,
            field(record, 3).to_string(),
        ))
    })
}

/// 載入取件點（pickup_id, label, hub_id, bias）
///
/// 未指定檔案、檔案不存在或沒有任何有效資料列時，改用預設取件點。
pub fn load_pickups(
    path: Option<&Path>,
    hubs: &HubRepo,
    config: &DispatchConfig,
) -> Result<Loaded<PickupRepo>> {
    let loaded = match path {
        None => Loaded {
            repo: PickupRepo::new(),
            warnings: Vec::new(),
        },
        Some(path) => match File::open(path) {
            Ok(file) => read_pickup_rows(file)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("找不到取件點檔案 {}，使用預設取件點", path.display());
                Loaded {
                    repo: PickupRepo::new(),
                    warnings: vec![LoadWarning::new(
                        "pickups",
                        0,
                        format!("找不到取件點檔案 {}，使用預設取件點", path.display()),
                    )],
                }
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        },
    };
    Ok(with_defaults(loaded, hubs, config))
}

pub fn load_pickups_from_reader<R: io::Read>(
    reader: R,
    hubs: &HubRepo,
    config: &DispatchConfig,
) -> Result<Loaded<PickupRepo>> {
    let loaded = read_pickup_rows(reader)?;
    Ok(with_defaults(loaded, hubs, config))
}

fn read_pickup_rows<R: io::Read>(reader: R) -> Result<Loaded<PickupRepo>> {
    read_rows(reader, "pickups", PICKUP_COLUMNS, |record| {
        let bias = parse_bias("bias", field(record, 3))?;
        Ok(PickupPoint::new(
            field(record, 0).to_string(),
            field(record, 2).to_string(),
            field(record, 1).to_string(),
            PickupKind::Custom(bias),
        ))
    })
}

fn with_defaults(
    mut loaded: Loaded<PickupRepo>,
    hubs: &HubRepo,
    config: &DispatchConfig,
) -> Loaded<PickupRepo> {
    if loaded.repo.is_empty() {
        loaded.repo = default_pickups(hubs, &config.default_campus, config.default_pickup_hubs);
        tracing::info!(
            "使用預設取件點 {} 個（校區 {}）",
            loaded.repo.len(),
            config.default_campus
        );
    }
    loaded
}

/// 載入全部資料來源
pub fn load_dataset(paths: &DataPaths, config: &DispatchConfig) -> Result<Dataset> {
    let hubs = load_hubs(&paths.hubs)?;
    let parcels = load_parcels(&paths.parcels)?;
    let riders = load_riders(&paths.riders)?;
    let pickups = load_pickups(paths.pickups.as_deref(), &hubs.repo, config)?;

    let mut warnings = hubs.warnings;
    warnings.extend(parcels.warnings);
    warnings.extend(riders.warnings);
    warnings.extend(pickups.warnings);

    Ok(Dataset {
        hubs: hubs.repo,
        parcels: parcels.repo,
        riders: riders.repo,
        pickups: pickups.repo,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    const PARCELS: &str = "\
parcel_id,recipient,priority,hub_id,destination,weight_kg
P1,Student A,express,H1,Sabiiti PICKUP:K1,2.5
P2,Student B,NORMAL,H1,Nkoyoyo Hall,heavy
P3,Student C,Normal,H2,Library,1
";

    #[test]
    fn test_non_numeric_weight_row_dropped() {
        let loaded = load_parcels_from_reader(PARCELS.as_bytes()).unwrap();

        assert_eq!(loaded.repo.len(), 2);
        assert!(loaded.repo.exists("P1"));
        assert!(!loaded.repo.exists("P2"));
        assert!(loaded.repo.exists("P3"));

        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].source, "parcels");
        assert_eq!(loaded.warnings[0].line, 3);
        assert!(loaded.warnings[0].message.contains("weight_kg"));

        let p1 = loaded.repo.get("P1").unwrap();
        assert_eq!(p1.priority, Priority::Express);
        assert_eq!(p1.weight_kg, Decimal::new(25, 1));
        assert_eq!(p1.pickup_ref(), Some("K1"));
    }

    #[test]
    fn test_wrong_column_count_and_unknown_priority() {
        let csv = "\
parcel_id,recipient,priority,hub_id,destination,weight_kg
P1,Student A,EXPRESS,H1,Hall
P2,Student B,URGENT,H1,Hall,1
P3,Student C,NORMAL,H1,Hall,1,extra
P4,Student D,NORMAL,H1,Hall,1
";
        let loaded = load_parcels_from_reader(csv.as_bytes()).unwrap();

        let ids: Vec<&str> = loaded.repo.all().iter().map(|p| p.parcel_id.as_str()).collect();
        assert_eq!(ids, vec!["P4"]);
        assert_eq!(loaded.warnings.len(), 3);
        assert!(loaded.warnings[1].message.contains("URGENT"));
    }

    #[rstest]
    #[case("EXPRESS", Some(Priority::Express))]
    #[case("express", Some(Priority::Express))]
    #[case(" Normal ", Some(Priority::Normal))]
    #[case("urgent", None)]
    #[case("", None)]
    fn test_priority_spellings(#[case] raw: &str, #[case] expected: Option<Priority>) {
        let csv = format!(
            "parcel_id,recipient,priority,hub_id,destination,weight_kg\nP1,Student A,{raw},H1,Hall,1\n"
        );
        let loaded = load_parcels_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(loaded.repo.get("P1").map(|p| p.priority), expected);
        assert_eq!(loaded.warnings.is_empty(), expected.is_some());
    }

    #[test]
    fn test_load_riders_and_hubs() {
        let riders = load_riders_from_reader(
            "rider_id,name,max_load_kg,home_hub_id\nR1,Sunday,15,H1\nR2,Cole,five,H2\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(riders.repo.len(), 1);
        assert_eq!(riders.repo.get("R1").unwrap().max_load_kg, Decimal::from(15));
        assert_eq!(riders.warnings.len(), 1);

        let hubs = load_hubs_from_reader(
            "hub_id,hub_name,campus\nH1,Haviz Cafe,UCU\nH2,JLuxe\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(hubs.repo.len(), 1);
        assert_eq!(hubs.warnings.len(), 1);
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let err = load_hubs("/definitely/not/here/hubs.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    fn ucu_hubs() -> HubRepo {
        load_hubs_from_reader(
            "hub_id,hub_name,campus\nH1,Haviz Cafe,UCU\nH2,JLuxe,Bugujju\nH3,Sabiiti,UCU\nH4,Library,UCU\n"
                .as_bytes(),
        )
        .unwrap()
        .repo
    }

    #[test]
    fn test_pickups_file_rows() {
        let csv = "pickup_id,label,hub_id,bias\nX1,Main Gate,H1,2\nX2,Back Gate,H1,low\n";
        let loaded =
            load_pickups_from_reader(csv.as_bytes(), &ucu_hubs(), &DispatchConfig::default())
                .unwrap();

        assert_eq!(loaded.repo.len(), 1);
        let gate = loaded.repo.get("X1").unwrap();
        assert_eq!(gate.label, "Main Gate");
        assert_eq!(gate.hub_id, "H1");
        assert_eq!(gate.base_priority_bias(), 2);
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_pickups_all_invalid_fall_back_to_defaults() {
        let csv = "pickup_id,label,hub_id,bias\nX1,Main Gate,H1\n";
        let loaded =
            load_pickups_from_reader(csv.as_bytes(), &ucu_hubs(), &DispatchConfig::default())
                .unwrap();

        assert_eq!(loaded.repo.len(), 9);
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_missing_pickups_file_uses_defaults() {
        let loaded = load_pickups(
            Some(Path::new("/definitely/not/here/pickups.csv")),
            &ucu_hubs(),
            &DispatchConfig::default(),
        )
        .unwrap();

        assert_eq!(loaded.repo.len(), 9);
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].source, "pickups");
    }
}
