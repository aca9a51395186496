//! CSV 資料列讀取：標題列之後逐列解析，壞列略過

use std::io;

use courier_core::{Identifiable, Repository};
use csv::StringRecord;

use crate::{LoadWarning, Loaded, Result};

/// 取出欄位（超出範圍時為空字串）
pub fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// 讀取固定欄數的 CSV 資料列
///
/// 欄數不符或 `parse` 失敗的資料列會被略過並記錄警告；
/// 只有底層 I/O 錯誤會中止載入。
pub fn read_rows<R, T, F>(
    reader: R,
    source: &str,
    columns: usize,
    mut parse: F,
) -> Result<Loaded<Repository<T>>>
where
    R: io::Read,
    T: Identifiable,
    F: FnMut(&StringRecord) -> courier_core::Result<T>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut repo = Repository::new();
    let mut warnings = Vec::new();

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                skip_row(&mut warnings, source, line, err.to_string());
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != columns {
            skip_row(
                &mut warnings,
                source,
                line,
                format!("欄數應為 {}，實際為 {}", columns, record.len()),
            );
            continue;
        }

        match parse(&record) {
            Ok(entity) => repo.add(entity),
            Err(err) => skip_row(&mut warnings, source, line, err.to_string()),
        }
    }

    tracing::info!(
        "載入 {}：{} 筆，略過 {} 筆",
        source,
        repo.len(),
        warnings.len()
    );

    Ok(Loaded { repo, warnings })
}

fn skip_row(warnings: &mut Vec<LoadWarning>, source: &str, line: u64, message: String) {
    tracing::warn!("略過格式錯誤的資料列 {}:{}：{}", source, line, message);
    warnings.push(LoadWarning::new(source, line, message));
}
