// ==========================================
// 生产运营驾驶舱 - 导入层
// ==========================================
// 职责: 外部文件 → 领域记录（设备 / 维修工单）
// 支持: Excel, CSV, JSON
// 红线: 任一行不合格则整批失败，错误带行号
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use field_mapper::{MachineFieldMapper, WorkOrderFieldMapper};
pub use file_parser::{CsvParser, ExcelParser, FileParser, NumberedRow, RawRow, UniversalFileParser};

use crate::domain::error::DomainResult;
use crate::domain::machine::Machine;
use crate::domain::maintenance::MaintenanceRecord;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

/// 导入设备表
pub fn import_machines(path: &Path) -> ImportResult<Vec<Machine>> {
    let rows = load_records(path, |row_no, row| MachineFieldMapper.map_row(row_no, row))?;
    let machines = check_records(rows, |m| m.id.as_str(), Machine::validate)?;
    tracing::info!(path = %path.display(), count = machines.len(), "设备导入完成");
    Ok(machines)
}

/// 导入维修工单表
pub fn import_work_orders(path: &Path) -> ImportResult<Vec<MaintenanceRecord>> {
    let rows = load_records(path, |row_no, row| WorkOrderFieldMapper.map_row(row_no, row))?;
    let records = check_records(rows, |r| r.id.as_str(), MaintenanceRecord::validate)?;
    tracing::info!(path = %path.display(), count = records.len(), "工单导入完成");
    Ok(records)
}

/// JSON 直接反序列化；表格文件逐行映射。结果带 1 起始的数据行号
fn load_records<T, F>(path: &Path, map_row: F) -> ImportResult<Vec<(usize, T)>>
where
    T: DeserializeOwned,
    F: Fn(usize, &RawRow) -> ImportResult<T>,
{
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<T> = serde_json::from_str(&raw)
            .map_err(|e| ImportError::JsonParseError(e.to_string()))?;
        return Ok(records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| (idx + 1, record))
            .collect());
    }

    UniversalFileParser
        .parse(path)?
        .iter()
        .map(|(row_no, row)| map_row(*row_no, row).map(|record| (*row_no, record)))
        .collect()
}

/// 主键去重 + 记录校验；错误沿用源文件的数据行号
fn check_records<T>(
    rows: Vec<(usize, T)>,
    id_of: impl Fn(&T) -> &str,
    validate: impl Fn(&T) -> DomainResult<()>,
) -> ImportResult<Vec<T>> {
    let mut seen = HashSet::new();
    for (row, record) in &rows {
        let row = *row;
        let id = id_of(record);
        if !seen.insert(id) {
            tracing::warn!(row, id, "主键重复");
            return Err(ImportError::DuplicateId {
                row,
                id: id.to_string(),
            });
        }
        validate(record).map_err(|source| ImportError::Validation { row, source })?;
    }
    Ok(rows.into_iter().map(|(_, record)| record).collect())
}
