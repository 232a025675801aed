// ==========================================
// 生产运营驾驶舱 - 文件解析器
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 以表头为 key 的原始行，附带数据行号（表头之后从 1 计，含空白行）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Days, NaiveDate, NaiveTime};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行（表头 → 单元格文本）
pub type RawRow = HashMap<String, String>;

/// (数据行号, 原始行)
pub type NumberedRow = (usize, RawRow);

// ==========================================
// Trait: FileParser
// ==========================================
pub trait FileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<NumberedRow>>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// 表头 + 单元格 → RawRow；整行空白返回 None
fn build_row<I>(headers: &[String], cells: I) -> Option<RawRow>
where
    I: IntoIterator<Item = String>,
{
    let mut row_map = HashMap::new();
    for (col_idx, value) in cells.into_iter().enumerate() {
        if let Some(header) = headers.get(col_idx) {
            row_map.insert(header.clone(), value.trim().to_string());
        }
    }

    if row_map.values().all(|v| v.is_empty()) {
        return None;
    }
    Some(row_map)
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<NumberedRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            if let Some(row) = build_row(&headers, record.iter().map(str::to_string)) {
                records.push((idx + 1, row));
            }
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 只读取第一个工作表，第一行为表头
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<NumberedRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_lowercase())
            .collect();

        let records = rows
            .enumerate()
            .filter_map(|(idx, data_row)| {
                build_row(&headers, data_row.iter().map(cell_text)).map(|row| (idx + 1, row))
            })
            .collect();

        Ok(records)
    }
}

/// 单元格文本；日期单元格转成 `%Y-%m-%d`（带时间则 `%Y-%m-%dT%H:%M:%S`）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => format_excel_serial(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Excel 日期序列号（1900 日期系统）→ 文本；超出范围时原样输出
fn format_excel_serial(serial: f64) -> String {
    let mut days = serial.floor();
    let mut secs = ((serial - days) * 86_400.0).round() as u32;
    if secs >= 86_400 {
        days += 1.0;
        secs = 0;
    }

    let date = NaiveDate::from_ymd_opt(1899, 12, 30)
        .filter(|_| days >= 0.0 && days.is_finite())
        .and_then(|base| base.checked_add_days(Days::new(days as u64)));
    let Some(date) = date else {
        return serial.to_string();
    };

    match NaiveTime::from_num_seconds_from_midnight_opt(secs, 0) {
        Some(time) if secs > 0 => date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<NumberedRow>> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
