// ==========================================
// 生产运营驾驶舱 - 字段映射
// ==========================================
// 职责: 原始行 → 领域记录
// 设备表头: id,name,status,oee,availability,performance,quality,line,
//           last_maintenance,uptime,alerts
// 工单表头: id,machine,issue,status,priority,reported,resolved,
//           technician,cost,parts (parts 以 ';' 分隔)
// ==========================================

use crate::domain::machine::{Machine, OeeBreakdown};
use crate::domain::maintenance::MaintenanceRecord;
use crate::domain::types::{MachineStatus, Priority, WorkOrderStatus};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

// ==========================================
// 单元格读取辅助
// ==========================================
struct RowReader<'a> {
    row_no: usize,
    row: &'a RawRow,
}

impl<'a> RowReader<'a> {
    fn optional(&self, field: &str) -> Option<&'a str> {
        self.row
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, field: &str) -> ImportResult<&'a str> {
        self.optional(field).ok_or_else(|| ImportError::MissingField {
            row: self.row_no,
            field: field.to_string(),
        })
    }

    fn parse_value<T>(&self, field: &str, raw: &str) -> ImportResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.parse::<T>().map_err(|e| ImportError::TypeConversionError {
            row: self.row_no,
            field: field.to_string(),
            message: format!("{} ({})", e, raw),
        })
    }

    fn required_number<T>(&self, field: &str) -> ImportResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required(field)?;
        self.parse_value(field, raw)
    }

    fn optional_number<T>(&self, field: &str) -> ImportResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(field)
            .map(|raw| self.parse_value(field, raw))
            .transpose()
    }

    fn optional_date(&self, field: &str) -> ImportResult<Option<NaiveDate>> {
        self.optional(field)
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
                    ImportError::TypeConversionError {
                        row: self.row_no,
                        field: field.to_string(),
                        message: format!("{} ({})，期望 YYYY-MM-DD", e, raw),
                    }
                })
            })
            .transpose()
    }

    fn optional_datetime(&self, field: &str) -> ImportResult<Option<NaiveDateTime>> {
        let Some(raw) = self.optional(field) else {
            return Ok(None);
        };
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| ImportError::TypeConversionError {
                row: self.row_no,
                field: field.to_string(),
                message: format!("无法解析时间 ({})，期望 YYYY-MM-DDTHH:MM:SS", raw),
            })
    }

    fn enum_value<T>(&self, field: &str, parse: fn(&str) -> Option<T>) -> ImportResult<T> {
        let raw = self.required(field)?;
        parse(raw).ok_or_else(|| ImportError::InvalidEnumValue {
            row: self.row_no,
            field: field.to_string(),
            value: raw.to_string(),
        })
    }
}

// ==========================================
// MachineFieldMapper
// ==========================================
pub struct MachineFieldMapper;

impl MachineFieldMapper {
    /// 映射一行设备数据
    ///
    /// 分项 (availability/performance/quality) 需三项齐全才生效；
    /// 只填部分分项视为缺失字段
    pub fn map_row(&self, row_no: usize, row: &RawRow) -> ImportResult<Machine> {
        let r = RowReader { row_no, row };

        let status = r.enum_value("status", MachineStatus::parse)?;
        let mut machine = Machine::new(
            r.required("id")?,
            r.required("name")?,
            status,
            r.required_number::<f64>("oee")?,
            r.required("line")?,
        );

        let parts = [
            ("availability", r.optional_number::<f64>("availability")?),
            ("performance", r.optional_number::<f64>("performance")?),
            ("quality", r.optional_number::<f64>("quality")?),
        ];
        match parts {
            [(_, Some(a)), (_, Some(p)), (_, Some(q))] => {
                machine.breakdown = Some(OeeBreakdown::new(a, p, q));
            }
            [(_, None), (_, None), (_, None)] => {}
            _ => {
                let missing = parts
                    .iter()
                    .find(|(_, v)| v.is_none())
                    .map(|(k, _)| *k)
                    .unwrap_or("availability");
                return Err(ImportError::MissingField {
                    row: row_no,
                    field: missing.to_string(),
                });
            }
        }

        machine.alerts = r.optional_number::<u32>("alerts")?.unwrap_or(0);
        machine.uptime = r.optional("uptime").map(str::to_string);
        machine.last_maintenance = r.optional_date("last_maintenance")?;

        Ok(machine)
    }
}

// ==========================================
// WorkOrderFieldMapper
// ==========================================
pub struct WorkOrderFieldMapper;

impl WorkOrderFieldMapper {
    pub fn map_row(&self, row_no: usize, row: &RawRow) -> ImportResult<MaintenanceRecord> {
        let r = RowReader { row_no, row };

        let reported = r
            .optional_datetime("reported")?
            .ok_or_else(|| ImportError::MissingField {
                row: row_no,
                field: "reported".to_string(),
            })?;

        let parts = r
            .optional("parts")
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(MaintenanceRecord {
            id: r.required("id")?.to_string(),
            machine: r.required("machine")?.to_string(),
            issue: r.optional("issue").unwrap_or_default().to_string(),
            status: r.enum_value("status", WorkOrderStatus::parse)?,
            priority: r.enum_value("priority", Priority::parse)?,
            reported,
            resolved: r.optional_datetime("resolved")?,
            technician: r.optional("technician").map(str::to_string),
            cost: r.optional_number::<f64>("cost")?.unwrap_or(0.0),
            parts,
        })
    }
}
