// ==========================================
// 生产运营驾驶舱 - 设备领域模型
// ==========================================
// 职责: 设备实体及 OEE 分项
// 生命周期: 由快照构造，进程内不可变
// ==========================================

use crate::domain::error::{check_score, DomainError, DomainResult};
use crate::domain::types::MachineStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// OeeBreakdown - OEE 分项
// ==========================================
// 三项均为百分比 [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeBreakdown {
    pub availability: f64, // 可用率
    pub performance: f64,  // 性能率
    pub quality: f64,      // 良品率
}

impl OeeBreakdown {
    pub fn new(availability: f64, performance: f64, quality: f64) -> Self {
        Self {
            availability,
            performance,
            quality,
        }
    }

    /// 由分项推算的综合 OEE（百分比）
    ///
    /// OEE = A × P × Q，三项均为百分比，故除以 100²
    pub fn composite(&self) -> f64 {
        self.availability * self.performance * self.quality / 10_000.0
    }
}

// ==========================================
// Machine - 设备
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    // ===== 标识 =====
    pub id: String,   // 设备编号 (唯一)
    pub name: String, // 显示名称

    // ===== 状态与指标 =====
    pub status: MachineStatus,
    pub oee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<OeeBreakdown>,

    // ===== 分组 =====
    pub line: String, // 产线 (分组键)

    // ===== 附加计数 =====
    #[serde(default)]
    pub alerts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<NaiveDate>,
}

impl Machine {
    /// 创建设备（仅必填字段）
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: MachineStatus,
        oee: f64,
        line: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            oee,
            breakdown: None,
            line: line.into(),
            alerts: 0,
            uptime: None,
            last_maintenance: None,
        }
    }

    pub fn with_breakdown(mut self, breakdown: OeeBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    pub fn with_alerts(mut self, alerts: u32) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn with_uptime(mut self, uptime: impl Into<String>) -> Self {
        self.uptime = Some(uptime.into());
        self
    }

    pub fn with_last_maintenance(mut self, date: NaiveDate) -> Self {
        self.last_maintenance = Some(date);
        self
    }

    /// 校验设备记录
    ///
    /// - id / line 非空
    /// - oee 与分项均在 [0, 100]
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "Machine",
                field: "id",
            });
        }
        if self.line.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "Machine",
                field: "line",
            });
        }

        check_score("Machine", &self.id, "oee", self.oee)?;
        if let Some(b) = &self.breakdown {
            check_score("Machine", &self.id, "availability", b.availability)?;
            check_score("Machine", &self.id, "performance", b.performance)?;
            check_score("Machine", &self.id, "quality", b.quality)?;
        }
        Ok(())
    }
}
