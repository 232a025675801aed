// ==========================================
// 生产运营驾驶舱 - 界面选择器枚举
// ==========================================
// 职责: 角色/时间范围/图表粒度/标签页等单选项
// 红线: 均为封闭枚举，取值只能是枚举之一
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 角色 (Role)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Supervisor,
    Maintenance,
    Quality,
    #[default]
    All,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::Supervisor,
        Role::Maintenance,
        Role::Quality,
        Role::All,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Some(Role::Owner),
            "supervisor" => Some(Role::Supervisor),
            "maintenance" => Some(Role::Maintenance),
            "quality" => Some(Role::Quality),
            "all" => Some(Role::All),
            _ => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Owner => "role.owner",
            Role::Supervisor => "role.supervisor",
            Role::Maintenance => "role.maintenance",
            Role::Quality => "role.quality",
            Role::All => "role.all",
        }
    }
}

/// 角色视图（标题/说明/关注指标）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleView {
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: [&'static str; 4],
}

/// 角色 → 视图；All 不限定视图，返回 None
pub fn role_view(role: Role) -> Option<RoleView> {
    let view = match role {
        Role::Owner => RoleView {
            title: "Executive Overview",
            description: "Key metrics and financial performance",
            metrics: ["oee", "revenue", "costs", "profit"],
        },
        Role::Supervisor => RoleView {
            title: "Production Floor",
            description: "Real-time production monitoring",
            metrics: ["oee", "production", "downtime", "efficiency"],
        },
        Role::Maintenance => RoleView {
            title: "Maintenance",
            description: "Equipment status and maintenance",
            metrics: ["downtime", "maintenance", "mtbf", "mttr"],
        },
        Role::Quality => RoleView {
            title: "Quality Control",
            description: "Quality metrics and defects",
            metrics: ["quality", "rejection", "defects", "inspection"],
        },
        Role::All => return None,
    };
    Some(view)
}

// ==========================================
// 时间范围 (Time Range)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Day => write!(f, "day"),
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Quarter => write!(f, "quarter"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

// ==========================================
// 图表粒度 (Chart Granularity)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartGranularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl ChartGranularity {
    /// 图表 x 轴字段名
    pub fn x_axis_key(&self) -> &'static str {
        match self {
            ChartGranularity::Daily => "date",
            ChartGranularity::Weekly => "week",
            ChartGranularity::Monthly => "month",
            ChartGranularity::Quarterly => "quarter",
            ChartGranularity::Yearly => "year",
        }
    }
}

// ==========================================
// 维修页标签 / 驾驶舱模式
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceTab {
    #[default]
    Overview,
    History,
    Schedule,
    Analytics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardMode {
    #[default]
    Dashboard,
    MachineList,
}
