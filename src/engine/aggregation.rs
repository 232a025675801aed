// ==========================================
// 生产运营驾驶舱 - 聚合引擎
// ==========================================
// 职责: 按产线分组、计算产线平均 OEE 与状态计数
// 输入: 设备列表 (任意顺序)
// 输出: 按产线首次出现顺序排列的聚合结果
// 红线: 纯函数，无缓存，无副作用
// ==========================================

use crate::domain::machine::Machine;
use crate::domain::types::MachineStatus;
use crate::engine::round_one_decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 输出类型
// ==========================================

/// 产线聚合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAggregate {
    pub line: String,
    pub avg_oee: f64, // 一位小数
    pub running: usize,
    pub idle: usize,
    pub maintenance: usize,
    pub total: usize,
}

/// 产线分组（保留原始设备顺序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGroup {
    pub line: String,
    pub machines: Vec<Machine>,
}

/// 全厂设备状态计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub running: usize,
    pub idle: usize,
    pub maintenance: usize,
    pub total: usize,
}

impl StatusCounts {
    fn record(&mut self, status: MachineStatus) {
        match status {
            MachineStatus::Running => self.running += 1,
            MachineStatus::Idle => self.idle += 1,
            MachineStatus::Maintenance => self.maintenance += 1,
        }
        self.total += 1;
    }

    pub fn get(&self, status: MachineStatus) -> usize {
        match status {
            MachineStatus::Running => self.running,
            MachineStatus::Idle => self.idle,
            MachineStatus::Maintenance => self.maintenance,
        }
    }
}

// ==========================================
// 分组
// ==========================================

/// 按产线稳定分组
///
/// 分组顺序为产线在输入中首次出现的顺序，不做字母排序
pub fn group_by_line<'a, I>(machines: I) -> Vec<LineGroup>
where
    I: IntoIterator<Item = &'a Machine>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<LineGroup> = Vec::new();

    for machine in machines {
        let slot = *index.entry(machine.line.as_str()).or_insert_with(|| {
            groups.push(LineGroup {
                line: machine.line.clone(),
                machines: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].machines.push(machine.clone());
    }

    groups
}

// ==========================================
// 聚合
// ==========================================

/// 按产线聚合
///
/// avg_oee = round_half_up(sum / count × 10) / 10
///
/// # 返回
/// 每条产线一条聚合；空输入返回空列表
pub fn aggregate_by_line<'a, I>(machines: I) -> Vec<LineAggregate>
where
    I: IntoIterator<Item = &'a Machine>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut acc: Vec<(&'a str, f64, StatusCounts)> = Vec::new();

    for machine in machines {
        let slot = *index.entry(machine.line.as_str()).or_insert_with(|| {
            acc.push((machine.line.as_str(), 0.0, StatusCounts::default()));
            acc.len() - 1
        });
        let entry = &mut acc[slot];
        entry.1 += machine.oee;
        entry.2.record(machine.status);
    }

    acc.into_iter()
        .map(|(line, oee_sum, counts)| LineAggregate {
            line: line.to_string(),
            avg_oee: mean_one_decimal(oee_sum, counts.total),
            running: counts.running,
            idle: counts.idle,
            maintenance: counts.maintenance,
            total: counts.total,
        })
        .collect()
}

/// 全厂状态计数
pub fn count_by_status<'a, I>(machines: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a Machine>,
{
    let mut counts = StatusCounts::default();
    for machine in machines {
        counts.record(machine.status);
    }
    counts
}

/// 平均 OEE（一位小数）；空输入为 0.0
pub fn average_oee<'a, I>(machines: I) -> f64
where
    I: IntoIterator<Item = &'a Machine>,
{
    let (sum, count) = machines
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), m| (sum + m.oee, count + 1));
    mean_one_decimal(sum, count)
}

/// 按产线筛选；None 表示全部产线
pub fn machines_on_line<'a>(machines: &'a [Machine], line: Option<&str>) -> Vec<&'a Machine> {
    match line {
        None => machines.iter().collect(),
        Some(line) => machines.iter().filter(|m| m.line == line).collect(),
    }
}

fn mean_one_decimal(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_one_decimal(sum / count as f64)
}
