// ==========================================
// 生产运营驾驶舱 - 搜索过滤引擎
// ==========================================
// 规则: 查询词小写后，作为子串匹配 id / name / status / line 任一字段
// 空查询直接返回全部设备（保持原顺序）
// ==========================================

use crate::domain::machine::Machine;

/// 按关键字过滤设备
///
/// # 参数
/// - `machines`: 设备列表
/// - `query`: 搜索词（大小写不敏感，纯子串匹配）
///
/// # 返回
/// 命中的设备引用，保持输入顺序
pub fn filter_machines<'a>(machines: &'a [Machine], query: &str) -> Vec<&'a Machine> {
    if query.is_empty() {
        return machines.iter().collect();
    }

    let needle = query.to_lowercase();
    machines
        .iter()
        .filter(|m| machine_matches(m, &needle))
        .collect()
}

/// `needle` 需已转为小写
fn machine_matches(machine: &Machine, needle: &str) -> bool {
    [
        machine.id.as_str(),
        machine.name.as_str(),
        machine.status.as_str(),
        machine.line.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
