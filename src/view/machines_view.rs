// ==========================================
// 生产运营驾驶舱 - 产线总览页
// ==========================================
// 状态: 搜索词 + 选中产线
// 产线卡片始终基于全部设备；设备明细基于搜索结果
// ==========================================

use crate::config::OeeThresholds;
use crate::domain::types::OeeBand;
use crate::engine::{aggregate_by_line, classify_oee, filter_machines, group_by_line};
use crate::engine::{LineAggregate, LineGroup};
use crate::store::PlantSnapshot;
use serde::Serialize;

/// 产线卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineCard {
    #[serde(flatten)]
    pub aggregate: LineAggregate,
    pub band: OeeBand,
    pub selected: bool,
}

/// 产线总览页数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachinesPage {
    pub search_term: String,
    pub selected_line: Option<String>,
    pub line_cards: Vec<LineCard>,
    pub groups: Vec<LineGroup>,
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachinesView {
    search_term: String,
    selected_line: Option<String>,
}

impl MachinesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_line(&self) -> Option<&str> {
        self.selected_line.as_deref()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// 点击产线卡片：未选中则选中，已选中则取消
    pub fn toggle_line(&mut self, line: &str) {
        if self.selected_line.as_deref() == Some(line) {
            self.selected_line = None;
        } else {
            self.selected_line = Some(line.to_string());
        }
    }

    pub fn render(&self, snapshot: &PlantSnapshot, thresholds: &OeeThresholds) -> MachinesPage {
        let line_cards = aggregate_by_line(&snapshot.machines)
            .into_iter()
            .map(|aggregate| LineCard {
                band: classify_oee(aggregate.avg_oee, thresholds),
                selected: self.selected_line.as_deref() == Some(aggregate.line.as_str()),
                aggregate,
            })
            .collect();

        let matched = filter_machines(&snapshot.machines, &self.search_term);

        MachinesPage {
            search_term: self.search_term.clone(),
            selected_line: self.selected_line.clone(),
            line_cards,
            matched: matched.len(),
            total: snapshot.machines.len(),
            groups: group_by_line(matched),
        }
    }
}
