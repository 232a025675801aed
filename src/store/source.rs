// ==========================================
// 生产运营驾驶舱 - 数据来源
// ==========================================
// 职责: 为视图层提供快照；视图层只依赖 RecordSource trait
// 实现:
// - StaticRecordSource: 内存快照（样例数据/测试）
// - FileRecordSource: 设备/工单从文件导入，其余取基线快照
// ==========================================

use crate::config::DataSourceConfig;
use crate::importer::{self, ImportError};
use crate::store::fixtures;
use crate::store::snapshot::PlantSnapshot;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("数据导入失败 ({path}): {source}")]
    Import {
        path: String,
        #[source]
        source: ImportError,
    },

    #[error("数据来源不可用: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ==========================================
// Trait: RecordSource
// ==========================================
pub trait RecordSource: Send + Sync {
    /// 加载当前快照
    fn load_snapshot(&self) -> StoreResult<PlantSnapshot>;

    /// 来源描述（日志用）
    fn describe(&self) -> String;
}

// ==========================================
// StaticRecordSource
// ==========================================
pub struct StaticRecordSource {
    snapshot: PlantSnapshot,
}

impl StaticRecordSource {
    pub fn new(snapshot: PlantSnapshot) -> Self {
        Self { snapshot }
    }

    /// 内置样例数据
    pub fn seeded() -> Self {
        Self::new(fixtures::seed_snapshot())
    }
}

impl RecordSource for StaticRecordSource {
    fn load_snapshot(&self) -> StoreResult<PlantSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("static({} machines)", self.snapshot.machines.len())
    }
}

// ==========================================
// FileRecordSource
// ==========================================
// 每次加载都重新读取文件，不做缓存
pub struct FileRecordSource {
    machines_path: Option<PathBuf>,
    work_orders_path: Option<PathBuf>,
    baseline: PlantSnapshot,
}

impl FileRecordSource {
    pub fn new(config: &DataSourceConfig, baseline: PlantSnapshot) -> Self {
        Self {
            machines_path: config.machines_path.clone(),
            work_orders_path: config.work_orders_path.clone(),
            baseline,
        }
    }
}

impl RecordSource for FileRecordSource {
    fn load_snapshot(&self) -> StoreResult<PlantSnapshot> {
        let mut snapshot = self.baseline.clone();

        if let Some(path) = &self.machines_path {
            snapshot.machines = importer::import_machines(path).map_err(|source| {
                StoreError::Import {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        }

        if let Some(path) = &self.work_orders_path {
            snapshot.work_orders = importer::import_work_orders(path).map_err(|source| {
                StoreError::Import {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        }

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        let show = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        format!(
            "file(machines={}, work_orders={})",
            show(&self.machines_path),
            show(&self.work_orders_path)
        )
    }
}

/// 按配置选择数据来源
pub fn source_from_config(config: &DataSourceConfig) -> Box<dyn RecordSource> {
    if config.is_configured() {
        Box::new(FileRecordSource::new(config, fixtures::seed_snapshot()))
    } else {
        Box::new(StaticRecordSource::seeded())
    }
}
