use std::sync::OnceLock;
use std::time::Instant;

static PERF_ENABLED: OnceLock<bool> = OnceLock::new();

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 性能日志开关
///
/// - Debug 默认开启；Release 默认关闭
/// - `PLANT_OPS_PERF=1` 强制开启，`PLANT_OPS_PERF=0` 强制关闭
pub fn perf_enabled() -> bool {
    *PERF_ENABLED.get_or_init(|| match std::env::var("PLANT_OPS_PERF") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    })
}

/// 性能统计 Guard：drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = plant_ops_dashboard::perf::PerfGuard::new("line_overview");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
