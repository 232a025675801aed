// ==========================================
// 生产运营驾驶舱 - 看板时钟
// ==========================================
// 职责: 按固定间隔发布当前本地时间
// 生命周期: start 启动后台任务；stop 或 drop 时终止
// ==========================================

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// 时钟（需在 tokio 运行时内启动）
pub struct ClockTicker {
    receiver: watch::Receiver<DateTime<Local>>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// 启动时钟；tick_ms 为 0 时按 1ms 处理
    pub fn start(tick_ms: u64) -> Self {
        let (sender, receiver) = watch::channel(Local::now());
        let period = Duration::from_millis(tick_ms.max(1));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // 第一次 tick 立即返回
            interval.tick().await;
            loop {
                interval.tick().await;
                if sender.send(Local::now()).is_err() {
                    tracing::debug!("时钟订阅者已全部关闭，停止");
                    break;
                }
            }
        });

        tracing::debug!(tick_ms, "看板时钟已启动");
        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// 最近一次发布的时间
    pub fn now(&self) -> DateTime<Local> {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DateTime<Local>> {
        self.receiver.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("看板时钟已停止");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
