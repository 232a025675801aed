// ==========================================
// 生产运营驾驶舱 - 命令行入口
// ==========================================
// 用法: plant-ops-dashboard [搜索词]
// 输出: 看板报告（JSON）
// ==========================================

use anyhow::Context;
use plant_ops_dashboard::config::DashboardConfig;
use plant_ops_dashboard::{i18n, logging, DashboardApi};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", plant_ops_dashboard::APP_NAME, plant_ops_dashboard::VERSION);
    tracing::info!("==================================================");

    let config = DashboardConfig::load().context("加载配置失败")?;
    i18n::set_locale(&config.locale);

    let query = std::env::args().nth(1).unwrap_or_default();
    let today = chrono::Local::now().date_naive();

    let api = DashboardApi::from_config(config);
    let report = api
        .build_report(&query, today)
        .context("生成看板报告失败")?;

    tracing::info!(
        "{}",
        i18n::t_with_args("report.generated", &[("id", &report.report_id)])
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
