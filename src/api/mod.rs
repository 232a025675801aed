// ==========================================
// 生产运营驾驶舱 - API 层
// ==========================================
// 职责: 对外统一入口，错误统一为 ApiError
// ==========================================

pub mod dashboard_api;
pub mod error;

pub use dashboard_api::{DashboardApi, DashboardReport};
pub use error::{ApiError, ApiResult};
