// ==========================================
// 生产运营驾驶舱 - 领域校验错误
// ==========================================

use thiserror::Error;

/// 记录校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("字段不能为空: {entity}.{field}")]
    EmptyField { entity: &'static str, field: &'static str },

    #[error("数值超出范围: {entity}(id={id}).{field}={value}，允许范围 [{min}, {max}]")]
    OutOfRange {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("时间顺序错误: 工单 {id} 的解决时间 {resolved} 早于报修时间 {reported}")]
    ResolvedBeforeReported {
        id: String,
        reported: String,
        resolved: String,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;

/// 校验分数位于 [0, 100]
pub(crate) fn check_score(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: f64,
) -> DomainResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::OutOfRange {
            entity,
            id: id.to_string(),
            field,
            value,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(())
}
