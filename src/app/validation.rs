//! 字段级校验结果
//!
//! 规则以 `validator` 的 derive 声明在各表单结构上，这里把
//! `ValidationErrors` 展开成按字段声明顺序排列的列表，供表单页回显。

use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// 表单中的字段名
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// `order` 为 (结构体字段名, 表单字段名) 列表
pub fn field_errors(
    result: Result<(), ValidationErrors>,
    order: &[(&'static str, &'static str)],
) -> Vec<FieldError> {
    let Err(errors) = result else {
        return Vec::new();
    };
    let by_field = errors.field_errors();

    let mut out = Vec::new();
    for (field, param) in order {
        let Some(list) = by_field.get(*field) else {
            continue;
        };
        for error in list.iter() {
            let message = error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", param));
            out.push(FieldError::new(*param, message));
        }
    }
    out
}

/// 表单提交的结果：保存成功，或带着错误回显的表单页
#[derive(Debug)]
pub enum FormOutcome<T, P> {
    Saved(T),
    Invalid(P),
}
