//! ToMap：把 record 转为“列名 → 值”的映射，用于等值/比较谓词。

use crate::record::FieldValue;
use crate::shape::{IntrospectError, Reflect, resolve};
use crate::value::SqlValue;
use std::collections::HashMap;

/// 列 tag 到当前值的映射；无序。
pub type ColumnMap = HashMap<String, SqlValue>;

/// 把 record（或对 record 的一层引用）转换为 [`ColumnMap`]。
///
/// - 只收录声明了列 tag 的字段；嵌入 struct 不带 tag，因此不会展开。
/// - 当前值等于该字段类型零值的字段视为“未设置”，直接跳过。
pub fn to_map(input: &impl Reflect) -> Result<ColumnMap, IntrospectError> {
    let record = resolve(input, "ToMap")?;
    let meta = record.meta();

    let mut out = ColumnMap::new();
    for (fm, fv) in meta.fields.iter().zip(record.values()) {
        if !fm.has_tag() {
            continue;
        }
        if let FieldValue::Column { value, zero: false } = fv {
            out.insert(fm.tag.to_string(), value);
        }
    }

    tracing::trace!(record = meta.name, columns = out.len(), "built column map");
    Ok(out)
}
