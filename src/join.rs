//! PostgreSQL UPDATE 的 SET 子句拼接。

use crate::dialect::Dialect;
use crate::string_builder::StringBuilder;

/// 把列名渲染为 `col = $2, col2 = $3, ...`。
///
/// 占位符从 `$2` 开始，`$1` 留给调用方追加的主键 WHERE 条件。
/// 空输入返回空字符串。
pub fn postgresql_join(elems: &[impl AsRef<str>]) -> String {
    let mut b = StringBuilder::new();
    for (index, e) in elems.iter().enumerate() {
        b.write_str(e.as_ref());
        b.write_str(" = ");
        Dialect::DollarNumbered.write_placeholder(index + 2, b.buf_mut());
        b.write_str(", ");
    }

    if b.is_empty() {
        return b.into_string();
    }

    b.truncate_tail(2);
    b.into_string()
}
