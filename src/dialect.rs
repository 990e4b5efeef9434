//! SQL 占位符方言支持。

/// SQL 占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// 使用 `?` 作为占位符（常见于 MySQL/SQLite）。
    QuestionMark,
    /// 使用 `$1, $2, ...` 作为占位符（常见于 PostgreSQL）。
    DollarNumbered,
    /// 使用 `@p1, @p2, ...` 作为占位符（SQL Server）。
    AtNumbered,
}

impl Dialect {
    pub(crate) fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::QuestionMark => out.push('?'),
            Self::DollarNumbered => {
                out.push('$');
                out.push_str(&index_1_based.to_string());
            }
            Self::AtNumbered => {
                out.push_str("@p");
                out.push_str(&index_1_based.to_string());
            }
        }
    }
}
