//! SQL Flavor（方言）：控制标识符 Quote 与占位符风格。

use crate::dialect::Dialect;
use std::fmt;

/// 生成代码时可能面对的 SQL 方言；没有全局默认值，渲染时由调用方显式传入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    ClickHouse,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::ClickHouse => "ClickHouse",
        };
        f.write_str(s)
    }
}

impl Flavor {
    /// 为标识符加引号。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL | Self::ClickHouse => format!("`{name}`"),
            Self::PostgreSQL | Self::SQLServer | Self::SQLite => format!("\"{name}\""),
        }
    }

    /// 该方言使用的占位符风格。
    pub fn dialect(self) -> Dialect {
        match self {
            Self::PostgreSQL => Dialect::DollarNumbered,
            Self::SQLServer => Dialect::AtNumbered,
            Self::MySQL | Self::SQLite | Self::ClickHouse => Dialect::QuestionMark,
        }
    }
}
