//! Args：渲染谓词时收集参数，并按 flavor 输出占位符。

use crate::flavor::Flavor;
use crate::value::SqlValue;

/// Args 存储 SQL 相关参数。
#[derive(Debug, Clone)]
pub struct Args {
    /// 决定占位符风格。
    pub flavor: Flavor,
    pub(crate) values: Vec<SqlValue>,
}

impl Default for Args {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl Args {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            values: Vec::new(),
        }
    }

    /// Add：追加一个参数，把它的占位符写入 `buf`。
    pub fn add(&mut self, value: impl Into<SqlValue>, buf: &mut String) {
        self.values.push(value.into());
        self.flavor
            .dialect()
            .write_placeholder(self.values.len(), buf);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}
