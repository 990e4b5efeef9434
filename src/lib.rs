//! halo-builderx：把带 `db` tag 的 struct 转换为 SQL builder 所需的列映射与列名列表。

pub mod args;
pub mod cond;
#[cfg(test)]
mod cond_tests;
pub mod dialect;
pub mod flavor;
pub mod join;
pub mod mapping;
#[cfg(test)]
mod mapping_tests;
pub mod names;
pub mod predicate;
pub mod record;
pub mod shape;
mod string_builder;
pub mod value;

pub use crate::args::Args;
pub use crate::cond::{And, Cond, Eq, Gt, and, build_cond_with_flavor};
pub use crate::dialect::Dialect;
pub use crate::flavor::Flavor;
pub use crate::join::postgresql_join;
pub use crate::mapping::{ColumnMap, to_map};
#[allow(deprecated)]
pub use crate::names::field_names;
pub use crate::names::{DEFAULT_MAX_DEPTH, NameOptions, raw_field_names, raw_field_names_with};
pub use crate::predicate::{new_eq, new_gt};
pub use crate::record::{FieldMeta, FieldValue, IsZero, Record, RecordMeta, RecordType};
pub use crate::shape::{IntrospectError, Reflect, Shape};
pub use crate::value::SqlValue;

/// 推荐的便捷命名空间：允许 `use halo_space::builderx::{...}` 形式导入。
pub mod builderx {
    pub use crate::*;
}
