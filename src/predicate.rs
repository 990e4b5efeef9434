//! 谓词适配：`to_map` 的结果直接包装为 [`Eq`] / [`Gt`]。

use crate::cond::{Eq, Gt};
use crate::mapping::to_map;
use crate::shape::{IntrospectError, Reflect};

/// 由 record 的非零 tag 字段构造等值条件。
pub fn new_eq(input: &impl Reflect) -> Result<Eq, IntrospectError> {
    to_map(input).map(Eq)
}

/// 由 record 的非零 tag 字段构造大于条件。
pub fn new_gt(input: &impl Reflect) -> Result<Gt, IntrospectError> {
    to_map(input).map(Gt)
}
