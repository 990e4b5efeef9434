//! Cond：最小化的 WHERE 条件表达式（等值 / 大于 / AND 组合）。
//!
//! `Eq` / `Gt` 直接包装 [`ColumnMap`]；渲染时按列名排序，保证输出稳定。

use crate::args::Args;
use crate::flavor::Flavor;
use crate::mapping::ColumnMap;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use dyn_clone::DynClone;
use std::fmt;

/// 可写入 SQL 的条件。
pub trait Cond: DynClone + fmt::Debug {
    /// 把条件写入 `buf`，参数追加到 `args`。
    fn write_to(&self, buf: &mut String, args: &mut Args);

    /// 空条件不产生任何 SQL。
    fn is_valid(&self) -> bool;
}

dyn_clone::clone_trait_object!(Cond);

/// 等值条件：`k1 = ? AND k2 = ?`；`Null` 渲染为 `k IS NULL`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eq(pub ColumnMap);

/// 大于条件：`k1 > ? AND k2 > ?`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gt(pub ColumnMap);

/// AND 组合。
#[derive(Debug, Clone, Default)]
pub struct And(pub Vec<Box<dyn Cond>>);

fn sorted(map: &ColumnMap) -> Vec<(&String, &SqlValue)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

fn write_compare(
    map: &ColumnMap,
    op: &str,
    null_as_is: bool,
    buf: &mut String,
    args: &mut Args,
) {
    for (i, (k, v)) in sorted(map).into_iter().enumerate() {
        if i > 0 {
            buf.push_str(" AND ");
        }
        buf.push_str(k);
        if null_as_is && v.is_null() {
            buf.push_str(" IS NULL");
            continue;
        }
        buf.push(' ');
        buf.push_str(op);
        buf.push(' ');
        args.add(v.clone(), buf);
    }
}

impl Cond for Eq {
    fn write_to(&self, buf: &mut String, args: &mut Args) {
        write_compare(&self.0, "=", true, buf, args);
    }

    fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Cond for Gt {
    fn write_to(&self, buf: &mut String, args: &mut Args) {
        write_compare(&self.0, ">", false, buf, args);
    }

    fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Cond for And {
    fn write_to(&self, buf: &mut String, args: &mut Args) {
        let valid: Vec<&dyn Cond> = self
            .0
            .iter()
            .map(|c| &**c)
            .filter(|c| c.is_valid())
            .collect();
        let wrap = valid.len() > 1;
        for (i, c) in valid.into_iter().enumerate() {
            if i > 0 {
                buf.push_str(" AND ");
            }
            if wrap {
                buf.push('(');
            }
            c.write_to(buf, args);
            if wrap {
                buf.push(')');
            }
        }
    }

    fn is_valid(&self) -> bool {
        self.0.iter().any(|c| c.is_valid())
    }
}

/// 组合多个条件。
pub fn and(conds: impl IntoIterator<Item = Box<dyn Cond>>) -> And {
    And(conds.into_iter().collect())
}

/// 用指定 flavor 渲染条件；无效条件返回空 SQL。
pub fn build_cond_with_flavor(cond: &dyn Cond, flavor: Flavor) -> (String, Vec<SqlValue>) {
    let mut args = Args::new(flavor);
    if !cond.is_valid() {
        return (String::new(), args.into_values());
    }

    let mut sb = StringBuilder::new();
    cond.write_to(sb.buf_mut(), &mut args);
    (sb.into_string(), args.into_values())
}
