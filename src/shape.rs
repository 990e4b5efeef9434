//! Shape：入参的“形态”判定，替代运行时反射的 `Kind` 检查。
//!
//! 所有入口都只接受 record（由 `db_record!` 注册的 struct），
//! 或者对 record 的一层引用（`&T` / `&mut T` / `Box<T>`）。
//! 其余形态一律返回 [`IntrospectError::Shape`]。

use crate::record::Record;

/// 入参的运行时形态。
pub enum Shape<'a> {
    /// 已注册字段元数据的 struct。
    Record(&'a dyn Record),
    /// 一层引用，指向的值需要再次判定。
    Indirect(&'a dyn Reflect),
    /// 其他类型（数字、字符串、集合等），携带类型名用于报错。
    Other(&'static str),
}

/// 能报告自身形态的类型。
///
/// `db_record!` 会为 struct 实现它；标量与引用类型的实现在本模块中提供。
pub trait Reflect {
    fn shape(&self) -> Shape<'_>;
}

/// 内省失败的原因。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectError {
    /// 解引用一层后仍不是 struct。
    #[error("{op} only accepts structs; got {got}")]
    Shape { op: &'static str, got: &'static str },
    /// 嵌入 struct 的层数超过上限（通常意味着注册的元数据存在环）。
    #[error("{record} embeds records deeper than {limit} levels")]
    RecursionLimit { record: &'static str, limit: usize },
}

impl<T: Reflect> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Indirect(*self)
    }
}

impl<T: Reflect> Reflect for &mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::Indirect(&**self)
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Indirect(&**self)
    }
}

macro_rules! reflect_other {
    ($($t:ty),+ $(,)?) => {
        $(impl Reflect for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Other(std::any::type_name::<$t>())
            }
        })+
    };
}

reflect_other!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    time::OffsetDateTime,
);

impl<T> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(std::any::type_name::<Vec<T>>())
    }
}

impl<T> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(std::any::type_name::<Option<T>>())
    }
}

/// 解引用一层后取出 record；`op` 用于错误信息。
pub(crate) fn resolve<'a>(
    input: &'a dyn Reflect,
    op: &'static str,
) -> Result<&'a dyn Record, IntrospectError> {
    let shape = match input.shape() {
        Shape::Indirect(inner) => inner.shape(),
        direct => direct,
    };

    match shape {
        Shape::Record(r) => Ok(r),
        Shape::Indirect(_) => Err(reject(op, "a reference to a reference")),
        Shape::Other(got) => Err(reject(op, got)),
    }
}

fn reject(op: &'static str, got: &'static str) -> IntrospectError {
    tracing::debug!(op, got, "rejected non-struct input");
    IntrospectError::Shape { op, got }
}
