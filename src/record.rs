//! Record：字段元数据注册表（替代 go 版基于 `reflect` + `db` tag 的字段遍历）。
//!
//! Rust 无运行时反射；这里通过 `db_record!` 在编译期为 struct 生成一张静态字段表
//! （字段名、列 tag、是否为嵌入 struct），以及取值与零值判断逻辑。
//! 内省算法只消费这张表，从而保留与 go 版一致的展开顺序与零值过滤语义。

use crate::value::SqlValue;

/// 一个 record 类型的字段描述表。
#[derive(Debug, Clone, Copy)]
pub struct RecordMeta {
    /// 类型名（用于错误信息）。
    pub name: &'static str,
    /// 按声明顺序排列的字段。
    pub fields: &'static [FieldMeta],
}

/// 单个字段的描述。
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// 原始字段名（列名缺省时的回退值）。
    pub name: &'static str,
    /// 列 tag；空字符串表示未声明。
    pub tag: &'static str,
    /// 嵌入 struct 的描述表入口；非嵌入字段为 `None`。
    ///
    /// 用函数指针而不是直接引用，使描述表之间可以相互指向而无需常量求值。
    pub embedded: Option<fn() -> &'static RecordMeta>,
}

impl FieldMeta {
    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }
}

/// 某个字段在具体实例上的取值。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 带列 tag 的字段：当前值，以及它是否等于该类型的零值。
    Column { value: SqlValue, zero: bool },
    /// 未声明列 tag 的字段（不参与 map 模式，不要求可转换为 `SqlValue`）。
    Untagged,
    /// 嵌入 struct。
    Embedded,
}

/// 类型级入口：无需实例即可拿到描述表。
pub trait RecordType {
    fn describe() -> &'static RecordMeta;
}

/// 实例级入口（dyn 安全），由 `db_record!` 实现。
pub trait Record {
    fn meta(&self) -> &'static RecordMeta;

    /// 按 `meta().fields` 顺序返回每个字段的取值。
    fn values(&self) -> Vec<FieldValue>;
}

/// 判断“零值”的 trait（替代 go 的 `reflect.DeepEqual(current, zero)`）。
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for &str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

macro_rules! zero_num {
    ($($t:ty),+ $(,)?) => {
        $(impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == 0 as $t
            }
        })+
    };
}

zero_num!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// 按 `==` 比较：`-0.0` 视为零值，NaN 不是。
impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

/// `Option` 对应 go 的指针：只有 `None` 是零值，`Some(0)` 不是。
impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// 时间类型的零值：`0001-01-01 00:00:00 UTC`（与 go `time.Time{}` 一致）。
pub const ZERO_TIME: time::OffsetDateTime = time::macros::datetime!(0001-01-01 0:00 UTC);

impl IsZero for time::OffsetDateTime {
    fn is_zero(&self) -> bool {
        *self == ZERO_TIME
    }
}

/// 为业务 struct 注册字段元数据。
///
/// 每个字段的写法：
///
/// - `field: { db: "col" }`：带列 tag；字段类型需实现 `Clone + Into<SqlValue> + IsZero`。
/// - `field: { db: "col", orig: "Field" }`：同上，并指定原始字段名。
/// - `field: {}` / `field: { orig: "Field" }`：无列 tag。
/// - `field: { embed: Base }`：嵌入 struct，`Base` 也必须已注册；字段类型必须就是 `Base`。
///   原始字段名默认取类型名（与 go 匿名字段一致），可用 `orig:` 覆盖。
///
/// 所有字段都必须登记，漏掉任何一个都会编译失败。
///
/// ```
/// #[derive(Clone, Default)]
/// struct Base { id: i64 }
/// #[derive(Clone, Default)]
/// struct Post { base: Base, title: String, draft: bool }
///
/// halo_space::db_record! { impl Base { id: { db: "id" } } }
/// halo_space::db_record! {
///     impl Post {
///         base:  { embed: Base },
///         title: { db: "title" },
///         draft: {},
///     }
/// }
///
/// let names = halo_space::raw_field_names(&Post::default()).unwrap();
/// assert_eq!(names, ["`id`", "`title`", "\"draft\""]);
/// ```
///
/// 声明的嵌入类型与字段类型不一致：
///
/// ```compile_fail
/// #[derive(Clone, Default)]
/// struct Base { id: i64 }
/// #[derive(Clone, Default)]
/// struct Other { secret: String }
/// #[derive(Clone, Default)]
/// struct Post { base: Base, title: String }
///
/// halo_space::db_record! { impl Base { id: { db: "id" } } }
/// halo_space::db_record! { impl Other { secret: { db: "secret" } } }
/// halo_space::db_record! {
///     impl Post {
///         base:  { embed: Other },
///         title: { db: "title" },
///     }
/// }
/// ```
///
/// 漏登记字段：
///
/// ```compile_fail
/// #[derive(Clone, Default)]
/// struct User { id: i64, name: String }
///
/// halo_space::db_record! { impl User { id: { db: "id" } } }
/// ```
#[macro_export]
macro_rules! db_record {
    (
        impl $ty:ty {
            $( $field:ident : { $($body:tt)* } ),* $(,)?
        }
    ) => {
        impl $crate::record::RecordType for $ty {
            fn describe() -> &'static $crate::record::RecordMeta {
                static META: $crate::record::RecordMeta = $crate::record::RecordMeta {
                    name: stringify!($ty),
                    fields: &[
                        $( $crate::__db_field_meta!($field; $($body)*) ),*
                    ],
                };
                &META
            }
        }

        impl $crate::record::Record for $ty {
            fn meta(&self) -> &'static $crate::record::RecordMeta {
                <Self as $crate::record::RecordType>::describe()
            }

            fn values(&self) -> Vec<$crate::record::FieldValue> {
                let Self { $( $field: _ ),* } = self;
                vec![
                    $( $crate::__db_field_value!(&self.$field; $($body)*) ),*
                ]
            }
        }

        impl $crate::shape::Reflect for $ty {
            fn shape(&self) -> $crate::shape::Shape<'_> {
                $crate::shape::Shape::Record(self)
            }
        }
    };
}

/// 宏内部 helper：生成单个字段的 `FieldMeta`。
#[doc(hidden)]
#[macro_export]
macro_rules! __db_field_meta {
    ($field:ident; embed: $embed:ty $(, orig: $orig:literal)? $(,)?) => {
        $crate::record::FieldMeta {
            name: $crate::__db_field_orig!(stringify!($embed) $(, $orig)?),
            tag: "",
            embedded: Some(<$embed as $crate::record::RecordType>::describe),
        }
    };
    ($field:ident; db: $db:literal $(, orig: $orig:literal)? $(,)?) => {
        $crate::record::FieldMeta {
            name: $crate::__db_field_orig!(stringify!($field) $(, $orig)?),
            tag: $db,
            embedded: None,
        }
    };
    ($field:ident; $(orig: $orig:literal)? $(,)?) => {
        $crate::record::FieldMeta {
            name: $crate::__db_field_orig!(stringify!($field) $(, $orig)?),
            tag: "",
            embedded: None,
        }
    };
}

/// 宏内部 helper：生成单个字段的 `FieldValue`。
#[doc(hidden)]
#[macro_export]
macro_rules! __db_field_value {
    ($v:expr; embed: $embed:ty $(, orig: $orig:literal)? $(,)?) => {{
        let _: &$embed = $v;
        $crate::record::FieldValue::Embedded
    }};
    ($v:expr; db: $db:literal $(, orig: $orig:literal)? $(,)?) => {{
        let v = $v;
        $crate::record::FieldValue::Column {
            zero: $crate::record::IsZero::is_zero(v),
            value: $crate::value::SqlValue::from(::std::clone::Clone::clone(v)),
        }
    }};
    ($v:expr; $(orig: $orig:literal)? $(,)?) => {{
        let _ = $v;
        $crate::record::FieldValue::Untagged
    }};
}

/// 宏内部 helper：支持 `orig:` 的可选参数。
#[doc(hidden)]
#[macro_export]
macro_rules! __db_field_orig {
    ($default:expr) => {
        $default
    };
    ($default:expr, $custom:expr) => {
        $custom
    };
}
