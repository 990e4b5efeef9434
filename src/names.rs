//! 列名列表：为 SELECT/UPDATE/INSERT 生成有序的列标识符。
//!
//! - [`raw_field_names`]：当前版本，递归展开嵌入 struct，并为标识符加引号。
//! - [`field_names`]：旧版本，只看顶层字段，不加引号。

use crate::flavor::Flavor;
use crate::record::RecordMeta;
use crate::shape::{IntrospectError, Reflect, resolve};

/// 嵌入 struct 的默认最大展开层数。
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// `raw_field_names_with` 的选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOptions {
    /// 调用方声明目标方言为 PostgreSQL。
    ///
    /// 默认只记录该选择，不影响 quote：带 tag 的列始终用反引号，
    /// 无 tag 的字段始终用双引号。
    pub postgres: bool,
    /// 让 `postgres` 真正切换 quote 分支：所有标识符都按
    /// `Flavor::PostgreSQL`（或 `Flavor::MySQL`）quote。
    pub flavor_quoting: bool,
    /// 嵌入 struct 的最大展开层数，超过返回 [`IntrospectError::RecursionLimit`]。
    pub max_depth: usize,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            postgres: false,
            flavor_quoting: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NameOptions {
    pub fn postgres(mut self, postgres: bool) -> Self {
        self.postgres = postgres;
        self
    }

    pub fn flavor_quoting(mut self, enabled: bool) -> Self {
        self.flavor_quoting = enabled;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    fn flavor(&self) -> Flavor {
        if self.postgres {
            Flavor::PostgreSQL
        } else {
            Flavor::MySQL
        }
    }

    fn render(&self, tag: &str, name: &str) -> String {
        if self.flavor_quoting {
            let ident = if tag.is_empty() { name } else { tag };
            return self.flavor().quote(ident);
        }

        if tag.is_empty() {
            format!("\"{name}\"")
        } else {
            format!("`{tag}`")
        }
    }
}

/// 旧版列名列表：顶层字段的 tag，缺省时用原始字段名；不递归、不加引号。
/// 嵌入字段输出其类型名（可用 `orig:` 覆盖）。
#[deprecated(note = "use `raw_field_names` instead")]
pub fn field_names(input: &impl Reflect) -> Result<Vec<String>, IntrospectError> {
    let record = resolve(input, "FieldNames")?;
    Ok(record
        .meta()
        .fields
        .iter()
        .map(|fm| {
            if fm.has_tag() {
                fm.tag.to_string()
            } else {
                fm.name.to_string()
            }
        })
        .collect())
}

/// 列出 record 的全部列标识符（按声明顺序，嵌入 struct 原地展开）。
pub fn raw_field_names(input: &impl Reflect) -> Result<Vec<String>, IntrospectError> {
    raw_field_names_with(input, NameOptions::default())
}

/// 同 [`raw_field_names`]，可指定方言选项。
pub fn raw_field_names_with(
    input: &impl Reflect,
    opts: NameOptions,
) -> Result<Vec<String>, IntrospectError> {
    let record = resolve(input, "RawFieldNames")?;
    let meta = record.meta();

    let mut out = Vec::with_capacity(meta.fields.len());
    nest_field_names(meta, &opts, 0, &mut out)?;

    tracing::trace!(
        record = meta.name,
        postgres = opts.postgres,
        columns = out.len(),
        "listed field names"
    );
    Ok(out)
}

fn nest_field_names(
    meta: &'static RecordMeta,
    opts: &NameOptions,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<(), IntrospectError> {
    if depth > opts.max_depth {
        tracing::debug!(record = meta.name, limit = opts.max_depth, "embedding too deep");
        return Err(IntrospectError::RecursionLimit {
            record: meta.name,
            limit: opts.max_depth,
        });
    }

    for fm in meta.fields {
        match fm.embedded {
            Some(embedded) => nest_field_names(embedded(), opts, depth + 1, out)?,
            None => out.push(opts.render(fm.tag, fm.name)),
        }
    }
    Ok(())
}
