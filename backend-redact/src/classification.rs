//! Field classes and the static classification tables built from them.
//!
//! Every field of a configuration record carries exactly one [`FieldClass`].
//! The table for a record is generated by `#[derive(RedactedConfig)]` and is
//! exposed as [`RedactedConfig::FIELDS`]. Lookups through the table fail
//! closed: an unknown path or an unclassified field resolves to
//! [`FieldClass::AlwaysRedacted`].

use crate::redaction::RedactedConfig;

/// How a field may appear in rendered output.
///
/// Variants are ordered by strictness, so `max` of two classes is the one
/// that hides more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldClass {
    /// Always rendered with its real value.
    Public,
    /// Rendered only when the `sensitive` flag is set; otherwise the marker.
    SensitiveRedactable,
    /// Never rendered, regardless of flags.
    AlwaysRedacted,
}

impl FieldClass {
    /// Resolves an optional class, treating a missing classification as
    /// [`FieldClass::AlwaysRedacted`].
    #[must_use]
    pub fn or_fail_closed(class: Option<Self>) -> Self {
        class.unwrap_or(Self::AlwaysRedacted)
    }
}

/// One entry of a classification table.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Rust field name (`snake_case`, raw prefix stripped).
    pub name: &'static str,
    /// Label written in front of the value, e.g. `ManagementLIF`.
    pub label: &'static str,
    /// `None` when the field carries no `#[redact(..)]` classification.
    pub class: Option<FieldClass>,
    /// Table of the sub-record when the renderer descends into this field.
    pub nested: Option<&'static [FieldSpec]>,
}

impl FieldSpec {
    /// Class used at render time for this entry.
    #[must_use]
    pub fn effective_class(&self) -> FieldClass {
        FieldClass::or_fail_closed(self.class)
    }
}

/// Returns the class governing `path` in `T`'s table.
///
/// See [`classify_in`] for the path syntax and the fail-closed rules.
#[must_use]
pub fn classify<T>(path: &str) -> FieldClass
where
    T: RedactedConfig + ?Sized,
{
    classify_in(T::FIELDS, path)
}

/// Returns the class governing `path` in `fields`.
///
/// `path` is a field name, or a dotted path through nested records such as
/// `config.common.credentials`. The result is the strictest class met along
/// the path, because a redacted record hides everything inside it. Unknown
/// segments, descending into a non-nested field, and unclassified entries all
/// resolve to [`FieldClass::AlwaysRedacted`].
#[must_use]
pub fn classify_in(fields: &[FieldSpec], path: &str) -> FieldClass {
    let mut table = fields;
    let mut effective = FieldClass::Public;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        let Some(spec) = table.iter().find(|spec| spec.name == segment) else {
            return FieldClass::AlwaysRedacted;
        };
        effective = effective.max(spec.effective_class());

        if segments.peek().is_some() {
            match spec.nested {
                Some(inner) => table = inner,
                None => return FieldClass::AlwaysRedacted,
            }
        }
    }

    effective
}

/// Lists the dotted paths of every field in `T` (recursively) that has no
/// classification.
///
/// An empty result means the table is complete. Schema tests assert this for
/// every top-level record.
#[must_use]
pub fn unclassified_fields<T>() -> Vec<String>
where
    T: RedactedConfig + ?Sized,
{
    classified_paths::<T>()
        .into_iter()
        .filter(|entry| !entry.classified)
        .map(|entry| entry.path)
        .collect()
}

/// A flattened table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedPath {
    /// Dotted field-name path from the root record.
    pub path: String,
    /// Label of the last segment.
    pub label: &'static str,
    /// Strictest class along the path.
    pub class: FieldClass,
    /// Whether the last segment carries its own classification.
    pub classified: bool,
}

/// Flattens `T`'s table, including nested records, in declaration order.
#[must_use]
pub fn classified_paths<T>() -> Vec<ClassifiedPath>
where
    T: RedactedConfig + ?Sized,
{
    let mut out = Vec::new();
    flatten_into(T::FIELDS, "", FieldClass::Public, &mut out);
    out
}

fn flatten_into(
    fields: &[FieldSpec],
    prefix: &str,
    inherited: FieldClass,
    out: &mut Vec<ClassifiedPath>,
) {
    for spec in fields {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{prefix}.{}", spec.name)
        };
        let class = inherited.max(spec.effective_class());
        out.push(ClassifiedPath {
            path: path.clone(),
            label: spec.label,
            class,
            classified: spec.class.is_some(),
        });
        if let Some(inner) = spec.nested {
            flatten_into(inner, &path, class, out);
        }
    }
}
