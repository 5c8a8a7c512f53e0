//! Leaf value formatting for the two render modes.
//!
//! The renderers never decide *whether* a value is printed here; by the time a
//! [`FieldValue`] is asked to format itself the policy has already allowed it.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::{self, Debug, Display, Formatter},
    hash::BuildHasher,
};

use crate::flags::FlagSet;

/// Written for `None` in the compact form.
pub const NIL: &str = "<nil>";

/// A leaf field value that knows its compact and detailed forms.
///
/// The compact form writes strings bare and collections space-separated. The
/// detailed form follows `Debug` conventions: quoted strings, `Some(..)`,
/// comma-separated collections.
///
/// Implement this for schema-local enums or newtypes that are rendered as a
/// single value.
pub trait FieldValue {
    /// Compact form used by the Display renderer.
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result;
    /// Verbose form used by the Detail renderer.
    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_field_value_via_fmt {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }

                fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Debug::fmt(self, f)
                }
            }
        )*
    };
}

impl_field_value_via_fmt!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64
);

impl<T> FieldValue for &T
where
    T: FieldValue + ?Sized,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_display(f)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_detail(f)
    }
}

impl<T> FieldValue for Box<T>
where
    T: FieldValue + ?Sized,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_display(f)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_detail(f)
    }
}

impl<T> FieldValue for Option<T>
where
    T: FieldValue,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_display(f),
            None => f.write_str(NIL),
        }
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => {
                f.write_str("Some(")?;
                value.fmt_detail(f)?;
                f.write_str(")")
            }
            None => f.write_str("None"),
        }
    }
}

fn write_seq<'a, T, I>(f: &mut Formatter<'_>, items: I, detail: bool) -> fmt::Result
where
    T: FieldValue + 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(if detail { ", " } else { " " })?;
        }
        if detail {
            item.fmt_detail(f)?;
        } else {
            item.fmt_display(f)?;
        }
    }
    f.write_str("]")
}

impl<T> FieldValue for [T]
where
    T: FieldValue,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, false)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, true)
    }
}

impl<T> FieldValue for Vec<T>
where
    T: FieldValue,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, false)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, true)
    }
}

impl<T> FieldValue for BTreeSet<T>
where
    T: FieldValue,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, false)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self, true)
    }
}

fn write_map<'a, K, V, I>(f: &mut Formatter<'_>, entries: I, detail: bool) -> fmt::Result
where
    K: FieldValue + 'a + ?Sized,
    V: FieldValue + 'a + ?Sized,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str(if detail { "{" } else { "map[" })?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if detail {
            if index > 0 {
                f.write_str(", ")?;
            }
            key.fmt_detail(f)?;
            f.write_str(": ")?;
            value.fmt_detail(f)?;
        } else {
            if index > 0 {
                f.write_str(" ")?;
            }
            key.fmt_display(f)?;
            f.write_str(":")?;
            value.fmt_display(f)?;
        }
    }
    f.write_str(if detail { "}" } else { "]" })
}

impl<K, V> FieldValue for BTreeMap<K, V>
where
    K: FieldValue,
    V: FieldValue,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_map(f, self, false)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_map(f, self, true)
    }
}

/// Entries are written in key order, never in hash order.
impl<K, V, S> FieldValue for HashMap<K, V, S>
where
    K: FieldValue + Ord,
    V: FieldValue,
    S: BuildHasher,
{
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sorted: BTreeMap<&K, &V> = self.iter().collect();
        write_map(f, sorted, false)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sorted: BTreeMap<&K, &V> = self.iter().collect();
        write_map(f, sorted, true)
    }
}

impl FieldValue for FlagSet {
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_map().fmt_display(f)
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_map().fmt_detail(f)
    }
}
