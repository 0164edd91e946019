//! Positional construction of typed records from raw fields.
//!
//! A record type is a tuple whose elements all implement [`FromField`].
//! Tuples of one to twelve elements are supported.

use std::fmt;

use crate::decode::{FromField, decode};
use crate::error::{CoercionPolicy, RecordError};

/// A fixed-arity record decoded positionally from a row's fields.
pub trait Record: Sized {
    /// Number of fields the record consumes.
    const ARITY: usize;

    /// Build a record from `fields`.
    ///
    /// Fields beyond `ARITY` are ignored. Fewer than `ARITY` fields is
    /// [`RecordError::RowTooShort`].
    fn from_fields<S: AsRef<str>>(
        fields: &[S],
        policy: CoercionPolicy,
    ) -> Result<Self, RecordError>;
}

/// Comma-separated rendering of a record, e.g. `1, abc, 2.5, x`.
pub trait RecordDisplay {
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Wrap the record so it can be used with `{}`.
    fn display(&self) -> DisplayRecord<'_, Self> {
        DisplayRecord(self)
    }
}

pub struct DisplayRecord<'a, R: ?Sized>(&'a R);

impl<R: RecordDisplay + ?Sized> fmt::Display for DisplayRecord<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_fields(f)
    }
}

fn field<T: FromField, S: AsRef<str>>(
    fields: &[S],
    column: usize,
    policy: CoercionPolicy,
) -> Result<T, RecordError> {
    let text = fields[column].as_ref();
    decode::<T>(text, policy).map_err(|e| RecordError::FieldTypeMismatch {
        column,
        text: text.to_owned(),
        type_name: e.type_name,
    })
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_record {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: FromField),+> Record for ($($name,)+) {
            const ARITY: usize = count!($($name)+);

            fn from_fields<S: AsRef<str>>(
                fields: &[S],
                policy: CoercionPolicy,
            ) -> Result<Self, RecordError> {
                if fields.len() < Self::ARITY {
                    return Err(RecordError::RowTooShort {
                        expected: Self::ARITY,
                        found: fields.len(),
                    });
                }
                Ok(($(field::<$name, S>(fields, $idx, policy)?,)+))
            }
        }

        impl<$($name: fmt::Display),+> RecordDisplay for ($($name,)+) {
            fn fmt_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $(
                    if $idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", self.$idx)?;
                )+
                Ok(())
            }
        }
    };
}

impl_record!(A: 0);
impl_record!(A: 0, B: 1);
impl_record!(A: 0, B: 1, C: 2);
impl_record!(A: 0, B: 1, C: 2, D: 3);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);

/// Build a record of type `R` from `fields`. See [`Record::from_fields`].
pub fn build<R: Record, S: AsRef<str>>(
    fields: &[S],
    policy: CoercionPolicy,
) -> Result<R, RecordError> {
    R::from_fields(fields, policy)
}
