//! Type-directed conversion of a single raw field into a value.
//!
//! Every column type of a record implements [`FromField`]. Built-in impls
//! cover `String`, the integer and float primitives, `bool`, `char` and
//! `Option<T>`. Other types either implement the trait directly or are
//! wrapped in [`Parsed`], which reuses their `FromStr` impl.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use log::warn;

use crate::error::{CoercionPolicy, FieldError};

/// Conversion from one raw text field.
///
/// `Default` supplies the value used when a field does not parse under
/// [`CoercionPolicy::Lenient`].
pub trait FromField: Default + Sized {
    /// Name used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn from_field(text: &str) -> Result<Self, FieldError>;
}

/// Decode `text` as `T` under the given policy.
///
/// Lenient decoding never fails: a malformed field becomes `T::default()`.
pub fn decode<T: FromField>(text: &str, policy: CoercionPolicy) -> Result<T, FieldError> {
    match T::from_field(text) {
        Ok(value) => Ok(value),
        Err(e) => match policy {
            CoercionPolicy::Strict => Err(e),
            CoercionPolicy::Lenient => {
                warn!("defaulting malformed field {:?}: {}", text, e);
                Ok(T::default())
            }
        },
    }
}

impl FromField for String {
    fn from_field(text: &str) -> Result<Self, FieldError> {
        Ok(text.to_owned())
    }
}

macro_rules! impl_from_field_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(text: &str) -> Result<Self, FieldError> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|e| FieldError::new(Self::type_name(), e))
                }
            }
        )*
    };
}

impl_from_field_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// `1`/`0` are accepted alongside `true`/`false`.
impl FromField for bool {
    fn from_field(text: &str) -> Result<Self, FieldError> {
        match text.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => other
                .parse::<bool>()
                .map_err(|e| FieldError::new(Self::type_name(), e)),
        }
    }
}

impl FromField for char {
    fn from_field(text: &str) -> Result<Self, FieldError> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            (None, _) => Err(FieldError::new(Self::type_name(), "empty field")),
            (Some(_), Some(_)) => Err(FieldError::new(
                Self::type_name(),
                "more than one character",
            )),
        }
    }
}

// An empty field is absent; anything else must decode as `T`.
impl<T: FromField> FromField for Option<T> {
    fn type_name() -> &'static str {
        T::type_name()
    }

    fn from_field(text: &str) -> Result<Self, FieldError> {
        if text.is_empty() {
            Ok(None)
        } else {
            T::from_field(text).map(Some)
        }
    }
}

/// Adapter that decodes any `FromStr + Default` type through its `FromStr`.
///
/// ```rust
/// use tuplecsv::decode::{FromField, Parsed};
///
/// let port = Parsed::<u16>::from_field(" 8080").unwrap();
/// assert_eq!(*port, 8080);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parsed<T>(pub T);

impl<T> Parsed<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Parsed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Parsed<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Display> fmt::Display for Parsed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> FromField for Parsed<T>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    fn type_name() -> &'static str {
        std::any::type_name::<T>()
    }

    fn from_field(text: &str) -> Result<Self, FieldError> {
        text.trim()
            .parse::<T>()
            .map(Parsed)
            .map_err(|e| FieldError::new(Self::type_name(), e))
    }
}
