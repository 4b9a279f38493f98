use std::any::Any;
use std::collections::BTreeMap;

use num_bigint::BigInt;

use crate::result::{Result, TypeError, type_error};

/// A type that can be recognised behind a `&dyn Any`, with the name used in `"expect {NAME}"`
/// messages.
pub trait Instance: Any {
    const NAME: &'static str;
}

impl Instance for String {
    const NAME: &'static str = "string";
}

impl Instance for BigInt {
    const NAME: &'static str = "bigint";
}

/// A keyed record of values, the closest thing to a plain object.
pub type Object<V> = BTreeMap<String, V>;

/// Checks that `value` is a `T`.
///
/// # Examples
/// ```
/// # use minitype::num::{UInt256, UInt64};
/// # use minitype::result::Open;
/// # use minitype::validator::validate_instance;
/// let n = UInt64::from_number(1).open();
/// assert!(validate_instance::<UInt64>(&n).is_ok());
/// assert_eq!(
///     validate_instance::<UInt256>(&n).unwrap_err().message(),
///     "expect UInt256"
/// );
/// ```
pub fn validate_instance<T: Instance>(value: &dyn Any) -> Result<&T> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| TypeError::new(format!("expect {}", T::NAME)).into())
}

/// Checks that `value` is an [`Object`] holding `V`s.
pub fn validate_object<V: 'static>(value: &dyn Any) -> Result<&Object<V>> {
    match value.downcast_ref::<Object<V>>() {
        Some(object) => Ok(object),
        None => type_error("expect an object"),
    }
}

/// Checks the length of `items` against the optional, inclusive bounds.
pub fn validate_array<T>(items: &[T], min: Option<usize>, max: Option<usize>) -> Result<()> {
    match (min, max) {
        (Some(min), _) if items.len() < min => {
            type_error(format!("expect an array has at least {} items", min))
        },
        (_, Some(max)) if items.len() > max => {
            type_error(format!("expect an array has at most {} items", max))
        },
        _ => Ok(()),
    }
}

/// Checks the length of `items` and that every item is a `T`. The message of a mismatched item is
/// prefixed with its index.
pub fn validate_array_items<'a, T: Instance>(
    items: &[&'a dyn Any],
    min: Option<usize>,
    max: Option<usize>,
) -> Result<Vec<&'a T>> {
    validate_array(items, min, max)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_instance::<T>(*item).map_err(|e| e.context(index)))
        .collect()
}
