use crate::result::Result;

/// Converts every item, stopping at the first failure. The message of a failure is prefixed with
/// the index of the item, as in `"2: expect a non empty string"`.
///
/// # Examples
/// ```
/// # use minitype::mapping::map_array;
/// # use minitype::text::TidyString;
/// let names = map_array(&[" a ", "b"], |name| TidyString::from_string(name)).unwrap();
/// assert_eq!(names[0].value(), "a");
///
/// let e = map_array(&["a", " "], |name| TidyString::from_string(name)).unwrap_err();
/// assert_eq!(e.message(), "1: expect a non empty string");
/// ```
pub fn map_array<T, U>(items: &[T], format: impl Fn(&T) -> Result<U>) -> Result<Vec<U>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format(item).map_err(|e| e.context(index)))
        .collect()
}
