use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use crate::result::Result;

type Format<'a, V, U> = Box<dyn Fn(Option<&V>) -> Result<U> + 'a>;

/// One field of a [`map_object`] conversion: reads `source`, converts it and writes the result
/// under `target`, or under `source` again if no target is given.
pub struct MapAction<'a, K, V, U> {
    source: K,
    target: Option<K>,
    format: Format<'a, V, U>,
}

impl<'a, K, V, U> MapAction<'a, K, V, U> {
    /// The field is passed to `format` as None when it's missing from the source, so that
    /// optional fields can supply a default.
    pub fn new(
        source: K,
        format: impl Fn(Option<&V>) -> Result<U> + 'a,
    ) -> MapAction<'a, K, V, U> {
        MapAction {
            source,
            target: None,
            format: Box::new(format),
        }
    }

    pub fn rename(self, target: K) -> MapAction<'a, K, V, U> {
        MapAction {
            target: Some(target),
            ..self
        }
    }
}

impl<K: Debug, V, U> Debug for MapAction<'_, K, V, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapAction")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Builds a new record by applying every action to `source`, stopping at the first failure. The
/// message of a failure is prefixed with the source key of the action, as in
/// `"amount: expect a unsigned integer"`.
///
/// Keys that no action mentions are dropped.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use minitype::mapping::{map_object, MapAction};
/// # use minitype::num::UInt8;
/// let source = BTreeMap::from([("level", 3), ("volume", 300)]);
/// let actions = [
///     MapAction::new("level", |v: Option<&i32>| UInt8::from_number(*v.unwrap_or(&0))),
///     MapAction::new("volume", |v: Option<&i32>| UInt8::from_number(*v.unwrap_or(&0))),
/// ];
/// assert_eq!(
///     map_object(&source, &actions).unwrap_err().message(),
///     "volume: overflow unsigned integer 8 bits"
/// );
/// ```
pub fn map_object<K, V, U>(
    source: &BTreeMap<K, V>,
    actions: &[MapAction<'_, K, V, U>],
) -> Result<BTreeMap<K, U>>
where
    K: Ord + Clone + Display,
{
    let mut target = BTreeMap::new();
    for action in actions {
        let value = (action.format)(source.get(&action.source))
            .map_err(|e| e.context(&action.source))?;
        let key = action.target.as_ref().unwrap_or(&action.source);
        target.insert(key.clone(), value);
    }
    Ok(target)
}
