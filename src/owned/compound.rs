use std::collections::{BTreeMap, btree_map};

use crate::{Error, NBT, Result, Value};

/// A string-keyed map of [`Value`]s, iterated in sorted key order.
///
/// Keys are unique. [`at`](Compound::at) is the strict lookup and fails on a
/// missing key, while [`get_or_insert`](Compound::get_or_insert) creates an
/// empty entry on demand.
///
/// # Example
///
/// ```
/// use nbt_tree::{Compound, Value, compound, tag};
///
/// let mut comp = compound! {
///     "foo" => 12i16,
///     "bar" => "baz",
/// };
///
/// assert!(comp.put("abc", 6.0));
/// assert!(!comp.insert("foo", 7i16));
/// assert!(comp.emplace::<tag::String>("def", "ghi"));
///
/// let keys: Vec<&str> = comp.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["abc", "bar", "def", "foo"]);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Compound {
    entries: BTreeMap<String, Value>,
}

impl Compound {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Typed lookup; `None` when the key is missing or holds another type.
    #[inline]
    pub fn get_<T: NBT>(&self, key: &str) -> Option<&T::Type> {
        self.entries.get(key)?.get_::<T>().ok()
    }

    #[inline]
    pub fn get_mut_<T: NBT>(&mut self, key: &str) -> Option<&mut T::Type> {
        self.entries.get_mut(key)?.get_mut_::<T>().ok()
    }

    pub fn at(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Entry for `key`, inserting an empty [`Value`] first if absent.
    ///
    /// The returned value can then be filled with [`Value::assign`], which
    /// keeps an existing entry's type.
    pub fn get_or_insert(&mut self, key: &str) -> &mut Value {
        self.entries.entry(key.to_owned()).or_default()
    }

    /// Removes `key`, reporting whether anything was removed.
    #[inline]
    pub fn erase(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Inserts or overwrites. Returns `true` if the key was new.
    #[inline]
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        self.entries.insert(key.into(), value.into()).is_none()
    }

    /// Inserts only if the key is absent. Returns `false`, leaving the
    /// existing entry alone, otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Builds a `T` tag from `value` only if the key is absent, with the same
    /// result as [`insert`](Compound::insert).
    pub fn emplace<T: NBT>(&mut self, key: impl Into<String>, value: impl Into<T::Type>) -> bool {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(Value::from(T::wrap(value.into())));
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    #[inline]
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    #[inline]
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut Compound {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = btree_map::IterMut<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Later pairs overwrite earlier ones with the same key, as [`Compound::put`].
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
