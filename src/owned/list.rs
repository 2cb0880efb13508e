use std::{ops, slice, vec};

use crate::{Error, NBT, Result, TagID, Value, cold_path};

/// A homogeneous sequence of [`Value`]s.
///
/// The list records one element type id. A fresh list is untyped
/// ([`TagID::End`]); its first successful insertion fixes the type until
/// [`clear`](List::clear). Inserting a value of another type, or an empty
/// value, fails with [`Error::TypeMismatch`] and leaves the list unchanged.
///
/// Elements reached through [`at_mut`](List::at_mut) should be changed with
/// [`Value::assign`]; rebinding them to another type is caught when the list
/// is written.
///
/// # Example
///
/// ```
/// use nbt_tree::{Error, List, Tag, TagID, tag};
///
/// let mut list = List::of::<tag::Byte>([16i8, 17]);
/// assert_eq!(list.el_type(), TagID::Byte);
/// assert_eq!(list[1], Tag::Byte(17));
/// assert!(matches!(list.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
/// assert!(list.push(5i32).is_err());
///
/// list.pop();
/// assert_eq!(list, List::of::<tag::Byte>([16i8]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct List {
    el_type: TagID,
    values: Vec<Value>,
}

impl List {
    #[inline]
    pub const fn new() -> Self {
        Self {
            el_type: TagID::End,
            values: Vec::new(),
        }
    }

    /// An empty list whose element type is already fixed.
    #[inline]
    pub const fn with_type(el_type: TagID) -> Self {
        Self {
            el_type,
            values: Vec::new(),
        }
    }

    /// A list of `T` built from raw payloads. The element type is `T` even
    /// when `values` is empty.
    pub fn of<T: NBT>(values: impl IntoIterator<Item = impl Into<T::Type>>) -> Self {
        Self {
            el_type: T::TAG_ID,
            values: values
                .into_iter()
                .map(|value| Value::from(T::wrap(value.into())))
                .collect(),
        }
    }

    /// Every value must hold an `el_type` tag.
    pub(crate) fn from_raw(el_type: TagID, values: Vec<Value>) -> Self {
        debug_assert!(values.iter().all(|value| value.tag_id() == el_type));
        Self { el_type, values }
    }

    /// Pushes every value in turn; the first one fixes the element type.
    pub fn try_from_values(values: impl IntoIterator<Item = impl Into<Value>>) -> Result<Self> {
        let mut list = List::new();
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    #[inline]
    pub fn el_type(&self) -> TagID {
        self.el_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check(&self, tag_id: TagID) -> Result<()> {
        if tag_id == TagID::End || (self.el_type != TagID::End && self.el_type != tag_id) {
            cold_path();
            return Err(Error::mismatch(self.el_type, tag_id));
        }
        Ok(())
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(value.tag_id())?;
        self.el_type = value.tag_id();
        self.values.push(value);
        Ok(())
    }

    /// Appends a `T` built from `value`, with the checks of [`push`](List::push).
    pub fn emplace_back<T: NBT>(&mut self, value: impl Into<T::Type>) -> Result<()> {
        self.check(T::TAG_ID)?;
        self.el_type = T::TAG_ID;
        self.values.push(Value::from(T::wrap(value.into())));
        Ok(())
    }

    /// Removes the last element. Popping an empty list does nothing and
    /// returns `None`; the element type is kept either way.
    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Replaces the element at `index`, type-checked like [`push`](List::push).
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.values.len();
        if index >= len {
            cold_path();
            return Err(Error::IndexOutOfRange { index, len });
        }
        let value = value.into();
        self.check(value.tag_id())?;
        self.values[index] = value;
        Ok(())
    }

    /// Removes every element and resets the element type to [`TagID::End`].
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
        self.el_type = TagID::End;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    /// Typed element access; `None` when out of range or of another type.
    #[inline]
    pub fn get_<T: NBT>(&self, index: usize) -> Option<&T::Type> {
        self.values.get(index)?.get_::<T>().ok()
    }

    pub fn at(&self, index: usize) -> Result<&Value> {
        let len = self.values.len();
        self.values
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

/// Two empty lists are equal whatever their declared element types.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && (self.values.is_empty() || self.el_type == other.el_type)
    }
}

impl ops::Index<usize> for List {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `index` is out of range; use [`List::at`] for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
