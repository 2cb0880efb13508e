use std::mem;

use crate::{
    Compound, Error, Index, Key, List, NBT, PrimitiveNBT, Result, Tag, TagID, cold_path, tag,
};

/// An owning slot for at most one [`Tag`].
///
/// A default `Value` is empty and reports [`TagID::End`]. Cloning deep-copies
/// the held tag, [`take`](Value::take) moves it out and leaves the source
/// empty. Two values are equal when both are empty or both hold equal tags.
///
/// Writes come in two flavours: [`assign`](Value::assign) replaces the content
/// in place and refuses to change the held type, while
/// [`set_owned`](Value::set_owned) rebinds the slot to any tag.
///
/// # Example
///
/// ```
/// use nbt_tree::{Error, Value, tag};
///
/// let mut value = Value::from(42);
/// assert!(matches!(value.assign(12i64), Err(Error::TypeMismatch { .. })));
/// value.assign(52)?;
/// assert_eq!(value.get::<tag::Int>()?, 52);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Value {
    tag: Option<Tag>,
}

impl Value {
    #[inline]
    pub const fn new() -> Self {
        Self { tag: None }
    }

    #[inline]
    pub fn tag_id(&self) -> TagID {
        self.tag.as_ref().map_or(TagID::End, Tag::tag_id)
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.tag.is_some()
    }

    /// Borrows the held tag.
    #[inline]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Mutably borrows the held tag. Overwriting it with another variant
    /// bypasses the type check of [`assign`](Value::assign).
    #[inline]
    pub fn tag_mut(&mut self) -> Option<&mut Tag> {
        self.tag.as_mut()
    }

    /// Stores `tag` without any type check and returns the previous content.
    #[inline]
    pub fn set_owned(&mut self, tag: Tag) -> Option<Tag> {
        self.tag.replace(tag)
    }

    /// Moves the content out, leaving this value empty.
    #[inline]
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    #[inline]
    pub fn into_tag(self) -> Option<Tag> {
        self.tag
    }

    /// Replaces the content in place.
    ///
    /// An empty value accepts anything. A non-empty value only accepts a tag
    /// of exactly the type it already holds; otherwise the value is left
    /// untouched and [`Error::TypeMismatch`] is returned.
    pub fn assign(&mut self, value: impl Into<Tag>) -> Result<()> {
        let value = value.into();
        match &mut self.tag {
            None => self.tag = Some(value),
            Some(held) if held.tag_id() == value.tag_id() => *held = value,
            Some(held) => {
                cold_path();
                return Err(Error::mismatch(held.tag_id(), value.tag_id()));
            }
        }
        Ok(())
    }

    pub fn get_<T: NBT>(&self) -> Result<&T::Type> {
        self.tag
            .as_ref()
            .and_then(T::peek)
            .ok_or_else(|| Error::mismatch(T::TAG_ID, self.tag_id()))
    }

    pub fn get_mut_<T: NBT>(&mut self) -> Result<&mut T::Type> {
        let actual = self.tag_id();
        self.tag
            .as_mut()
            .and_then(T::peek_mut)
            .ok_or(Error::mismatch(T::TAG_ID, actual))
    }

    /// Copies out a scalar payload. The held type must be exactly `T`.
    #[inline]
    pub fn get<T: PrimitiveNBT>(&self) -> Result<T::Type> {
        self.get_::<T>().copied()
    }

    #[inline]
    pub fn as_str(&self) -> Result<&str> {
        self.get_::<tag::String>().map(String::as_str)
    }

    #[inline]
    pub fn as_compound(&self) -> Result<&Compound> {
        self.get_::<tag::Compound>()
    }

    #[inline]
    pub fn as_list(&self) -> Result<&List> {
        self.get_::<tag::List>()
    }

    /// Checked lookup: a position indexes a held [`List`], a key a held
    /// [`Compound`]. Any other content fails with [`Error::TypeMismatch`].
    pub fn at(&self, index: impl Index) -> Result<&Value> {
        match index.key() {
            Key::Position(position) => self.get_::<tag::List>()?.at(position),
            Key::Name(name) => self.get_::<tag::Compound>()?.at(name),
        }
    }

    pub fn at_mut(&mut self, index: impl Index) -> Result<&mut Value> {
        match index.key() {
            Key::Position(position) => self.get_mut_::<tag::List>()?.at_mut(position),
            Key::Name(name) => self.get_mut_::<tag::Compound>()?.at_mut(name),
        }
    }

    /// Compound entry for `key`, created empty if absent.
    ///
    /// Fails with [`Error::TypeMismatch`] unless this value holds a compound;
    /// an empty value is not promoted to one.
    pub fn get_or_insert(&mut self, key: &str) -> Result<&mut Value> {
        Ok(self.get_mut_::<tag::Compound>()?.get_or_insert(key))
    }
}

impl From<Tag> for Value {
    #[inline]
    fn from(tag: Tag) -> Self {
        Self { tag: Some(tag) }
    }
}

impl From<Option<Tag>> for Value {
    #[inline]
    fn from(tag: Option<Tag>) -> Self {
        Self { tag }
    }
}

macro_rules! value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self { tag: Some(Tag::from(value)) }
                }
            }
        )*
    };
}

value_from!(
    i8,
    i16,
    i32,
    i64,
    f32,
    f64,
    &str,
    String,
    Vec<i8>,
    Vec<i32>,
    List,
    Compound,
);

impl PartialEq<Tag> for Value {
    #[inline]
    fn eq(&self, other: &Tag) -> bool {
        self.tag.as_ref() == Some(other)
    }
}

impl PartialEq<Value> for Tag {
    #[inline]
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

macro_rules! value_try_into {
    ($($ty:ty => $marker:ident),* $(,)?) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: &Value) -> Result<Self> {
                    value.get_::<tag::$marker>().cloned()
                }
            }
        )*
    };
}

value_try_into!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
);
