use crate::{Compound, List, NBT, TagID};

/// One node of an NBT tree.
///
/// Every variant owns its payload outright, so cloning a `Tag` produces an
/// independent deep copy and equality compares payloads, never identity.
/// Tags of different variants are never equal.
///
/// # Example
///
/// ```
/// use nbt_tree::{Tag, TagID, tag};
///
/// let mut tag = Tag::from(6);
/// assert_eq!(tag.tag_id(), TagID::Int);
///
/// *tag.get_mut_::<tag::Int>().unwrap() = 12;
/// assert_eq!(tag, Tag::Int(12));
/// assert_ne!(tag, Tag::Long(12));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Tag {
    #[inline]
    pub const fn tag_id(&self) -> TagID {
        match self {
            Tag::Byte(_) => TagID::Byte,
            Tag::Short(_) => TagID::Short,
            Tag::Int(_) => TagID::Int,
            Tag::Long(_) => TagID::Long,
            Tag::Float(_) => TagID::Float,
            Tag::Double(_) => TagID::Double,
            Tag::ByteArray(_) => TagID::ByteArray,
            Tag::String(_) => TagID::String,
            Tag::List(_) => TagID::List,
            Tag::Compound(_) => TagID::Compound,
            Tag::IntArray(_) => TagID::IntArray,
        }
    }

    /// Zero payload of the given type: `0`, an empty string, array, list or
    /// compound. Returns `None` for [`TagID::End`].
    pub fn default_for(tag_id: TagID) -> Option<Tag> {
        Some(match tag_id {
            TagID::End => return None,
            TagID::Byte => Tag::Byte(0),
            TagID::Short => Tag::Short(0),
            TagID::Int => Tag::Int(0),
            TagID::Long => Tag::Long(0),
            TagID::Float => Tag::Float(0.0),
            TagID::Double => Tag::Double(0.0),
            TagID::ByteArray => Tag::ByteArray(Vec::new()),
            TagID::String => Tag::String(String::new()),
            TagID::List => Tag::List(List::new()),
            TagID::Compound => Tag::Compound(Compound::new()),
            TagID::IntArray => Tag::IntArray(Vec::new()),
        })
    }

    #[inline]
    pub fn get_<T: NBT>(&self) -> Option<&T::Type> {
        T::peek(self)
    }

    #[inline]
    pub fn get_mut_<T: NBT>(&mut self) -> Option<&mut T::Type> {
        T::peek_mut(self)
    }

    #[inline]
    pub fn into_<T: NBT>(self) -> Result<T::Type, Tag> {
        T::unwrap(self)
    }
}

macro_rules! tag_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                #[inline]
                fn from(value: $ty) -> Self {
                    Tag::$variant(value)
                }
            }
        )*
    };
}

tag_from!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
);

impl From<&str> for Tag {
    #[inline]
    fn from(value: &str) -> Self {
        Tag::String(value.to_owned())
    }
}
