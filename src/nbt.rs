use crate::{Error, Tag};

pub mod tag;

/// The type id of an NBT tag, as written on the wire.
///
/// `End` is both the compound terminator and the type id reported by an
/// empty [`Value`](crate::Value) or an untyped empty [`List`](crate::List).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum TagID {
    #[default]
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
}

impl TagID {
    /// The type id of "no tag at all".
    pub const NULL: TagID = TagID::End;

    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: Byte, Short, Int, Long, Float, Double.
    /// These tags store their values directly without additional structure.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::TagID;
    ///
    /// assert!(TagID::Int.is_primitive());
    /// assert!(TagID::Double.is_primitive());
    /// assert!(!TagID::List.is_primitive());
    /// assert!(!TagID::ByteArray.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` if this is an array tag type.
    ///
    /// Array tags are: ByteArray, IntArray.
    /// These store contiguous sequences of fixed-width integers.
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray)
    }

    /// Returns `true` if this is a composite tag type.
    ///
    /// Composite tags are: List, Compound.
    /// These contain other NBT values as children.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::ByteArray => "Byte_Array",
            Self::String => "String",
            Self::List => "List",
            Self::Compound => "Compound",
            Self::IntArray => "Int_Array",
        }
    }
}

impl TryFrom<u8> for TagID {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            _ => return Err(Error::InvalidTagType(value)),
        })
    }
}

impl From<TagID> for u8 {
    #[inline]
    fn from(value: TagID) -> Self {
        value as u8
    }
}

/// Compile-time handle for one tag variant.
///
/// The marker types in [`tag`] implement this trait. It lets generic
/// operations such as [`List::of`](crate::List::of) or
/// [`Compound::emplace`](crate::Compound::emplace) name a variant and its
/// payload type without a runtime type id.
pub trait NBT: Send + Sync + Sized + Clone + Copy + 'static {
    const TAG_ID: TagID;
    type Type: Clone + PartialEq + std::fmt::Debug;

    fn wrap(value: Self::Type) -> Tag;

    fn peek(tag: &Tag) -> Option<&Self::Type>;

    fn peek_mut(tag: &mut Tag) -> Option<&mut Self::Type>;

    /// Hands the tag back unchanged when it holds another variant.
    fn unwrap(tag: Tag) -> Result<Self::Type, Tag>;
}

/// Marker for the variants whose payload is a single scalar.
pub trait PrimitiveNBT: NBT<Type: Copy> {}
