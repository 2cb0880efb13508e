use crate::{NBT, PrimitiveNBT, Tag, TagID, cold_path};

macro_rules! define_primary_tag {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug)]
            pub struct $name;
        )*
    };
}

define_primary_tag!(
    Byte, Short, Int, Long, Float, Double, ByteArray, String, List, Compound, IntArray
);

macro_rules! impl_nbt {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            impl NBT for $name {
                const TAG_ID: TagID = TagID::$name;
                type Type = $ty;

                #[inline]
                fn wrap(value: $ty) -> Tag {
                    Tag::$name(value)
                }

                #[inline]
                fn peek(tag: &Tag) -> Option<&$ty> {
                    match tag {
                        Tag::$name(value) => Some(value),
                        _ => {
                            cold_path();
                            None
                        }
                    }
                }

                #[inline]
                fn peek_mut(tag: &mut Tag) -> Option<&mut $ty> {
                    match tag {
                        Tag::$name(value) => Some(value),
                        _ => {
                            cold_path();
                            None
                        }
                    }
                }

                #[inline]
                fn unwrap(tag: Tag) -> ::std::result::Result<$ty, Tag> {
                    match tag {
                        Tag::$name(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_nbt!(
    Byte: i8,
    Short: i16,
    Int: i32,
    Long: i64,
    Float: f32,
    Double: f64,
    ByteArray: Vec<i8>,
    String: ::std::string::String,
    List: crate::List,
    Compound: crate::Compound,
    IntArray: Vec<i32>,
);

macro_rules! primitive_tag {
    ($($name:ident),* $(,)?) => {
        $(
            impl PrimitiveNBT for $name {}
        )*
    };
}

primitive_tag!(Byte, Short, Int, Long, Float, Double);
