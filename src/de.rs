//! [`serde::Deserialize`] for the owned tree.
//!
//! Works with any self-describing format. Signed integers keep their width
//! (`i8` becomes `Byte`, `i16` `Short`, ...); unsigned integers become `Long`
//! and fail above `i64::MAX`. `f32` and `f64` become `Float` and `Double`,
//! strings `String`, byte buffers `ByteArray`, sequences a [`List`] (which
//! must be homogeneous) and maps a [`Compound`]. A unit or `null` only
//! deserializes into an empty [`Value`], so a compound entry may be `null`
//! (the way an empty entry serializes) while a list element or root may not.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};

use crate::{Compound, List, Tag, Value};

struct TagVisitor;

impl<'de> Visitor<'de> for TagVisitor {
    type Value = Tag;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an NBT value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Tag, E> {
        Ok(Tag::Byte(i8::from(value)))
    }

    fn visit_i8<E: de::Error>(self, value: i8) -> Result<Tag, E> {
        Ok(Tag::Byte(value))
    }

    fn visit_i16<E: de::Error>(self, value: i16) -> Result<Tag, E> {
        Ok(Tag::Short(value))
    }

    fn visit_i32<E: de::Error>(self, value: i32) -> Result<Tag, E> {
        Ok(Tag::Int(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Tag, E> {
        Ok(Tag::Long(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Tag, E> {
        i64::try_from(value)
            .map(Tag::Long)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f32<E: de::Error>(self, value: f32) -> Result<Tag, E> {
        Ok(Tag::Float(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Tag, E> {
        Ok(Tag::Double(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Tag, E> {
        Ok(Tag::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Tag, E> {
        Ok(Tag::String(value))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Tag, E> {
        Ok(Tag::ByteArray(value.iter().map(|&byte| byte as i8).collect()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Tag, A::Error> {
        let mut list = List::new();
        while let Some(tag) = seq.next_element::<Tag>()? {
            list.push(tag).map_err(de::Error::custom)?;
        }
        Ok(Tag::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Tag, A::Error> {
        let mut compound = Compound::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            compound.put(key, value);
        }
        Ok(Tag::Compound(compound))
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TagVisitor)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Tag>::deserialize(deserializer).map(Value::from)
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_seq(TagVisitor)? {
            Tag::List(list) => Ok(list),
            other => Err(de::Error::custom(format_args!(
                "expected a list, found {}",
                other.tag_id().name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_map(TagVisitor)? {
            Tag::Compound(compound) => Ok(compound),
            other => Err(de::Error::custom(format_args!(
                "expected a compound, found {}",
                other.tag_id().name()
            ))),
        }
    }
}
