//! [`serde::Serialize`] for the owned tree.
//!
//! | NBT Tag | serde data model |
//! |---------|------------------|
//! | `Byte` .. `Double` | `i8`, `i16`, `i32`, `i64`, `f32`, `f64` |
//! | `String` | `str` |
//! | `ByteArray`, `IntArray`, `List` | seq |
//! | `Compound` | map, in key order |
//! | empty [`Value`] | unit |

use serde::{Serialize, Serializer};

use crate::{Compound, List, Tag, Value};

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tag::Byte(value) => serializer.serialize_i8(*value),
            Tag::Short(value) => serializer.serialize_i16(*value),
            Tag::Int(value) => serializer.serialize_i32(*value),
            Tag::Long(value) => serializer.serialize_i64(*value),
            Tag::Float(value) => serializer.serialize_f32(*value),
            Tag::Double(value) => serializer.serialize_f64(*value),
            Tag::ByteArray(values) => serializer.collect_seq(values),
            Tag::String(value) => serializer.serialize_str(value),
            Tag::List(list) => list.serialize(serializer),
            Tag::Compound(compound) => compound.serialize(serializer),
            Tag::IntArray(values) => serializer.collect_seq(values),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.tag() {
            Some(tag) => tag.serialize(serializer),
            None => serializer.serialize_unit(),
        }
    }
}

impl Serialize for List {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl Serialize for Compound {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self)
    }
}
