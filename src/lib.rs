//! Owned, type-checked NBT (Named Binary Tag) trees and their binary codec.
//!
//! The tree is built from [`Tag`]s held by [`Value`] slots. [`Compound`] maps
//! names to values in sorted key order and [`List`] keeps a sequence of values
//! of a single type. Every access that expects a particular type checks it and
//! fails with [`Error::TypeMismatch`] instead of coercing.
//!
//! The codec in [`read`] and [`write`] maps trees to the binary format, with
//! the byte order chosen by a type parameter ([`BigEndian`] for Java edition
//! files, [`LittleEndian`] for Bedrock).
//!
//! # Example
//!
//! ```
//! use nbt_tree::{BigEndian, List, Tag, compound, from_slice, tag, to_vec};
//!
//! let mut level = compound! {
//!     "name" => "world",
//!     "seed" => 42i64,
//! };
//! level.put("spawn", List::of::<tag::Int>([0, 64, 0]));
//!
//! let bytes = to_vec::<BigEndian>("", &Tag::Compound(level.clone()))?;
//! let (_, decoded) = from_slice::<BigEndian>(&bytes)?;
//! assert_eq!(decoded, Tag::Compound(level));
//! # Ok::<(), nbt_tree::Error>(())
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

#[cfg(feature = "serde")]
mod de;
mod error;
mod index;
mod macros;
pub mod nbt;
mod owned;
pub mod read;
#[cfg(feature = "serde")]
mod ser;
mod util;
pub mod write;

pub use error::*;
pub use index::*;
pub use nbt::*;
pub use owned::*;
pub use read::*;
pub use util::*;
pub use write::*;
