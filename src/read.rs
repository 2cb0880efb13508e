//! Decoding the binary format.
//!
//! [`Reader`] pulls bytes from any [`std::io::Read`] and rebuilds owned
//! [`Tag`]s. Decoding is all-or-nothing: a subtree is only returned once every
//! byte of it has been read and validated, so a failure never yields a
//! partially filled list or compound.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{BigEndian, Tag, from_slice};
//!
//! let data = [
//!     0x0a, 0x00, 0x00, // root compound, empty name
//!     0x03, 0x00, 0x04, b'z', b'e', b'r', b'o', 0x00, 0x00, 0x00, 0x00,
//!     0x00, // End
//! ];
//!
//! let (name, root) = from_slice::<BigEndian>(&data)?;
//! assert_eq!(name, "");
//! let Tag::Compound(root) = root else { unreachable!() };
//! assert_eq!(root.at("zero")?, &Tag::Int(0));
//! # Ok::<(), nbt_tree::Error>(())
//! ```

use std::{io::Read, marker::PhantomData, mem};

use zerocopy::byteorder;

use crate::{ByteOrder, Compound, Error, List, Result, Tag, TagID, Value, cold_path};

/// Nesting limit applied by [`Reader::new`].
///
/// Writing, cloning and dropping a tree recurse; trees within this limit fit
/// a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Upper bound on elements reserved up front for a list, whatever its
/// declared length.
const PREALLOC_LIMIT: usize = 1024;

pub struct Reader<R, O: ByteOrder> {
    inner: R,
    max_depth: usize,
    _marker: PhantomData<O>,
}

impl<R: Read, O: ByteOrder> Reader<R, O> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            max_depth: DEFAULT_MAX_DEPTH,
            _marker: PhantomData,
        }
    }

    /// Sets how many lists and compounds may nest inside each other.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads a root document: type id, name and payload.
    pub fn read_named(&mut self) -> Result<(String, Tag)> {
        let tag_id = self.read_type(false)?;
        let name = self.read_string()?;
        log::trace!("reading root {} {name:?}", tag_id.name());
        let tag = self.read_payload(tag_id)?;
        Ok((name, tag))
    }

    /// Reads one type id byte. `End` is only accepted with `allow_end`.
    pub fn read_type(&mut self, allow_end: bool) -> Result<TagID> {
        let [byte] = self.read_bytes::<1>()?;
        let tag_id = TagID::try_from(byte).inspect_err(|_| {
            cold_path();
            log::debug!("rejecting unknown tag type {byte:#04x}");
        })?;
        if tag_id == TagID::End && !allow_end {
            cold_path();
            return Err(Error::UnexpectedEnd);
        }
        Ok(tag_id)
    }

    /// Reads a 16-bit length prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        let len = byteorder::U16::<O>::from_bytes(self.read_bytes()?).get() as usize;
        let bytes = self.read_exact_vec(len)?;
        String::from_utf8(bytes).map_err(|_| {
            cold_path();
            log::debug!("rejecting string that is not UTF-8");
            Error::InvalidString
        })
    }

    /// Reads the payload of a tag whose type id is already known.
    ///
    /// Lists and compounds are decoded with an explicit stack of open
    /// containers, so nesting costs heap, not call stack.
    pub fn read_payload(&mut self, tag_id: TagID) -> Result<Tag> {
        if !tag_id.is_composite() {
            return self.read_leaf(tag_id);
        }
        let mut current = self.open(tag_id, 1)?;
        let mut parents: Vec<Frame> = Vec::new();
        loop {
            match self.next_child(&mut current)? {
                Some(child) if child.is_composite() => {
                    let opened = self.open(child, parents.len() + 2)?;
                    parents.push(mem::replace(&mut current, opened));
                }
                Some(child) => {
                    let tag = self.read_leaf(child)?;
                    current.push(tag);
                }
                None => {
                    let tag = current.finish();
                    match parents.pop() {
                        Some(parent) => {
                            current = parent;
                            current.push(tag);
                        }
                        None => return Ok(tag),
                    }
                }
            }
        }
    }

    fn read_leaf(&mut self, tag_id: TagID) -> Result<Tag> {
        Ok(match tag_id {
            TagID::End => {
                cold_path();
                return Err(Error::UnexpectedEnd);
            }
            TagID::Byte => Tag::Byte(i8::from_be_bytes(self.read_bytes()?)),
            TagID::Short => Tag::Short(byteorder::I16::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Int => Tag::Int(byteorder::I32::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Long => Tag::Long(byteorder::I64::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Float => Tag::Float(byteorder::F32::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Double => {
                Tag::Double(byteorder::F64::<O>::from_bytes(self.read_bytes()?).get())
            }
            TagID::ByteArray => {
                let len = self.read_len()?;
                let bytes = self.read_exact_vec(len)?;
                Tag::ByteArray(bytes.into_iter().map(|byte| byte as i8).collect())
            }
            TagID::String => Tag::String(self.read_string()?),
            TagID::List | TagID::Compound => return self.read_payload(tag_id),
            TagID::IntArray => {
                let len = self.read_len()?;
                let size = len.checked_mul(4).ok_or(Error::LengthTooLong(len))?;
                let bytes = self.read_exact_vec(size)?;
                Tag::IntArray(
                    bytes
                        .chunks_exact(4)
                        .map(|c| byteorder::I32::<O>::from_bytes([c[0], c[1], c[2], c[3]]).get())
                        .collect(),
                )
            }
        })
    }

    /// Reads a list header, or starts a compound, as container number `depth`
    /// on the path from the root.
    fn open(&mut self, tag_id: TagID, depth: usize) -> Result<Frame> {
        if depth > self.max_depth {
            cold_path();
            log::debug!("rejecting tree nested deeper than {}", self.max_depth);
            return Err(Error::DepthLimitExceeded(self.max_depth));
        }
        if tag_id == TagID::Compound {
            return Ok(Frame::Compound {
                compound: Compound::new(),
                key: String::new(),
            });
        }
        let el_type = self.read_type(true)?;
        let len = self.read_len()?;
        if el_type == TagID::End && len > 0 {
            cold_path();
            log::debug!("rejecting list of {len} End tags");
            return Err(Error::UnexpectedEnd);
        }
        Ok(Frame::List {
            el_type,
            len,
            values: Vec::with_capacity(len.min(PREALLOC_LIMIT)),
        })
    }

    /// Type id of the next child of `frame`, or `None` once it is complete.
    /// For a compound this consumes the entry header.
    fn next_child(&mut self, frame: &mut Frame) -> Result<Option<TagID>> {
        match frame {
            Frame::List {
                el_type,
                len,
                values,
            } => Ok((values.len() < *len).then_some(*el_type)),
            Frame::Compound { key, .. } => {
                let tag_id = self.read_type(true)?;
                if tag_id == TagID::End {
                    return Ok(None);
                }
                *key = self.read_string()?;
                Ok(Some(tag_id))
            }
        }
    }

    /// Reads a signed 32-bit element count.
    fn read_len(&mut self) -> Result<usize> {
        let len = byteorder::I32::<O>::from_bytes(self.read_bytes()?).get();
        usize::try_from(len).map_err(|_| {
            cold_path();
            log::debug!("rejecting negative length {len}");
            Error::NegativeLength(len)
        })
    }

    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Reads exactly `len` bytes, growing the buffer only as data arrives.
    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT * 8));
        self.inner.by_ref().take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            cold_path();
            return Err(Error::EndOfFile);
        }
        Ok(buf)
    }
}

/// A list or compound whose children are still being read.
enum Frame {
    List {
        el_type: TagID,
        len: usize,
        values: Vec<Value>,
    },
    Compound {
        compound: Compound,
        /// Name of the entry being read.
        key: String,
    },
}

impl Frame {
    fn push(&mut self, tag: Tag) {
        match self {
            Frame::List { values, .. } => values.push(Value::from(tag)),
            Frame::Compound { compound, key } => {
                compound.put(mem::take(key), tag);
            }
        }
    }

    fn finish(self) -> Tag {
        match self {
            Frame::List {
                el_type, values, ..
            } => Tag::List(List::from_raw(el_type, values)),
            Frame::Compound { compound, .. } => Tag::Compound(compound),
        }
    }
}

impl Tag {
    /// Decodes the payload of a `tag_id` tag from `reader`.
    pub fn read_payload<O: ByteOrder>(tag_id: TagID, reader: &mut impl Read) -> Result<Tag> {
        Reader::<_, O>::new(reader).read_payload(tag_id)
    }
}

/// Reads a root document (type id, name, payload) from `reader`.
pub fn from_reader<O: ByteOrder>(reader: impl Read) -> Result<(String, Tag)> {
    Reader::<_, O>::new(reader).read_named()
}

/// Reads a root document that must span all of `data`.
pub fn from_slice<O: ByteOrder>(data: &[u8]) -> Result<(String, Tag)> {
    let mut rest = data;
    let document = Reader::<_, O>::new(&mut rest).read_named()?;
    if !rest.is_empty() {
        cold_path();
        return Err(Error::TrailingData(rest.len()));
    }
    Ok(document)
}

/// Reads a root document whose root tag must be a compound.
pub fn read_compound<O: ByteOrder>(reader: impl Read) -> Result<(String, Compound)> {
    let (name, tag) = from_reader::<O>(reader)?;
    match tag {
        Tag::Compound(compound) => Ok((name, compound)),
        other => Err(Error::mismatch(TagID::Compound, other.tag_id())),
    }
}
