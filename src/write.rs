use std::{io::Write, marker::PhantomData};

use zerocopy::{IntoBytes, byteorder};

use crate::{ByteOrder, Compound, Error, List, Result, Tag, TagID, cold_path};

/// Encodes tags into any [`std::io::Write`].
///
/// Compound entries are written named (type id, name, payload) and closed
/// with a single `End` byte; list elements are written as bare payloads after
/// the list's element type id and count.
///
/// Trees are checked while they are written. When encoding fails partway,
/// for instance on an empty [`Value`](crate::Value) inside a compound, the
/// bytes already written stay in the sink; [`to_vec`] drops its buffer.
///
/// # Example
///
/// ```
/// use nbt_tree::{BigEndian, Writer, compound, Tag};
///
/// let mut writer = Writer::<_, BigEndian>::new(Vec::new());
/// writer.write_payload(&Tag::Compound(compound! { "zero" => 0 }))?;
///
/// assert_eq!(
///     writer.into_inner(),
///     [0x03, 0x00, 0x04, b'z', b'e', b'r', b'o', 0x00, 0x00, 0x00, 0x00, 0x00]
/// );
/// # Ok::<(), nbt_tree::Error>(())
/// ```
pub struct Writer<W, O: ByteOrder> {
    inner: W,
    _marker: PhantomData<O>,
}

impl<W: Write, O: ByteOrder> Writer<W, O> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes a root document: type id, name and payload.
    pub fn write_named(&mut self, name: &str, tag: &Tag) -> Result<()> {
        log::trace!("writing root {} {name:?}", tag.tag_id().name());
        self.write_entry(name, tag)
    }

    #[inline]
    pub fn write_type(&mut self, tag_id: TagID) -> Result<()> {
        self.inner.write_all(&[tag_id as u8])?;
        Ok(())
    }

    /// Writes a 16-bit length prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let len = u16::try_from(value.len()).map_err(|_| {
            cold_path();
            Error::StringTooLong(value.len())
        })?;
        self.inner.write_all(&byteorder::U16::<O>::new(len).to_bytes())?;
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    pub fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::Byte(value) => self.inner.write_all(&value.to_be_bytes())?,
            Tag::Short(value) => self
                .inner
                .write_all(&byteorder::I16::<O>::new(*value).to_bytes())?,
            Tag::Int(value) => self
                .inner
                .write_all(&byteorder::I32::<O>::new(*value).to_bytes())?,
            Tag::Long(value) => self
                .inner
                .write_all(&byteorder::I64::<O>::new(*value).to_bytes())?,
            Tag::Float(value) => self
                .inner
                .write_all(&byteorder::F32::<O>::new(*value).to_bytes())?,
            Tag::Double(value) => self
                .inner
                .write_all(&byteorder::F64::<O>::new(*value).to_bytes())?,
            Tag::ByteArray(values) => {
                self.write_len(values.len())?;
                self.inner.write_all(values.as_bytes())?;
            }
            Tag::String(value) => self.write_string(value)?,
            Tag::List(list) => self.write_list(list)?,
            Tag::Compound(compound) => self.write_compound(compound)?,
            Tag::IntArray(values) => {
                self.write_len(values.len())?;
                let values: Vec<byteorder::I32<O>> =
                    values.iter().map(|&value| byteorder::I32::new(value)).collect();
                self.inner.write_all(values.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_entry(&mut self, name: &str, tag: &Tag) -> Result<()> {
        self.write_type(tag.tag_id())?;
        self.write_string(name)?;
        self.write_payload(tag)
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        let el_type = list.el_type();
        self.write_type(el_type)?;
        self.write_len(list.len())?;
        for value in list {
            let tag = match value.tag() {
                Some(tag) if tag.tag_id() == el_type => tag,
                _ => {
                    cold_path();
                    return Err(Error::mismatch(el_type, value.tag_id()));
                }
            };
            self.write_payload(tag)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, value) in compound {
            let Some(tag) = value.tag() else {
                cold_path();
                return Err(Error::UnexpectedEnd);
            };
            self.write_entry(name, tag)?;
        }
        self.write_type(TagID::End)
    }

    /// Writes a signed 32-bit element count.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| {
            cold_path();
            Error::LengthTooLong(len)
        })?;
        self.inner.write_all(&byteorder::I32::<O>::new(len).to_bytes())?;
        Ok(())
    }
}

impl Tag {
    /// Encodes this tag's payload, without type id or name, into `writer`.
    pub fn write_payload<O: ByteOrder>(&self, writer: &mut impl Write) -> Result<()> {
        Writer::<_, O>::new(writer).write_payload(self)
    }
}

/// Writes `tag` as a root document named `name`.
///
/// On error `writer` may hold a truncated document.
pub fn to_writer<O: ByteOrder>(writer: impl Write, name: &str, tag: &Tag) -> Result<()> {
    Writer::<_, O>::new(writer).write_named(name, tag)
}

/// Encodes `tag` as a root document named `name`.
pub fn to_vec<O: ByteOrder>(name: &str, tag: &Tag) -> Result<Vec<u8>> {
    let mut writer = Writer::<_, O>::new(Vec::new());
    writer.write_named(name, tag)?;
    Ok(writer.into_inner())
}
