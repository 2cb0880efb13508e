#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Byte order of the numeric fields in the binary format.
///
/// [`BigEndian`](crate::BigEndian) is the Java edition layout,
/// [`LittleEndian`](crate::LittleEndian) the Bedrock one.
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}
