/// Builds a [`Compound`](crate::Compound) from `key => value` pairs.
///
/// Values go through [`Into<Value>`](crate::Value), so plain numbers, strings,
/// lists, compounds and tags all work. A key given twice keeps its last value.
///
/// ```
/// use nbt_tree::{List, TagID, compound, tag};
///
/// let comp = compound! {
///     "foo" => 12i16,
///     "bar" => "baz",
///     "baz" => -2.0,
///     "list" => List::of::<tag::Byte>([16i8, 17]),
///     "quux" => compound! { "Hello" => "World", "zero" => 0 },
/// };
///
/// assert_eq!(comp.len(), 5);
/// assert_eq!(comp.at("foo").unwrap().tag_id(), TagID::Short);
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut compound = $crate::Compound::new();
        $(
            compound.put($key, $value);
        )+
        compound
    }};
}
