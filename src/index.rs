mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A lookup into a [`Value`](crate::Value): a position selects a
/// [`List`](crate::List) element, a string selects a
/// [`Compound`](crate::Compound) entry.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn key(&self) -> Key<'_>;
}

#[doc(hidden)]
#[derive(Clone, Copy, Debug)]
pub enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

impl Index for usize {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Position(*self)
    }
}

impl Index for str {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self)
    }
}

impl Index for String {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self.as_str())
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn key(&self) -> Key<'_> {
        (**self).key()
    }
}
