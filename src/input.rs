use crate::compat::{Cow, String, Vec};

/// A source of URL characters: narrow (UTF-8 bytes) or wide (UTF-16 units).
///
/// Every constructor that takes input is generic over this trait, so the
/// canonicalizer itself only ever sees `&str`.
pub trait UrlInput {
    /// View the input as UTF-8, borrowing when it already is.
    ///
    /// Invalid UTF-8 sequences and unpaired surrogates become U+FFFD, which
    /// the canonicalizer then percent-encodes like any other non-ASCII
    /// character.
    fn to_utf8(&self) -> Cow<'_, str>;
}

impl UrlInput for str {
    fn to_utf8(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl UrlInput for String {
    fn to_utf8(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl UrlInput for [u8] {
    fn to_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl UrlInput for Vec<u8> {
    fn to_utf8(&self) -> Cow<'_, str> {
        self.as_slice().to_utf8()
    }
}

impl UrlInput for [u16] {
    fn to_utf8(&self) -> Cow<'_, str> {
        Cow::Owned(
            char::decode_utf16(self.iter().copied())
                .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
        )
    }
}

impl UrlInput for Vec<u16> {
    fn to_utf8(&self) -> Cow<'_, str> {
        self.as_slice().to_utf8()
    }
}

impl<T: UrlInput + ?Sized> UrlInput for &T {
    fn to_utf8(&self) -> Cow<'_, str> {
        (**self).to_utf8()
    }
}
