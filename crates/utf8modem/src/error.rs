use thiserror::Error;

/// The input handed to [`decode`](crate::decode) is not valid UTF-8.
///
/// One undifferentiated kind covers every malformation the decoder can see:
/// invalid lead byte, invalid continuation byte, overlong encoding, encoded
/// surrogate code point, code point above U+10FFFF, and a sequence truncated
/// by the end of input. No byte offset is reported and no partial text is
/// produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed UTF-8")]
pub struct DecodeError;
