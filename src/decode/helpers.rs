use crate::decode::integer::{DecodeU32Error, decode_u32};
use std::io;
use std::io::Read;
use thiserror::Error;

// Item counts and byte lengths are author-controlled; never reserve more than
// this up front, so a hostile count fails on the first missing element rather
// than on an allocation.
const MAX_PREALLOC: usize = 1024;

pub(crate) fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8, io::Error> {
    let mut buf = [0u8];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

#[derive(Error)]
pub enum DecodeVectorError<E> {
    #[error("failed decoding vector length")]
    DecodeLength(#[from] DecodeU32Error),

    #[error("failed parsing vector element at position {position}")]
    ParseElement { position: u32, source: E },
}

pub(crate) fn decode_vector<R, F, T, E>(
    reader: &mut R,
    mut parse_fn: F,
) -> Result<Vec<T>, DecodeVectorError<E>>
where
    R: Read + ?Sized,
    F: FnMut(&mut R) -> Result<T, E>,
{
    let len = decode_u32(reader)?;

    let mut items = Vec::with_capacity(usize::try_from(len).unwrap().min(MAX_PREALLOC));
    for i in 0..len {
        let elem = parse_fn(reader).map_err(|err| DecodeVectorError::ParseElement {
            position: i,
            source: err,
        })?;
        items.push(elem);
    }

    Ok(items)
}

// we want any DecodeVectorError::ParseElement errors to also display the inner
// error type pointed to by source.
impl<E: std::fmt::Debug> std::fmt::Debug for DecodeVectorError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeLength(e) => f.debug_tuple("DecodeLength").field(e).finish(),
            Self::ParseElement { position, source } => f
                .debug_struct("ParseElement")
                .field("position", position)
                .field(
                    "source",
                    &format_args!(
                        "{}::{source:#?}",
                        std::any::type_name::<E>()
                            .rsplit("::")
                            .next()
                            .unwrap_or_else(|| std::any::type_name::<E>())
                    ),
                )
                .finish(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeByteVectorError {
    #[error("failed decoding vector length")]
    DecodeLength(#[from] DecodeU32Error),

    #[error("failed reading vector elements")]
    ReadElements(#[from] io::Error),
}

pub(crate) fn decode_byte_vector<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<u8>, DecodeByteVectorError> {
    let len = u64::from(decode_u32(reader)?);

    // read through take() so the allocation grows with the bytes actually
    // present instead of trusting the declared length
    let mut b = Vec::with_capacity(usize::try_from(len.min(MAX_PREALLOC as u64)).unwrap());
    let got = reader.take(len).read_to_end(&mut b)?;
    if (got as u64) < len {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    Ok(b)
}

#[derive(Debug, Error)]
#[error("failed decoding name")]
pub struct DecodeNameError(#[from] pub DecodeByteVectorError);

// Names are not required to be valid UTF-8 here; malformed sequences come out
// as replacement characters. Strict validation is left to consumers.
pub(crate) fn decode_name<R: Read + ?Sized>(reader: &mut R) -> Result<String, DecodeNameError> {
    let bytes = decode_byte_vector(reader)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_length_prefixed_name() {
        let mut reader: &[u8] = &[0x03, 0x41, 0x42, 0x43, 0x00];
        assert_eq!(decode_name(&mut reader).unwrap(), "ABC");
        // exactly 4 bytes consumed
        assert_eq!(reader, &[0x00]);
    }

    #[test]
    fn decodes_empty_name() {
        let mut reader: &[u8] = &[0x00];
        assert_eq!(decode_name(&mut reader).unwrap(), "");
        assert!(reader.is_empty());
    }

    #[test]
    fn rejects_length_exceeding_input() {
        let mut reader: &[u8] = &[0x05, 0x41, 0x42];
        let err = decode_name(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            DecodeNameError(DecodeByteVectorError::ReadElements(_))
        ));
    }

    #[test]
    fn passes_through_malformed_utf8_lossily() {
        let mut reader: &[u8] = &[0x02, 0xFF, 0xFE];
        assert_eq!(decode_name(&mut reader).unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn vector_decoder_caps_preallocation() {
        // count of 2^32-1 with no elements behind it must fail, not allocate
        let mut reader: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        let err = decode_vector(&mut reader, |r| read_byte(r)).unwrap_err();
        assert!(matches!(
            err,
            DecodeVectorError::ParseElement { position: 0, .. }
        ));
    }
}
