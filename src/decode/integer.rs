//! Decoding of LEB128-encoded unsigned integers.
//!
//! <https://en.wikipedia.org/wiki/LEB128>
use crate::decode::read_byte;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeU32Error {
    #[error("uint32 too large")]
    TooLarge,

    #[error("uint32 representation too long")]
    RepresentationTooLong,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub(crate) fn decode_u32<R: io::Read + ?Sized>(reader: &mut R) -> Result<u32, DecodeU32Error> {
    let mut result: u32 = 0;
    let mut shift: u8 = 0;

    // 5 == ceil(32/7)
    for i in 1..=5 {
        let byte = read_byte(reader)?;

        result |= u32::from(byte & 0b0111_1111 /* 0x7F */) << shift;

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit == 0 {
            if i == 5 && (byte & 0b1111_0000/* 0xF0 */) != 0 {
                // at byte 5, 4*7=28 payload bits have been consumed, leaving
                // no more than 32-28=4 bits for the rest of the payload.
                // Anything beyond those 4 bits pushes the value past u32 range.
                return Err(DecodeU32Error::TooLarge);
            }
            return Ok(result);
        }

        // payload is encoded in groups of 7 bits; move to the next one
        shift += 7;
    }

    Err(DecodeU32Error::RepresentationTooLong)
}
