use crate::decode::integer::{DecodeU32Error, decode_u32};
use crate::decode::read_byte;
use crate::types::limits::Limits;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseLimitsError {
    #[error("failed reading flag byte")]
    ReadFlagByte(io::Error),

    #[error("unexpected Limits flag byte: expected 0x00 or 0x01; got {0:#04X}")]
    UnexpectedFlagByte(u8),

    #[error("failed reading minimum limit")]
    ReadMinLimit(DecodeU32Error),

    #[error("failed reading maximum limit")]
    ReadMaxLimit(DecodeU32Error),
}

pub(crate) fn parse_limits<R: Read + ?Sized>(reader: &mut R) -> Result<Limits, ParseLimitsError> {
    let has_max = match read_byte(reader).map_err(ParseLimitsError::ReadFlagByte)? {
        0x00 => false,
        0x01 => true,
        n => return Err(ParseLimitsError::UnexpectedFlagByte(n)),
    };

    let min = decode_u32(reader).map_err(ParseLimitsError::ReadMinLimit)?;
    let max = if has_max {
        Some(decode_u32(reader).map_err(ParseLimitsError::ReadMaxLimit)?)
    } else {
        None
    };

    Ok(Limits { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(bytes: &[u8]) -> Result<Limits, ParseLimitsError> {
        let mut reader = bytes;
        parse_limits(&mut reader)
    }

    #[test]
    fn parses_min_only() {
        assert_eq!(
            parse_from(&[0x00, 0x01]).unwrap(),
            Limits { min: 1, max: None }
        );
    }

    #[test]
    fn parses_min_and_max() {
        assert_eq!(
            parse_from(&[0x01, 0x02, 0x05]).unwrap(),
            Limits {
                min: 2,
                max: Some(5)
            }
        );
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse_from(&[0x02, 0x01]).unwrap_err();
        assert!(matches!(err, ParseLimitsError::UnexpectedFlagByte(0x02)));
    }

    #[test]
    fn accepts_max_below_min() {
        // semantic validity is the consumer's concern
        assert_eq!(
            parse_from(&[0x01, 0x05, 0x02]).unwrap(),
            Limits {
                min: 5,
                max: Some(2)
            }
        );
    }

    #[test]
    fn rejects_truncated_minimum() {
        let err = parse_from(&[0x00]).unwrap_err();
        assert!(matches!(err, ParseLimitsError::ReadMinLimit(_)));
    }
}
