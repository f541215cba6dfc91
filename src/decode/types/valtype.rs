use crate::decode::FromMarkerByte;
use crate::decode::read_byte;
use crate::types::numtype::NumType;
use crate::types::reftype::RefType;
use crate::types::valtype::ValType;
use phf::phf_ordered_map;
use std::io::{self, Read};
use thiserror::Error;

// Valid marker bytes for [ValType].
#[expect(non_upper_case_globals)]
static ValType_MARKERS: phf::OrderedMap<u8, ValType> = phf_ordered_map! {
    0x7Fu8 => ValType::Num(NumType::Int32),
    0x7Eu8 => ValType::Num(NumType::Int64),
    0x7Du8 => ValType::Num(NumType::Float32),
    0x7Cu8 => ValType::Num(NumType::Float64),
    0x70u8 => ValType::Ref(RefType::Func),
    0x6Fu8 => ValType::Ref(RefType::Extern),
};

#[derive(Debug, Error)]
#[error(
    "invalid ValType marker byte - expected one of {markers}; got {0:#04X}",
    markers = ValType::markers_formatted()
)]
pub struct InvalidValTypeMarkerError(pub u8);

impl From<u8> for InvalidValTypeMarkerError {
    fn from(b: u8) -> Self {
        Self(b)
    }
}

#[derive(Debug, Error)]
pub enum DecodeValTypeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    InvalidMarkerByte(#[from] InvalidValTypeMarkerError),
}

impl ValType {
    pub(crate) fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, DecodeValTypeError> {
        Ok(Self::from_marker(read_byte(reader)?)?)
    }
}

impl FromMarkerByte for ValType {
    type Error = InvalidValTypeMarkerError;

    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &ValType_MARKERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_from(bytes: &[u8]) -> Result<ValType, DecodeValTypeError> {
        let mut reader = bytes;
        ValType::decode(&mut reader)
    }

    #[test]
    fn decodes_number_types() {
        assert_eq!(decode_from(&[0x7F]).unwrap(), ValType::Num(NumType::Int32));
        assert_eq!(decode_from(&[0x7E]).unwrap(), ValType::Num(NumType::Int64));
        assert_eq!(
            decode_from(&[0x7D]).unwrap(),
            ValType::Num(NumType::Float32)
        );
        assert_eq!(
            decode_from(&[0x7C]).unwrap(),
            ValType::Num(NumType::Float64)
        );
    }

    #[test]
    fn decodes_reference_types() {
        assert_eq!(decode_from(&[0x70]).unwrap(), ValType::Ref(RefType::Func));
        assert_eq!(decode_from(&[0x6F]).unwrap(), ValType::Ref(RefType::Extern));
    }

    #[test]
    fn rejects_unknown_marker() {
        // v128 is not part of this crate's type universe
        let err = decode_from(&[0x7B]).unwrap_err();
        assert!(matches!(err, DecodeValTypeError::InvalidMarkerByte(_)));
    }
}
