use crate::decode::helpers::{DecodeNameError, DecodeVectorError, decode_name, decode_vector};
use crate::decode::indices::DecodeTypeIdxError;
use crate::decode::read_byte;
use crate::decode::types::memtype::parse_memtype;
use crate::decode::types::{DecodeGlobalTypeError, DecodeMemoryTypeError, DecodeTableTypeError};
use crate::indices::TypeIdx;
use crate::types::globaltype::GlobalType;
use crate::types::memtype::MemType;
use crate::types::tabletype::TableType;
use std::io;
use std::io::Read;
use thiserror::Error;

/// The imports component of a module defines a set of imports that are required for
/// instantiation. Each import is labeled by a two-level name space, consisting of a module
/// name and a name for an entity within that module. Importable definitions are functions,
/// tables, memories, and globals. Imports appear in declaration order and the same module
/// name may repeat across entries.
///
/// <https://www.w3.org/TR/wasm-core-2/#imports>
/// <https://www.w3.org/TR/wasm-core-2/#binary-importsec>
#[derive(Debug, PartialEq, Clone)]
pub struct Import {
    pub module: String,
    pub name: String,
    pub desc: ImportDesc,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ImportDesc {
    Func(TypeIdx),
    Table(TableType),
    Mem(MemType),
    Global(GlobalType),
}

#[derive(Debug, Error)]
pub enum DecodeImportSectionError {
    #[error("failed decoding Import section")]
    DecodeVector(#[from] DecodeVectorError<DecodeImportError>),
}

pub(crate) fn decode_import_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Import>, DecodeImportSectionError> {
    Ok(decode_vector(reader, parse_import)?)
}

#[derive(Debug, Error)]
pub enum DecodeImportError {
    #[error("failed decoding module name")]
    DecodeModuleName(DecodeNameError),

    #[error("failed decoding entity name")]
    DecodeName(DecodeNameError),

    #[error("failed reading Import descriptor marker byte")]
    ReadDescriptorMarkerByte(io::Error),

    #[error(transparent)]
    DecodeTypeIdx(#[from] DecodeTypeIdxError),

    #[error(transparent)]
    DecodeTableType(#[from] DecodeTableTypeError),

    #[error(transparent)]
    DecodeMemType(#[from] DecodeMemoryTypeError),

    #[error(transparent)]
    DecodeGlobalType(#[from] DecodeGlobalTypeError),

    #[error(
        "invalid ImportDesc marker byte: expected 0x00 (func), 0x01 (table), 0x02 (mem) or 0x03 (global); got {0:#04X}"
    )]
    InvalidDescriptorMarkerByte(u8),
}

fn parse_import<R: Read + ?Sized>(reader: &mut R) -> Result<Import, DecodeImportError> {
    let module = decode_name(reader).map_err(DecodeImportError::DecodeModuleName)?;
    let name = decode_name(reader).map_err(DecodeImportError::DecodeName)?;

    let desc_kind = read_byte(reader).map_err(DecodeImportError::ReadDescriptorMarkerByte)?;
    let desc = match desc_kind {
        0x00 => ImportDesc::Func(TypeIdx::decode(reader)?),
        0x01 => ImportDesc::Table(TableType::decode(reader)?),
        0x02 => ImportDesc::Mem(parse_memtype(reader)?),
        0x03 => ImportDesc::Global(GlobalType::decode(reader)?),
        n => return Err(DecodeImportError::InvalidDescriptorMarkerByte(n)),
    };

    Ok(Import { module, name, desc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::limits::Limits;

    #[test]
    fn parses_function_import() {
        // "env"."f" func (typeidx 2)
        let mut reader: &[u8] = &[0x03, b'e', b'n', b'v', 0x01, b'f', 0x00, 0x02];
        assert_eq!(
            parse_import(&mut reader).unwrap(),
            Import {
                module: "env".to_owned(),
                name: "f".to_owned(),
                desc: ImportDesc::Func(TypeIdx(2)),
            }
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn parses_memory_import() {
        let mut reader: &[u8] = &[0x01, b'm', 0x03, b'm', b'e', b'm', 0x02, 0x00, 0x10];
        assert_eq!(
            parse_import(&mut reader).unwrap(),
            Import {
                module: "m".to_owned(),
                name: "mem".to_owned(),
                desc: ImportDesc::Mem(MemType {
                    limits: Limits { min: 16, max: None }
                }),
            }
        );
    }

    #[test]
    fn rejects_unknown_descriptor_marker() {
        let mut reader: &[u8] = &[0x00, 0x00, 0x04, 0x00];
        let err = parse_import(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            DecodeImportError::InvalidDescriptorMarkerByte(0x04)
        ));
    }

    #[test]
    fn rejects_truncated_descriptor() {
        // func import whose type index is missing
        let mut reader: &[u8] = &[0x00, 0x00, 0x00];
        let err = parse_import(&mut reader).unwrap_err();
        assert!(matches!(err, DecodeImportError::DecodeTypeIdx(_)));
    }

    #[test]
    fn section_decoder_requires_the_declared_count() {
        // declares two imports, provides one
        let mut reader: &[u8] = &[0x02, 0x00, 0x00, 0x00, 0x00];
        let err = decode_import_section(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            DecodeImportSectionError::DecodeVector(DecodeVectorError::ParseElement {
                position: 1,
                ..
            })
        ));
    }
}
