use crate::decode::helpers::{DecodeNameError, DecodeVectorError, decode_name, decode_vector};
use crate::decode::indices::{
    DecodeFuncIdxError, DecodeGlobalIdxError, DecodeMemIdxError, DecodeTableIdxError,
};
use crate::decode::read_byte;
use crate::indices::{FuncIdx, GlobalIdx, MemIdx, TableIdx};
use std::io;
use std::io::Read;
use thiserror::Error;

/// The exports component of a module defines a set of exports that become accessible to the
/// host environment once the module has been instantiated. Exportable definitions are
/// functions, tables, memories, and globals, referenced through an index into the
/// respective index space.
///
/// <https://www.w3.org/TR/wasm-core-2/#exports>
/// <https://www.w3.org/TR/wasm-core-2/#binary-exportsec>
#[derive(Debug, PartialEq, Clone)]
pub struct Export {
    pub name: String,
    pub desc: ExportDesc,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ExportDesc {
    Func(FuncIdx),
    Table(TableIdx),
    Mem(MemIdx),
    Global(GlobalIdx),
}

#[derive(Debug, Error)]
pub enum DecodeExportSectionError {
    #[error("failed decoding Export section")]
    DecodeVector(#[from] DecodeVectorError<DecodeExportError>),
}

pub(crate) fn decode_export_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Export>, DecodeExportSectionError> {
    Ok(decode_vector(reader, parse_export)?)
}

#[derive(Debug, Error)]
pub enum DecodeExportError {
    #[error(transparent)]
    DecodeName(#[from] DecodeNameError),

    #[error("failed reading Export descriptor marker byte")]
    ReadDescriptorMarkerByte(io::Error),

    #[error(transparent)]
    DecodeFuncIdx(#[from] DecodeFuncIdxError),

    #[error(transparent)]
    DecodeTableIdx(#[from] DecodeTableIdxError),

    #[error(transparent)]
    DecodeMemIdx(#[from] DecodeMemIdxError),

    #[error(transparent)]
    DecodeGlobalIdx(#[from] DecodeGlobalIdxError),

    #[error(
        "invalid ExportDesc marker byte: expected 0x00 (func), 0x01 (table), 0x02 (mem) or 0x03 (global); got {0:#04X}"
    )]
    InvalidDescriptorMarkerByte(u8),
}

fn parse_export<R: Read + ?Sized>(reader: &mut R) -> Result<Export, DecodeExportError> {
    let name = decode_name(reader)?;

    let desc_kind = read_byte(reader).map_err(DecodeExportError::ReadDescriptorMarkerByte)?;
    let desc = match desc_kind {
        0x00 => ExportDesc::Func(FuncIdx::decode(reader)?),
        0x01 => ExportDesc::Table(TableIdx::decode(reader)?),
        0x02 => ExportDesc::Mem(MemIdx::decode(reader)?),
        0x03 => ExportDesc::Global(GlobalIdx::decode(reader)?),
        n => return Err(DecodeExportError::InvalidDescriptorMarkerByte(n)),
    };

    Ok(Export { name, desc })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_function_export() {
        let mut reader: &[u8] = &[0x03, b'a', b'd', b'd', 0x00, 0x00];
        assert_eq!(
            parse_export(&mut reader).unwrap(),
            Export {
                name: "add".to_owned(),
                desc: ExportDesc::Func(FuncIdx(0)),
            }
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn parses_section_in_declaration_order() {
        let mut reader: &[u8] = &[
            0x02, // count
            0x01, b'a', 0x03, 0x00, // global 0
            0x01, b'b', 0x03, 0x01, // global 1
        ];
        let exports = decode_export_section(&mut reader).unwrap();
        assert_eq!(exports.len(), 2);
        assert_eq!(exports[0].desc, ExportDesc::Global(GlobalIdx(0)));
        assert_eq!(exports[1].desc, ExportDesc::Global(GlobalIdx(1)));
    }

    #[test]
    fn rejects_unknown_descriptor_marker() {
        let mut reader: &[u8] = &[0x01, b'x', 0x05, 0x00];
        let err = parse_export(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            DecodeExportError::InvalidDescriptorMarkerByte(0x05)
        ));
    }

    #[test]
    fn rejects_truncated_index() {
        let mut reader: &[u8] = &[0x01, b'x', 0x00];
        let err = parse_export(&mut reader).unwrap_err();
        assert!(matches!(err, DecodeExportError::DecodeFuncIdx(_)));
    }
}
