//! A reader for the import/export surface of WebAssembly modules in the
//! binary format.
//!
//! Only the module header and the import and export sections are decoded;
//! every other section is skipped by its declared size without interpreting
//! its payload. This is enough to enumerate the external capabilities a
//! module requires and the definitions it makes accessible, for example when
//! generating host bindings.
//!
//! The main entry point is the [`read_module()`] function, which takes the
//! complete module as an in-memory byte buffer:
//!
//! ```
//! let wasm = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
//! let module = wasurf::read_module(&wasm)?;
//! assert_eq!(module.version, 1);
//! assert!(module.imports.is_empty() && module.exports.is_empty());
//! # Ok::<(), wasurf::ReadModuleError>(())
//! ```
//!
//! The companion [`embed`] module encodes arbitrary byte payloads as
//! printable strings for embedding inside generated source text.
//!
//! Binary format: <https://www.w3.org/TR/wasm-core-2/#binary-format>
#![forbid(unsafe_code)]

pub mod decode;
pub mod embed;
pub mod indices;
pub mod types;

pub use crate::decode::sections::{Export, ExportDesc, Import, ImportDesc};

use crate::decode::integer::{DecodeU32Error, decode_u32};
use crate::decode::sections::{
    DecodeExportSectionError, DecodeImportSectionError, decode_export_section,
    decode_import_section,
};
use thiserror::Error;

const MAGIC_NUMBER: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

const IMPORT_SECTION_ID: u8 = 2;
const EXPORT_SECTION_ID: u8 = 7;

/// The decoded surface of a WebAssembly module: its format version and the
/// imports and exports it declares, in declaration order.
///
/// Duplicate entries are preserved as declared; nothing is deduplicated.
///
/// <https://www.w3.org/TR/wasm-core-2/#modules>
/// <https://www.w3.org/TR/wasm-core-2/#binary-module>
#[derive(Debug, PartialEq, Clone)]
pub struct Module {
    /// The format version, read as a little-endian u32 without a range check.
    pub version: u32,

    /// The imports component of a module defines a set of imports that are
    /// required for instantiation, each labeled by a two-level name space.
    ///
    /// <https://www.w3.org/TR/wasm-core-2/#binary-importsec>
    pub imports: Vec<Import>,

    /// The exports component of a module defines a set of exports that become
    /// accessible to the host environment once the module has been
    /// instantiated.
    ///
    /// <https://www.w3.org/TR/wasm-core-2/#binary-exportsec>
    pub exports: Vec<Export>,
}

/// The top-level error that may occur when attempting to read a module's
/// surface.
#[derive(Debug, Error)]
pub enum ReadModuleError {
    #[error("invalid module head: expected at least 8 bytes; got {0}")]
    InvalidHead(usize),

    #[error("invalid wasm magic: expected {expected:#04X?}; got {got:#04X?}", expected = MAGIC_NUMBER)]
    InvalidMagic { got: [u8; 4] },

    #[error("invalid section size")]
    InvalidSectionSize(#[source] DecodeU32Error),

    #[error("incomplete section (id {id:#04X}): declared {declared} bytes; {remaining} remaining")]
    IncompleteSection {
        id: u8,
        declared: u32,
        remaining: usize,
    },

    #[error("multiple import sections")]
    MultipleImportSections,

    #[error("invalid import section")]
    InvalidImportSection(#[source] DecodeImportSectionError),

    #[error("import section size unmatch: declared {declared} bytes; {trailing} left undecoded")]
    ImportSectionSizeUnmatch { declared: u32, trailing: usize },

    #[error("multiple export sections")]
    MultipleExportSections,

    #[error("invalid export section")]
    InvalidExportSection(#[source] DecodeExportSectionError),

    #[error("export section size unmatch: declared {declared} bytes; {trailing} left undecoded")]
    ExportSectionSizeUnmatch { declared: u32, trailing: usize },
}

/// Read the surface of the WebAssembly module contained in `buf`.
///
/// `buf` must hold one complete module; streaming or partial input is not
/// supported. Sections other than import (id 2) and export (id 7) are skipped
/// by their declared size, including unknown and custom section ids. Absent
/// import/export sections yield empty vectors.
///
/// On failure no partial module is returned.
pub fn read_module(buf: &[u8]) -> Result<Module, ReadModuleError> {
    if buf.len() < 8 {
        return Err(ReadModuleError::InvalidHead(buf.len()));
    }
    if buf[..4] != MAGIC_NUMBER {
        return Err(ReadModuleError::InvalidMagic {
            got: buf[..4].try_into().unwrap(),
        });
    }
    let version = u32::from_le_bytes(buf[4..8].try_into().unwrap());

    let mut imports: Option<Vec<Import>> = None;
    let mut exports: Option<Vec<Export>> = None;

    let mut pos = 8;
    while pos < buf.len() {
        let id = buf[pos];
        pos += 1;

        let mut size_reader = &buf[pos..];
        let size = decode_u32(&mut size_reader).map_err(ReadModuleError::InvalidSectionSize)?;
        pos = buf.len() - size_reader.len();

        let payload_len = usize::try_from(size).unwrap();
        if buf.len() - pos < payload_len {
            return Err(ReadModuleError::IncompleteSection {
                id,
                declared: size,
                remaining: buf.len() - pos,
            });
        }
        let payload = &buf[pos..pos + payload_len];
        pos += payload_len;

        match id {
            IMPORT_SECTION_ID => {
                if imports.is_some() {
                    return Err(ReadModuleError::MultipleImportSections);
                }

                let mut section_reader = payload;
                let items = decode_import_section(&mut section_reader)
                    .map_err(ReadModuleError::InvalidImportSection)?;

                // section sizes are self-describing; trailing payload bytes
                // indicate a malformed module
                if !section_reader.is_empty() {
                    return Err(ReadModuleError::ImportSectionSizeUnmatch {
                        declared: size,
                        trailing: section_reader.len(),
                    });
                }
                imports = Some(items);
            }
            EXPORT_SECTION_ID => {
                if exports.is_some() {
                    return Err(ReadModuleError::MultipleExportSections);
                }

                let mut section_reader = payload;
                let items = decode_export_section(&mut section_reader)
                    .map_err(ReadModuleError::InvalidExportSection)?;

                if !section_reader.is_empty() {
                    return Err(ReadModuleError::ExportSectionSizeUnmatch {
                        declared: size,
                        trailing: section_reader.len(),
                    });
                }
                exports = Some(items);
            }
            _ => {
                // out of scope; the payload bytes were already skipped above
            }
        }
    }

    Ok(Module {
        version,
        imports: imports.unwrap_or_default(),
        exports: exports.unwrap_or_default(),
    })
}
