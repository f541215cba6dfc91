//! Decoding for the import and export sections.
//!
//! All other sections are skipped by the module reader without interpreting
//! their payloads.
pub mod export;
pub mod import;

pub use export::{DecodeExportError, DecodeExportSectionError, Export, ExportDesc};
pub use import::{DecodeImportError, DecodeImportSectionError, Import, ImportDesc};

pub(crate) use export::decode_export_section;
pub(crate) use import::decode_import_section;
