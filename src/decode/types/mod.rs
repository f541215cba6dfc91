//! Decoding for WebAssembly types.
//!
//! See <https://www.w3.org/TR/wasm-core-2/#binary-types>
pub mod globaltype;
pub mod limits;
pub mod memtype;
pub mod reftype;
pub mod tabletype;
pub mod valtype;

pub use globaltype::{DecodeGlobalTypeError, InvalidMutabilityByteError};
pub use limits::ParseLimitsError;
pub use memtype::DecodeMemoryTypeError;
pub use reftype::{DecodeRefTypeError, InvalidRefTypeMarkerError};
pub use tabletype::DecodeTableTypeError;
pub use valtype::{DecodeValTypeError, InvalidValTypeMarkerError};
