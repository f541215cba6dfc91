//! Type definitions for the WebAssembly types that can appear on a module's
//! import/export surface.
//!
//! <https://www.w3.org/TR/wasm-core-2/#types>
pub mod globaltype;
pub mod limits;
pub mod memtype;
pub mod numtype;
pub mod reftype;
pub mod tabletype;
pub mod valtype;
