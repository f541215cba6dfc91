use super::limits::Limits;

/// Memory types classify linear memories and their size range.
///
/// <https://www.w3.org/TR/wasm-core-2/#memory-types>
/// <https://www.w3.org/TR/wasm-core-2/#binary-memtype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct MemType {
    pub limits: Limits,
}
