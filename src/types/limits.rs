/// Limits classify the size range of resizeable storage associated with memory types and
/// table types. If no maximum is given, the respective storage can grow to any size.
///
/// Note that a maximum smaller than the minimum is a semantic validity concern and is not
/// rejected here.
///
/// <https://www.w3.org/TR/wasm-core-2/#limits>
/// <https://www.w3.org/TR/wasm-core-2/#binary-limits>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}
