use super::limits::Limits;
use super::reftype::RefType;

/// Table types classify tables over elements of reference type within a size range.
///
/// <https://www.w3.org/TR/wasm-core-2/#table-types>
/// <https://www.w3.org/TR/wasm-core-2/#binary-tabletype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TableType {
    pub reftype: RefType,
    pub limits: Limits,
}
