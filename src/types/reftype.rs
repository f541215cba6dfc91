/// Reference types classify first-class references to objects in the runtime store.
///
/// The type funcref denotes the infinite union of all references to functions; the type
/// externref denotes the infinite union of all references to objects owned by the embedder.
///
/// <https://www.w3.org/TR/wasm-core-2/#reference-types>
/// <https://www.w3.org/TR/wasm-core-2/#binary-reftype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RefType {
    Func,
    Extern,
}
