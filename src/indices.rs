//! Indices into the module's index spaces.
//!
//! Definitions are referenced with zero-based indices; in each index space, the indices
//! of imports go before the first index of any definition contained in the module itself.
//!
//! <https://www.w3.org/TR/wasm-core-2/#indices>

macro_rules! define_index {
    ($name:ident) => {
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
        pub struct $name(pub u32);
    };
}

define_index!(TypeIdx);
define_index!(FuncIdx);
define_index!(TableIdx);
define_index!(MemIdx);
define_index!(GlobalIdx);
