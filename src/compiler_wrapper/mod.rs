//! Compiler wrapper

/// General compiler wrapper traits
mod wrapper;
pub use wrapper::*;

/// diomp compiler wrapper (clang++ with the diomp/GASNet link line)
mod diomp_wrapper;
pub use diomp_wrapper::*;
