/// Built-in collection and assertion functions.
///
/// Contains `len`, `first`, `last`, `rest`, `push`, `add` and `assert`.
pub mod builtin;
/// The `print` function implementation.
///
/// Writes values to the context's output sink.
pub mod print;

pub mod core;
