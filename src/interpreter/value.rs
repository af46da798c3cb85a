/// The runtime value type.
///
/// Defines `Object`, the closure and macro payloads it carries, type names
/// for diagnostics, truthiness and rendering.
pub mod core;
/// Lexical scopes.
///
/// Defines `Environment`, a name-to-value map with an optional enclosing
/// scope, and `Env`, the shared handle closures capture.
pub mod environment;
/// Hash keys.
///
/// Defines `HashKey`, the hashable subset of values (integers, floats,
/// booleans and strings) used as keys of `Object::Hash`.
pub mod hash_key;
