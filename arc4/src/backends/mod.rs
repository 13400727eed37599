//======================================================================
// arc4/src/backends/mod.rs
// Keystream backend used by `Arc4Core`.
//======================================================================

pub(crate) mod soft;
pub(crate) use self::soft::Backend;
