//======================================================================
// rc5x/src/backends/mod.rs
// Block backends handed to the `cipher` closures. Only the portable
// scalar implementation exists.
//======================================================================

mod soft;
pub(crate) use soft::*;
