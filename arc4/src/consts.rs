//======================================================================
// arc4/src/consts.rs
// Constants of the ARC4 state.
//======================================================================

/// Size of the permutation table.
pub const STATE_LEN: usize = 256;

/// Longest key the schedule can consume in full.
pub const MAX_KEY_LEN: usize = STATE_LEN;
