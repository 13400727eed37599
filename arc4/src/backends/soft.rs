//======================================================================
// arc4/src/backends/soft.rs
// Software keystream backend: one PRGA step per one-byte block.
//======================================================================

use crate::stream::Arc4State;
use cipher::{consts::U1, Block, BlockSizeUser, ParBlocksSizeUser, StreamBackend};

/// The software (scalar) backend for ARC4.
pub struct Backend<'a>(pub(crate) &'a mut Arc4State);

impl<'a> BlockSizeUser for Backend<'a> {
    type BlockSize = U1;
}

impl<'a> ParBlocksSizeUser for Backend<'a> {
    type ParBlocksSize = U1;
}

impl<'a> StreamBackend for Backend<'a> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        block[0] = self.0.next_byte();
    }
}
