/// Number of items a single call to [`StreamBlock::general_work`] read and wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkResult {
    pub consumed: usize,
    pub produced: usize,
}

/// A block that transforms a stream of input items into a stream of output items.
///
/// The caller owns the buffers and drives the block in two phases.
/// 1. [`StreamBlock::forecast`] declares how many input items are needed for a given output length.
/// 2. [`StreamBlock::general_work`] is called with at least that many input items.
///
/// The output length passed to the block must be a multiple of [`StreamBlock::output_multiple`],
/// so a block never has to produce a partial frame.
pub trait StreamBlock {
    type Input: Copy + Default;
    type Output: Copy + Default;

    /// Granularity of every output buffer passed to the block.
    fn output_multiple(&self) -> usize;

    /// Returns the number of input items required to produce `nb_output` items.
    fn forecast(&self, nb_output: usize) -> usize;

    /// Fills the whole output buffer and reports how many input items were used.
    fn general_work(&mut self, input: &[Self::Input], output: &mut [Self::Output]) -> WorkResult;
}
