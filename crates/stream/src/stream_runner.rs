use crate::linear_bucket::LinearBucket;
use crate::stream_block::StreamBlock;
use tracing::trace;

/// Drives a [`StreamBlock`] from arbitrarily sized chunks of input.
///
/// Input is staged until the block's forecast for one output multiple is met,
/// then the block is run once and the items it did not consume are kept for the next call.
/// This plays the part of the host scheduler so blocks can be chained or tested without one.
pub struct StreamRunner<B: StreamBlock> {
    block: B,
    input_buffer: LinearBucket<B::Input>,
    output_buffer: Vec<B::Output>,
    output_callbacks: Vec<Box<dyn FnMut(&[B::Output]) + Send + Sync + 'static>>,
    /// Number of times the block has been run.
    pub total_calls: u64,
    pub total_items_consumed: u64,
    pub total_items_produced: u64,
}

impl<B: StreamBlock> StreamRunner<B> {
    pub fn new(block: B) -> Self {
        let nb_output = block.output_multiple();
        let nb_input = block.forecast(nb_output);
        assert!(nb_output > 0, "Block must produce at least one item per call");
        assert!(nb_input > 0, "Block must consume at least one item per call");

        Self {
            block,
            input_buffer: LinearBucket::new(nb_input),
            output_buffer: vec![B::Output::default(); nb_output],
            output_callbacks: vec![],
            total_calls: 0,
            total_items_consumed: 0,
            total_items_produced: 0,
        }
    }

    /// Registers a callback that receives each block of output items.
    pub fn subscribe_output(&mut self, callback: impl FnMut(&[B::Output]) + Send + Sync + 'static) {
        self.output_callbacks.push(Box::new(callback));
    }

    /// Consumes a chunk of input and runs the block as many times as the staged input allows.
    pub fn process(&mut self, buf: &[B::Input]) {
        let mut curr_buf = buf;
        loop {
            let total_read = self.input_buffer.consume(curr_buf);
            curr_buf = &curr_buf[total_read..];
            if !self.input_buffer.is_full() {
                break;
            }
            self.run_block();
        }
    }

    /// Number of staged input items waiting for the next call.
    pub fn pending_input(&self) -> usize {
        self.input_buffer.length()
    }

    pub fn block(&self) -> &B {
        &self.block
    }

    pub fn into_block(self) -> B {
        self.block
    }

    fn run_block(&mut self) {
        let result = self.block.general_work(self.input_buffer.as_slice(), &mut self.output_buffer);
        assert!(result.consumed > 0, "Block consumed nothing from a full input buffer");
        assert!(result.consumed <= self.input_buffer.length(), "Block consumed {} items but only {} were available", result.consumed, self.input_buffer.length());
        assert!(result.produced <= self.output_buffer.len(), "Block produced {} items into a buffer of {}", result.produced, self.output_buffer.len());

        self.input_buffer.drain_front(result.consumed);
        self.total_calls += 1;
        self.total_items_consumed += result.consumed as u64;
        self.total_items_produced += result.produced as u64;
        trace!(consumed = result.consumed, produced = result.produced, "ran block");

        let output = &self.output_buffer[..result.produced];
        for callback in &mut self.output_callbacks {
            callback(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream_block::WorkResult;
    use std::sync::{Arc, Mutex};

    /// Sums pairs of input items.
    struct PairSum;

    impl StreamBlock for PairSum {
        type Input = u32;
        type Output = u32;

        fn output_multiple(&self) -> usize { 2 }

        fn forecast(&self, nb_output: usize) -> usize { nb_output*2 }

        fn general_work(&mut self, input: &[u32], output: &mut [u32]) -> WorkResult {
            for (y, x) in output.iter_mut().zip(input.chunks_exact(2)) {
                *y = x[0] + x[1];
            }
            WorkResult { consumed: output.len()*2, produced: output.len() }
        }
    }

    #[test]
    fn runs_block_once_enough_input_is_staged() {
        let mut runner = StreamRunner::new(PairSum);
        let collected = Arc::new(Mutex::new(Vec::new()));
        runner.subscribe_output({
            let collected = collected.clone();
            move |x: &[u32]| collected.lock().unwrap().extend_from_slice(x)
        });

        runner.process(&[1, 2, 3]);
        assert_eq!(runner.total_calls, 0);
        assert_eq!(runner.pending_input(), 3);

        runner.process(&[4, 5, 6, 7, 8, 9]);
        assert_eq!(runner.total_calls, 2);
        assert_eq!(runner.pending_input(), 1);
        assert_eq!(*collected.lock().unwrap(), vec![3, 7, 11, 15]);
        assert_eq!(runner.total_items_consumed, 8);
        assert_eq!(runner.total_items_produced, 4);
    }
}
