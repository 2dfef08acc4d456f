/// Fixed capacity buffer that stages input items until a block has enough to run.
///
/// # Diagram
/// ```text
/// | capacity                      |
/// | staged         | free         |
/// ```
/// Items are appended at the end and drained from the front once a block has consumed them.
pub struct LinearBucket<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Copy> LinearBucket<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Staged items in arrival order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Appends items until the capacity is reached.
    /// Returns the number of items taken from the buffer.
    pub fn consume(&mut self, buf: &[T]) -> usize {
        let total_read = buf.len().min(self.capacity - self.data.len());
        self.data.extend_from_slice(&buf[..total_read]);
        total_read
    }

    /// Removes items from the front, the remainder keeps its order.
    /// Returns the number of items removed.
    pub fn drain_front(&mut self, total: usize) -> usize {
        let total_drained = total.min(self.data.len());
        self.data.drain(..total_drained);
        total_drained
    }
}
