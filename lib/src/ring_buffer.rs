/// Fixed-capacity FIFO over a backing array, overwriting the oldest entry
/// when full. Backs the klog capture ring.
#[derive(Debug)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Create an empty ring with every slot set to `value`.
    /// Const so it can initialise a `static`.
    #[inline(always)]
    pub const fn new_with(value: T) -> Self {
        Self {
            data: [value; N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.count >= N
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Push, dropping the oldest element when full. A zero-capacity ring
    /// discards everything.
    pub fn push_overwrite(&mut self, value: T) {
        if N == 0 {
            return;
        }
        if self.is_full() {
            self.tail = (self.tail + 1) % N;
            self.count -= 1;
        }
        self.data[self.head] = value;
        self.head = (self.head + 1) % N;
        self.count += 1;
    }

    /// Pop the oldest element.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.data[self.tail];
        self.tail = (self.tail + 1) % N;
        self.count -= 1;
        Some(value)
    }
}
