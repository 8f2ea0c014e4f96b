//! Fixed-capacity sample history for one axis

/// Ring buffer of the most recent samples of one axis
///
/// Storage is `N` slots; the active capacity can be set lower at construction so the
/// capture window length is a runtime setting. Pushing into a full buffer evicts
/// the oldest sample. Indexing is age-ordered: index 0 is the oldest sample.
#[derive(Debug, Clone)]
pub struct RingBuffer<const N: usize> {
    buffer: [f32; N],
    head: usize,
    size: usize,
    capacity: usize,
}

impl<const N: usize> RingBuffer<N> {
    /// Create an empty buffer using all `N` slots
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0.0; N],
            head: 0,
            size: 0,
            capacity: N,
        }
    }

    /// Create an empty buffer holding at most `capacity` samples
    ///
    /// Returns `None` if `capacity` is zero or larger than `N`.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Option<Self> {
        if capacity == 0 || capacity > N {
            return None;
        }
        Some(Self {
            buffer: [0.0; N],
            head: 0,
            size: 0,
            capacity,
        })
    }

    /// Drop all samples, keeping the capacity
    pub const fn reset(&mut self) {
        self.head = 0;
        self.size = 0;
    }

    /// Number of samples held
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the buffer holds no samples
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether the buffer holds `capacity()` samples
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Maximum number of samples held
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append the newest sample, evicting the oldest when full
    pub fn push(&mut self, value: f32) {
        if self.is_full() {
            self.buffer[self.head] = value;
            self.head = (self.head + 1) % self.capacity;
        } else {
            let tail = (self.head + self.size) % self.capacity;
            self.buffer[tail] = value;
            self.size += 1;
        }
    }

    /// Sample by age, 0 being the oldest
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= self.size {
            return None;
        }
        Some(self.buffer[(self.head + index) % self.capacity])
    }

    /// Most recent sample
    #[must_use]
    pub fn latest(&self) -> Option<f32> {
        self.size.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.size).map(move |i| self.buffer[(self.head + i) % self.capacity])
    }

    /// Copy the samples, oldest first, into `out` and return how many were written
    pub fn copy_to(&self, out: &mut [f32]) -> usize {
        let mut written = 0;
        for (slot, value) in out.iter_mut().zip(self.iter()) {
            *slot = value;
            written += 1;
        }
        written
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
