//! Reusable buffer pool
//!
//! The pool is owned by one caller. Share it across threads by wrapping it in
//! a `Mutex`; the buffers it hands out are never shared.

use crate::buffer::Buffer;

/// Tunables for [`BufferPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Capacity of freshly allocated buffers
    pub initial_capacity: usize,
    /// Maximum number of idle buffers kept for reuse
    pub max_retained: usize,
    /// Buffers that grew beyond this capacity are dropped instead of kept
    pub max_buffer_capacity: usize,
}

impl PoolConfig {
    /// Default configuration
    pub const DEFAULT: PoolConfig = PoolConfig {
        initial_capacity: 256,
        max_retained: 64,
        max_buffer_capacity: 1 << 20,
    };

    /// Set the capacity of new buffers
    pub const fn initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = bytes;
        self
    }

    /// Set how many idle buffers are kept
    pub const fn max_retained(mut self, count: usize) -> Self {
        self.max_retained = count;
        self
    }

    /// Set the largest capacity a returned buffer may have and still be kept
    pub const fn max_buffer_capacity(mut self, bytes: usize) -> Self {
        self.max_buffer_capacity = bytes;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A free list of reset buffers
#[derive(Debug, Default)]
pub struct BufferPool {
    config: PoolConfig,
    free: Vec<Buffer>,
}

impl BufferPool {
    /// Create a pool with the default configuration
    pub fn new() -> Self {
        Self::with_config(PoolConfig::DEFAULT)
    }

    /// Create a pool with `config`
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            config,
            free: Vec::new(),
        }
    }

    /// The pool's configuration
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of idle buffers
    pub fn idle(&self) -> usize {
        self.free.len()
    }

    /// Take an empty buffer from the pool, allocating if none is idle
    pub fn get(&mut self) -> Buffer {
        match self.free.pop() {
            Some(buf) => {
                tracing::trace!(capacity = buf.capacity(), "reusing pooled buffer");
                buf
            }
            None => {
                tracing::trace!(capacity = self.config.initial_capacity, "allocating buffer");
                Buffer::with_capacity(self.config.initial_capacity)
            }
        }
    }

    /// Return a buffer; it is reset before it can be handed out again
    pub fn put(&mut self, mut buf: Buffer) {
        if self.free.len() >= self.config.max_retained
            || buf.capacity() > self.config.max_buffer_capacity
        {
            tracing::trace!(
                capacity = buf.capacity(),
                idle = self.free.len(),
                "discarding buffer"
            );
            return;
        }
        buf.reset();
        self.free.push(buf);
    }
}
