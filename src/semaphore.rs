use parking_lot::{Condvar, Mutex};

/// Counting semaphore bounding how many workers may run the expensive
/// scan section at once.
///
/// Permits are handed out as RAII guards, so a permit goes back to the pool
/// on every exit path, including panic unwinding.
pub struct Semaphore {
    permits: Mutex<usize>,
    released: Condvar,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            released: Condvar::new(),
        }
    }

    /// Take one permit, blocking while none are free.
    pub fn acquire(&self) -> SemaphorePermit<'_> {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.released.wait(&mut permits);
        }
        *permits -= 1;
        SemaphorePermit { semaphore: self }
    }
}

/// Guard returned by [`Semaphore::acquire`]; dropping it returns the permit
/// and wakes one blocked waiter.
pub struct SemaphorePermit<'a> {
    semaphore: &'a Semaphore,
}

impl Drop for SemaphorePermit<'_> {
    fn drop(&mut self) {
        let mut permits = self.semaphore.permits.lock();
        *permits += 1;
        self.semaphore.released.notify_one();
    }
}
