// Fixed-capacity slot arena. Slots are allocated once; freed indices are
// pushed onto a free list and handed out again, so the live set never
// grows past `capacity` and steady-state updates do not allocate.
// Iteration follows insertion order regardless of which slot a value took.

#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    // Live slot indices, oldest insertion first
    order: Vec<usize>,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        // Reverse so low indices are handed out first
        let free = (0..capacity).rev().collect();
        Self {
            slots,
            free,
            order: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Store `value` in a free slot. Hands the value back when full.
    pub fn insert(&mut self, value: T) -> Result<usize, T> {
        match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(value);
                self.order.push(i);
                Ok(i)
            }
            None => Err(value),
        }
    }

    /// Live values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|&i| self.slots[i].as_ref())
    }

    /// Visit every live value once, oldest first; values for which `f`
    /// returns false are freed.
    pub fn retain_mut(&mut self, mut f: impl FnMut(&mut T) -> bool) {
        let slots = &mut self.slots;
        let free = &mut self.free;
        self.order.retain(|&i| {
            let keep = slots[i].as_mut().is_some_and(&mut f);
            if !keep {
                slots[i] = None;
                free.push(i);
            }
            keep
        });
    }
}
