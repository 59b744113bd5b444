//! Double-buffered resource pair.

/// Two slots, one current (read) and one next (write).
///
/// A single flag selects the current slot, so exactly one slot is current at
/// any time and the two are never aliased.
pub struct PingPong<T> {
    a: T,
    b: T,
    /// Which slot is current (false = A, true = B)
    read_is_b: bool,
}

impl<T> PingPong<T> {
    pub fn new(a: T, b: T) -> Self {
        Self {
            a,
            b,
            read_is_b: false,
        }
    }

    /// The slot holding the latest state.
    pub fn current(&self) -> &T {
        if self.read_is_b {
            &self.b
        } else {
            &self.a
        }
    }

    /// The slot the next step writes to.
    pub fn next(&self) -> &T {
        if self.read_is_b {
            &self.a
        } else {
            &self.b
        }
    }

    /// Whether B is the current slot.
    pub fn read_is_b(&self) -> bool {
        self.read_is_b
    }

    /// Swap slots after a step.
    pub fn swap(&mut self) {
        self.read_is_b = !self.read_is_b;
    }

    /// Make A current again.
    pub fn reset(&mut self) {
        self.read_is_b = false;
    }

    /// Both slots, A first.
    pub fn both(&self) -> [&T; 2] {
        [&self.a, &self.b]
    }

    pub fn into_inner(self) -> (T, T) {
        (self.a, self.b)
    }
}
