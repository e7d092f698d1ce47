//! Fixed-capacity pool of decaying trail samples
//!
//! Storage is allocated once at construction and never grows. Writes reuse
//! slots: the next free slot in circular order while under the active
//! ceiling, otherwise the live sample with the least remaining life.
//! Samples "die" by reaching zero life; they are never removed or reindexed.

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub x: NVec2, // position at capture
    pub life: f64, // 1.0 when fresh, inactive at <= 0
    pub dashing: bool, // captured during a dash
}

impl TrailSample {
    fn empty() -> Self {
        Self {
            x: NVec2::zeros(),
            life: 0.0,
            dashing: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.life > 0.0
    }
}

pub struct TrailPool {
    slots: Box<[TrailSample]>,
    cursor: usize, // next slot to try in circular order
    active: usize,
    max_active: usize,
    decay_rate: f64, // life lost per second
}

impl TrailPool {
    /// `max_active` is clamped to `1..=capacity`; capacity is at least one
    pub fn new(capacity: usize, max_active: usize, decay_rate: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![TrailSample::empty(); capacity].into_boxed_slice(),
            cursor: 0,
            active: 0,
            max_active: max_active.clamp(1, capacity),
            decay_rate,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_active(&self) -> usize {
        self.max_active
    }

    /// Number of live samples
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Record a fresh sample at `x`
    pub fn write(&mut self, x: NVec2, dashing: bool) {
        self.write_sample(x, 1.0, dashing);
    }

    /// Record a sample with an explicit starting life. Never fails: at the
    /// ceiling the weakest live sample is overwritten. A life that is not
    /// positive (including NaN) would be dead on arrival and is dropped.
    pub fn write_sample(&mut self, x: NVec2, life: f64, dashing: bool) {
        if !(life > 0.0) {
            return;
        }
        let slot = if self.active < self.max_active {
            self.active += 1;
            self.next_free_slot()
        } else {
            self.weakest_slot()
        };
        self.slots[slot] = TrailSample { x, life, dashing };
    }

    /// Age every live sample by `dt` seconds
    pub fn decay(&mut self, dt: f64) {
        let step = self.decay_rate * dt;
        for s in self.slots.iter_mut().filter(|s| s.is_active()) {
            s.life -= step;
            if s.life <= 0.0 {
                s.life = 0.0;
                self.active -= 1;
            }
        }
    }

    /// Live samples in storage order. Restartable: each call yields a fresh
    /// iterator over the current contents.
    pub fn active_samples(&self) -> impl Iterator<Item = &TrailSample> + '_ {
        self.slots.iter().filter(|s| s.is_active())
    }

    /// Kill every sample without touching storage
    pub fn clear(&mut self) {
        for s in self.slots.iter_mut() {
            s.life = 0.0;
        }
        self.active = 0;
        self.cursor = 0;
    }

    // helpers ==============================================================================

    // Only called while under the ceiling, so a dead slot always exists.
    fn next_free_slot(&mut self) -> usize {
        let n = self.slots.len();
        let slot = (0..n)
            .map(|i| (self.cursor + i) % n)
            .find(|&i| !self.slots[i].is_active())
            .unwrap_or(self.cursor);
        self.cursor = (slot + 1) % n;
        slot
    }

    // Lowest-life live slot; ties go to the lowest index.
    fn weakest_slot(&self) -> usize {
        let mut best = 0;
        let mut best_life = f64::INFINITY;
        for (i, s) in self.slots.iter().enumerate() {
            if s.is_active() && s.life < best_life {
                best = i;
                best_life = s.life;
            }
        }
        best
    }
}

impl Default for TrailPool {
    fn default() -> Self {
        Self::new(100, 50, 2.0)
    }
}
