//! Spring schedulers
//!
//! Owns a set of springs and advances them together each frame. Two flavors:
//! a wall-clock scheduler for variable frame times, and a fixed-tick scheduler
//! that precomputes the premultiplied decay coefficients at insertion so the
//! per-tick loop never evaluates the exponential.

use crate::spring::{PremultSpring, Spring};
use crate::step::spring_exp;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::Instant;
use tracing::trace;

new_key_type! {
    pub struct SpringKey;
}

struct Scheduled {
    spring: Spring,
    spring_factor: f32,
}

/// Advances a set of springs by wall-clock elapsed time.
pub struct SpringScheduler {
    springs: SlotMap<SpringKey, Scheduled>,
    last_tick: Instant,
}

impl SpringScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            last_tick: Instant::now(),
        }
    }

    /// Add a spring with its stiffness, keeping the key to address it later.
    pub fn add(&mut self, spring: Spring, spring_factor: f32) -> SpringKey {
        self.springs.insert(Scheduled {
            spring,
            spring_factor,
        })
    }

    pub fn get(&self, key: SpringKey) -> Option<&Spring> {
        self.springs.get(key).map(|s| &s.spring)
    }

    pub fn get_mut(&mut self, key: SpringKey) -> Option<&mut Spring> {
        self.springs.get_mut(key).map(|s| &mut s.spring)
    }

    pub fn remove(&mut self, key: SpringKey) -> Option<Spring> {
        self.springs.remove(key).map(|s| s.spring)
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Advance all springs by the wall-clock time since the previous tick.
    /// Returns the elapsed seconds used.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(dt);
        dt
    }

    /// Advance all springs by an explicit `dt` in seconds.
    pub fn advance(&mut self, dt: f32) {
        trace!(springs = self.springs.len(), dt, "advancing springs");
        for (_, scheduled) in self.springs.iter_mut() {
            scheduled.spring.update(scheduled.spring_factor, dt);
        }
    }

    /// True while any spring is still moving toward its target.
    pub fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.spring.is_settled())
    }

    /// Remove every settled spring, returning how many were dropped.
    pub fn sweep_settled(&mut self) -> usize {
        let settled: SmallVec<[SpringKey; 8]> = self
            .springs
            .iter()
            .filter(|(_, s)| s.spring.is_settled())
            .map(|(key, _)| key)
            .collect();
        for key in &settled {
            self.springs.remove(*key);
        }
        if !settled.is_empty() {
            trace!(removed = settled.len(), "swept settled springs");
        }
        settled.len()
    }

    /// Iterate over all springs (immutable).
    pub fn iter(&self) -> impl Iterator<Item = (SpringKey, &Spring)> {
        self.springs.iter().map(|(key, s)| (key, &s.spring))
    }
}

impl Default for SpringScheduler {
    fn default() -> Self {
        Self::new()
    }
}

struct PremultEntry {
    spring: PremultSpring,
    spring_factor_dt: f32,
    spring_exp_dt: f32,
}

/// Advances a set of springs on a fixed simulation tick.
///
/// Each entry stores `spring_factor * dt` and its decay factor, computed once
/// at insertion. The tick loop is pure arithmetic; `exp` never runs in it.
/// Stored velocities are in units per tick.
pub struct FixedTickScheduler {
    springs: SlotMap<SpringKey, PremultEntry>,
    dt: f32,
}

impl FixedTickScheduler {
    /// `dt` is the fixed tick length in seconds.
    pub fn new(dt: f32) -> Self {
        Self {
            springs: SlotMap::with_key(),
            dt,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn add(&mut self, spring: PremultSpring, spring_factor: f32) -> SpringKey {
        let spring_factor_dt = spring_factor * self.dt;
        self.springs.insert(PremultEntry {
            spring,
            spring_factor_dt,
            spring_exp_dt: spring_exp(spring_factor_dt),
        })
    }

    pub fn get(&self, key: SpringKey) -> Option<&PremultSpring> {
        self.springs.get(key).map(|e| &e.spring)
    }

    pub fn get_mut(&mut self, key: SpringKey) -> Option<&mut PremultSpring> {
        self.springs.get_mut(key).map(|e| &mut e.spring)
    }

    pub fn remove(&mut self, key: SpringKey) -> Option<PremultSpring> {
        self.springs.remove(key).map(|e| e.spring)
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Advance every spring by one tick.
    pub fn tick(&mut self) {
        trace!(springs = self.springs.len(), dt = self.dt, "fixed tick");
        for (_, entry) in self.springs.iter_mut() {
            entry.spring.update(entry.spring_factor_dt, entry.spring_exp_dt);
        }
    }

    pub fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, e)| !e.spring.is_settled())
    }

    pub fn sweep_settled(&mut self) -> usize {
        let settled: SmallVec<[SpringKey; 8]> = self
            .springs
            .iter()
            .filter(|(_, e)| e.spring.is_settled())
            .map(|(key, _)| key)
            .collect();
        for key in &settled {
            self.springs.remove(*key);
        }
        settled.len()
    }
}
