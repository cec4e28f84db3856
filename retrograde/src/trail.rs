use crate::math::Vec2;
use std::collections::VecDeque;

pub const DEFAULT_TRAIL_CAPACITY: usize = 500;

/// Bounded FIFO of observed positions. Insertion order is draw order;
/// once full, the oldest points are evicted first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, p: Vec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail::new(DEFAULT_TRAIL_CAPACITY)
    }
}
