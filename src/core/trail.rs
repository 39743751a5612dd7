use glam::Vec2;
use std::collections::VecDeque;

use super::constants::TRAIL_MAX_OPACITY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub id: u64,
}

/// Fixed-length history of recent pointer samples, oldest first.
#[derive(Debug)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    next_id: u64,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(&mut self, position: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint {
            position,
            id: self.next_id,
        });
        self.next_id += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// `(point, opacity, scale)` per point; the newest is the most visible.
    pub fn styled(&self) -> impl Iterator<Item = (&TrailPoint, f32, f32)> {
        let n = self.points.len() as f32;
        self.points.iter().enumerate().map(move |(i, p)| {
            let f = (i as f32 + 1.0) / n;
            (p, f * TRAIL_MAX_OPACITY, f)
        })
    }
}
