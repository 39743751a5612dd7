use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// 1 when fresh, 0 at end of life. Drives both opacity and scale.
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        (1.0 - self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }

    fn alive(&self) -> bool {
        self.life < self.max_life && self.position.y > PARTICLE_ESCAPE_ABOVE_PX
    }
}

/// Particles drifting up from the bottom edge, simulated on a fixed step.
pub struct RisingParticles {
    particles: Vec<Particle>,
    max: usize,
    rng: StdRng,
    accum: f32,
    next_id: u64,
}

impl RisingParticles {
    pub fn new(max: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(max),
            max,
            rng: StdRng::seed_from_u64(seed),
            accum: 0.0,
            next_id: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Run as many fixed steps as `dt_sec` covers. Returns the step count.
    pub fn advance(&mut self, dt_sec: f32, viewport: Vec2) -> u32 {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return 0;
        }
        // Cap catch-up after a backgrounded tab
        self.accum = (self.accum + dt_sec).min(PARTICLE_STEP_SEC * 10.0);
        let mut steps = 0;
        while self.accum >= PARTICLE_STEP_SEC {
            self.accum -= PARTICLE_STEP_SEC;
            self.step(viewport);
            steps += 1;
        }
        steps
    }

    pub fn step(&mut self, viewport: Vec2) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.life += 1;
        }
        self.particles.retain(Particle::alive);

        if self.particles.len() < self.max && self.rng.gen::<f32>() < PARTICLE_SPAWN_CHANCE {
            let p = self.spawn(viewport);
            self.particles.push(p);
        }
    }

    fn spawn(&mut self, viewport: Vec2) -> Particle {
        let (lo, hi) = PARTICLE_LIFE_RANGE;
        let id = self.next_id;
        self.next_id += 1;
        Particle {
            id,
            position: Vec2::new(
                self.rng.gen::<f32>() * viewport.x.max(0.0),
                viewport.y.max(0.0) + PARTICLE_SPAWN_BELOW_PX,
            ),
            velocity: Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * 2.0,
                -self.rng.gen::<f32>() * 3.0 - 1.0,
            ),
            life: 0,
            max_life: self.rng.gen_range(lo..hi),
        }
    }
}
