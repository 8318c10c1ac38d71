//! Particle field behind the page content.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Particles closer than this are joined by a faint line.
pub const LINK_DISTANCE: f64 = 120.0;
/// Roughly one particle per this many square pixels.
const AREA_PER_PARTICLE: f64 = 14_000.0;
const MIN_PARTICLES: usize = 24;
const MAX_PARTICLES: usize = 90;
const MAX_SPEED: f64 = 0.35;
const RADIUS_RANGE: (f64, f64) = (0.8, 2.4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// 1.0 when touching, fading to 0.0 at [`LINK_DISTANCE`].
    pub strength: f64,
}

pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.0) * height.max(0.0)) / AREA_PER_PARTICLE;
    (area.round() as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.fill_to(particle_count(width, height));
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Keeps existing particles (wrapped into the new bounds) and adds or drops
    /// some so the density stays the same.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;

        let target = particle_count(width, height);
        self.particles.truncate(target);
        for particle in &mut self.particles {
            particle.x = wrap(particle.x, width);
            particle.y = wrap(particle.y, height);
        }
        self.fill_to(target);
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.vx, self.width);
            particle.y = wrap(particle.y + particle.vy, self.height);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();

        for (index, a) in self.particles.iter().enumerate() {
            for b in &self.particles[index + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        strength: 1.0 - distance / LINK_DISTANCE,
                    });
                }
            }
        }

        links
    }

    fn fill_to(&mut self, target: usize) {
        while self.particles.len() < target {
            let particle = Particle {
                x: self.rng.gen_range(0.0..self.width.max(1.0)),
                y: self.rng.gen_range(0.0..self.height.max(1.0)),
                vx: self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
                vy: self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
                radius: self.rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            };
            self.particles.push(particle);
        }
    }
}

/// Brings `field` to `width` × `height`, creating it from `seed` when absent.
/// Returns `true` when the field was created or resized.
pub fn fit_field(
    field: &mut Option<ParticleField>,
    width: f64,
    height: f64,
    seed: impl FnOnce() -> u64,
) -> bool {
    match field {
        Some(existing) if existing.size() == (width, height) => false,
        Some(existing) => {
            existing.resize(width, height);
            true
        }
        None => {
            *field = Some(ParticleField::new(width, height, seed()));
            true
        }
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.0
    } else {
        let wrapped = value.rem_euclid(extent);
        // rem_euclid can round up to `extent` for tiny negative inputs
        if wrapped >= extent {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_area_within_limits() {
        assert_eq!(particle_count(0.0, 0.0), MIN_PARTICLES);
        assert_eq!(particle_count(1_280.0, 720.0), 66);
        assert_eq!(particle_count(3_840.0, 2_160.0), MAX_PARTICLES);
    }

    #[test]
    fn same_seed_gives_same_field() {
        let a = ParticleField::new(800.0, 600.0, 7);
        let b = ParticleField::new(800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn particles_stay_inside_after_many_steps() {
        let mut field = ParticleField::new(400.0, 300.0, 42);
        for _ in 0..5_000 {
            field.step();
        }

        for particle in field.particles() {
            assert!((0.0..400.0).contains(&particle.x));
            assert!((0.0..300.0).contains(&particle.y));
        }
    }

    #[test]
    fn links_only_join_nearby_particles() {
        let field = ParticleField::new(1_000.0, 1_000.0, 3);
        for link in field.links() {
            let distance = (link.from.0 - link.to.0).hypot(link.from.1 - link.to.1);
            assert!(distance < LINK_DISTANCE);
            assert!(link.strength > 0.0 && link.strength <= 1.0);
        }
    }

    #[test]
    fn fitting_creates_then_follows_window_size() {
        let mut field = None;

        assert!(fit_field(&mut field, 1_280.0, 720.0, || 5));
        assert_eq!(field.as_ref().map(ParticleField::size), Some((1_280.0, 720.0)));

        assert!(!fit_field(&mut field, 1_280.0, 720.0, || unreachable!("field exists")));

        assert!(fit_field(&mut field, 640.0, 480.0, || unreachable!("field exists")));
        let field = field.expect("field was created");
        assert_eq!(field.size(), (640.0, 480.0));
        assert_eq!(field.particles().len(), particle_count(640.0, 480.0));
    }

    #[test]
    fn resize_rewraps_and_adjusts_density() {
        let mut field = ParticleField::new(1_920.0, 1_080.0, 11);
        assert_eq!(field.particles().len(), MAX_PARTICLES);

        field.resize(320.0, 480.0);
        assert_eq!(field.size(), (320.0, 480.0));
        assert_eq!(field.particles().len(), MIN_PARTICLES);
        for particle in field.particles() {
            assert!(particle.x < 320.0 && particle.y < 480.0);
        }
    }
}
