//! Cursor trail model: smoothing, idle detection, and the strand/ring
//! geometry used by the canvas renderer. Pure math, no web-sys, so it can
//! be unit-tested off-browser.

/// Hard cap on buffered trail points; oldest are dropped first.
pub const MAX_TRAIL_POINTS: usize = 50;
/// Points older than this are purged every frame.
pub const TRAIL_LIFESPAN_MS: f64 = 800.0;
/// Per-frame interpolation factor toward the raw pointer position.
pub const FOLLOW_FACTOR: f64 = 0.15;
/// Smoothed velocity below this counts as idle.
pub const IDLE_VELOCITY: f64 = 0.5;
/// Minimum per-frame movement before a point is recorded.
pub const MOVE_EPSILON: f64 = 0.1;

pub const STRAND_COUNT: usize = 5;
pub const HUE_STEP: f64 = 2.0;
pub const SPIN_STEP: f64 = 3.0;

pub const RING_SEGMENTS: usize = 60;
pub const RING_RADIUS: f64 = 8.0;

/// One recorded cursor sample.
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub hue: f64,
    pub created_at: f64,
}

/// Smoothed cursor position chasing the raw pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorGlide {
    target_x: f64,
    target_y: f64,
    x: f64,
    y: f64,
    prev_x: f64,
    prev_y: f64,
}

impl CursorGlide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    /// Advance one frame toward the target; returns the distance the
    /// smoothed point moved this frame.
    pub fn step(&mut self) -> f64 {
        self.x += (self.target_x - self.x) * FOLLOW_FACTOR;
        self.y += (self.target_y - self.y) * FOLLOW_FACTOR;
        let vx = self.x - self.prev_x;
        let vy = self.y - self.prev_y;
        self.prev_x = self.x;
        self.prev_y = self.y;
        (vx * vx + vy * vy).sqrt()
    }

    pub fn pos(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

pub fn is_idle(velocity: f64) -> bool {
    velocity < IDLE_VELOCITY
}

/// Which visual to draw this frame, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    FluidTrail,
    IdleRing,
}

/// Moving with at least one segment draws the trail; idle draws the ring;
/// moving with too few points draws nothing.
pub fn render_mode(idle: bool, point_count: usize) -> Option<RenderMode> {
    if !idle && point_count >= 2 {
        Some(RenderMode::FluidTrail)
    } else if idle {
        Some(RenderMode::IdleRing)
    } else {
        None
    }
}

/// Capped, time-windowed sample buffer plus the rolling hue counters.
#[derive(Debug, Default)]
pub struct Trail {
    points: Vec<TrailPoint>,
    hue: f64,
    idle_spin: f64,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn idle_spin(&self) -> f64 {
        self.idle_spin
    }

    /// Record a sample at the current hue, evicting the oldest point when
    /// the buffer is full.
    pub fn record(&mut self, x: f64, y: f64, now_ms: f64) {
        self.points.push(TrailPoint {
            x,
            y,
            hue: self.hue,
            created_at: now_ms,
        });
        if self.points.len() > MAX_TRAIL_POINTS {
            self.points.remove(0);
        }
    }

    /// Drop points past their lifespan.
    pub fn purge(&mut self, now_ms: f64) {
        self.points
            .retain(|p| now_ms - p.created_at < TRAIL_LIFESPAN_MS);
    }

    /// Advance the rolling hue and idle spin counters one frame.
    pub fn advance(&mut self) {
        self.hue = (self.hue + HUE_STEP) % 360.0;
        self.idle_spin = (self.idle_spin + SPIN_STEP) % 360.0;
    }
}

/// Age-based fade, 1.0 fresh down to 0.0 at end of life.
pub fn point_alpha(age_ms: f64) -> f64 {
    (1.0 - age_ms / TRAIL_LIFESPAN_MS).max(0.0)
}

/// Offset of a strand from the recorded point, varying slowly along the
/// trail so the strands braid instead of running parallel.
pub fn strand_offset(strand: usize, index: usize) -> (f64, f64) {
    let phase = strand as f64 * (std::f64::consts::TAU / STRAND_COUNT as f64) + index as f64 * 0.1;
    let spread = 8.0 + strand as f64 * 3.0;
    (phase.cos() * spread, phase.sin() * spread)
}

/// Line width tapers per strand and fades with point alpha, floored so the
/// tail never disappears entirely.
pub fn strand_width(strand: usize, alpha: f64) -> f64 {
    ((3.5 - strand as f64 * 0.6) * alpha).max(0.5)
}

/// Hue for a point on a given strand: strands sit 72 degrees apart and the
/// color shifts up to 180 degrees from head to tail.
pub fn strand_hue(point_hue: f64, strand: usize, progress: f64) -> f64 {
    (point_hue + strand as f64 * 72.0 + progress * 180.0) % 360.0
}

/// Bright neon color at full saturation.
pub fn neon_hsl(hue: f64) -> String {
    format!("hsl({hue}, 100%, 50%)")
}

/// Endpoints of one segment of the spinning idle ring.
pub fn ring_segment(cx: f64, cy: f64, index: usize, spin_deg: f64) -> ((f64, f64), (f64, f64)) {
    let seg = std::f64::consts::TAU / RING_SEGMENTS as f64;
    let spin = spin_deg.to_radians();
    let a1 = index as f64 * seg + spin;
    let a2 = (index + 1) as f64 * seg + spin;
    (
        (cx + a1.cos() * RING_RADIUS, cy + a1.sin() * RING_RADIUS),
        (cx + a2.cos() * RING_RADIUS, cy + a2.sin() * RING_RADIUS),
    )
}

/// Hue of one idle-ring segment; a full rainbow around the circle, rotated
/// by the spin counter.
pub fn ring_hue(index: usize, spin_deg: f64) -> f64 {
    (index as f64 * (360.0 / RING_SEGMENTS as f64) + spin_deg) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_never_exceeds_cap() {
        let mut trail = Trail::new();
        for i in 0..(MAX_TRAIL_POINTS * 3) {
            trail.record(i as f64, i as f64, i as f64);
            assert!(trail.len() <= MAX_TRAIL_POINTS);
        }
        assert_eq!(trail.len(), MAX_TRAIL_POINTS);
        // Oldest samples were the ones evicted.
        assert_eq!(trail.points()[0].x, (MAX_TRAIL_POINTS * 2) as f64);
    }

    #[test]
    fn purge_drops_expired_points_only() {
        let mut trail = Trail::new();
        trail.record(0.0, 0.0, 0.0);
        trail.record(1.0, 1.0, 500.0);
        trail.purge(TRAIL_LIFESPAN_MS + 100.0);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.points()[0].x, 1.0);
        trail.purge(500.0 + TRAIL_LIFESPAN_MS);
        assert!(trail.is_empty());
    }

    #[test]
    fn glide_converges_and_goes_idle() {
        let mut glide = CursorGlide::new();
        glide.set_target(100.0, 0.0);
        let v = glide.step();
        assert!((v - 15.0).abs() < 1e-9);
        assert!(!is_idle(v));

        let mut last = v;
        for _ in 0..120 {
            last = glide.step();
        }
        assert!(is_idle(last));
        let (x, _) = glide.pos();
        assert!((x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn idle_threshold_is_exact() {
        assert!(is_idle(0.499_999));
        assert!(!is_idle(0.5));
    }

    #[test]
    fn render_mode_switches_with_idle() {
        assert_eq!(render_mode(false, 10), Some(RenderMode::FluidTrail));
        assert_eq!(render_mode(true, 10), Some(RenderMode::IdleRing));
        assert_eq!(render_mode(true, 0), Some(RenderMode::IdleRing));
        assert_eq!(render_mode(false, 1), None);
    }

    #[test]
    fn hue_counters_wrap() {
        let mut trail = Trail::new();
        for _ in 0..180 {
            trail.advance();
        }
        assert_eq!(trail.hue(), 0.0);
        assert_eq!(trail.idle_spin(), 180.0);
    }

    #[test]
    fn alpha_fades_to_zero() {
        assert_eq!(point_alpha(0.0), 1.0);
        assert!((point_alpha(400.0) - 0.5).abs() < 1e-9);
        assert_eq!(point_alpha(TRAIL_LIFESPAN_MS * 2.0), 0.0);
    }

    #[test]
    fn strand_geometry_stays_bounded() {
        for strand in 0..STRAND_COUNT {
            let spread = 8.0 + strand as f64 * 3.0;
            for index in 0..MAX_TRAIL_POINTS {
                let (dx, dy) = strand_offset(strand, index);
                let dist = (dx * dx + dy * dy).sqrt();
                assert!((dist - spread).abs() < 1e-9);
            }
            assert!(strand_width(strand, 0.0) >= 0.5);
            assert!(strand_width(strand, 1.0) >= 0.5);
        }
    }

    #[test]
    fn strand_hues_are_wrapped_degrees() {
        let h = strand_hue(350.0, 4, 1.0);
        assert!((0.0..360.0).contains(&h));
        assert!((strand_hue(0.0, 1, 0.0) - 72.0).abs() < 1e-9);
    }

    #[test]
    fn ring_segments_sit_on_the_circle() {
        let (p1, p2) = ring_segment(10.0, -4.0, 17, 33.0);
        for (x, y) in [p1, p2] {
            let r = ((x - 10.0).powi(2) + (y + 4.0).powi(2)).sqrt();
            assert!((r - RING_RADIUS).abs() < 1e-9);
        }
        assert!((ring_hue(0, 354.0) - 354.0).abs() < 1e-9);
        assert!((ring_hue(1, 354.0) - 0.0).abs() < 1e-9);
    }
}
