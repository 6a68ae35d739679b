use eframe::egui::{Vec2, vec2};

pub const BREAK_DISTANCE: f32 = 5.0;
pub const CLOSE_DELAY_SECS: f64 = 0.2;

const DIAGONAL: f32 = 0.707;
const MAX_SPRING_STEP_SECS: f32 = 1.0 / 240.0;
const SETTLE_DISTANCE: f32 = 0.01;
const SETTLE_VELOCITY: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

// heavily damped, the pieces land without visible bounce
pub const SPRING: SpringConfig = SpringConfig {
    stiffness: 400.0,
    damping: 30.0,
    mass: 0.8,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spring {
    value: f32,
    velocity: f32,
}

impl Spring {
    fn step(&mut self, target: f32, dt: f32, config: SpringConfig) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP_SECS);
            let force =
                -config.stiffness * (self.value - target) - config.damping * self.velocity;
            self.velocity += (force / config.mass) * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if self.settled(target) {
            self.snap(target);
        }
    }

    fn settled(&self, target: f32) -> bool {
        (self.value - target).abs() < SETTLE_DISTANCE && self.velocity.abs() < SETTLE_VELOCITY
    }

    fn snap(&mut self, target: f32) {
        self.value = target;
        self.velocity = 0.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloseButtonPhase {
    Idle,
    Opening,
    Open,
    Closing { deadline: f64 },
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseButtonEvent {
    CloseRequested,
}

#[derive(Clone, Debug)]
pub struct CloseButton {
    phase: CloseButtonPhase,
    spring: Spring,
    reduced_motion: bool,
}

impl CloseButton {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            phase: CloseButtonPhase::Idle,
            spring: Spring::default(),
            reduced_motion,
        }
    }

    pub fn phase(&self) -> CloseButtonPhase {
        self.phase
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    pub fn explode_distance(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            BREAK_DISTANCE
        }
    }

    fn target_distance(&self) -> f32 {
        match self.phase {
            CloseButtonPhase::Opening | CloseButtonPhase::Open => self.explode_distance(),
            _ => 0.0,
        }
    }

    pub fn open(&mut self) {
        self.phase = CloseButtonPhase::Opening;
    }

    pub fn click(&mut self, now: f64) {
        if !matches!(
            self.phase,
            CloseButtonPhase::Opening | CloseButtonPhase::Open
        ) {
            return;
        }

        let delay = if self.reduced_motion {
            0.0
        } else {
            CLOSE_DELAY_SECS
        };
        self.phase = CloseButtonPhase::Closing {
            deadline: now + delay,
        };
    }

    pub fn dismiss(&mut self) {
        self.phase = CloseButtonPhase::Closed;
    }

    pub fn tick(&mut self, now: f64, dt: f32) -> Option<CloseButtonEvent> {
        let target = self.target_distance();
        if self.reduced_motion {
            self.spring.snap(target);
        } else {
            self.spring.step(target, dt, SPRING);
        }

        match self.phase {
            CloseButtonPhase::Opening if self.spring.settled(target) => {
                self.phase = CloseButtonPhase::Open;
                None
            }
            CloseButtonPhase::Closing { deadline } if now >= deadline => {
                self.phase = CloseButtonPhase::Closed;
                Some(CloseButtonEvent::CloseRequested)
            }
            _ => None,
        }
    }

    pub fn distance(&self) -> f32 {
        self.spring.value
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            CloseButtonPhase::Opening | CloseButtonPhase::Closing { .. }
        ) || !self.spring.settled(self.target_distance())
    }

    pub fn piece_offsets(&self) -> [Vec2; 4] {
        let d = self.spring.value * DIAGONAL;
        [vec2(-d, -d), vec2(d, d), vec2(d, -d), vec2(-d, d)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(button: &mut CloseButton, from: f64, frames: usize) -> (f64, Vec<CloseButtonEvent>) {
        let mut now = from;
        let mut events = Vec::new();
        for _ in 0..frames {
            now += f64::from(FRAME);
            events.extend(button.tick(now, FRAME));
        }
        (now, events)
    }

    #[test]
    fn opening_explodes_to_break_distance() {
        let mut button = CloseButton::new(false);
        assert_eq!(button.phase(), CloseButtonPhase::Idle);
        button.open();
        run(&mut button, 0.0, 120);
        assert_eq!(button.phase(), CloseButtonPhase::Open);
        assert!((button.distance() - BREAK_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn spring_does_not_overshoot_noticeably() {
        let mut button = CloseButton::new(false);
        button.open();
        let mut now = 0.0;
        for _ in 0..120 {
            now += f64::from(FRAME);
            button.tick(now, FRAME);
            assert!(button.distance() < BREAK_DISTANCE * 1.02);
        }
    }

    #[test]
    fn click_requests_close_once_after_delay() {
        let mut button = CloseButton::new(false);
        button.open();
        let (now, _) = run(&mut button, 0.0, 60);

        button.click(now);
        assert!(matches!(button.phase(), CloseButtonPhase::Closing { .. }));
        assert_eq!(button.tick(now + 0.1, FRAME), None);
        assert_eq!(
            button.tick(now + CLOSE_DELAY_SECS, FRAME),
            Some(CloseButtonEvent::CloseRequested)
        );
        assert_eq!(button.phase(), CloseButtonPhase::Closed);

        let (_, later) = run(&mut button, now + CLOSE_DELAY_SECS, 60);
        assert!(later.is_empty());
        assert!(button.distance().abs() < 1e-6);
    }

    #[test]
    fn reduced_motion_closes_immediately_without_exploding() {
        let mut button = CloseButton::new(true);
        button.open();
        button.tick(0.0, FRAME);
        assert_eq!(button.distance(), 0.0);
        assert_eq!(button.explode_distance(), 0.0);

        button.click(1.0);
        assert_eq!(
            button.tick(1.0, FRAME),
            Some(CloseButtonEvent::CloseRequested)
        );
    }

    #[test]
    fn reopening_starts_exploded_again() {
        let mut button = CloseButton::new(false);
        button.open();
        let (now, _) = run(&mut button, 0.0, 60);
        button.click(now);
        let (now, events) = run(&mut button, now, 30);
        assert_eq!(events, vec![CloseButtonEvent::CloseRequested]);

        button.open();
        assert_eq!(button.phase(), CloseButtonPhase::Opening);
        run(&mut button, now, 120);
        assert_eq!(button.phase(), CloseButtonPhase::Open);
        assert!((button.distance() - BREAK_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn click_while_closed_is_ignored() {
        let mut button = CloseButton::new(false);
        button.click(0.0);
        assert_eq!(button.phase(), CloseButtonPhase::Idle);
        assert_eq!(button.tick(1.0, FRAME), None);
    }

    #[test]
    fn pieces_move_along_their_diagonals() {
        let mut button = CloseButton::new(false);
        button.open();
        run(&mut button, 0.0, 120);
        let [top_left, bottom_right, top_right, bottom_left] = button.piece_offsets();
        assert!(top_left.x < 0.0 && top_left.y < 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y > 0.0);
        assert!(top_right.x > 0.0 && top_right.y < 0.0);
        assert!(bottom_left.x < 0.0 && bottom_left.y > 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-6);
    }
}
