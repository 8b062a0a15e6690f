//! Scroll math and the small state machines behind the page's animations.

use std::rc::Rc;

use yew::functional::Reducible;

/// Scroll offset (px) past which the nav switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long a copy button stays in its confirmed state.
pub const COPY_RESET_MS: u32 = 2_000;

/// Per-card delay increment for grid reveals, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;

const PARALLAX_INPUT: (f64, f64) = (0.0, 500.0);
const PARALLAX_OUTPUT: (f64, f64) = (0.0, 200.0);
const FADE_INPUT: (f64, f64) = (0.0, 400.0);
const FADE_OUTPUT: (f64, f64) = (1.0, 0.0);

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Linear map from `from` onto `to`, clamped to the ends of `to`.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (in_start, in_end) = from;
    let (out_start, out_end) = to;
    if in_end == in_start {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// Vertical shift of the hero background.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    map_range(scroll_y, PARALLAX_INPUT, PARALLAX_OUTPUT)
}

pub fn hero_opacity(scroll_y: f64) -> f64 {
    map_range(scroll_y, FADE_INPUT, FADE_OUTPUT)
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

/// One bit per animated element. Set on first visibility, never cleared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility observation. Returns true only for the
    /// observation that fires the entrance.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        MenuState { open: !self.open }
    }

    pub fn close(self) -> Self {
        MenuState { open: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

/// Each action reduces against the latest state, not the one captured
/// at render time.
impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Close => self.close(),
        };
        Rc::new(next)
    }
}

/// Confirmed flag for a copy button. Each activation hands out a ticket;
/// only the latest ticket may clear the flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u32,
    copied: bool,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn activate(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Returns whether the ticket was current and the flag was cleared.
    pub fn expire(&mut self, ticket: u32) -> bool {
        if ticket != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(10_000.0));
    }

    #[test]
    fn parallax_is_linear_and_clamped() {
        assert!(approx(parallax_offset(0.0), 0.0));
        assert!(approx(parallax_offset(250.0), 100.0));
        assert!(approx(parallax_offset(500.0), 200.0));
        assert!(approx(parallax_offset(900.0), 200.0));
        assert!(approx(parallax_offset(-40.0), 0.0));
    }

    #[test]
    fn hero_fades_out_and_clamps() {
        assert!(approx(hero_opacity(0.0), 1.0));
        assert!(approx(hero_opacity(200.0), 0.5));
        assert!(approx(hero_opacity(400.0), 0.0));
        assert!(approx(hero_opacity(1_000.0), 0.0));
        assert!(approx(hero_opacity(-10.0), 1.0));
    }

    #[test]
    fn degenerate_input_range_yields_start() {
        assert!(approx(map_range(3.0, (5.0, 5.0), (1.0, 9.0)), 1.0));
    }

    #[test]
    fn stagger_steps_by_a_tenth() {
        assert!(approx(stagger_delay(0), 0.0));
        assert!(approx(stagger_delay(1), 0.1));
        assert!(approx(stagger_delay(3), 0.3));
    }

    #[test]
    fn reveal_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn menu_toggle_parity() {
        for clicks in 0..7 {
            let state = (0..clicks).fold(MenuState::default(), |s, _| s.toggle());
            assert_eq!(state.is_open(), clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn menu_close_always_closes() {
        let open = MenuState::default().toggle();
        assert!(!open.close().is_open());
        assert!(!MenuState::default().close().is_open());
    }

    #[test]
    fn menu_actions_reduce_from_latest_state() {
        let reduced = [MenuAction::Toggle, MenuAction::Toggle, MenuAction::Toggle]
            .into_iter()
            .fold(Rc::new(MenuState::default()), |state, action| state.reduce(action));
        assert!(reduced.is_open());

        let closed = reduced.reduce(MenuAction::Close);
        assert!(!closed.is_open());
        assert!(!closed.reduce(MenuAction::Close).is_open());
    }

    #[test]
    fn latest_copy_wins() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.activate();
        let second = feedback.activate();
        assert!(feedback.is_copied());

        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());

        assert!(feedback.expire(second));
        assert!(!feedback.is_copied());
        assert!(!feedback.expire(second));
    }
}
