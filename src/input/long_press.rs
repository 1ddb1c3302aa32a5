//! Long-press gesture detection
//!
//! A press becomes a long press when the pointer is held for the configured
//! duration without moving more than [`MOVE_THRESHOLD`] on either axis.
//! The detector owns no timer: the event loop calls [`LongPress::tick`] on
//! every tick, and all methods take the current [`Instant`] explicitly.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub const DEFAULT_PRESS_DURATION: Duration = Duration::from_millis(500);

/// Maximum movement on either axis before a press counts as a drag
pub const MOVE_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer or touch position, with the "default action" flag of the input
/// event it came from
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub x: f64,
    pub y: f64,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            x,
            y,
            default_prevented: false,
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            x,
            y,
            default_prevented: false,
        }
    }

    /// Suppress whatever the host would normally do with this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<&MouseEvent> for PointerEvent {
    fn from(event: &MouseEvent) -> Self {
        Self::mouse(f64::from(event.column), f64::from(event.row))
    }
}

struct PendingPress {
    origin: PointerEvent,
    deadline: Instant,
}

/// Press-and-hold detector that invokes `callback` once per long press
pub struct LongPress<F: FnMut(&PointerEvent)> {
    callback: F,
    duration: Duration,
    pending: Option<PendingPress>,
    tracking_moves: bool,
    is_long_press: bool,
}

impl<F: FnMut(&PointerEvent)> LongPress<F> {
    pub fn new(callback: F) -> Self {
        Self::with_duration(callback, DEFAULT_PRESS_DURATION)
    }

    pub fn with_duration(callback: F, duration: Duration) -> Self {
        Self {
            callback,
            duration,
            pending: None,
            tracking_moves: false,
            is_long_press: false,
        }
    }

    /// Begin tracking a press. A press already in progress is dropped.
    pub fn start(&mut self, event: PointerEvent, now: Instant) {
        self.cancel();
        self.is_long_press = false;
        self.pending = Some(PendingPress {
            origin: event,
            deadline: now + self.duration,
        });
        self.tracking_moves = true;
    }

    /// Feed a pointer move; cancels the press if it strayed too far
    pub fn handle_move(&mut self, event: &PointerEvent) {
        if !self.tracking_moves {
            return;
        }
        let Some(pending) = &self.pending else {
            return;
        };

        let dx = (event.x - pending.origin.x).abs();
        let dy = (event.y - pending.origin.y).abs();
        if dx > MOVE_THRESHOLD || dy > MOVE_THRESHOLD {
            self.cancel();
        }
    }

    /// Fire the callback if the press has been held long enough
    ///
    /// Returns the originating event, with its default action prevented,
    /// when the long press fired on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<PointerEvent> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }

        let mut origin = self.pending.take()?.origin;
        origin.prevent_default();
        self.is_long_press = true;
        (self.callback)(&origin);
        self.cleanup();

        Some(origin)
    }

    /// Abort tracking unconditionally
    pub fn cancel(&mut self) {
        self.pending = None;
        self.cleanup();
    }

    /// Route a terminal mouse event: left button down starts a press, drags
    /// and moves are tracked, releasing any button cancels
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.start(PointerEvent::from(event), now),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.handle_move(&PointerEvent::from(event))
            }
            MouseEventKind::Up(_) => self.cancel(),
            _ => {}
        }
    }

    /// Whether the most recent press completed as a long press
    pub fn is_long_press(&self) -> bool {
        self.is_long_press
    }

    /// Whether move events are currently being listened to
    pub fn is_tracking(&self) -> bool {
        self.tracking_moves
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn cleanup(&mut self) {
        self.tracking_moves = false;
    }
}

impl<F: FnMut(&PointerEvent)> Drop for LongPress<F> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_fires_once_after_duration() {
        let fired = Cell::new(0);
        let mut press = LongPress::new(|_: &PointerEvent| fired.set(fired.get() + 1));
        let t0 = Instant::now();

        press.start(PointerEvent::mouse(5.0, 5.0), t0);
        assert!(press.tick(t0 + ms(499)).is_none());
        assert_eq!(fired.get(), 0);

        let event = press.tick(t0 + ms(500)).unwrap();
        assert!(event.is_default_prevented());
        assert!(press.is_long_press());
        assert!(!press.is_tracking());

        assert!(press.tick(t0 + ms(2000)).is_none());
        drop(press);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_large_move_cancels() {
        let fired = Cell::new(false);
        let mut press = LongPress::new(|_: &PointerEvent| fired.set(true));
        let t0 = Instant::now();

        press.start(PointerEvent::touch(100.0, 100.0), t0);
        press.handle_move(&PointerEvent::touch(100.0, 111.0));

        assert!(!press.is_pending());
        assert!(!press.is_tracking());
        assert!(press.tick(t0 + ms(600)).is_none());
        assert!(!press.is_long_press());
        drop(press);
        assert!(!fired.get());
    }

    #[test]
    fn test_small_move_is_tolerated() {
        let fired = Cell::new(false);
        let mut press = LongPress::new(|_: &PointerEvent| fired.set(true));
        let t0 = Instant::now();

        press.start(PointerEvent::mouse(0.0, 0.0), t0);
        press.handle_move(&PointerEvent::mouse(10.0, -10.0));

        assert!(press.tick(t0 + ms(500)).is_some());
        drop(press);
        assert!(fired.get());
    }

    #[test]
    fn test_cancel_aborts() {
        let mut press = LongPress::with_duration(|_: &PointerEvent| {}, ms(100));
        let t0 = Instant::now();

        press.start(PointerEvent::mouse(1.0, 1.0), t0);
        press.cancel();

        assert!(!press.is_tracking());
        assert!(press.tick(t0 + ms(100)).is_none());
    }

    #[test]
    fn test_restart_resets_long_press_flag() {
        let mut press = LongPress::with_duration(|_: &PointerEvent| {}, ms(100));
        let t0 = Instant::now();

        press.start(PointerEvent::mouse(1.0, 1.0), t0);
        press.tick(t0 + ms(100));
        assert!(press.is_long_press());

        press.start(PointerEvent::mouse(1.0, 1.0), t0 + ms(200));
        assert!(!press.is_long_press());
        assert!(press.tick(t0 + ms(250)).is_none());
    }

    #[test]
    fn test_moves_after_firing_are_ignored() {
        let mut press = LongPress::with_duration(|_: &PointerEvent| {}, ms(100));
        let t0 = Instant::now();

        press.start(PointerEvent::mouse(0.0, 0.0), t0);
        press.tick(t0 + ms(100));
        press.handle_move(&PointerEvent::mouse(500.0, 500.0));

        assert!(press.is_long_press());
    }

    #[test]
    fn test_terminal_mouse_events() {
        let fired = Cell::new(0);
        let mut press = LongPress::new(|e: &PointerEvent| {
            assert_eq!((e.x, e.y), (3.0, 4.0));
            fired.set(fired.get() + 1);
        });
        let t0 = Instant::now();

        press.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), t0);
        press.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4), t0 + ms(50));
        assert!(press.is_tracking());
        press.tick(t0 + ms(500));

        press.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), t0 + ms(600));
        press.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 4), t0 + ms(700));
        press.tick(t0 + ms(1200));

        drop(press);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut press = LongPress::new(|_: &PointerEvent| {});
        press.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Right), 0, 0),
            Instant::now(),
        );
        assert!(!press.is_pending());
    }
}
