// SPDX-License-Identifier: MPL-2.0
//! Translation of raw user input into lightbox actions.
//!
//! Everything here is pure: pointer targets, key presses, and touch
//! coordinates go in, an optional [`Action`] comes out. The Iced layer only
//! decides *what was hit*; the rules of the widget (what closes, what
//! navigates, what is ignored) live in this module and are tested without a
//! windowing system.

/// Minimum horizontal displacement, in logical pixels, for a touch gesture
/// to count as a swipe instead of a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A state transition requested by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(usize),
    Close,
    Next,
    Previous,
}

/// What a pointer click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A thumbnail cell in the grid, by its gallery index.
    Thumbnail(usize),
    CloseControl,
    NextControl,
    PreviousControl,
    /// The dimmed overlay background outside the displayed content.
    Backdrop,
    /// The enlarged image itself.
    Image,
}

/// Translates a pointer click into an action.
///
/// The navigation controls sit on top of the backdrop and win over it; a
/// click on the displayed image is deliberately inert so that only true
/// outside-clicks dismiss the overlay.
pub fn click_action(target: PointerTarget) -> Option<Action> {
    match target {
        PointerTarget::Thumbnail(index) => Some(Action::Open(index)),
        PointerTarget::CloseControl => Some(Action::Close),
        PointerTarget::NextControl => Some(Action::Next),
        PointerTarget::PreviousControl => Some(Action::Previous),
        PointerTarget::Backdrop => Some(Action::Close),
        PointerTarget::Image => None,
    }
}

/// Context menus over the lightbox are suppressed unconditionally.
pub fn context_menu_action(target: PointerTarget) -> Option<Action> {
    let _ = target;
    None
}

/// The keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    ArrowRight,
    ArrowLeft,
}

/// Translates a key press into an action. Keys only act while the lightbox
/// is open; when it is closed they belong to whatever is behind it.
pub fn key_action(key: KeyPress, lightbox_open: bool) -> Option<Action> {
    if !lightbox_open {
        return None;
    }
    Some(match key {
        KeyPress::Escape => Action::Close,
        KeyPress::ArrowRight => Action::Next,
        KeyPress::ArrowLeft => Action::Previous,
    })
}

/// Tracks one horizontal touch gesture from finger-down to finger-up.
///
/// The tracker is transient: finishing or cancelling a gesture resets it,
/// and a finger-up without a recorded finger-down is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where the finger went down.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Completes the gesture at `end_x`.
    ///
    /// A displacement strictly beyond [`SWIPE_THRESHOLD`] navigates: a swipe
    /// to the left (positive `start - end`) advances, a swipe to the right
    /// goes back. Anything at or below the threshold is a tap and ignored.
    pub fn finish(&mut self, end_x: f32) -> Option<Action> {
        let start_x = self.start_x.take()?;
        let diff = start_x - end_x;

        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if diff > 0.0 {
            Action::Next
        } else {
            Action::Previous
        })
    }

    /// Forgets an in-flight gesture, e.g. when the finger is lost or the
    /// overlay closes mid-gesture.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_click_opens_at_its_index() {
        assert_eq!(
            click_action(PointerTarget::Thumbnail(7)),
            Some(Action::Open(7))
        );
    }

    #[test]
    fn controls_win_over_the_backdrop() {
        assert_eq!(click_action(PointerTarget::NextControl), Some(Action::Next));
        assert_eq!(
            click_action(PointerTarget::PreviousControl),
            Some(Action::Previous)
        );
        assert_eq!(click_action(PointerTarget::CloseControl), Some(Action::Close));
    }

    #[test]
    fn backdrop_closes_but_the_image_does_not() {
        assert_eq!(click_action(PointerTarget::Backdrop), Some(Action::Close));
        assert_eq!(click_action(PointerTarget::Image), None);
    }

    #[test]
    fn context_menu_is_always_suppressed() {
        assert_eq!(context_menu_action(PointerTarget::Image), None);
        assert_eq!(context_menu_action(PointerTarget::Backdrop), None);
        assert_eq!(context_menu_action(PointerTarget::Thumbnail(0)), None);
    }

    #[test]
    fn keys_act_only_while_open() {
        assert_eq!(key_action(KeyPress::Escape, true), Some(Action::Close));
        assert_eq!(key_action(KeyPress::ArrowRight, true), Some(Action::Next));
        assert_eq!(key_action(KeyPress::ArrowLeft, true), Some(Action::Previous));

        assert_eq!(key_action(KeyPress::Escape, false), None);
        assert_eq!(key_action(KeyPress::ArrowRight, false), None);
        assert_eq!(key_action(KeyPress::ArrowLeft, false), None);
    }

    #[test]
    fn swipe_at_threshold_is_a_tap() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(50.0), None); // diff == 50 exactly
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(49.0), Some(Action::Next)); // diff == 51
    }

    #[test]
    fn swipe_right_past_threshold_goes_back() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(151.0), Some(Action::Previous)); // diff == -51
    }

    #[test]
    fn small_jitter_is_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(103.0), None);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.finish(0.0), None);
    }

    #[test]
    fn gesture_state_is_not_retained_across_interactions() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(300.0);
        assert_eq!(swipe.finish(100.0), Some(Action::Next));
        // the previous start must not leak into the next finger-up
        assert_eq!(swipe.finish(100.0), None);
    }

    #[test]
    fn cancel_forgets_the_gesture() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(300.0);
        swipe.cancel();
        assert_eq!(swipe.finish(0.0), None);
    }
}
