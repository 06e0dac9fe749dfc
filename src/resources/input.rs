//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! the [`InputState`] resource. Arrow keys move and jump; ESC quits and F11
//! toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// The three level-triggered actions that drive player motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_UP),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Snapshot of the motion keys currently held.
    pub fn motion(&self) -> MotionInput {
        MotionInput {
            left: self.move_left.active,
            right: self.move_right.active,
            jump: self.jump.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.move_left.active);
        assert!(!input.move_right.active);
        assert!(!input.jump.active);
        assert!(!input.back.active);
        assert!(!input.mode_debug.active);
        assert_eq!(input.motion(), MotionInput::default());
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_motion_snapshot() {
        let mut input = InputState::default();
        input.move_right.active = true;
        input.jump.active = true;
        assert_eq!(
            input.motion(),
            MotionInput {
                left: false,
                right: true,
                jump: true
            }
        );
    }
}
