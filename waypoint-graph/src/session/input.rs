//! Discrete input events delivered by the Scene/Surface collaborator.
//!
//! Events are serde-friendly so recorded gesture scripts can be replayed
//! (one JSON object per event, tagged by `type`).

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// A modifier key that selects a gesture's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}

/// Modifier keys held while an event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
        alt: false,
    };

    pub fn contains(self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Control => self.control,
            Modifier::Alt => self.alt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Key codes the session reacts to; anything else arrives as `Char` or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Space,
    Escape,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    Char(char),
    Other(u32),
}

impl KeyCode {
    /// The modifier this key is, if it is one.
    pub fn modifier(self) -> Option<Modifier> {
        match self {
            KeyCode::LeftShift | KeyCode::RightShift => Some(Modifier::Shift),
            KeyCode::LeftControl | KeyCode::RightControl => Some(Modifier::Control),
            KeyCode::LeftAlt | KeyCode::RightAlt => Some(Modifier::Alt),
            _ => None,
        }
    }
}

/// One input event. Pointer positions are in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        #[serde(default)]
        button: PointerButton,
        position: Vec2,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerDrag {
        #[serde(default)]
        button: PointerButton,
        position: Vec2,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        #[serde(default)]
        button: PointerButton,
        position: Vec2,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: KeyCode,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    pub fn pointer_down(position: Vec2, modifiers: Modifiers) -> Self {
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position,
            modifiers,
        }
    }

    pub fn pointer_drag(position: Vec2) -> Self {
        InputEvent::PointerDrag {
            button: PointerButton::Primary,
            position,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn pointer_up(position: Vec2) -> Self {
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            position,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_down(key: KeyCode) -> Self {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Screen position for pointer events.
    pub fn pointer_position(&self) -> Option<Vec2> {
        match *self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerDrag { position, .. }
            | InputEvent::PointerUp { position, .. } => Some(position),
            InputEvent::KeyDown { .. } => None,
        }
    }
}
