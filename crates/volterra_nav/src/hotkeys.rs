use crate::view::{nav_view_for_index, ViewId};

/// Terminal-independent key identity. The binary converts its backend's key
/// events into this before dispatch, keeping the core free of any terminal
/// crate. Cmd on the source platform arrives as Ctrl here; terminals do not
/// deliver a Super modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Function(u8),
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        KeyPress {
            key,
            ctrl: false,
            alt: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        KeyPress {
            key,
            ctrl: true,
            alt: false,
        }
    }
}

/// What a global shortcut asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    OpenCommandBar,
    OpenHelp,
    CloseOverlays,
    OpenSettings,
    SwitchView(ViewId),
}

/// Global shortcut decision table. `editing` is true while a text-editing
/// surface (the command bar) has focus. First matching rule wins; `None`
/// means the key is not consumed and flows to the focused widget or the
/// active view.
///
/// 1. editing: Esc closes overlays; everything else passes through
/// 2. `/`            -> open command bar
/// 3. `?`            -> open help
/// 4. Esc            -> close overlays (idempotent)
/// 5. Ctrl+`,`       -> settings
/// 6. F1..F5         -> nav item view switch
pub fn dispatch(press: KeyPress, editing: bool) -> Option<ShortcutAction> {
    if editing {
        return match press.key {
            Key::Escape => Some(ShortcutAction::CloseOverlays),
            _ => None,
        };
    }

    match press.key {
        Key::Char('/') if !press.ctrl => Some(ShortcutAction::OpenCommandBar),
        Key::Char('?') if !press.ctrl => Some(ShortcutAction::OpenHelp),
        Key::Escape => Some(ShortcutAction::CloseOverlays),
        Key::Char(',') if press.ctrl => Some(ShortcutAction::OpenSettings),
        Key::Function(n) if !press.ctrl && !press.alt => {
            nav_view_for_index(usize::from(n).checked_sub(1)?).map(ShortcutAction::SwitchView)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_opens_command_bar_when_not_editing() {
        assert_eq!(
            dispatch(KeyPress::plain(Key::Char('/')), false),
            Some(ShortcutAction::OpenCommandBar)
        );
    }

    #[test]
    fn editing_swallows_everything_but_escape() {
        assert_eq!(dispatch(KeyPress::plain(Key::Char('/')), true), None);
        assert_eq!(dispatch(KeyPress::plain(Key::Char('?')), true), None);
        assert_eq!(dispatch(KeyPress::plain(Key::Function(2)), true), None);
        assert_eq!(dispatch(KeyPress::ctrl(Key::Char(',')), true), None);
        assert_eq!(
            dispatch(KeyPress::plain(Key::Escape), true),
            Some(ShortcutAction::CloseOverlays)
        );
    }

    #[test]
    fn question_mark_opens_help() {
        assert_eq!(
            dispatch(KeyPress::plain(Key::Char('?')), false),
            Some(ShortcutAction::OpenHelp)
        );
    }

    #[test]
    fn escape_closes_overlays() {
        assert_eq!(
            dispatch(KeyPress::plain(Key::Escape), false),
            Some(ShortcutAction::CloseOverlays)
        );
    }

    #[test]
    fn ctrl_comma_opens_settings_plain_comma_does_not() {
        assert_eq!(
            dispatch(KeyPress::ctrl(Key::Char(',')), false),
            Some(ShortcutAction::OpenSettings)
        );
        assert_eq!(dispatch(KeyPress::plain(Key::Char(',')), false), None);
    }

    #[test]
    fn function_keys_map_to_nav_items() {
        assert_eq!(
            dispatch(KeyPress::plain(Key::Function(1)), false),
            Some(ShortcutAction::SwitchView(ViewId::Analyze))
        );
        assert_eq!(
            dispatch(KeyPress::plain(Key::Function(2)), false),
            Some(ShortcutAction::SwitchView(ViewId::Dashboard))
        );
        assert_eq!(
            dispatch(KeyPress::plain(Key::Function(5)), false),
            Some(ShortcutAction::SwitchView(ViewId::Watchlist))
        );
    }

    #[test]
    fn unbound_function_keys_pass_through() {
        assert_eq!(dispatch(KeyPress::plain(Key::Function(6)), false), None);
        assert_eq!(dispatch(KeyPress::plain(Key::Function(0)), false), None);
        assert_eq!(dispatch(KeyPress::ctrl(Key::Function(2)), false), None);
        let alt_f2 = KeyPress {
            key: Key::Function(2),
            ctrl: false,
            alt: true,
        };
        assert_eq!(dispatch(alt_f2, false), None);
    }

    #[test]
    fn unmatched_keys_pass_through() {
        assert_eq!(dispatch(KeyPress::plain(Key::Char('q')), false), None);
        assert_eq!(dispatch(KeyPress::plain(Key::Other), false), None);
    }
}
