use bracket_lib::prelude::VirtualKeyCode;
use vim::KeyInput;

/// Translates a terminal key event into a parser [`KeyInput`], resolving the
/// shift modifier into the character itself (`G` vs `g`, `;` vs `:`).
/// Returns `None` for keys the parser has no use for.
pub fn translate(key: VirtualKeyCode, shift: bool) -> Option<KeyInput> {
    use VirtualKeyCode::*;

    let letter = |c: char| {
        Some(KeyInput::Char(if shift { c.to_ascii_uppercase() } else { c }))
    };

    match key {
        A => letter('a'),
        B => letter('b'),
        C => letter('c'),
        D => letter('d'),
        E => letter('e'),
        F => letter('f'),
        G => letter('g'),
        H => letter('h'),
        I => letter('i'),
        J => letter('j'),
        K => letter('k'),
        L => letter('l'),
        M => letter('m'),
        N => letter('n'),
        O => letter('o'),
        P => letter('p'),
        Q => letter('q'),
        R => letter('r'),
        S => letter('s'),
        T => letter('t'),
        U => letter('u'),
        V => letter('v'),
        W => letter('w'),
        X => letter('x'),
        Y => letter('y'),
        Z => letter('z'),
        Key1 => Some(KeyInput::Char('1')),
        Key2 => Some(KeyInput::Char('2')),
        Key3 => Some(KeyInput::Char('3')),
        // Shift+4 is the line-end motion `$`.
        Key4 => Some(KeyInput::Char(if shift { '$' } else { '4' })),
        Key5 => Some(KeyInput::Char('5')),
        Key6 => Some(KeyInput::Char('6')),
        Key7 => Some(KeyInput::Char('7')),
        Key8 => Some(KeyInput::Char('8')),
        Key9 => Some(KeyInput::Char('9')),
        Key0 => Some(KeyInput::Char('0')),
        Numpad0 => Some(KeyInput::Char('0')),
        Numpad1 => Some(KeyInput::Char('1')),
        Numpad2 => Some(KeyInput::Char('2')),
        Numpad3 => Some(KeyInput::Char('3')),
        Numpad4 => Some(KeyInput::Char('4')),
        Numpad5 => Some(KeyInput::Char('5')),
        Numpad6 => Some(KeyInput::Char('6')),
        Numpad7 => Some(KeyInput::Char('7')),
        Numpad8 => Some(KeyInput::Char('8')),
        Numpad9 => Some(KeyInput::Char('9')),
        Semicolon => Some(KeyInput::Char(if shift { ':' } else { ';' })),
        Slash => Some(KeyInput::Char(if shift { '?' } else { '/' })),
        Space => Some(KeyInput::Char(' ')),
        Escape => Some(KeyInput::Escape),
        Return | NumpadEnter => Some(KeyInput::Enter),
        Back => Some(KeyInput::Backspace),
        Tab => Some(KeyInput::Tab),
        LShift | RShift | LControl | RControl | LAlt | RAlt | LWin | RWin => {
            Some(KeyInput::Modifier)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_respect_shift() {
        assert_eq!(
            translate(VirtualKeyCode::G, false),
            Some(KeyInput::Char('g'))
        );
        assert_eq!(
            translate(VirtualKeyCode::G, true),
            Some(KeyInput::Char('G'))
        );
    }

    #[test]
    fn symbols_resolve_through_shift() {
        assert_eq!(
            translate(VirtualKeyCode::Semicolon, true),
            Some(KeyInput::Char(':'))
        );
        assert_eq!(
            translate(VirtualKeyCode::Key4, true),
            Some(KeyInput::Char('$'))
        );
        assert_eq!(
            translate(VirtualKeyCode::Slash, true),
            Some(KeyInput::Char('?'))
        );
    }

    #[test]
    fn digits_and_special_keys() {
        assert_eq!(
            translate(VirtualKeyCode::Key9, false),
            Some(KeyInput::Char('9'))
        );
        assert_eq!(translate(VirtualKeyCode::Escape, false), Some(KeyInput::Escape));
        assert_eq!(translate(VirtualKeyCode::Return, false), Some(KeyInput::Enter));
        assert_eq!(translate(VirtualKeyCode::Back, false), Some(KeyInput::Backspace));
        assert_eq!(translate(VirtualKeyCode::Tab, false), Some(KeyInput::Tab));
        assert_eq!(translate(VirtualKeyCode::Space, false), Some(KeyInput::Char(' ')));
    }

    #[test]
    fn modifiers_are_flagged_not_dropped() {
        assert_eq!(
            translate(VirtualKeyCode::LShift, false),
            Some(KeyInput::Modifier)
        );
        assert_eq!(
            translate(VirtualKeyCode::RControl, false),
            Some(KeyInput::Modifier)
        );
    }

    #[test]
    fn unmapped_keys_are_none() {
        assert_eq!(translate(VirtualKeyCode::F1, false), None);
        assert_eq!(translate(VirtualKeyCode::Insert, false), None);
    }
}
