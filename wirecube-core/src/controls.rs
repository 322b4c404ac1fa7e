/// Keyboard bindings for cube rotation
use crate::transform::Axis;

/// The six rotation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Q,
    A,
    W,
    S,
    E,
    D,
}

impl Key {
    pub const ALL: [Key; 6] = [Key::Q, Key::A, Key::W, Key::S, Key::E, Key::D];

    /// Map a typed character to a key, ignoring case
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'q' => Some(Key::Q),
            'a' => Some(Key::A),
            'w' => Some(Key::W),
            's' => Some(Key::S),
            'e' => Some(Key::E),
            'd' => Some(Key::D),
            _ => None,
        }
    }

    /// Rotations bound to this key, applied in order.
    ///
    /// Each entry is an axis and a multiple of the configured step. `Q`
    /// rotates about X, then Y, then Z, each about the current centroid.
    pub fn rotations(self) -> &'static [(Axis, f64)] {
        match self {
            Key::Q => &[(Axis::X, 1.0), (Axis::Y, 1.0), (Axis::Z, 1.0)],
            Key::A => &[(Axis::X, -1.0)],
            Key::W => &[(Axis::Y, 1.0)],
            Key::S => &[(Axis::Y, -1.0)],
            Key::E => &[(Axis::Z, 1.0)],
            Key::D => &[(Axis::Z, -1.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('q'), Some(Key::Q));
        assert_eq!(Key::from_char('W'), Some(Key::W));
        assert_eq!(Key::from_char('d'), Some(Key::D));
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn test_combined_key_order() {
        let axes: Vec<Axis> = Key::Q.rotations().iter().map(|(axis, _)| *axis).collect();
        assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z]);
    }

    #[test]
    fn test_single_axis_keys() {
        for key in Key::ALL.into_iter().filter(|k| *k != Key::Q) {
            assert_eq!(key.rotations().len(), 1);
        }
        assert_eq!(Key::A.rotations(), &[(Axis::X, -1.0)]);
        assert_eq!(Key::S.rotations(), &[(Axis::Y, -1.0)]);
    }
}
