use std::collections::HashSet;

use boxes::Movement;
use winit::keyboard::KeyCode;

const BINDINGS: &[(KeyCode, Movement)] = &[
    (KeyCode::KeyW, Movement::Forward),
    (KeyCode::KeyS, Movement::Backward),
    (KeyCode::KeyA, Movement::Left),
    (KeyCode::KeyD, Movement::Right),
    (KeyCode::Space, Movement::Up),
    (KeyCode::ShiftLeft, Movement::Down),
    (KeyCode::ArrowLeft, Movement::TurnLeft),
    (KeyCode::ArrowRight, Movement::TurnRight),
    (KeyCode::ArrowUp, Movement::LookUp),
    (KeyCode::ArrowDown, Movement::LookDown),
];

#[derive(Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
}

impl Input {
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Movement intents for every bound key currently held.
    pub fn movements(&self) -> impl Iterator<Item = Movement> + '_ {
        BINDINGS
            .iter()
            .filter(|(key, _)| self.is_key_held(*key))
            .map(|&(_, movement)| movement)
    }

    pub fn clear(&mut self) {
        self.keys_held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_map_to_movements() {
        let mut input = Input::default();
        input.set_key(KeyCode::KeyW, true);
        input.set_key(KeyCode::ArrowLeft, true);
        input.set_key(KeyCode::KeyQ, true);

        let movements: Vec<_> = input.movements().collect();
        assert_eq!(movements, vec![Movement::Forward, Movement::TurnLeft]);

        input.set_key(KeyCode::KeyW, false);
        let movements: Vec<_> = input.movements().collect();
        assert_eq!(movements, vec![Movement::TurnLeft]);
    }
}
