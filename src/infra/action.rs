use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::infra::Position;

/// The single order a robot hands back to the engine each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Position),
    Attack(Position),
    Guard,
    Suicide,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack(_) => "attack",
            Action::Guard => "guard",
            Action::Suicide => "suicide",
        }
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            Action::Move(pos) | Action::Attack(pos) => Some(*pos),
            Action::Guard | Action::Suicide => None,
        }
    }
}

/// Engine wire form: `["move", [x, y]]`, `["attack", [x, y]]`, `["guard"]`,
/// `["suicide"]`.
impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let target = self.target();
        let mut seq = serializer.serialize_seq(Some(1 + target.is_some() as usize))?;
        seq.serialize_element(self.name())?;
        if let Some(pos) = target {
            seq.serialize_element(&pos)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        let cases = [
            (Action::Move(Position::new(1, 2)), r#"["move",[1,2]]"#),
            (Action::Attack(Position::new(3, 4)), r#"["attack",[3,4]]"#),
            (Action::Guard, r#"["guard"]"#),
            (Action::Suicide, r#"["suicide"]"#),
        ];
        for (action, expected) in cases {
            assert_eq!(serde_json::to_string(&action).unwrap(), expected);
        }
    }
}
