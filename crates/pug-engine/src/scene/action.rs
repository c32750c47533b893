use std::collections::HashMap;

use crate::input::queue::KeyCode;

/// Whether a command comes from a key press or a key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Start,
    End,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::End => "END",
        }
    }
}

/// A logical input event: one per bound key transition per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    kind: ActionKind,
    name: String,
}

impl Command {
    pub fn new(kind: ActionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn start(name: impl Into<String>) -> Self {
        Self::new(ActionKind::Start, name)
    }

    pub fn end(name: impl Into<String>) -> Self {
        Self::new(ActionKind::End, name)
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_start(&self) -> bool {
        self.kind == ActionKind::Start
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.name)
    }
}

/// Physical key to logical action table. Many keys may map to one action.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: HashMap<KeyCode, String>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn register(&mut self, key: KeyCode, action: impl Into<String>) {
        self.bindings.insert(key, action.into());
    }

    pub fn action_for(&self, key: KeyCode) -> Option<&str> {
        self.bindings.get(&key).map(String::as_str)
    }

    /// Translate a key transition into a command, if the key is bound.
    pub fn translate(&self, key: KeyCode, kind: ActionKind) -> Option<Command> {
        self.action_for(key).map(|name| Command::new(kind, name))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliased_keys_map_to_same_action() {
        let mut map = ActionMap::new();
        map.register(KeyCode::W, "UP");
        map.register(KeyCode::Up, "UP");
        assert_eq!(map.action_for(KeyCode::W), Some("UP"));
        assert_eq!(map.action_for(KeyCode::Up), Some("UP"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn unbound_key_yields_no_command() {
        let map = ActionMap::new();
        assert!(map.translate(KeyCode::Space, ActionKind::Start).is_none());
    }

    #[test]
    fn translate_keeps_kind() {
        let mut map = ActionMap::new();
        map.register(KeyCode::E, "BARK");
        let cmd = map.translate(KeyCode::E, ActionKind::End).unwrap();
        assert_eq!(cmd, Command::end("BARK"));
        assert_eq!(cmd.to_string(), "END:BARK");
    }
}
