/// Free-form status string ("straight", "boost", "dead", ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State(pub String);

impl State {
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    pub fn is(&self, state: &str) -> bool {
        self.0 == state
    }

    pub fn set(&mut self, state: impl Into<String>) {
        self.0 = state.into();
    }
}
