use crate::core::data::view_state::ViewState;

/// Dual-stack undo/redo history of view states.
///
/// The current state lives outside the stacks, owned by the engine. A
/// mutation records the outgoing current state on `past`; undo and redo
/// shuttle states between `past` and `future` through the current slot.
///
/// `record` deliberately does not clear `future`: a mutation after an undo
/// leaves the undone branch reachable via redo.
#[derive(Debug, Default)]
pub struct History {
    past: Vec<ViewState>,
    future: Vec<ViewState>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// Records the state being replaced by a fresh mutation.
    pub fn record(&mut self, replaced: ViewState) {
        self.past.push(replaced);
    }

    pub fn push_past(&mut self, state: ViewState) {
        self.past.push(state);
    }

    pub fn push_future(&mut self, state: ViewState) {
        self.future.push(state);
    }

    pub fn pop_past(&mut self) -> Option<ViewState> {
        self.past.pop()
    }

    pub fn pop_future(&mut self) -> Option<ViewState> {
        self.future.pop()
    }

    #[must_use]
    pub fn past_depth(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn future_depth(&self) -> usize {
        self.future.len()
    }
}
