use uuid::Uuid;

/// Chat session identity. The id is minted on the first submission and every
/// later turn in the session reuses it; it is never regenerated or cleared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConversationState {
    conversation_id: Option<Uuid>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session's conversation id, minting one on first use.
    pub fn get_or_create(&mut self) -> Uuid {
        *self.conversation_id.get_or_insert_with(Uuid::new_v4)
    }

    pub fn current(&self) -> Option<Uuid> {
        self.conversation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_an_id() {
        assert_eq!(ConversationState::new().current(), None);
    }

    #[test]
    fn id_is_stable_across_calls() {
        let mut state = ConversationState::new();
        let first = state.get_or_create();
        let second = state.get_or_create();
        let third = state.get_or_create();
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(state.current(), Some(first));
    }
}
