//! In-memory implementation of the `InteractionStore` port.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::chat::{
    domain::SupportInteraction,
    ports::{InteractionStore, InteractionStoreError, InteractionStoreResult},
};

/// In-memory [`InteractionStore`] holding a single current interaction.
///
/// Clones share the same slot, so a test can keep one handle to switch
/// interactions while the service reads through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInteractionStore {
    current: Arc<RwLock<Option<SupportInteraction>>>,
}

impl InMemoryInteractionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose current interaction is `interaction`.
    #[must_use]
    pub fn with_current(interaction: SupportInteraction) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(interaction))),
        }
    }

    /// Replaces the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `InteractionStoreError` when lock acquisition fails.
    pub fn set_current(&self, interaction: SupportInteraction) -> InteractionStoreResult<()> {
        let mut guard = self.current.write().map_err(|e| {
            InteractionStoreError::backend(std::io::Error::other(e.to_string()))
        })?;
        *guard = Some(interaction);
        Ok(())
    }

    /// Clears the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `InteractionStoreError` when lock acquisition fails.
    pub fn clear(&self) -> InteractionStoreResult<()> {
        let mut guard = self.current.write().map_err(|e| {
            InteractionStoreError::backend(std::io::Error::other(e.to_string()))
        })?;
        *guard = None;
        Ok(())
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn current_support_interaction(
        &self,
    ) -> InteractionStoreResult<Option<SupportInteraction>> {
        let guard = self.current.read().map_err(|e| {
            InteractionStoreError::backend(std::io::Error::other(e.to_string()))
        })?;
        Ok(guard.clone())
    }
}
