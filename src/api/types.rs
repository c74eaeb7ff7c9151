//! Shared types for the API layer.

use std::sync::Arc;

use crate::core_state::CoreState;

/// Shared context for all API routes. Wraps the read-only `CoreState`;
/// cloning is an `Arc` bump.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_state() {
        let ctx = ApiContext::new(Arc::new(CoreState::for_tests()));
        let clone = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.core, &clone.core));
    }
}
