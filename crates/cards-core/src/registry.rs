use std::collections::HashMap;

use crate::error::{CardsError, Result};
use crate::widget::ContributorsWidget;

/// Tag the binary registers the widget under
pub const WIDGET_TAG: &str = "contributor-cards";

type WidgetFactory = Box<dyn Fn() -> ContributorsWidget + Send + Sync>;

/// Explicit tag → factory registry.
///
/// Each caller owns its own registry instance; nothing is registered
/// process-wide, so tests can instantiate widgets in full isolation.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a tag. Re-registering a tag is an error
    /// rather than a silent overwrite.
    pub fn register<F>(&mut self, tag: &str, factory: F) -> Result<()>
    where
        F: Fn() -> ContributorsWidget + Send + Sync + 'static,
    {
        if self.factories.contains_key(tag) {
            return Err(CardsError::DuplicateComponent(tag.to_string()));
        }
        self.factories.insert(tag.to_string(), Box::new(factory));
        Ok(())
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Build a fresh widget instance for the tag
    pub fn instantiate(&self, tag: &str) -> Result<ContributorsWidget> {
        self.factories
            .get(tag)
            .map(|factory| factory())
            .ok_or_else(|| CardsError::UnknownComponent(tag.to_string()))
    }
}
