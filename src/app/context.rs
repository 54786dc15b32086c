use crate::ports::{Reporter, TemplateRenderer, TemplateStore, ValuePrompter};

/// Application context holding dependencies for command execution.
pub struct AppContext<S, P, R, T>
where
    S: TemplateStore,
    P: ValuePrompter,
    R: Reporter,
    T: TemplateRenderer,
{
    store: S,
    prompter: P,
    reporter: R,
    renderer: T,
}

impl<S, P, R, T> AppContext<S, P, R, T>
where
    S: TemplateStore,
    P: ValuePrompter,
    R: Reporter,
    T: TemplateRenderer,
{
    /// Create a new application context.
    pub fn new(store: S, prompter: P, reporter: R, renderer: T) -> Self {
        Self { store, prompter, reporter, renderer }
    }

    /// Get a reference to the template store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the value prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &T {
        &self.renderer
    }
}
