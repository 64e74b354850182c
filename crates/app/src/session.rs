use dioxus::prelude::*;
use navigation::{ShellEvent, ShellSession, ShellSnapshot};
use shared_types::{Role, ShellMode};

/// Reactive handle on the shell session, shared through context.
///
/// Components never mutate the session directly; every change goes through
/// [`SessionHandle::dispatch`].
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    inner: Signal<ShellSession>,
}

impl SessionHandle {
    pub fn dispatch(&mut self, event: ShellEvent) {
        tracing::trace!(?event, "shell event");
        self.inner.write().apply(event);
    }

    pub fn role(&self) -> Role {
        self.inner.read().role()
    }

    pub fn mode(&self) -> ShellMode {
        self.inner.read().mode()
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        self.inner.read().snapshot()
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        self.inner.read().breadcrumb()
    }

    pub fn is_branch_active(&self, id: &str) -> bool {
        self.inner.read().navigation().is_branch_active(id)
    }
}

/// Create the session from the loaded shell config and provide it to the tree.
pub fn use_session_provider() -> SessionHandle {
    use_context_provider(|| {
        let config = navigation::config::shell_config();
        SessionHandle {
            inner: Signal::new(ShellSession::from_config(config)),
        }
    })
}

/// Hook to access the shell session.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
