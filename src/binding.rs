//! Toggle the formatter's subscription to the host notification stream.
//!
//! The binding state is explicit and lives in [`Registration`]. It starts
//! [`Binding::Unbound`] and only changes through [`Registration::bind`],
//! [`Registration::unbind`] and [`Registration::toggle`].

use log::info;

/// Whether the handler is currently subscribed to character-added events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binding {
    #[default]
    Unbound,
    Bound,
}

/// Host side of the subscription.
pub trait NotificationSource {
    /// Start delivering character-added events to the formatter.
    fn subscribe(&mut self);
    /// Stop delivering character-added events to the formatter.
    fn unsubscribe(&mut self);
}

/// Owns the binding state and drives a [`NotificationSource`].
///
/// Repeated `bind` or `unbind` calls are idempotent: the source is only
/// touched on an actual state change.
#[derive(Debug)]
pub struct Registration<S> {
    source: S,
    state: Binding,
}

impl<S: NotificationSource> Registration<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Binding::Unbound,
        }
    }

    #[must_use]
    pub fn state(&self) -> Binding {
        self.state
    }

    pub fn bind(&mut self) {
        if self.state == Binding::Bound {
            return;
        }
        info!("binding auto-format handler");
        self.source.subscribe();
        self.state = Binding::Bound;
    }

    pub fn unbind(&mut self) {
        if self.state == Binding::Unbound {
            return;
        }
        info!("unbinding auto-format handler");
        self.source.unsubscribe();
        self.state = Binding::Unbound;
    }

    /// Flip the binding and return the new state.
    pub fn toggle(&mut self) -> Binding {
        match self.state {
            Binding::Unbound => self.bind(),
            Binding::Bound => self.unbind(),
        }
        self.state
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
