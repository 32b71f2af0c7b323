//! Change notifications raised by the track bar.

/// Observable events, delivered in the order they are raised.
///
/// A user drag or click raises `Scroll` before `ValueChanged`; programmatic
/// and keyboard changes raise only `ValueChanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackBarEvent {
    Scroll,
    ValueChanged(i32),
}

type Observer = Box<dyn Fn(&TrackBarEvent)>;

/// Registered observers, called in registration order.
#[derive(Default)]
pub struct Observers {
    observers: Vec<Observer>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: impl Fn(&TrackBarEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn emit(&self, event: TrackBarEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}
