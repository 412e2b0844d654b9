//! Keyboard tracking
//!
//! Browser key events arrive whenever the page delivers them. They are
//! recorded here as edges and handed to the simulation once per frame as an
//! [`InputFrame`], so the simulation never runs inside an event callback.

/// Logical keys the game listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the paddle up
    Up,
    /// Move the paddle down
    Down,
    /// Start / play again
    Action,
}

impl Key {
    pub const ALL: [Key; 3] = [Key::Up, Key::Down, Key::Action];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of logical keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u8);

impl KeySet {
    pub fn contains(self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Direction of a key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Press,
    Release,
}

/// A single up/down transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEdge {
    pub key: Key,
    pub kind: EdgeKind,
    /// Keys held right after this transition
    pub held: KeySet,
}

/// Everything that happened on the keyboard since the previous frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Keys held at the end of the frame
    pub held: KeySet,
    /// Transitions in arrival order
    pub edges: Vec<KeyEdge>,
}

impl InputFrame {
    /// A frame in which `key` went down and stays down
    pub fn press(key: Key) -> Self {
        let mut held = KeySet::default();
        held.insert(key);
        Self {
            held,
            edges: vec![KeyEdge {
                key,
                kind: EdgeKind::Press,
                held,
            }],
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.edges
            .iter()
            .any(|e| e.key == key && e.kind == EdgeKind::Press)
    }

    pub fn was_released(&self, key: Key) -> bool {
        self.edges
            .iter()
            .any(|e| e.key == key && e.kind == EdgeKind::Release)
    }
}

/// Maps one keyboard character to a logical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    value: String,
    key: Key,
    subscribed: bool,
}

impl KeyBinding {
    pub fn new(value: &str, key: Key) -> Self {
        Self {
            value: value.to_lowercase(),
            key,
            subscribed: true,
        }
    }

    /// Case-insensitive match against a `KeyboardEvent.key` value
    pub fn matches(&self, event_key: &str) -> bool {
        self.subscribed && event_key.to_lowercase() == self.value
    }

    /// Stop listening. An unsubscribed binding never matches again.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Tracks bound keys between frames
#[derive(Debug, Default)]
pub struct InputTracker {
    bindings: Vec<KeyBinding>,
    held: KeySet,
    edges: Vec<KeyEdge>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh binding for `key`, replacing any previous one
    pub fn bind(&mut self, value: &str, key: Key) {
        self.bindings.retain(|b| b.key != key);
        self.forget(key);
        self.bindings.push(KeyBinding::new(value, key));
    }

    /// Make the binding for `key` inert; call [`bind`](Self::bind) to listen again
    pub fn unsubscribe(&mut self, key: Key) {
        for binding in self.bindings.iter_mut().filter(|b| b.key == key) {
            binding.unsubscribe();
        }
        self.forget(key);
    }

    pub fn is_bound(&self, key: Key) -> bool {
        self.bindings
            .iter()
            .any(|b| b.key == key && b.is_subscribed())
    }

    pub fn binding(&self, key: Key) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.key == key)
    }

    /// Record a key-down event. Returns true when the event matched a live
    /// binding and its default browser action should be suppressed.
    pub fn key_down(&mut self, event_key: &str) -> bool {
        let matched = self.matching(event_key);
        for key in Key::ALL {
            // Auto-repeat keeps firing keydown while held; only the first counts
            if matched.contains(key) && !self.held.contains(key) {
                self.held.insert(key);
                self.push_edge(key, EdgeKind::Press);
            }
        }
        !matched.is_empty()
    }

    /// Record a key-up event. Same return contract as [`key_down`](Self::key_down).
    pub fn key_up(&mut self, event_key: &str) -> bool {
        let matched = self.matching(event_key);
        for key in Key::ALL {
            if matched.contains(key) && self.held.contains(key) {
                self.held.remove(key);
                self.push_edge(key, EdgeKind::Release);
            }
        }
        !matched.is_empty()
    }

    /// Take the edges recorded since the last call
    pub fn frame(&mut self) -> InputFrame {
        InputFrame {
            held: self.held,
            edges: std::mem::take(&mut self.edges),
        }
    }

    fn matching(&self, event_key: &str) -> KeySet {
        let mut set = KeySet::default();
        for binding in self.bindings.iter().filter(|b| b.matches(event_key)) {
            set.insert(binding.key);
        }
        set
    }

    fn push_edge(&mut self, key: Key, kind: EdgeKind) {
        self.edges.push(KeyEdge {
            key,
            kind,
            held: self.held,
        });
    }

    fn forget(&mut self, key: Key) {
        self.held.remove(key);
        self.edges.retain(|e| e.key != key);
    }
}
