use std::collections::{BTreeMap, HashMap};

use sidebar_shared::RenderableText;

use crate::{session::SharedSession, viewer::ViewerId};

/// Sessions by viewer, remembering registration order for the tick
pub(crate) struct SessionRegistry<T: RenderableText> {
    sessions: HashMap<ViewerId, (u64, SharedSession<T>)>,
    order: BTreeMap<u64, ViewerId>,
    next_sequence: u64,
}

impl<T: RenderableText> SessionRegistry<T> {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            order: BTreeMap::new(),
            next_sequence: 0,
        }
    }

    pub fn contains(&self, viewer: &ViewerId) -> bool {
        self.sessions.contains_key(viewer)
    }

    /// Returns false, leaving the registry unchanged, if the viewer already
    /// has a session
    pub fn insert(&mut self, viewer: ViewerId, session: SharedSession<T>) -> bool {
        if self.contains(&viewer) {
            return false;
        }
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.sessions.insert(viewer, (sequence, session));
        self.order.insert(sequence, viewer);
        true
    }

    pub fn remove(&mut self, viewer: &ViewerId) -> Option<SharedSession<T>> {
        let (sequence, session) = self.sessions.remove(viewer)?;
        self.order.remove(&sequence);
        Some(session)
    }

    pub fn get(&self, viewer: &ViewerId) -> Option<SharedSession<T>> {
        self.sessions.get(viewer).map(|(_, session)| session.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Every session, oldest registration first
    pub fn in_order(&self) -> Vec<(ViewerId, SharedSession<T>)> {
        self.order
            .values()
            .filter_map(|viewer| self.get(viewer).map(|session| (*viewer, session)))
            .collect()
    }
}
