use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, trace, warn};

use sidebar_shared::{
    BoardOp, Body, BodyDiff, ContentError, ContractError, EncodeError, EncodedPacket, Line,
    ObjectiveMode, ProtocolEncoder, RenderableText, ScoreAction, TeamMode, Title, MAX_LINES,
};

use crate::{
    adapter::{BoardAdapter, RefreshHook},
    error::BoardError,
    viewer::Viewer,
};

use super::{SessionId, SessionState};

/// A session as stored by the server: one lock per session
pub type SharedSession<T> = Arc<Mutex<Session<T>>>;

pub(crate) fn lock_session<T: RenderableText>(
    session: &SharedSession<T>,
) -> Result<MutexGuard<'_, Session<T>>, BoardError> {
    session
        .lock()
        .map_err(|_| BoardError::LockPoisoned { what: "session" })
}

/// One viewer's board and the controller keeping their client in sync.
///
/// Every mutation validates first and only then queues packets, so a
/// rejected call leaves both the model and the viewer untouched. Packets
/// that fail to encode or send are logged and dropped; the next refresh
/// re-sends every row.
pub struct Session<T: RenderableText> {
    id: SessionId,
    viewer: Arc<dyn Viewer>,
    encoder: ProtocolEncoder,
    adapter: Arc<dyn BoardAdapter<T>>,
    refresh_hook: Option<RefreshHook<T>>,
    title: Title<T>,
    body: Body<T>,
    state: SessionState,
}

impl<T: RenderableText> Session<T> {
    /// Creates and displays the objective. Rows follow on [`Session::activate`].
    pub(crate) fn create(
        viewer: Arc<dyn Viewer>,
        adapter: Arc<dyn BoardAdapter<T>>,
        encoder: ProtocolEncoder,
    ) -> Result<Self, BoardError> {
        let title = adapter.title(viewer.as_ref());
        let refresh_hook = adapter.refresh_hook(viewer.as_ref());

        let mut session = Self {
            id: SessionId::generate(),
            viewer,
            encoder,
            adapter,
            refresh_hook,
            title,
            body: Body::new(),
            state: SessionState::Created,
        };
        session.check_title(&session.title)?;

        let rendered = session.title.render();
        session.dispatch(
            session
                .encoder
                .objective(session.id.as_str(), ObjectiveMode::Create, &rendered),
        );
        session.dispatch(session.encoder.display_objective(session.id.as_str()));

        info!(
            "Created board {} for viewer {} ({})",
            session.id,
            session.viewer.name(),
            session.encoder.capabilities().generation()
        );
        Ok(session)
    }

    /// Sends the first body
    pub(crate) fn activate(&mut self) -> Result<(), BoardError> {
        self.update_body()?;
        self.state = SessionState::Active;
        Ok(())
    }

    // Accessors

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn viewer(&self) -> &Arc<dyn Viewer> {
        &self.viewer
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_deleted(&self) -> bool {
        self.state == SessionState::Deleted
    }

    pub fn title(&self) -> &Title<T> {
        &self.title
    }

    pub fn body(&self) -> &Body<T> {
        &self.body
    }

    /// Number of visible rows
    pub fn size(&self) -> usize {
        self.body.size()
    }

    pub fn get_line(&self, line: usize) -> Result<&Line<T>, BoardError> {
        let size = self.size();
        self.body
            .get(line)
            .ok_or_else(|| ContractError::LineOutOfRange { line, size }.into())
    }

    // Refresh

    /// One tick: the refresh hook if the adapter supplied one, otherwise
    /// the body and title are pulled from the adapter and re-sent
    pub fn refresh(&mut self) -> Result<(), BoardError> {
        self.ensure_alive()?;
        match self.refresh_hook.clone() {
            Some(hook) => hook(self),
            None => {
                self.update_body()?;
                self.update_title()
            }
        }
    }

    /// Pulls the title from the adapter. The objective is only re-sent
    /// when the title changed or is animated.
    pub fn update_title(&mut self) -> Result<(), BoardError> {
        self.ensure_alive()?;
        let mut title = self.adapter.title(self.viewer.as_ref());
        self.check_title(&title)?;

        title.inherit_animation(&self.title);
        let resend = title.has_animation()
            || self.body.iter().any(Line::is_animated)
            || !title.same_as(&self.title);
        self.title = title;

        if resend {
            let rendered = self.title.render();
            self.dispatch(
                self.encoder
                    .objective(self.id.as_str(), ObjectiveMode::Update, &rendered),
            );
        }
        Ok(())
    }

    pub fn update_body(&mut self) -> Result<(), BoardError> {
        self.ensure_alive()?;
        let body = self.adapter.body(self.viewer.as_ref());
        self.update_body_with(body)
    }

    /// Moves the viewer's rows to `body`, keeping running animations of
    /// rows the new body does not animate itself
    pub fn update_body_with(&mut self, body: Body<T>) -> Result<(), BoardError> {
        self.ensure_alive()?;
        self.check_body(&body)?;

        let body = self.body.copy_line_contents(body);
        let diff = BodyDiff::between(&self.body, &body);
        debug!(
            "Board {}: {} -> {} rows, {} ops",
            self.id,
            self.body.size(),
            body.size(),
            diff.len()
        );
        self.body = body;
        self.apply(diff);
        Ok(())
    }

    // Line operations

    /// Sets one row. A visible row is updated in place; a row below the
    /// last one is reached by padding with empty rows.
    pub fn update_line(&mut self, line: usize, content: T) -> Result<(), BoardError> {
        self.ensure_alive()?;
        if line >= MAX_LINES {
            return Err(ContractError::LineAboveCapacity {
                line,
                max: MAX_LINES,
            }
            .into());
        }
        self.check_line(line, content.char_len())?;

        if line < self.size() {
            let score = self.size() - line - 1;
            self.body.update_line_content(line, content)?;
            let content = self.body.get(line).map(Line::content);
            self.dispatch(
                self.encoder
                    .team(self.id.as_str(), score, TeamMode::Update, content),
            );
            return Ok(());
        }

        let mut body = self.body.snapshot();
        while body.size() < line {
            body.push(T::empty());
        }
        body.push(content);
        self.update_body_with(body)
    }

    /// Removes one row; rows below it move up. Rows past the end are ignored.
    pub fn remove_line(&mut self, line: usize) -> Result<(), BoardError> {
        self.ensure_alive()?;
        if line >= self.size() {
            return Ok(());
        }

        let mut body = self.body.snapshot();
        body.remove_line(line);
        self.update_body_with(body)
    }

    /// Installs a new adapter and immediately shows its content. An adapter
    /// whose content breaks the limits is rejected and the old one stays.
    pub fn set_adapter(&mut self, adapter: Arc<dyn BoardAdapter<T>>) -> Result<(), BoardError> {
        self.ensure_alive()?;
        self.check_title(&adapter.title(self.viewer.as_ref()))?;
        let body = adapter.body(self.viewer.as_ref());
        self.check_body(&body)?;

        self.refresh_hook = adapter.refresh_hook(self.viewer.as_ref());
        self.adapter = adapter;
        self.update_body_with(body)?;
        self.update_title()
    }

    /// Removes every row team and the objective. Deleting twice is an error.
    pub fn delete(&mut self) -> Result<(), BoardError> {
        self.ensure_alive()?;

        for score in 0..self.size() {
            self.dispatch(
                self.encoder
                    .team::<T>(self.id.as_str(), score, TeamMode::Remove, None),
            );
        }
        self.dispatch(
            self.encoder
                .objective(self.id.as_str(), ObjectiveMode::Remove, &T::empty()),
        );

        self.state = SessionState::Deleted;
        info!("Deleted board {} of viewer {}", self.id, self.viewer.name());
        Ok(())
    }

    // Internals

    fn ensure_alive(&self) -> Result<(), BoardError> {
        if self.is_deleted() {
            return Err(ContractError::SessionDeleted {
                id: self.id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_title(&self, title: &Title<T>) -> Result<(), BoardError> {
        let Some(max) = self.encoder.capabilities().max_title_length() else {
            return Ok(());
        };
        let length = title.max_char_len();
        if length > max {
            return Err(ContentError::TitleTooLong { length, max }.into());
        }
        Ok(())
    }

    fn check_body(&self, body: &Body<T>) -> Result<(), BoardError> {
        for line in body {
            self.check_line(line.index(), line.max_char_len())?;
        }
        Ok(())
    }

    fn check_line(&self, line: usize, length: usize) -> Result<(), BoardError> {
        let Some(max) = self.encoder.capabilities().max_line_length() else {
            return Ok(());
        };
        if length > max {
            return Err(ContentError::LineTooLong { line, length, max }.into());
        }
        Ok(())
    }

    fn apply(&mut self, diff: BodyDiff) {
        // every row advances its animation once per apply
        let rows: Vec<T> = (0..self.body.size())
            .filter_map(|index| self.body.get_mut(index).map(Line::render))
            .collect();
        let row = |score: usize| -> Option<&T> {
            let index = rows.len().checked_sub(score + 1)?;
            rows.get(index)
        };

        let id = self.id.as_str();
        for op in diff {
            let packet = match op {
                BoardOp::Create(score) => self.encoder.team(id, score, TeamMode::Create, row(score)),
                BoardOp::Update(score) => self.encoder.team(id, score, TeamMode::Update, row(score)),
                BoardOp::Remove(score) => self.encoder.team::<T>(id, score, TeamMode::Remove, None),
                BoardOp::AddScoreEntry(score) => self.encoder.score(id, score, ScoreAction::Change),
                BoardOp::RemoveScoreEntry(score) => {
                    self.encoder.score(id, score, ScoreAction::Remove)
                }
            };
            self.dispatch(packet);
        }
    }

    fn dispatch(&self, packet: Result<EncodedPacket, EncodeError>) {
        let packet = match packet {
            Ok(packet) => packet,
            Err(error) => {
                warn!("Dropping packet for board {}: {}", self.id, error);
                return;
            }
        };
        if !self.viewer.is_connected() {
            trace!(
                "Viewer {} is offline, skipping {:?} packet",
                self.viewer.name(),
                packet.kind()
            );
            return;
        }
        if let Err(error) = self.viewer.send(&packet) {
            warn!("Dropping {:?} packet for board {}: {}", packet.kind(), self.id, error);
        }
    }
}
