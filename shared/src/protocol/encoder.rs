use std::sync::Arc;

use log::trace;
use sidebar_serde::{ByteReader, ByteWrite, ByteWriter, Serde, VarInt, MAX_STRING_CHARS};

use crate::text::{chat_color::ChatColor, component::Component, renderable::RenderableText};

use super::{
    affix::{row_token, sentinel, split_affixes, Affixes},
    capabilities::Capabilities,
    error::{DecodeError, EncodeError},
    generation::ProtocolGeneration,
    packets::{
        ChatObjective, DisplayObjectivePacket, LegacyObjective, LegacyScore, LegacyTeam,
        Modern13Score, Modern13Team, Modern17Team, Modern8Objective, Modern8Score, Modern8Team,
        ObjectiveMode, ObjectivePacket, Packet, PacketKind, ScoreAction, ScorePacket, TeamMode,
        TeamPacket, TeamParameters, ALWAYS, RESET_COLOR,
    },
};

/// Objective and team names are limited to 16 characters on the wire
pub const MAX_NAME_LENGTH: usize = 16;

/// One packet ready for the transport: VarInt packet id, then fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPacket {
    kind: PacketKind,
    bytes: Vec<u8>,
}

impl EncodedPacket {
    pub fn kind(&self) -> PacketKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Team name of the row at `score`
pub fn team_name(objective: &str, score: usize) -> String {
    format!("{objective}:{score}")
}

/// Builds scoreboard packets in the layout of the negotiated generation
#[derive(Clone, Debug)]
pub struct ProtocolEncoder {
    capabilities: Arc<Capabilities>,
}

impl ProtocolEncoder {
    pub fn new(capabilities: Arc<Capabilities>) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn generation(&self) -> ProtocolGeneration {
        self.capabilities.generation()
    }

    // Objective

    /// `title` is ignored for [`ObjectiveMode::Remove`]
    pub fn objective<T: RenderableText>(
        &self,
        name: &str,
        mode: ObjectiveMode,
        title: &T,
    ) -> Result<EncodedPacket, EncodeError> {
        let packet = self.objective_packet(name, mode, title)?;
        Ok(self.encode(&Packet::Objective(packet)))
    }

    pub fn objective_packet<T: RenderableText>(
        &self,
        name: &str,
        mode: ObjectiveMode,
        title: &T,
    ) -> Result<ObjectivePacket, EncodeError> {
        check_length("objective name", name, MAX_NAME_LENGTH)?;
        let name = name.to_string();

        if self.capabilities.rich_text() {
            let title = if mode.has_title() {
                title.to_component().to_json()?
            } else {
                String::new()
            };
            return Ok(ObjectivePacket::Modern13(ChatObjective { name, mode, title }));
        }

        let title = if mode.has_title() {
            self.plain_title(title)?
        } else {
            String::new()
        };
        Ok(match self.generation() {
            ProtocolGeneration::Legacy => ObjectivePacket::Legacy(LegacyObjective { name, title, mode }),
            _ => ObjectivePacket::Modern8(Modern8Objective { name, mode, title }),
        })
    }

    fn plain_title<T: RenderableText>(&self, title: &T) -> Result<String, EncodeError> {
        let mut text = title.to_plain();
        if text.is_empty() {
            text = ChatColor::Reset.to_string();
        }
        if let Some(max) = self.capabilities.max_title_length() {
            check_length("title", &text, max)?;
        }
        Ok(text)
    }

    // Display

    pub fn display_objective(&self, name: &str) -> Result<EncodedPacket, EncodeError> {
        check_length("objective name", name, MAX_NAME_LENGTH)?;
        let packet = DisplayObjectivePacket::sidebar(name);
        Ok(self.encode(&Packet::DisplayObjective(packet)))
    }

    // Score

    pub fn score(
        &self,
        objective: &str,
        score: usize,
        action: ScoreAction,
    ) -> Result<EncodedPacket, EncodeError> {
        let packet = self.score_packet(objective, score, action)?;
        Ok(self.encode(&Packet::Score(packet)))
    }

    pub fn score_packet(
        &self,
        objective: &str,
        score: usize,
        action: ScoreAction,
    ) -> Result<ScorePacket, EncodeError> {
        let token = row_token(score)?;
        let objective = objective.to_string();
        // row tokens bound the score to 0..15
        let value = score as i32;

        Ok(match self.generation() {
            ProtocolGeneration::Legacy => ScorePacket::Legacy(LegacyScore {
                token,
                action,
                objective,
                value,
            }),
            ProtocolGeneration::Modern8 => ScorePacket::Modern8(Modern8Score {
                token,
                action,
                objective,
                value,
            }),
            ProtocolGeneration::Modern13 | ProtocolGeneration::Modern17 => {
                ScorePacket::Modern13(Modern13Score {
                    token,
                    action,
                    objective,
                    value,
                })
            }
        })
    }

    // Team

    /// `content` is the row's rendered text; `None` or empty content shows
    /// the row's sentinel. Ignored for [`TeamMode::Remove`].
    pub fn team<T: RenderableText>(
        &self,
        objective: &str,
        score: usize,
        mode: TeamMode,
        content: Option<&T>,
    ) -> Result<EncodedPacket, EncodeError> {
        let packet = self.team_packet(objective, score, mode, content)?;
        Ok(self.encode(&Packet::Team(packet)))
    }

    pub fn team_packet<T: RenderableText>(
        &self,
        objective: &str,
        score: usize,
        mode: TeamMode,
        content: Option<&T>,
    ) -> Result<TeamPacket, EncodeError> {
        let token = row_token(score)?;
        let name = team_name(objective, score);
        check_length("team name", &name, MAX_NAME_LENGTH)?;

        let members = if mode.has_members() { vec![token] } else { Vec::new() };
        let affixes = if mode.has_info() {
            self.row_affixes(score, content)?
        } else {
            RowAffixes::default()
        };

        Ok(match self.generation() {
            ProtocolGeneration::Legacy => TeamPacket::Legacy(LegacyTeam {
                name,
                mode,
                display: String::new(),
                prefix: affixes.prefix,
                suffix: affixes.suffix,
                friendly_fire: 0,
                members,
            }),
            ProtocolGeneration::Modern8 => TeamPacket::Modern8(Modern8Team {
                name,
                mode,
                display: String::new(),
                prefix: affixes.prefix,
                suffix: affixes.suffix,
                flags: 0,
                visibility: ALWAYS.to_string(),
                collision: ALWAYS.to_string(),
                color: RESET_COLOR,
                members,
            }),
            ProtocolGeneration::Modern13 => TeamPacket::Modern13(Modern13Team {
                name,
                mode,
                display: affixes.display,
                flags: 0,
                visibility: ALWAYS.to_string(),
                collision: ALWAYS.to_string(),
                color: i32::from(RESET_COLOR),
                prefix: affixes.prefix,
                suffix: affixes.suffix,
                members,
            }),
            ProtocolGeneration::Modern17 => {
                let parameters = mode.has_info().then(|| TeamParameters {
                    display: affixes.display,
                    flags: 0,
                    visibility: ALWAYS.to_string(),
                    collision: ALWAYS.to_string(),
                    color: i32::from(RESET_COLOR),
                    prefix: affixes.prefix,
                    suffix: affixes.suffix,
                });
                TeamPacket::Modern17(Modern17Team {
                    name,
                    mode,
                    parameters,
                    members,
                })
            }
        })
    }

    /// Prefix, suffix and display name in the generation's text format
    fn row_affixes<T: RenderableText>(
        &self,
        score: usize,
        content: Option<&T>,
    ) -> Result<RowAffixes, EncodeError> {
        let max_length = self.capabilities.max_affix_length();
        let rich = self.capabilities.rich_text();

        let content = content.filter(|text| !text.is_empty());
        let Some(text) = content else {
            let prefix = sentinel(score)?;
            return RowAffixes::from_plain(Affixes { prefix, suffix: String::new() }, rich);
        };

        if rich && text.char_len() <= max_length {
            return Ok(RowAffixes {
                display: Component::empty().to_json()?,
                prefix: text.to_component().to_json()?,
                suffix: Component::empty().to_json()?,
            });
        }

        let affixes = split_affixes(&text.to_plain(), max_length);
        trace!(
            "Split row {} into {} + {} characters",
            score,
            affixes.prefix.chars().count(),
            affixes.suffix.chars().count()
        );
        RowAffixes::from_plain(affixes, rich)
    }

    /// Prefixes the packet id and writes the fields
    pub fn encode(&self, packet: &Packet) -> EncodedPacket {
        let ids = self.capabilities.packet_ids();
        let id = match packet.kind() {
            PacketKind::Objective => ids.objective,
            PacketKind::DisplayObjective => ids.display_objective,
            PacketKind::Score => ids.score,
            PacketKind::Team => ids.team,
        };

        let mut writer = ByteWriter::new();
        VarInt(id).ser(&mut writer);
        packet.write(&mut writer);
        trace!("Encoded {:?} packet, {} bytes", packet.kind(), writer.bytes_written());

        EncodedPacket {
            kind: packet.kind(),
            bytes: writer.to_bytes(),
        }
    }
}

/// Reads encoded packets back, as a client of the same generation would
#[derive(Clone, Debug)]
pub struct ProtocolDecoder {
    capabilities: Arc<Capabilities>,
}

impl ProtocolDecoder {
    pub fn new(capabilities: Arc<Capabilities>) -> Self {
        Self { capabilities }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Packet, DecodeError> {
        let mut reader = ByteReader::new(bytes);
        let id = VarInt::de(&mut reader)?.get();

        let ids = self.capabilities.packet_ids();
        let kind = if id == ids.objective {
            PacketKind::Objective
        } else if id == ids.display_objective {
            PacketKind::DisplayObjective
        } else if id == ids.score {
            PacketKind::Score
        } else if id == ids.team {
            PacketKind::Team
        } else {
            return Err(DecodeError::UnknownPacketId { id });
        };

        let packet = Packet::read(self.capabilities.generation(), kind, &mut reader)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                remaining: reader.remaining(),
            });
        }
        Ok(packet)
    }
}

#[derive(Default)]
struct RowAffixes {
    display: String,
    prefix: String,
    suffix: String,
}

impl RowAffixes {
    fn from_plain(affixes: Affixes, rich: bool) -> Result<Self, EncodeError> {
        if !rich {
            return Ok(Self {
                display: String::new(),
                prefix: affixes.prefix,
                suffix: affixes.suffix,
            });
        }
        Ok(Self {
            display: Component::empty().to_json()?,
            prefix: Component::from_legacy(&affixes.prefix).to_json()?,
            suffix: Component::from_legacy(&affixes.suffix).to_json()?,
        })
    }
}

fn check_length(field: &'static str, text: &str, max: usize) -> Result<(), EncodeError> {
    let length = text.chars().count();
    if length > max.min(MAX_STRING_CHARS) {
        return Err(EncodeError::FieldTooLong { field, length, max });
    }
    Ok(())
}
