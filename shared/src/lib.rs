//! # Sidebar Shared
//! The scoreboard model, its differ, text handling and the per-generation
//! packet encoder, shared by the server crate and by tests that play the
//! part of a client.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use sidebar_serde::{
    ByteReader, ByteWrite, ByteWriter, Serde, SerdeErr, VarInt, MAX_STRING_CHARS,
};

mod animation;
mod board;
mod diff;
mod protocol;
mod text;

pub use animation::{error::AnimationError, Animation};
pub use board::{
    body::{Body, ScoreboardModel},
    error::{ContentError, ContractError},
    line::{Line, MAX_LINES},
    title::Title,
};
pub use diff::{BoardOp, BodyDiff};
pub use protocol::{
    affix::{row_token, sentinel, split_affixes, Affixes},
    capabilities::{Capabilities, PacketIds},
    encoder::{team_name, EncodedPacket, ProtocolDecoder, ProtocolEncoder, MAX_NAME_LENGTH},
    error::{CapabilityError, DecodeError, EncodeError},
    generation::ProtocolGeneration,
    packets::{
        ChatObjective, DisplayObjectivePacket, LegacyObjective, LegacyScore, LegacyTeam,
        Modern13Score, Modern13Team, Modern17Team, Modern8Objective, Modern8Score, Modern8Team,
        ObjectiveMode, ObjectivePacket, Packet, PacketKind, ScoreAction, ScorePacket, TeamMode,
        TeamPacket, TeamParameters, WireFields, ALWAYS, INTEGER_RENDER_TYPE, RESET_COLOR,
        SIDEBAR_POSITION,
    },
};
pub use text::{
    chat_color::{ChatColor, COLOR_CHAR},
    component::Component,
    legacy::{colorize, last_colors, strip_colors},
    renderable::RenderableText,
};
