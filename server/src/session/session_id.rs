use std::fmt;

/// Objective name of a session's board, randomly generated.
///
/// `sb-` and eight hex digits, so a row's team name (`<id>:<score>`) stays
/// within the 16 characters older protocols allow.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub(crate) fn generate() -> Self {
        Self(format!("sb-{:08x}", fastrand::u32(..)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
