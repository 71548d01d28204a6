use std::fmt;
use tracing::warn;

/// Highest channel index that fits into a command group
pub const MAX_CHANNEL: u8 = 64;

/// Bitmask addressing a subset of channels in one command.
///
/// Channel `n` (1-based) sets bit `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CommandGroup(u64);

impl CommandGroup {
    pub fn from_channels(channels: &[u8]) -> Self {
        let mut group = 0_u64;
        for &channel in channels {
            if channel == 0 || channel > MAX_CHANNEL {
                warn!(channel, "Channel index out of range, ignoring");
                continue;
            }
            group |= 1_u64 << (channel - 1);
        }
        CommandGroup(group)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<&[u8]> for CommandGroup {
    fn from(channels: &[u8]) -> Self {
        CommandGroup::from_channels(channels)
    }
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actions understood by the device `_command` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Favorite,
    Stop,
    TiltOpen,
    TiltClose,
}

impl Command {
    pub fn action(&self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Close => "close",
            Command::Favorite => "favorite",
            Command::Stop => "stop",
            Command::TiltOpen => "tiltopen",
            Command::TiltClose => "tiltclose",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}
