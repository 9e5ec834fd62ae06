//! Caller authorization
//!
//! Every exposed action names the authority it runs under. Players
//! may only act on their own account or pets; item issuance and
//! reward resolution are privileged self-calls that only the system
//! caller (the scheduler, or the hub acting on its own behalf) may
//! make.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use vivarium_core::PlayerId;

/// The principal an action runs as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Caller {
    /// The privileged system authority (scheduled/self calls)
    System,
    /// A specific player
    Player(PlayerId),
}

impl Caller {
    /// Check if this is the system caller
    pub fn is_system(&self) -> bool {
        matches!(self, Caller::System)
    }

    /// Require that this caller is the given player
    pub fn require(&self, player: PlayerId) -> Result<()> {
        match self {
            Caller::Player(id) if *id == player => Ok(()),
            _ => Err(Error::Unauthorized {
                required: player.to_string(),
            }),
        }
    }

    /// Require the privileged system authority
    pub fn require_system(&self) -> Result<()> {
        if self.is_system() {
            Ok(())
        } else {
            Err(Error::Unauthorized {
                required: "system".to_string(),
            })
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caller::System => write!(f, "caller:system"),
            Caller::Player(id) => write!(f, "caller:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_player() {
        let player = PlayerId::new(1);
        assert!(Caller::Player(player).require(player).is_ok());
        assert!(Caller::Player(PlayerId::new(2)).require(player).is_err());
        // system authority does not stand in for a player
        assert!(Caller::System.require(player).is_err());
    }

    #[test]
    fn test_require_system() {
        assert!(Caller::System.require_system().is_ok());
        assert!(Caller::Player(PlayerId::new(1)).require_system().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Caller::System), "caller:system");
        assert_eq!(format!("{}", Caller::Player(PlayerId::new(3))), "caller:player:3");
    }
}
