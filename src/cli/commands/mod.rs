//! CLI command implementations

pub mod play;
pub mod simulate;

use anyhow::Result;

use crate::board::Player;

/// Parse an `x`/`o` token flag value
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.to_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow::anyhow!(
            "invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
