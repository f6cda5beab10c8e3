use tracing::debug;

use crate::entities::{EntityStore, Player, PowerUpKind};

use super::{BOOST_DURATION, TICK};

pub fn apply_power_up(store: &mut EntityStore, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => start_boost(&mut store.player),
        PowerUpKind::Clear => {
            let removed = store.truncate_big_balls(1);
            debug!(removed, "big balls cleared");
        }
    }
}

/// Boosts never stack: a pickup always restarts the full timer.
fn start_boost(player: &mut Player) {
    player.boosted = true;
    player.boost_remaining = BOOST_DURATION;
}

/// Burn one tick off the boost.  Returns `true` on the tick the boost ends.
pub fn advance_effect_timer(player: &mut Player) -> bool {
    if player.boost_remaining.is_zero() {
        return false;
    }
    player.boost_remaining = player.boost_remaining.saturating_sub(TICK);
    if player.boost_remaining.is_zero() {
        player.boosted = false;
        debug!("speed boost expired");
        return true;
    }
    false
}
