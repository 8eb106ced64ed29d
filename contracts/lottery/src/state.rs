use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");
/// Entrants of the current round in entry order. The same address occupies
/// one slot per accepted entry.
pub const PLAYERS: Item<Vec<Addr>> = Item::new("players");
/// Sum of all stakes accepted since the last draw.
pub const POT: Item<Uint128> = Item::new("pot");
/// Winner of the most recent completed draw. Unset until the first draw.
pub const LAST_WINNER: Item<Addr> = Item::new("last_winner");
pub const ROUND_STATS: Item<RoundStats> = Item::new("round_stats");

#[cw_serde]
pub struct Config {
    /// Set to the instantiating sender and never changed. Only the manager
    /// can trigger a draw.
    pub manager: Addr,
}

/// Monotonic totals across all completed draws. No per-round records are
/// kept; the roster and pot of a round are gone once it is drawn.
#[cw_serde]
pub struct RoundStats {
    pub draws_completed: u64,
    pub total_paid_out: Uint128,
}
