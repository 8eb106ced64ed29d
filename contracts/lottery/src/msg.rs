use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{Config, RoundStats};

/// The instantiating sender becomes the manager.
#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round. Send the stake in info.funds.
    Enter {},
    /// Draw a winner, pay the whole pot out and reset the round.
    /// Manager only.
    PickWinner {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(PlayersResponse)]
    Players {},
    #[returns(PotResponse)]
    Pot {},
    #[returns(LatestWinnerResponse)]
    LatestWinner {},
    #[returns(RoundStats)]
    RoundStats {},
}

#[cw_serde]
pub struct PlayersResponse {
    /// Current round entrants in entry order, one slot per entry.
    pub players: Vec<Addr>,
}

#[cw_serde]
pub struct PotResponse {
    pub pot: Uint128,
    pub players: u32,
}

#[cw_serde]
pub struct LatestWinnerResponse {
    /// None until the first draw completes.
    pub winner: Option<Addr>,
}
