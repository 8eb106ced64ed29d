use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::{LatestWinnerResponse, PlayersResponse, PotResponse};
use crate::state::{CONFIG, LAST_WINNER, PLAYERS, POT, ROUND_STATS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let players = PLAYERS.load(deps.storage)?;
    to_json_binary(&PlayersResponse { players })
}

pub fn query_pot(deps: Deps) -> StdResult<Binary> {
    let pot = POT.load(deps.storage)?;
    let players = PLAYERS.load(deps.storage)?;
    to_json_binary(&PotResponse {
        pot,
        players: players.len() as u32,
    })
}

pub fn query_latest_winner(deps: Deps) -> StdResult<Binary> {
    let winner = LAST_WINNER.may_load(deps.storage)?;
    to_json_binary(&LatestWinnerResponse { winner })
}

pub fn query_round_stats(deps: Deps) -> StdResult<Binary> {
    let stats = ROUND_STATS.load(deps.storage)?;
    to_json_binary(&stats)
}
