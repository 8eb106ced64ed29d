use cosmwasm_std::{coins, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::state::{CONFIG, LAST_WINNER, PLAYERS, POT, ROUND_STATS};

/// Native denom accepted for stakes and paid out to the winner.
pub const POT_DENOM: &str = "inj";

/// Minimum stake per entry: 0.01 INJ (18 decimals).
pub const MINIMUM_ENTRY: Uint128 = Uint128::new(10_000_000_000_000_000u128);

/// Enter the current round with the stake attached in info.funds.
pub fn enter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    // Validate funds: exactly one coin, must be the pot denom
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != POT_DENOM {
        return Err(ContractError::WrongDenom {
            expected: POT_DENOM.to_string(),
            denom: sent.denom.clone(),
        });
    }
    if sent.amount < MINIMUM_ENTRY {
        return Err(ContractError::InsufficientStake {
            sent: sent.amount,
            min: MINIMUM_ENTRY,
        });
    }

    let mut players = PLAYERS.load(deps.storage)?;
    players.push(info.sender.clone());
    PLAYERS.save(deps.storage, &players)?;

    let pot = POT.load(deps.storage)? + sent.amount;
    POT.save(deps.storage, &pot)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("stake", sent.amount.to_string())
        .add_event(
            Event::new("lottery_enter")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("stake", sent.amount.to_string())
                .add_attribute("pot", pot.to_string())
                .add_attribute("entries", players.len().to_string()),
        ))
}

/// Select a winner, send them the whole pot and reset the round.
/// Manager only. The storage writes and the bank send commit together or
/// not at all under the host's transaction semantics.
pub fn pick_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            reason: "only the manager can pick a winner".to_string(),
        });
    }

    let players = PLAYERS.load(deps.storage)?;
    if players.is_empty() {
        return Err(ContractError::NoPlayers);
    }

    let pot = POT.load(deps.storage)?;

    // A send that overdraws the contract aborts the whole transaction;
    // check first so the failure names the shortfall.
    let balance = deps
        .querier
        .query_balance(&env.contract.address, POT_DENOM)?;
    if balance.amount < pot {
        return Err(ContractError::PayoutFailed {
            balance: balance.amount,
            pot,
        });
    }

    let (index, seed) = winning_index(&env, players.len());
    let winner = players[index].clone();

    let send_msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(pot.u128(), POT_DENOM),
    };

    LAST_WINNER.save(deps.storage, &winner)?;
    PLAYERS.save(deps.storage, &Vec::new())?;
    POT.save(deps.storage, &Uint128::zero())?;

    let mut stats = ROUND_STATS.load(deps.storage)?;
    stats.draws_completed += 1;
    stats.total_paid_out += pot;
    ROUND_STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "pick_winner")
        .add_attribute("winner", winner.to_string())
        .add_attribute("payout", pot.to_string())
        .add_event(
            Event::new("lottery_draw_result")
                .add_attribute("winner", winner.to_string())
                .add_attribute("payout", pot.to_string())
                .add_attribute("winning_index", index.to_string())
                .add_attribute("entries", players.len().to_string())
                .add_attribute("seed", hex::encode(seed))
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Derive the winning index from execution context that is only fixed once
/// every entry of the round is final: block height, block time, chain id,
/// transaction index and roster length, hashed and reduced mod the roster
/// length. A block proposer can influence these inputs; entrants cannot.
/// Mod-reduction bias is at most entries / 2^128 per slot.
pub(crate) fn winning_index(env: &Env, entries: usize) -> (usize, [u8; 32]) {
    let mut hasher = Sha256::new();
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(env.block.time.nanos().to_be_bytes());
    hasher.update(env.block.chain_id.as_bytes());
    if let Some(tx) = &env.transaction {
        hasher.update(tx.index.to_be_bytes());
    }
    hasher.update((entries as u64).to_be_bytes());
    let seed: [u8; 32] = hasher.finalize().into();

    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&seed[0..16]);
    let ticket = u128::from_be_bytes(ticket_bytes);

    ((ticket % entries as u128) as usize, seed)
}
