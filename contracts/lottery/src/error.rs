use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no funds sent with entry")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send {expected} denom, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("stake {sent} is below the minimum entry {min}")]
    InsufficientStake { sent: Uint128, min: Uint128 },

    #[error("no players in the current round")]
    NoPlayers,

    #[error("contract balance {balance} cannot cover the pot {pot}")]
    PayoutFailed { balance: Uint128, pot: Uint128 },
}
