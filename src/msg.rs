/* This file is part of DarkFi (https://dark.fi)
 *
 * Copyright (C) 2020-2025 Dyne.org foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Governance messages and their structural validation. Assembly is pure:
//! every message is composed from already-resolved parts and gated through
//! `validate_basic()` before it may reach the broadcaster.

use serde::{Deserialize, Serialize};

use crate::{
    cli_util::Address,
    coins::Coins,
    param::Param,
    proposal::{ProposalKind, VoteOption},
    Error, Result,
};

/// Submit a new proposal along with an initial deposit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgSubmitProposal {
    pub title: String,
    pub description: String,
    pub kind: ProposalKind,
    pub proposer: Address,
    pub deposit: Coins,
    pub param: Option<Param>,
}

/// Deposit tokens toward an active proposal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgDeposit {
    pub depositor: Address,
    pub proposal_id: i64,
    pub amount: Coins,
}

/// Vote on an active proposal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgVote {
    pub voter: Address,
    pub proposal_id: i64,
    pub option: VoteOption,
}

impl MsgSubmitProposal {
    pub fn new(
        title: String,
        description: String,
        kind: ProposalKind,
        proposer: Address,
        deposit: Coins,
        param: Option<Param>,
    ) -> Self {
        Self { title, description, kind, proposer, deposit, param }
    }

    pub fn validate_basic(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::ParseFailed("Proposal title cannot be empty"))
        }

        if self.description.is_empty() {
            return Err(Error::ParseFailed("Proposal description cannot be empty"))
        }

        if self.kind == ProposalKind::ParameterChange {
            let Some(param) = &self.param else {
                return Err(Error::ParseFailed("ParameterChange proposal carries no param"))
            };
            if param.key.is_empty() || param.op.is_empty() {
                return Err(Error::ParseFailed("Param key and op cannot be empty"))
            }
        }

        Ok(())
    }
}

impl MsgDeposit {
    pub fn new(depositor: Address, proposal_id: i64, amount: Coins) -> Self {
        Self { depositor, proposal_id, amount }
    }

    pub fn validate_basic(&self) -> Result<()> {
        if self.proposal_id < 0 {
            return Err(Error::InvalidProposalId(self.proposal_id.to_string()))
        }

        if self.amount.is_empty() {
            return Err(Error::InvalidAmount("deposit cannot be empty".to_string()))
        }

        Ok(())
    }
}

impl MsgVote {
    pub fn new(voter: Address, proposal_id: i64, option: VoteOption) -> Self {
        Self { voter, proposal_id, option }
    }

    pub fn validate_basic(&self) -> Result<()> {
        if self.proposal_id < 0 {
            return Err(Error::InvalidProposalId(self.proposal_id.to_string()))
        }

        Ok(())
    }
}

/// Wrapping enum around the governance message types, tagged for the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    #[serde(rename = "gov/MsgSubmitProposal")]
    SubmitProposal(MsgSubmitProposal),
    #[serde(rename = "gov/MsgDeposit")]
    Deposit(MsgDeposit),
    #[serde(rename = "gov/MsgVote")]
    Vote(MsgVote),
}

impl Msg {
    pub fn validate_basic(&self) -> Result<()> {
        match self {
            Self::SubmitProposal(msg) => msg.validate_basic(),
            Self::Deposit(msg) => msg.validate_basic(),
            Self::Vote(msg) => msg.validate_basic(),
        }
    }
}

/// An unsigned transaction wrapping the messages handed to the signer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnsignedTx {
    pub msgs: Vec<Msg>,
}

/// Parse an operator-supplied proposal id. Non-numeric or negative input
/// fails before anything touches the network.
pub fn parse_proposal_id(s: &str) -> Result<i64> {
    let id = s.trim().parse::<i64>().map_err(|_| Error::InvalidProposalId(s.to_string()))?;
    if id < 0 {
        return Err(Error::InvalidProposalId(s.to_string()))
    }
    Ok(id)
}
