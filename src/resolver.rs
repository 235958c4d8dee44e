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

//! Request resolution entry points. One invocation resolves one request:
//! classify and parse the operator input, build the message, run its
//! structural validation, and hand it outward. Nothing here retries and
//! nothing survives the invocation.

use std::path::PathBuf;

use log::info;

use crate::{
    cli_util::{print_param, Address},
    coins::Coins,
    msg::{parse_proposal_id, Msg, MsgDeposit, MsgSubmitProposal, MsgVote},
    param::resolve_param,
    proposal::{ProposalKind, VoteOption},
    Result,
};

/// Client configuration. The node home is an explicit field so resolution
/// never reaches for ambient environment state.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Root under which node directories (and their `config/params.json`
    /// snapshots) live.
    pub node_home: PathBuf,
}

/// Raw operator input for a submit-proposal request, one typed field per flag.
#[derive(Clone, Debug, Default)]
pub struct ProposalRequest {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub deposit: String,
    /// Inline JSON param blob. When set, the snapshot path/key are ignored.
    pub param: Option<String>,
    /// Relative node directory holding the parameter snapshot.
    pub path: String,
    /// Parameter key to extract from the snapshot.
    pub key: String,
    /// Mutation operation to apply, e.g. `update`.
    pub op: String,
}

pub struct Resolver {
    settings: Settings,
}

impl Resolver {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolve a submit-proposal request into a validated message.
    pub fn submit_proposal(&self, proposer: &Address, req: &ProposalRequest) -> Result<Msg> {
        let kind: ProposalKind = req.kind.parse()?;
        let deposit: Coins = req.deposit.parse()?;

        // A param is resolved when, and only when, the kind asks for one
        let param = if kind == ProposalKind::ParameterChange {
            let param = resolve_param(
                req.param.as_deref(),
                &req.path,
                &req.key,
                &req.op,
                &self.settings.node_home,
            )?;
            print_param(&param)?;
            Some(param)
        } else {
            None
        };

        let msg = MsgSubmitProposal::new(
            req.title.clone(),
            req.description.clone(),
            kind,
            proposer.clone(),
            deposit,
            param,
        );
        msg.validate_basic()?;

        info!("Resolved {} proposal \"{}\" from {}", kind, msg.title, proposer);
        Ok(Msg::SubmitProposal(msg))
    }

    /// Resolve a deposit request into a validated message.
    pub fn deposit(&self, depositor: &Address, proposal_id: &str, amount: &str) -> Result<Msg> {
        let proposal_id = parse_proposal_id(proposal_id)?;
        let amount: Coins = amount.parse()?;

        let msg = MsgDeposit::new(depositor.clone(), proposal_id, amount);
        msg.validate_basic()?;

        info!("Resolved deposit of {} on proposal {}", msg.amount, msg.proposal_id);
        Ok(Msg::Deposit(msg))
    }

    /// Resolve a vote request into a validated message.
    pub fn vote(&self, voter: &Address, proposal_id: &str, option: &str) -> Result<Msg> {
        let proposal_id = parse_proposal_id(proposal_id)?;
        let option: VoteOption = option.parse()?;

        let msg = MsgVote::new(voter.clone(), proposal_id, option);
        msg.validate_basic()?;

        println!(
            "Vote[Voter:{},ProposalID:{},Option:{}]",
            msg.voter, msg.proposal_id, msg.option
        );
        Ok(Msg::Vote(msg))
    }
}
