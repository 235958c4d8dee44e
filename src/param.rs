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

//! Parameter-change resolution.
//!
//! A `ParameterChange` proposal carries a single [`Param`] triple. It is
//! resolved in one of two mutually exclusive modes:
//!
//! * Inline mode: the operator supplies the JSON document directly.
//! * File mode: the operator names a key, and the value is extracted from
//!   the node's persisted parameter snapshot at
//!   `<node_home>/<path>/config/params.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{coins::Coins, Error, Result};

/// One parameter mutation request. `value` is an opaque serialized payload
/// whose shape is defined by whichever parameter `key` names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: String,
    pub op: String,
}

/// Deposit procedure record of the governance parameter group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositProcedure {
    #[serde(rename = "minDeposit")]
    pub min_deposit: Coins,
    #[serde(rename = "maxDepositPeriod")]
    pub max_deposit_period: u64,
}

/// Voting procedure record of the governance parameter group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingProcedure {
    #[serde(rename = "votingPeriod")]
    pub voting_period: u64,
}

/// Governance parameter group as persisted in the node snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovParams {
    #[serde(rename = "depositProcedure")]
    pub deposit_procedure: DepositProcedure,
    #[serde(rename = "votingProcedure")]
    pub voting_procedure: Option<VotingProcedure>,
}

/// A node's persisted view of current on-chain parameters. Read-only input
/// to the resolver, never mutated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSnapshot {
    pub gov: GovParams,
}

type Extractor = fn(&ParamSnapshot) -> Result<String>;

/// Known parameter keys and their snapshot extractors. New parameters are
/// supported by appending an entry here, not by touching dispatch logic.
const PARAM_EXTRACTORS: &[(&str, Extractor)] = &[
    ("Gov/gov/depositProcedure", extract_deposit_procedure),
    ("Gov/gov/votingProcedure", extract_voting_procedure),
];

fn extract_deposit_procedure(doc: &ParamSnapshot) -> Result<String> {
    Ok(serde_json::to_string(&doc.gov.deposit_procedure)?)
}

fn extract_voting_procedure(doc: &ParamSnapshot) -> Result<String> {
    match &doc.gov.voting_procedure {
        Some(proc) => Ok(serde_json::to_string(proc)?),
        None => Err(Error::MalformedSnapshot("snapshot has no voting procedure".to_string())),
    }
}

/// Parse an inline JSON parameter blob. Decode failure is propagated,
/// never swallowed into an empty result.
pub fn resolve_inline(blob: &str) -> Result<Param> {
    serde_json::from_str(blob).map_err(|e| Error::MalformedParamInput(e.to_string()))
}

/// Compose the snapshot path for a relative path fragment under the node home.
pub fn snapshot_path(node_home: &Path, path: &str) -> PathBuf {
    node_home.join(path).join("config").join("params.json")
}

/// Read the node's parameter snapshot and extract the sub-record matching
/// `key`, re-serialized as the param value. `op` is taken from the caller.
pub fn resolve_from_snapshot(node_home: &Path, path: &str, key: &str, op: &str) -> Result<Param> {
    let snap_path = snapshot_path(node_home, path);
    debug!("Reading parameter snapshot {}", snap_path.display());

    let contents = fs::read_to_string(&snap_path)
        .map_err(|e| Error::ParameterSnapshotUnreadable(format!("{}: {}", snap_path.display(), e)))?;

    let doc: ParamSnapshot = serde_json::from_str(&contents)
        .map_err(|e| Error::MalformedSnapshot(format!("{}: {}", snap_path.display(), e)))?;

    let extract = PARAM_EXTRACTORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, f)| f)
        .ok_or_else(|| Error::UnknownParameterKey(key.to_string()))?;

    Ok(Param { key: key.to_string(), value: extract(&doc)?, op: op.to_string() })
}

/// Resolve a [`Param`], selecting inline mode when a blob was supplied and
/// file mode otherwise.
pub fn resolve_param(
    inline: Option<&str>,
    path: &str,
    key: &str,
    op: &str,
    node_home: &Path,
) -> Result<Param> {
    match inline {
        Some(blob) => resolve_inline(blob),
        None => resolve_from_snapshot(node_home, path, key, op),
    }
}
