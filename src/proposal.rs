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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The closed set of proposal kinds a governance proposal can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalKind {
    Text,
    ParameterChange,
    SoftwareUpgrade,
}

impl FromStr for ProposalKind {
    type Err = Error;

    /// Classification is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Text" => Ok(Self::Text),
            "ParameterChange" => Ok(Self::ParameterChange),
            "SoftwareUpgrade" => Ok(Self::SoftwareUpgrade),
            _ => Err(Error::UnknownProposalKind(s.to_string())),
        }
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::ParameterChange => write!(f, "ParameterChange"),
            Self::SoftwareUpgrade => write!(f, "SoftwareUpgrade"),
        }
    }
}

/// The closed set of options a vote can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    No,
    NoWithVeto,
    Abstain,
}

impl FromStr for VoteOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            "NoWithVeto" => Ok(Self::NoWithVeto),
            "Abstain" => Ok(Self::Abstain),
            _ => Err(Error::InvalidVoteOption(s.to_string())),
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::NoWithVeto => write!(f, "NoWithVeto"),
            Self::Abstain => write!(f, "Abstain"),
        }
    }
}
