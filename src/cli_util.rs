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

use std::{env, fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{msg::UnsignedTx, param::Param, Error, Result};

/// A bech32-style account address. Derivation and key custody belong to the
/// wallet; here it is an opaque validated token used to stamp messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.chars().any(|c| c.is_whitespace()) {
            return Err(Error::ParseFailed("Invalid account address"))
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve the `--from` identity into the address stamped on messages.
pub fn resolve_from(s: &str) -> Result<Address> {
    Address::from_str(s)
}

/// Auxiliary function to expand a leading tilde against `$HOME`.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let Some(remains) = path.strip_prefix("~/") else { return Ok(PathBuf::from(path)) };

    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(remains)),
        _ => Err(Error::ParseFailed("Could not find home directory")),
    }
}

/// Echo a resolved param for operator confirmation before submission.
pub fn print_param(param: &Param) -> Result<()> {
    println!("Param:\n{}", serde_json::to_string_pretty(param)?);
    Ok(())
}

/// Serialize an unsigned transaction to stdout ("generate-only" mode).
pub fn print_unsigned_tx(tx: &UnsignedTx) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(tx)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parsing() {
        assert!(Address::from_str("faa1qqlcvl0kfvyyy").is_ok());
        assert!(Address::from_str("  faa1qqlcvl0kfvyyy  ").is_ok());
        assert!(Address::from_str("").is_err());
        assert!(Address::from_str("two tokens").is_err());
    }

    #[test]
    fn tilde_expansion() {
        env::set_var("HOME", "/home/operator");
        assert_eq!(expand_path("~/.gov-cli").unwrap(), PathBuf::from("/home/operator/.gov-cli"));
        assert_eq!(expand_path("/abs/path").unwrap(), PathBuf::from("/abs/path"));
        assert_eq!(expand_path("relative").unwrap(), PathBuf::from("relative"));
    }
}
