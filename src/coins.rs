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

/// A single denominated amount, e.g. `100uiris`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u64,
}

/// An ordered, denomination-unique set of coins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }
}

impl FromStr for Coin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // Leading decimal digits, then a nonempty lowercase denomination
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidAmount(s.to_string()))?;
        let (amount, denom) = s.split_at(split);

        if amount.is_empty() || denom.is_empty() || !denom.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::InvalidAmount(s.to_string()))
        }

        let amount = amount.parse::<u64>().map_err(|_| Error::InvalidAmount(s.to_string()))?;

        Ok(Self { denom: denom.to_string(), amount })
    }
}

impl FromStr for Coins {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self(vec![]))
        }

        let mut coins: Vec<Coin> = vec![];
        for part in s.split(',') {
            let coin = Coin::from_str(part)?;
            if coins.iter().any(|c| c.denom == coin.denom) {
                return Err(Error::InvalidAmount(format!("duplicate denomination: {}", coin.denom)))
            }
            coins.push(coin);
        }

        Ok(Self(coins))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_coin() {
        let coins = Coins::from_str("100uiris").unwrap();
        let coins: Vec<_> = coins.iter().collect();
        assert_eq!(coins, vec![&Coin { denom: "uiris".to_string(), amount: 100 }]);
    }

    #[test]
    fn parse_multi_denom() {
        let coins = Coins::from_str("100uiris,5atom").unwrap();
        let coins: Vec<_> = coins.iter().collect();
        assert_eq!(coins[0], &Coin { denom: "uiris".to_string(), amount: 100 });
        assert_eq!(coins[1], &Coin { denom: "atom".to_string(), amount: 5 });
    }

    #[test]
    fn parse_garbage_fails() {
        assert!(matches!(Coins::from_str("abc"), Err(Error::InvalidAmount(_))));
        assert!(matches!(Coins::from_str("100"), Err(Error::InvalidAmount(_))));
        assert!(matches!(Coins::from_str("uiris100"), Err(Error::InvalidAmount(_))));
        assert!(matches!(Coins::from_str("-5uiris"), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn parse_duplicate_denom_fails() {
        assert!(matches!(Coins::from_str("1uiris,2uiris"), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn empty_string_is_empty_set() {
        assert!(Coins::from_str("").unwrap().is_empty());
    }

    #[test]
    fn display_round_trip() {
        let coins = Coins::from_str("100uiris,5atom").unwrap();
        assert_eq!(coins.to_string(), "100uiris,5atom");
    }
}
