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

//! Governance proposal client core: resolves loosely-typed operator input
//! into validated, strongly-typed governance messages ready for signing
//! and broadcast.

/// Error codes
pub mod error;
pub use error::{Error, Result};

/// Coin amounts and the deposit string parser
pub mod coins;

/// Proposal kinds and vote options
pub mod proposal;

/// Parameter-change resolution (inline blobs and node snapshots)
pub mod param;

/// Governance messages and their structural validation
pub mod msg;

/// Request resolution entry points
pub mod resolver;

/// JSON-RPC broadcaster
pub mod rpc;

/// CLI utility functions
pub mod cli_util;
