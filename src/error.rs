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

// Hello developer. Please add your error to the according subsection
// that is commented, or make a new subsection. Keep it clean.

/// Main result type used throughout the codebase.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving governance requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =====================
    // Classification errors
    // =====================
    #[error("Unknown proposal kind: {0}")]
    UnknownProposalKind(String),

    #[error("Invalid vote option: {0}")]
    InvalidVoteOption(String),

    // ==========================
    // Parameter resolution errors
    // ==========================
    #[error("Malformed inline param: {0}")]
    MalformedParamInput(String),

    #[error("Unknown parameter key: {0}")]
    UnknownParameterKey(String),

    #[error("Failed to read parameter snapshot: {0}")]
    ParameterSnapshotUnreadable(String),

    #[error("Malformed parameter snapshot: {0}")]
    MalformedSnapshot(String),

    // =================
    // Validation errors
    // =================
    #[error("Invalid proposal id: {0}")]
    InvalidProposalId(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ==============
    // Parsing errors
    // ==============
    #[error("Parse failed: {0}")]
    ParseFailed(&'static str),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    // ==========
    // RPC errors
    // ==========
    #[error("JSON-RPC error: {0}")]
    RpcError(String),

    #[error("Unsupported RPC transport: {0}")]
    UnsupportedTransport(String),

    // ===============
    // Wrapping errors
    // ===============
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serde_json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),
}
