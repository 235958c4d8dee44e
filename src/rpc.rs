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

//! JSON-RPC 2.0 client used to hand validated messages to the node for
//! signing and broadcast. Newline-delimited requests over TCP.

use std::{
    io::{BufRead, BufReader, Write},
    net::TcpStream,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, error};
use serde_json::{json, Value};
use url::Url;

use crate::{msg::UnsignedTx, Error, Result};

static REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// The signer/broadcaster seam. The resolver core only ever hands outward
/// through this trait.
pub trait Broadcaster {
    /// Submit an unsigned transaction for signing and broadcast, returning
    /// the node's response.
    fn submit(&self, tx: &UnsignedTx) -> Result<Value>;
}

/// Blocking JSON-RPC client for a `tcp://host:port` endpoint.
pub struct RpcClient {
    endpoint: Url,
}

impl RpcClient {
    pub fn new(endpoint: Url) -> Result<Self> {
        if endpoint.scheme() != "tcp" {
            return Err(Error::UnsupportedTransport(endpoint.scheme().to_string()))
        }

        if endpoint.host_str().is_none() || endpoint.port().is_none() {
            return Err(Error::ParseFailed("RPC endpoint is missing host or port"))
        }

        Ok(Self { endpoint })
    }

    /// Perform one request/response round trip.
    pub fn request(&self, method: &str, params: Value) -> Result<Value> {
        let id = REQUEST_ID.fetch_add(1, Ordering::SeqCst);
        let req = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let host = self.endpoint.host_str().unwrap();
        let port = self.endpoint.port().unwrap();
        debug!("--> {}", req);

        let mut stream = TcpStream::connect((host, port))?;
        writeln!(stream, "{}", req)?;
        stream.flush()?;

        let mut line = String::new();
        BufReader::new(stream).read_line(&mut line)?;
        debug!("<-- {}", line.trim_end());

        let rep: Value = serde_json::from_str(&line)?;

        if let Some(err) = rep.get("error") {
            error!("RPC server replied with an error: {}", err);
            return Err(Error::RpcError(err.to_string()))
        }

        if rep.get("id").and_then(Value::as_u64) != Some(id) {
            return Err(Error::RpcError("reply id mismatch".to_string()))
        }

        rep.get("result")
            .cloned()
            .ok_or_else(|| Error::RpcError("reply carries no result".to_string()))
    }
}

impl Broadcaster for RpcClient {
    fn submit(&self, tx: &UnsignedTx) -> Result<Value> {
        self.request("tx.broadcast", json!([serde_json::to_value(tx)?]))
    }
}
