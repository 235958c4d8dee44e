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

use std::{fs, str::FromStr};

use tempdir::TempDir;

use gov_cli::{
    cli_util::Address,
    msg::{Msg, UnsignedTx},
    resolver::{ProposalRequest, Resolver, Settings},
    Error, Result,
};

const SNAPSHOT: &str = r#"{
    "gov": {
        "depositProcedure": {
            "minDeposit": [{"denom": "iris", "amount": 10}],
            "maxDepositPeriod": 10
        },
        "votingProcedure": {
            "votingPeriod": 20
        }
    }
}"#;

fn node_home(node: &str) -> TempDir {
    let home = TempDir::new("gov-cli").expect("Failed to create temp dir");
    let config = home.path().join(node).join("config");
    fs::create_dir_all(&config).unwrap();
    fs::write(config.join("params.json"), SNAPSHOT).unwrap();
    home
}

fn resolver(home: &TempDir) -> Resolver {
    Resolver::new(Settings { node_home: home.path().to_path_buf() })
}

fn proposer() -> Address {
    Address::from_str("faa1qqlcvl0kfvyyy").unwrap()
}

#[test]
fn submit_parameter_change_from_snapshot() -> Result<()> {
    let home = node_home("node0");

    let req = ProposalRequest {
        title: "Raise the deposit floor".to_string(),
        description: "Bump minDeposit".to_string(),
        kind: "ParameterChange".to_string(),
        deposit: "100uiris".to_string(),
        param: None,
        path: "node0".to_string(),
        key: "Gov/gov/depositProcedure".to_string(),
        op: "update".to_string(),
    };

    let msg = resolver(&home).submit_proposal(&proposer(), &req)?;

    let Msg::SubmitProposal(msg) = msg else { panic!("wrong message kind") };
    let param = msg.param.expect("param must be resolved");
    assert_eq!(param.key, "Gov/gov/depositProcedure");
    assert_eq!(param.op, "update");
    assert!(!param.value.is_empty());
    assert!(param.value.contains("minDeposit"));

    Ok(())
}

#[test]
fn submit_parameter_change_inline() -> Result<()> {
    let home = node_home("node0");

    let req = ProposalRequest {
        title: "Inline change".to_string(),
        description: "desc".to_string(),
        kind: "ParameterChange".to_string(),
        deposit: "100uiris".to_string(),
        param: Some(r#"{"key":"k","value":"v","op":"update"}"#.to_string()),
        ..Default::default()
    };

    let Msg::SubmitProposal(msg) = resolver(&home).submit_proposal(&proposer(), &req)? else {
        panic!("wrong message kind")
    };
    let param = msg.param.unwrap();
    assert_eq!((param.key.as_str(), param.value.as_str(), param.op.as_str()), ("k", "v", "update"));

    Ok(())
}

#[test]
fn unknown_snapshot_key_fails() {
    let home = node_home("node0");

    let req = ProposalRequest {
        title: "t".to_string(),
        description: "d".to_string(),
        kind: "ParameterChange".to_string(),
        deposit: "100uiris".to_string(),
        param: None,
        path: "node0".to_string(),
        key: "Gov/gov/noSuchKey".to_string(),
        op: "update".to_string(),
    };

    let result = resolver(&home).submit_proposal(&proposer(), &req);
    assert!(matches!(result, Err(Error::UnknownParameterKey(_))));
}

#[test]
fn text_proposal_needs_no_param() -> Result<()> {
    let home = node_home("node0");

    let req = ProposalRequest {
        title: "Hello".to_string(),
        description: "A text proposal".to_string(),
        kind: "Text".to_string(),
        deposit: "100uiris".to_string(),
        ..Default::default()
    };

    let Msg::SubmitProposal(msg) = resolver(&home).submit_proposal(&proposer(), &req)? else {
        panic!("wrong message kind")
    };
    assert!(msg.param.is_none());

    Ok(())
}

#[test]
fn unknown_kind_fails_classification() {
    let home = node_home("node0");

    let req = ProposalRequest {
        title: "t".to_string(),
        description: "d".to_string(),
        kind: "Unknown".to_string(),
        ..Default::default()
    };

    let result = resolver(&home).submit_proposal(&proposer(), &req);
    assert!(matches!(result, Err(Error::UnknownProposalKind(_))));
}

#[test]
fn deposit_resolution() {
    let home = node_home("node0");
    let r = resolver(&home);

    assert!(r.deposit(&proposer(), "1", "100uiris").is_ok());
    assert!(matches!(
        r.deposit(&proposer(), "-1", "100uiris"),
        Err(Error::InvalidProposalId(_))
    ));
    assert!(matches!(
        r.deposit(&proposer(), "abc", "100uiris"),
        Err(Error::InvalidProposalId(_))
    ));
    assert!(matches!(r.deposit(&proposer(), "1", "abc"), Err(Error::InvalidAmount(_))));
}

#[test]
fn vote_resolution() {
    let home = node_home("node0");
    let r = resolver(&home);

    for option in ["Yes", "No", "NoWithVeto", "Abstain"] {
        assert!(r.vote(&proposer(), "1", option).is_ok());
    }
    assert!(matches!(r.vote(&proposer(), "1", "Maybe"), Err(Error::InvalidVoteOption(_))));
    assert!(matches!(r.vote(&proposer(), "-1", "Yes"), Err(Error::InvalidProposalId(_))));
}

#[test]
fn generate_only_serialization() -> Result<()> {
    let home = node_home("node0");
    let msg = resolver(&home).vote(&proposer(), "7", "Yes")?;

    let tx = UnsignedTx { msgs: vec![msg] };
    let json = serde_json::to_value(&tx)?;

    let msgs = json.get("msgs").and_then(|m| m.as_array()).expect("msgs array");
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0]["type"], "gov/MsgVote");
    assert_eq!(msgs[0]["value"]["proposal_id"], 7);
    assert_eq!(msgs[0]["value"]["option"], "Yes");

    Ok(())
}
