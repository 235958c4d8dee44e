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

use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use url::Url;

use gov_cli::{
    cli_util::{expand_path, print_unsigned_tx, resolve_from},
    resolver::{ProposalRequest, Resolver, Settings},
    rpc::{Broadcaster, RpcClient},
    Result,
};

#[derive(Parser)]
#[clap(name = "gov-cli", about, version)]
#[clap(arg_required_else_help(true))]
struct Args {
    #[clap(short, action = clap::ArgAction::Count)]
    /// Increase verbosity (-vvv supported)
    verbose: u8,

    #[clap(long, default_value = "tcp://127.0.0.1:8340")]
    /// Node JSON-RPC endpoint
    endpoint: Url,

    #[clap(long, default_value = "~/.gov-cli")]
    /// Node home directory holding parameter snapshots
    home: String,

    #[clap(long)]
    /// Account address to stamp on the message
    from: String,

    #[clap(long)]
    /// Print the unsigned transaction instead of submitting it
    generate_only: bool,

    #[clap(subcommand)]
    command: GovSubcommand,
}

#[derive(Subcommand)]
enum GovSubcommand {
    /// Submit a proposal along with an initial deposit
    SubmitProposal {
        #[clap(long)]
        /// Title of proposal
        title: String,

        #[clap(long)]
        /// Description of proposal
        description: String,

        #[clap(long)]
        /// Kind of proposal, e.g. Text/ParameterChange/SoftwareUpgrade
        kind: String,

        #[clap(long, default_value = "")]
        /// Initial deposit of proposal
        deposit: String,

        #[clap(long)]
        /// Inline parameter, e.g. {"key":"k","value":"v","op":"update"}
        param: Option<String>,

        #[clap(long, default_value = "")]
        /// Relative node directory holding params.json
        path: String,

        #[clap(long, default_value = "")]
        /// Key of the parameter to change
        key: String,

        #[clap(long, default_value = "")]
        /// Operation to apply to the parameter
        op: String,
    },

    /// Deposit tokens for an active proposal
    Deposit {
        #[clap(long)]
        /// ID of the proposal to deposit on
        proposal_id: String,

        #[clap(long)]
        /// Amount of the deposit
        deposit: String,
    },

    /// Vote for an active proposal, options: Yes/No/NoWithVeto/Abstain
    Vote {
        #[clap(long)]
        /// ID of the proposal to vote on
        proposal_id: String,

        #[clap(long)]
        /// Vote option {Yes, No, NoWithVeto, Abstain}
        option: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let lvl = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(lvl, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let settings = Settings { node_home: expand_path(&args.home)? };
    let resolver = Resolver::new(settings);
    let from = resolve_from(&args.from)?;

    let msg = match args.command {
        GovSubcommand::SubmitProposal {
            title,
            description,
            kind,
            deposit,
            param,
            path,
            key,
            op,
        } => {
            let req =
                ProposalRequest { title, description, kind, deposit, param, path, key, op };
            resolver.submit_proposal(&from, &req)?
        }

        GovSubcommand::Deposit { proposal_id, deposit } => {
            resolver.deposit(&from, &proposal_id, &deposit)?
        }

        GovSubcommand::Vote { proposal_id, option } => {
            resolver.vote(&from, &proposal_id, &option)?
        }
    };

    let tx = gov_cli::msg::UnsignedTx { msgs: vec![msg] };

    if args.generate_only {
        return print_unsigned_tx(&tx)
    }

    let rpc = RpcClient::new(args.endpoint)?;
    let rep = rpc.submit(&tx)?;
    println!("Broadcast response: {}", rep);

    Ok(())
}
