// Copyright contributors to the Tetrafold project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

use tetrafold_common::{ConformationEncoding, InteractionKind};
use tetrafold_decoder::{BestMeasurement, decode_result};
use tetrafold_model::{Protein, load_interaction};

/// Decode a best-measurement record (JSON on stdin) back into a lattice
/// conformation, written to stdout as JSON.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Main-chain residue sequence the operator was compiled from
    #[arg(long)]
    main_chain: String,
    /// Side-chain sequence; '_' marks an absent side bead. Defaults to
    /// placeholders everywhere.
    #[arg(long)]
    side_chain: Option<String>,
    #[arg(long, default_value_t = InteractionKind::MiyazawaJernigan)]
    interaction: InteractionKind,
    #[arg(long, default_value_t = ConformationEncoding::Dense)]
    encoding: ConformationEncoding,
    /// Interaction matrix file overriding the bundled table
    #[arg(long)]
    matrix: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    // By default log INFO.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let side_chain = cli
        .side_chain
        .unwrap_or_else(|| "_".repeat(cli.main_chain.chars().count()));

    let interaction = load_interaction(cli.interaction, cli.matrix.as_deref())?;
    let protein = Protein::new(
        &cli.main_chain,
        &side_chain,
        interaction.as_ref(),
        cli.encoding,
    )?;

    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    let measurement: BestMeasurement = serde_json::from_str(&input)?;
    info!(
        "best state {} (probability {}), bitstring {}, value {}",
        measurement.state, measurement.probability, measurement.bitstring, measurement.value
    );

    let decoded = decode_result(&protein, &measurement.bitstring)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", serde_json::to_string(&decoded)?)?;
    Ok(())
}
