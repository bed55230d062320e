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

//! Benchmarks hamiltonian construction for growing chain lengths.
//!
//! Run with:
//!
//! ```sh
//! cargo bench --package tetrafold_compiler --bench bench_build
//! ```

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tetrafold_common::ConformationEncoding;
use tetrafold_compiler::build_hamiltonian;
use tetrafold_model::{MjInteraction, Protein};

fn bench_build(c: &mut Criterion) {
    let interaction = MjInteraction::bundled();
    let mut group = c.benchmark_group("build_hamiltonian");

    for sequence in ["APRLR", "APRLRF", "APRLRFY"] {
        let side = "_".repeat(sequence.len());
        let protein = Protein::new(
            sequence,
            &side,
            &interaction,
            ConformationEncoding::Dense,
        )
        .expect("benchmark sequences should be valid");

        group.bench_function(sequence, |b| {
            b.iter(|| {
                let hamiltonian =
                    build_hamiltonian(black_box(&protein), &interaction).expect("build succeeds");
                black_box(hamiltonian)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
