//! `forgetit candidates` command - managed-forgetting recommendations

use forgetit_core::error::Result;
use forgetit_core::store::ResourceStore;

use crate::cli::{CandidateKind, Cli};
use crate::commands::format::print_resources;

/// Execute the candidates command
pub fn execute(
    cli: &Cli,
    store: &ResourceStore,
    kind: CandidateKind,
    threshold: Option<f64>,
) -> Result<()> {
    if threshold.is_some() && kind != CandidateKind::Low {
        forgetit_core::bail_usage!("--threshold only applies to `candidates low`");
    }

    let (mode, resources) = match kind {
        CandidateKind::Low => {
            let threshold = threshold.unwrap_or(store.config().thresholds.low_relevance);
            ("low", store.low_relevance(threshold))
        }
        CandidateKind::Archive => ("archive", store.archive_candidates()),
        CandidateKind::Deletion => ("deletion", store.deletion_candidates()),
    };
    print_resources(cli, mode, &resources)
}
