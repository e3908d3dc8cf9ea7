//! `run` command: execute the matching pipeline and print the summary.

use clap::Args;
use tracing::error;

use affinity_core::constants::{DEFAULT_THRESHOLD, DEFAULT_TOP_K};
use affinity_core::{MatchConfig, Pipeline, PipelineOutcome, PipelineSummary};

use super::ConnectionArgs;

/// Arguments for `affinity-cli run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Minimum similarity score (inclusive) for a match
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Maximum matches kept per user
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

/// Handle `run`. Returns the process exit code.
///
/// Business-level outcomes (no data, no matches, partial submission
/// failures) exit 0; only fetch failures and structural errors exit 1.
pub async fn run_command(args: RunArgs) -> i32 {
    let client = match args.connection.client() {
        Ok(client) => client,
        Err(code) => return code,
    };

    let config = MatchConfig::default()
        .with_threshold(args.threshold)
        .with_top_k(args.top_k);
    let pipeline = Pipeline::new(client.clone(), client, config);

    match pipeline.run().await {
        Ok(summary) => {
            println!("{}", format_summary(&summary));
            0
        }
        Err(err) => {
            error!(error = %err, "pipeline failed");
            eprintln!("error: {err}");
            1
        }
    }
}

fn format_summary(summary: &PipelineSummary) -> String {
    let mut out = format!(
        "outcome: {}\nusers fetched:       {}\nusers with matches:  {}\nmatch entries:       {}\nresults submitted:   {}\nresults failed:      {}",
        summary.outcome,
        summary.users_fetched,
        summary.users_matched,
        summary.total_match_entries,
        summary.results_submitted,
        summary.results_failed(),
    );
    for failure in &summary.failures {
        out.push_str(&format!("\n  failed {}: {}", failure.user_id, failure.cause));
    }
    match summary.outcome {
        PipelineOutcome::NoData => out.push_str("\nno user data available"),
        PipelineOutcome::NoMatches => {
            out.push_str("\nnothing met the threshold; consider lowering --threshold")
        }
        PipelineOutcome::Completed => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_core::SubmissionFailure;

    #[test]
    fn test_format_summary_lists_failures() {
        let summary = PipelineSummary {
            outcome: PipelineOutcome::Completed,
            users_fetched: 5,
            users_matched: 3,
            total_match_entries: 7,
            results_submitted: 2,
            failures: vec![SubmissionFailure {
                user_id: "u9".to_string(),
                cause: "boom".to_string(),
            }],
        };
        let text = format_summary(&summary);
        assert!(text.contains("outcome: completed"));
        assert!(text.contains("failed u9: boom"));
        assert!(text.contains("results failed:      1"));
    }
}
