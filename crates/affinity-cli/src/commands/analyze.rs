//! `analyze` command: per-question answer distribution for the batch.

use clap::Args;
use tracing::error;

use affinity_core::analysis::{answer_distribution, QuestionStats};

use super::ConnectionArgs;

/// Arguments for `affinity-cli analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Handle `analyze`. Returns the process exit code.
pub async fn analyze_command(args: AnalyzeArgs) -> i32 {
    let client = match args.connection.client() {
        Ok(client) => client,
        Err(code) => return code,
    };

    let users = match client.fetch_matching_data().await {
        Ok(users) => users,
        Err(err) => {
            error!(error = %err, "failed to fetch matching data");
            eprintln!("error: {err}");
            return 1;
        }
    };

    if users.is_empty() {
        println!("no user data available");
        return 0;
    }

    println!("answer distribution over {} users", users.len());
    for (question_id, stats) in answer_distribution(&users) {
        println!("{}", format_question(question_id, &stats));
    }
    0
}

fn format_question(question_id: usize, stats: &QuestionStats) -> String {
    let shares = stats.shares();
    let mut line = format!("Q{question_id}:");
    for share in shares {
        line.push_str(&format!(" {:.1}%", share * 100.0));
    }
    if stats.out_of_range > 0 {
        line.push_str(&format!(" ({} out of range)", stats.out_of_range));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_question_line() {
        let stats = QuestionStats {
            counts: [2, 1, 0, 1],
            out_of_range: 0,
        };
        assert_eq!(format_question(3, &stats), "Q3: 50.0% 25.0% 0.0% 25.0%");
    }

    #[test]
    fn test_format_question_flags_out_of_range() {
        let stats = QuestionStats {
            counts: [1, 0, 0, 0],
            out_of_range: 1,
        };
        assert!(format_question(1, &stats).ends_with("(1 out of range)"));
    }
}
