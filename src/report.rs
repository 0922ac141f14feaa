//! Console rendering for the demonstration driver. Output is for humans and
//! carries no compatibility guarantee.

use std::fmt::Write as _;

use crate::adaptive::AdaptiveController;
use crate::session::TurnReport;
use crate::tracker::{PerformanceTracker, RecentPerformance, SessionSummary, TrackerError};

fn rule() -> String {
    "=".repeat(60)
}

pub fn render_banner(turns: usize, controller: &AdaptiveController) -> String {
    let rule = rule();
    let mut out = String::new();
    let _ = writeln!(out, "MATH ADVENTURES - Adaptive Learning System");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Decaying Performance Score (P-Score) demonstration");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\nStarting session with {turns} puzzle attempts...");
    let _ = writeln!(out, "Initial difficulty: {}", controller.current_difficulty());
    let _ = writeln!(out, "Initial P-Score: {:.1}", controller.score());
    out
}

pub fn render_turn(report: &TurnReport) -> String {
    let update = &report.update;
    let mark = if report.response.is_correct { "✓" } else { "✗" };
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Turn {} ---", report.turn);
    let _ = writeln!(out, "Difficulty: {}", report.puzzle.difficulty);
    let _ = writeln!(out, "Question: {} = ?", report.puzzle.question);
    let _ = writeln!(out, "User answer: {} ({mark})", report.response.user_answer);
    let _ = writeln!(out, "Correct answer: {}", report.puzzle.answer);
    let _ = writeln!(out, "Response time: {:.1}s", report.response.response_time_secs);
    let _ = writeln!(
        out,
        "P-Score: {:+.2} → {:+.2}",
        update.previous_score, update.new_score
    );
    let _ = writeln!(out, "Rationale: {}", update.rationale);

    if update.transition_occurred {
        let _ = writeln!(
            out,
            "DIFFICULTY TRANSITION: {} → {}",
            update.previous_difficulty, update.new_difficulty
        );
        let _ = writeln!(out, "   P-Score reset to 0.0");
    }

    let _ = writeln!(
        out,
        "Current: {} (P-Score: {:+.2})",
        report.status.difficulty, report.status.score
    );
    out
}

pub fn render_analysis(
    summary: &SessionSummary,
    recent: &RecentPerformance,
    recent_window: usize,
) -> String {
    let rule = rule();
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}\nSESSION COMPLETE - PERFORMANCE ANALYSIS\n{rule}");
    let _ = writeln!(out, "Session Statistics:");
    let _ = writeln!(out, "   Total attempts: {}", summary.total_attempts);
    let _ = writeln!(out, "   Accuracy rate: {}%", summary.accuracy_rate);
    let _ = writeln!(out, "   Average response time: {}s", summary.avg_response_time);
    let _ = writeln!(
        out,
        "   Fast responses (≤5s): {} ({}%)",
        summary.fast_responses, summary.fast_response_rate
    );
    let _ = writeln!(out, "   Session duration: {}s", summary.session_duration_secs);

    let _ = writeln!(out, "\nAdaptive Performance:");
    let _ = writeln!(out, "   Difficulty transitions: {}", summary.difficulty_transitions);
    let _ = writeln!(out, "   Final P-Score: {}", summary.final_score);
    let _ = writeln!(
        out,
        "   P-Score range: {} to {}",
        summary.score_range.min, summary.score_range.max
    );

    let _ = writeln!(out, "\nDifficulty Distribution:");
    for (difficulty, count) in &summary.difficulty_distribution {
        let share = *count as f64 / summary.total_attempts as f64 * 100.0;
        let _ = writeln!(out, "   {difficulty}: {count} attempts ({share:.1}%)");
    }

    let _ = writeln!(out, "\nRecent Performance (last {recent_window} attempts):");
    let _ = writeln!(out, "   Recent accuracy: {}%", recent.recent_accuracy);
    let _ = writeln!(out, "   Performance trend: {}", recent.trend.as_str());
    out
}

/// Analysis plus detailed log, or a short notice when no turn was played.
pub fn render_closing(
    tracker: &PerformanceTracker,
    recent_window: usize,
) -> Result<String, TrackerError> {
    if tracker.attempts().is_empty() {
        return Ok(format!("\n{}\nSESSION COMPLETE - no attempts played\n", rule()));
    }

    let summary = tracker.session_summary()?;
    let recent = tracker.recent_performance(recent_window)?;
    let mut out = render_analysis(&summary, &recent, recent_window);
    out.push_str(&tracker.detailed_log());
    Ok(out)
}
