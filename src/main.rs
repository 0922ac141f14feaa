use std::time::Duration;

use math_adventures::config::Config;
use math_adventures::logging;
use math_adventures::report;
use math_adventures::session::Session;
use math_adventures::AppError;

fn run(config: &Config) -> Result<(), AppError> {
    let mut session = Session::from_config(config);
    tracing::info!(turns = config.turns, seed = ?config.seed, "session starting");

    print!("{}", report::render_banner(config.turns, session.controller()));

    for _ in 0..config.turns {
        let turn = session.play_turn()?;
        print!("{}", report::render_turn(&turn));

        if config.turn_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.turn_delay_ms));
        }
    }

    let tracker = session.tracker();
    print!("{}", report::render_closing(tracker, config.recent_window)?);

    if config.json_summary && !tracker.attempts().is_empty() {
        println!("{}", serde_json::to_string_pretty(&tracker.session_summary()?)?);
    }

    tracing::info!(
        turns = session.turns_played(),
        transitions = tracker.transitions().len(),
        final_score = session.controller().status().score,
        "session complete"
    );
    Ok(())
}

fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let log_guard = logging::init_tracing(&config.log_level);

    if let Err(err) = run(&config) {
        tracing::error!(error = %err, "session failed");
        drop(log_guard);
        std::process::exit(1);
    }
}
