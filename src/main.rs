//! Pirate Fishing - native headless runner
//!
//! Plays demo-mode matches on a simulated 60 Hz clock and reports the
//! outcomes. The browser build drives the same `Session` from
//! `requestAnimationFrame` instead.
//!
//! Usage:
//!   cargo run --release -- --matches 5 --seed 42
//!   RUST_LOG=debug cargo run -- --preset classic --json

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;
    use serde::Serialize;

    use pirate_fishing::platform::entropy_seed;
    use pirate_fishing::sim::GameStatus;
    use pirate_fishing::{HighScores, RulesetPreset, Session, Settings};

    #[derive(Parser)]
    #[command(name = "pirate-fishing")]
    #[command(about = "Run headless demo matches of Pirate Fishing")]
    struct Args {
        /// Number of matches to play
        #[arg(long, default_value_t = 1)]
        matches: u32,

        /// RNG seed for the first match (later matches use seed + n)
        #[arg(long)]
        seed: Option<u64>,

        /// Ruleset preset: classic or abyssal
        #[arg(long)]
        preset: Option<String>,

        /// Settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Simulated frame interval in milliseconds
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f64,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Print the effective settings as JSON and exit
        #[arg(long)]
        print_settings: bool,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct MatchReport {
        seed: u64,
        outcome: GameStatus,
        score: u64,
        time_left: f32,
        monsters_defeated: u32,
        ticks: u64,
    }

    #[derive(Serialize)]
    struct RunReport {
        preset: RulesetPreset,
        matches: Vec<MatchReport>,
        leaderboard: HighScores,
    }

    /// Safety valve against a host clock that never advances the match
    const MAX_FRAMES: u64 = 1_000_000;

    fn load_settings(args: &Args) -> Result<Settings> {
        let mut settings = match &args.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(name) = &args.preset {
            settings.preset = match RulesetPreset::from_str(name) {
                Some(preset) => preset,
                None => bail!("Unknown preset '{name}' (expected classic or abyssal)"),
            };
        }
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        settings.demo_mode = true;
        Ok(settings)
    }

    fn play_match(settings: &Settings, seed: u64, frame_ms: f64) -> Result<MatchReport> {
        let mut session = Session::from_settings(settings, seed)
            .context("Settings produce an unplayable ruleset")?;

        let mut now = 0.0;
        let mut frames = 0;
        while session.frame(now) {
            now += frame_ms;
            frames += 1;
            if frames >= MAX_FRAMES {
                bail!("Match with seed {seed} did not finish after {frames} frames");
            }
        }

        let state = session.state();
        Ok(MatchReport {
            seed: session.seed(),
            outcome: state.status,
            score: state.score,
            time_left: state.time_left,
            monsters_defeated: state.monsters_defeated,
            ticks: state.time_ticks,
        })
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        if !(args.frame_ms > 0.0) {
            bail!("--frame-ms must be positive");
        }

        let settings = load_settings(&args)?;
        if args.print_settings {
            println!("{}", settings.to_json()?);
            return Ok(());
        }
        let base_seed = settings.seed.unwrap_or_else(entropy_seed);
        log::info!(
            "Pirate Fishing (native) playing {} {} match(es)",
            args.matches,
            settings.preset.as_str()
        );

        let mut leaderboard = HighScores::new();
        let mut matches = Vec::new();
        for n in 0..args.matches {
            let seed = base_seed.wrapping_add(u64::from(n));
            let per_match = Settings {
                seed: Some(seed),
                ..settings.clone()
            };
            let report = play_match(&per_match, seed, args.frame_ms)?;
            log::info!(
                "Match {} (seed {}): {:?} with {} points",
                n + 1,
                report.seed,
                report.outcome,
                report.score
            );
            let rank = leaderboard.add_score(report.score, report.outcome, report.time_left);
            if let Some(rank) = rank {
                log::info!("Match {} placed #{rank} on the leaderboard", n + 1);
            }
            matches.push(report);
        }

        if args.json {
            let report = RunReport {
                preset: settings.preset,
                matches,
                leaderboard,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("=== MATCHES ({}) ===", settings.preset.as_str());
        for (i, m) in matches.iter().enumerate() {
            println!(
                "  #{:<3} seed {:<20} {:<9} {:>6} pts  {:>5.1}s left  {} defeated",
                i + 1,
                m.seed,
                format!("{:?}", m.outcome),
                m.score,
                m.time_left,
                m.monsters_defeated
            );
        }
        let wins = matches
            .iter()
            .filter(|m| m.outcome == GameStatus::Victory)
            .count();
        println!();
        println!("  Victories: {wins}/{}", matches.len());
        if let Some(best) = leaderboard.top_score() {
            println!("  Best score: {best}");
        }

        println!();
        println!("=== LEADERBOARD ===");
        if leaderboard.is_empty() {
            println!("  (no scores)");
        }
        for (i, entry) in leaderboard.entries.iter().enumerate() {
            println!("  {:>2}. {:>6}  {:?}", i + 1, entry.score, entry.outcome);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
