//! Interactive guess-the-trend game on the terminal.
//!
//! ```text
//! trend-guess                          # embedded temperature series
//! trend-guess --seed 7 --points 25     # synthetic random walk
//! trend-guess --autoplay follow        # let a strategy play
//! trend-guess --autoplay all --sessions 500
//! ```
//!
//! Log output goes to stderr at `info` by default; set `RUST_LOG=debug` to
//! see every guess or `RUST_LOG=warn` to quiet it.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::{error, LevelFilter};

use trend_guess::autoplay::{evaluate, play_session, AutoplayConfig, StrategyKind};
use trend_guess::core::{ChartLabels, DataPoint, RandomWalkConfig};
use trend_guess::games::trend::TrendGameBuilder;
use trend_guess::rules::RulesEngine;
use trend_guess::{GameError, Session};

const USAGE: &str = "\
usage: trend-guess [--seed N] [--points N] [--autoplay STRATEGY|all] [--sessions N]

  --seed N        play a synthetic random-walk dataset generated from seed N
  --points N      number of points in the synthetic dataset (default 10)
  --autoplay S    let a strategy play instead of reading stdin:
                  always-increase, always-decrease, follow, contrarian, random, all
  --sessions N    sessions per strategy; requires --autoplay all (default 100)
  --help          show this message";

const COMMANDS: &str = "\
commands: increase (i, up, +) | decrease (d, down, -) | guess <dir>
          show | score | reset | help | quit";

const BAR_WIDTH: usize = 40;

/// Log level when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    points: Option<usize>,
    autoplay: Option<String>,
    sessions: Option<usize>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut parsed = Args::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{name} needs a value"));
        match flag.as_str() {
            "--seed" => parsed.seed = Some(parse_number(&value("--seed")?)?),
            "--points" => parsed.points = Some(parse_number(&value("--points")?)?),
            "--autoplay" => parsed.autoplay = Some(value("--autoplay")?),
            "--sessions" => parsed.sessions = Some(parse_number(&value("--sessions")?)?),
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unknown argument {other:?}")),
        }
    }

    if parsed.sessions.is_some() && parsed.autoplay.as_deref() != Some("all") {
        return Err("--sessions only applies to --autoplay all".to_string());
    }

    Ok(Some(parsed))
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("expected a number, got {raw:?}"))
}

fn builder_for(args: &Args) -> TrendGameBuilder {
    match (args.seed, args.points) {
        (None, None) => TrendGameBuilder::new(),
        (seed, points) => {
            let mut walk = RandomWalkConfig::default();
            if let Some(seed) = seed {
                walk = walk.with_seed(seed);
            }
            if let Some(points) = points {
                walk = walk.with_points(points);
            }
            TrendGameBuilder::new()
                .random_walk(walk)
                .labels(ChartLabels {
                    title: "Synthetic Series".to_string(),
                    x_axis: "Year".to_string(),
                    y_axis: "Value".to_string(),
                })
        }
    }
}

/// Horizontal bar chart of the visible points, scaled to their own range.
fn render_chart(labels: &ChartLabels, points: &[DataPoint]) -> String {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut out = format!("{}  ({} vs {})\n", labels.title, labels.y_axis, labels.x_axis);
    for point in points {
        let filled = if span > 0.0 {
            1 + (((point.value - min) / span) * (BAR_WIDTH - 1) as f64).round() as usize
        } else {
            BAR_WIDTH / 2
        };
        out.push_str(&format!(
            "{:>6} | {:<width$} {:.2}\n",
            point.year,
            "#".repeat(filled),
            point.value,
            width = BAR_WIDTH
        ));
    }
    out
}

fn print_view(session: &Session) {
    let points: Vec<DataPoint> = session.visible_points().copied().collect();
    print!("{}", render_chart(session.game().labels(), &points));
    let state = session.state();
    println!(
        "score {} | position {}/{} | {}",
        state.score(),
        state.position(),
        state.last_index(),
        if session.is_finished() { "finished" } else { "next: increase or decrease?" }
    );
}

fn run_interactive(mut session: Session) -> io::Result<()> {
    println!("{COMMANDS}");
    print_view(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };
        match command.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "?" => println!("{COMMANDS}"),
            "show" => print_view(&session),
            "score" => {
                let state = session.state();
                println!(
                    "score {} of {} guesses ({:.0}%)",
                    state.score(),
                    state.history().len(),
                    state.accuracy() * 100.0
                );
            }
            "reset" => {
                session.reset();
                print_view(&session);
            }
            "guess" => match words.next() {
                Some(direction) => guess(&mut session, direction),
                None => println!("guess what? try `guess increase`"),
            },
            other => guess(&mut session, other),
        }
    }

    Ok(())
}

fn guess(session: &mut Session, raw: &str) {
    match session.submit_raw(raw) {
        Ok(outcome) => {
            println!("{}", outcome.feedback);
            print_view(session);
        }
        Err(GameError::InvalidGuess(input)) => {
            println!("unknown command {input:?}");
            println!("{COMMANDS}");
        }
        Err(err @ GameError::GameFinished { .. }) => {
            println!("{err}; type `reset` to play again or `quit`");
        }
        Err(err) => println!("{err}"),
    }
}

fn run_autoplay(args: &Args, name: &str) -> Result<(), GameError> {
    if name == "all" {
        let mut config = AutoplayConfig::new().with_seed(args.seed.unwrap_or(0));
        if let Some(sessions) = args.sessions {
            config = config.with_sessions(sessions);
        }
        if let Some(points) = args.points {
            config.walk = config.walk.with_points(points);
        }

        println!("{:<16} {:>9} {:>9} {:>9} {:>8}", "strategy", "sessions", "guesses", "accuracy", "perfect");
        for summary in evaluate(&config, &StrategyKind::ALL)? {
            println!(
                "{:<16} {:>9} {:>9} {:>8.1}% {:>8}",
                summary.strategy,
                summary.sessions,
                summary.guesses,
                summary.accuracy() * 100.0,
                summary.perfect_sessions
            );
        }
        return Ok(());
    }

    let kind: StrategyKind = name.parse()?;
    let (game, mut state) = builder_for(args).build()?;
    let seed = args.seed.unwrap_or(0);
    let mut strategy = kind.build(seed);
    let record = play_session(&game, &mut state, strategy.as_mut(), seed)?;

    for step in record.history.iter() {
        println!(
            "{} -> {}: guessed {}, was {} ({})",
            step.from.year,
            step.to.year,
            step.guess,
            step.actual,
            if step.correct { "correct" } else { "wrong" }
        );
    }
    let result = game.is_terminal(&state);
    println!(
        "{}: score {} of {} ({:.0}%)",
        record.strategy,
        record.score,
        record.guesses(),
        result.map_or(0.0, |r| r.accuracy()) * 100.0
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Some(name) = args.autoplay.as_deref() {
        return match run_autoplay(&args, name) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("autoplay failed: {err}");
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let session = match Session::start(builder_for(&args)) {
        Ok(session) => session,
        Err(err) => {
            error!("cannot start game: {err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run_interactive(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}
