use blackjack_rs::config::SimConfig;
use blackjack_rs::player::Player;
use blackjack_rs::sim::Simulation;
use blackjack_rs::strategy::StrategyKind;
use clap::Parser;
use std::process::ExitCode;

/// A seat given as NAME=STRATEGY, e.g. John=hold-at-17.
#[derive(Debug, Clone)]
struct Seat {
    name: String,
    kind: StrategyKind,
}

fn parse_seat(s: &str) -> Result<Seat, String> {
    let (name, kind) = s.split_once('=').ok_or_else(|| format!("expected NAME=STRATEGY, got '{s}'"))?;
    if name.trim().is_empty() {
        return Err(format!("missing player name in '{s}'"));
    }
    let kind = kind.parse().map_err(|e: blackjack_rs::strategy::StrategyParseError| e.to_string())?;
    Ok(Seat { name: name.trim().to_string(), kind })
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate blackjack rounds against a dealer that draws to 17")]
struct Cli {
    /// Number of rounds to play
    #[arg(short, long, default_value_t = 1000)]
    rounds: u32,
    /// Master seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Seat as NAME=STRATEGY (hold-at-<n>, hit-once, always-hold); repeatable
    #[arg(short, long = "player", value_parser = parse_seat)]
    players: Vec<Seat>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let seats = if cli.players.is_empty() {
        vec![
            Seat { name: "John".into(), kind: StrategyKind::HoldAt(17) },
            Seat { name: "Paul".into(), kind: StrategyKind::HitOnce },
        ]
    } else {
        cli.players
    };
    let players: Result<Vec<Player>, _> = seats
        .iter()
        .map(|s| Player::try_new(s.name.as_str(), Some(s.kind.build()), false))
        .collect();
    let mut players = match players {
        Ok(players) => players,
        Err(e) => {
            eprintln!("invalid player configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = SimConfig::new(cli.rounds);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match Simulation::new(config).run(&mut players) {
        Ok(report) => {
            println!("blackjack-rs {} | {} round(s)", blackjack_rs::VERSION, report.rounds);
            for player in &players {
                let label = player.strategy_label().unwrap_or_default();
                println!("\n{player}\n({label}, {} win(s))", player.record().wins());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("simulation aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
