//! Solve a pursuit maze from the command line and print the escape route.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn};
use pursuit_core::Point;
use pursuit_maze::{Puzzle, builtin, builtins, render, render_trail};
use pursuit_paths::{Heading, Heuristic, JointSearch, JointState, MoveSet, PursuerPolicy, SearchOutcome};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// `0`/`1` grid; positions given with --evader, --pursuer and --goal.
    Numeric,
    /// `#`/space grid with `T`, `M` and `G`/`E` markers.
    Symbol,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Grid,
}

#[derive(Parser, Debug)]
#[command(version, about = "Find the shortest escape from a pursuing agent")]
struct CliArgs {
    /// Built-in maze to solve.
    #[arg(short, long, default_value = "field", conflicts_with = "file")]
    maze: String,
    /// Maze file to solve instead of a built-in.
    #[arg(short, long)]
    file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Symbol)]
    format: Format,
    /// Evader start as `x,y` (numeric files).
    #[arg(long, value_parser = parse_point)]
    evader: Option<Point>,
    /// Pursuer start as `x,y` (numeric files).
    #[arg(long, value_parser = parse_point)]
    pursuer: Option<Point>,
    /// Goal as `x,y` (numeric files).
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,
    /// Allow the evader to wait in place.
    #[arg(long)]
    stay: bool,
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,
    /// Aim the pursuer once per turn instead of before every sub-step.
    #[arg(long)]
    fixed_heading: bool,
    /// Print the maze after every move.
    #[arg(long)]
    steps: bool,
    /// List the built-in mazes and exit.
    #[arg(long)]
    list: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn load(args: &CliArgs) -> Result<Puzzle, Box<dyn Error>> {
    let Some(path) = &args.file else {
        let b = builtin(&args.maze).ok_or_else(|| format!("no built-in maze named {:?}", args.maze))?;
        info!("{}: {}", b.name, b.description);
        return Ok(b.puzzle()?);
    };
    let puzzle = match args.format {
        Format::Symbol => Puzzle::load_symbols(path)?,
        Format::Numeric => {
            let (Some(evader), Some(pursuer), Some(goal)) = (args.evader, args.pursuer, args.goal)
            else {
                return Err("numeric mazes need --evader, --pursuer and --goal".into());
            };
            Puzzle::load_numeric(path, JointState::new(evader, pursuer), goal)?
        }
    };
    info!("loaded {}", path.display());
    Ok(puzzle)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = CliArgs::parse();
    if args.list {
        for b in builtins() {
            println!("{:<10} {}", b.name, b.description);
        }
        return Ok(());
    }

    let puzzle = load(&args)?;
    let config = JointSearch {
        move_set: if args.stay {
            MoveSet::FourDirectionalPlusStay
        } else {
            MoveSet::FourDirectional
        },
        heuristic: match args.heuristic {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Grid => Heuristic::GridDistance,
        },
        policy: PursuerPolicy {
            heading: if args.fixed_heading {
                Heading::Fixed
            } else {
                Heading::Recomputed
            },
            ..PursuerPolicy::default()
        },
    };

    println!("{}\n", render(puzzle.maze(), puzzle.start(), puzzle.goal()));
    match puzzle.solve(&config)? {
        SearchOutcome::PathFound(solution) => {
            let stats = solution.stats();
            info!(
                "expanded {} states, generated {}, skipped {} stale",
                stats.expanded, stats.generated, stats.stale
            );
            if args.steps {
                for (i, state) in solution.states().iter().enumerate().skip(1) {
                    println!("move {i}:\n{}\n", render(puzzle.maze(), *state, puzzle.goal()));
                }
            }
            println!("{}\n", render_trail(puzzle.maze(), &solution));
            let moves: Vec<String> = solution.moves().iter().map(|m| m.to_string()).collect();
            println!("escaped in {} moves: {}", solution.cost(), moves.join(" "));
        }
        SearchOutcome::Unreachable(stats) => {
            warn!("search exhausted after expanding {} states", stats.expanded);
            println!("no escape: the goal cannot be reached without capture");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("7,0"), Ok(Point::new(7, 0)));
        assert_eq!(parse_point(" 1, 2"), Ok(Point::new(1, 2)));
        assert!(parse_point("7").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_parses() {
        let args = CliArgs::parse_from(["pursuit-demo", "--maze", "lure", "--stay", "--heuristic", "grid"]);
        assert_eq!(args.maze, "lure");
        assert!(args.stay);
        assert!(matches!(args.heuristic, HeuristicArg::Grid));
        assert!(load(&args).is_ok());
    }
}
