// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazeroute CLI entrypoint.
//!
//! Loads a maze document and either prints the cheapest route between two cells or answers
//! whether a single step is blocked. Set `RUST_LOG=mazeroute=debug` to see solver events.

use std::error::Error;

use mazeroute::model::Cell;
use mazeroute::query::{find_shortest_path_with, is_movement_blocked, Path, SolveOptions};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <maze.json> --from <x,y> --to <x,y> [--json] [--max-expansions <n>]\n  {program} <maze.json> --blocked <x,y> <x,y> [--json]\n\nRoutes print the visited cells and the total cost, or `no path` when the goal is unreachable.\n--json prints `{{\"path\": [[x,y], ...], \"cost\": <n|null>}}` instead.\n--max-expansions aborts the search after finalizing that many cells.\n\n--blocked prints `blocked` or `open` for the single step between the two cells."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    maze_path: Option<String>,
    from: Option<Cell>,
    to: Option<Cell>,
    blocked: Option<(Cell, Cell)>,
    json: bool,
    max_expansions: Option<usize>,
}

fn parse_cell(raw: Option<String>) -> Result<Cell, ()> {
    raw.ok_or(())?.parse().map_err(|_| ())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from" => {
                if options.from.is_some() {
                    return Err(());
                }
                options.from = Some(parse_cell(args.next())?);
            }
            "--to" => {
                if options.to.is_some() {
                    return Err(());
                }
                options.to = Some(parse_cell(args.next())?);
            }
            "--blocked" => {
                if options.blocked.is_some() {
                    return Err(());
                }
                let from = parse_cell(args.next())?;
                let to = parse_cell(args.next())?;
                options.blocked = Some((from, to));
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--max-expansions" => {
                if options.max_expansions.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let limit: usize = raw.parse().map_err(|_| ())?;
                options.max_expansions = Some(limit);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.maze_path.is_some() {
                    return Err(());
                }
                options.maze_path = Some(arg);
            }
        }
    }

    if options.maze_path.is_none() {
        return Err(());
    }

    let route = options.from.is_some() || options.to.is_some();
    if options.blocked.is_some() {
        if route || options.max_expansions.is_some() {
            return Err(());
        }
    } else if options.from.is_none() || options.to.is_none() {
        return Err(());
    }

    Ok(options)
}

fn format_path(path: &Path) -> String {
    let Some(cost) = path.cost() else {
        return "no path".to_owned();
    };
    let cells = path.cells().iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("{}\ncost: {cost}", cells.join(" -> "))
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mazeroute".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let maze_path = options.maze_path.unwrap_or_default();
        let maze = mazeroute::store::load_maze(&maze_path)?;

        if let Some((from, to)) = options.blocked {
            let blocked = is_movement_blocked(from, to, &maze)?;
            if options.json {
                println!("{}", serde_json::json!({ "blocked": blocked }));
            } else {
                println!("{}", if blocked { "blocked" } else { "open" });
            }
            return Ok(());
        }

        let (Some(from), Some(to)) = (options.from, options.to) else {
            print_usage(&program);
            std::process::exit(2);
        };

        let mut solve_options = SolveOptions::default();
        if let Some(limit) = options.max_expansions {
            solve_options = solve_options.with_max_expansions(limit);
        }

        let path = find_shortest_path_with(from, to, &maze, solve_options)?;
        tracing::debug!(maze = %maze_path, %from, %to, len = path.len(), "query finished");

        if options.json {
            println!("{}", serde_json::to_string(&path)?);
        } else {
            println!("{}", format_path(&path));
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mazeroute: {err}");
        std::process::exit(1);
    }
}
