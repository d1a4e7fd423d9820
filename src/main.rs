// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![allow(unknown_lints)]
#![warn(clippy::all)]

use std::env;
use std::process;
use std::thread;

use clap::{App, Arg};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::solution_formatter::SolutionFormatter;
use sokoban_search::solver::SolverOk;
use sokoban_search::{GameState, LoadLevel, Solve, Strategy};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sokoban levels with uninformed and informed search strategies")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .value_name("STRATEGY")
                .help(
                    "bfs, dfs, dfs_limited_depth, ucs, greedy, astar (default), astar_pq or idas",
                ),
        )
        .arg(
            Arg::with_name("max-depth")
                .short("d")
                .long("max-depth")
                .takes_value(true)
                .value_name("DEPTH")
                .help("depth limit for dfs_limited_depth (default 10)"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .conflicts_with("method")
                .help("run all strategies in parallel and compare them"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .conflicts_with("all")
                .help("print the level after each move of the solution"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let method = matches.value_of("method").unwrap_or("astar");
    let max_depth = matches.value_of("max-depth").map(|depth| {
        depth.parse::<usize>().unwrap_or_else(|err| {
            eprintln!("Invalid max depth {}: {}", depth, err);
            process::exit(1);
        })
    });
    let strategy = method.parse::<Strategy>().unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    let strategy = match max_depth {
        Some(max_depth) => strategy.with_max_depth(max_depth),
        None => strategy,
    };

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => eprintln!("Can't load level {} in {}: {}", path, current_dir.display(), err),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    if matches.is_present("all") {
        println!("Solving {} using all strategies...", path);
        let strategies = Strategy::ALL
            .iter()
            .map(|&strategy| match max_depth {
                Some(max_depth) => strategy.with_max_depth(max_depth),
                None => strategy,
            })
            .collect::<Vec<_>>();
        let solutions = solve_parallel(&level, &strategies);
        print_comparison(&solutions);
    } else {
        println!("Solving {} using {}...", path, strategy);
        let solution = level.solve(strategy);
        print!("{}", solution);
        if matches.is_present("steps") {
            if let Some(ref moves) = solution.moves {
                println!();
                print!("{}", SolutionFormatter::new(&level, moves));
            }
        }
    }
}

/// Runs are independent - each thread gets its own copy of the initial state.
fn solve_parallel(level: &GameState, strategies: &[Strategy]) -> Vec<SolverOk> {
    let handles: Vec<_> = strategies
        .iter()
        .map(|&strategy| {
            let level = level.clone();
            thread::spawn(move || level.solve(strategy))
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| {
            handle.join().unwrap_or_else(|_| {
                eprintln!("Solver thread panicked");
                process::exit(1);
            })
        })
        .collect()
}

fn print_comparison(solutions: &[SolverOk]) {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Moves"),
        Cell::new("Generated"),
        Cell::new("Expanded"),
        Cell::new("Time (ms)"),
        Cell::new("Solution"),
    ]));
    for solution in solutions {
        let (move_cnt, moves) = match solution.moves {
            Some(ref moves) => (moves.move_cnt().to_string(), moves.to_string()),
            None => ("-".to_owned(), "No solution".to_owned()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&solution.strategy.to_string()),
            Cell::new(&move_cnt),
            Cell::new(&solution.stats.total_generated().separated_string()),
            Cell::new(&solution.stats.total_expanded().separated_string()),
            Cell::new(&format!("{:.3}", solution.elapsed_ms())),
            Cell::new(&moves),
        ]));
    }
    table.printstd();
}
