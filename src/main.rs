use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use lapsolve::generators::balanced_demand;
use lapsolve::io::read_graph;
use lapsolve::{AugTreePcg, Error};

fn usage() -> ExitCode {
    println!("usage: lapsolve <graph.bin> <k> [seed]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return usage();
    }

    let k: usize = match args[2].parse() {
        Ok(k) => k,
        Err(_) => return usage(),
    };
    let mut rng = match args.get(3).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => StdRng::seed_from_u64(seed),
        Some(Err(_)) => return usage(),
        None => StdRng::from_entropy(),
    };

    let es = match File::open(&args[1]).and_then(|f| read_graph(&mut BufReader::new(f))) {
        Ok(es) => es,
        Err(err) => {
            println!("error reading {}: {err}", args[1]);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = es.validate() {
        println!("invalid graph: {err}");
        return ExitCode::from(2);
    }

    println!("n = {}, m = {}", es.n, es.len());
    let b = balanced_demand(es.n, -10.0, 10.0, &mut rng);
    let mut x = vec![0.0; es.n];

    match AugTreePcg::new(k).solve(&es, &b, &mut x, &mut rng) {
        Ok(summary) => {
            println!(
                "converged in {} iterations, relative residual {:e}",
                summary.iterations, summary.residual
            );
            ExitCode::SUCCESS
        }
        Err(Error::NonConvergent {
            iterations,
            residual,
        }) => {
            println!("no convergence after {iterations} iterations, relative residual {residual:e}");
            ExitCode::from(1)
        }
        Err(err) => {
            println!("solve failed: {err}");
            ExitCode::from(2)
        }
    }
}
