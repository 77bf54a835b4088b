use anyhow::Result;
use clap::Parser;
use minibench_core::fib::{self, TIMED_N};
use minibench_core::harness;

mod trace;

#[derive(Debug, Parser)]
#[command(name = "mb-fib", version, about = "Recursive-Fibonacci benchmark kernel")]
struct CliArgs {}

fn main() -> Result<()> {
    let _args = CliArgs::parse();
    trace::init();

    let timed = match harness::run(fib::verify, || fib::fib(TIMED_N)) {
        Ok(timed) => timed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("fib({}) = {} in {:.6}s", TIMED_N, timed.value, timed.secs());
    Ok(())
}
