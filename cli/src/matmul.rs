use anyhow::Result;
use clap::Parser;
use minibench_core::harness;
use minibench_core::matmul::{self, DEFAULT_N};

mod trace;

#[derive(Debug, Parser)]
#[command(name = "mb-matmul", version, about = "Dense matrix-multiply benchmark kernel")]
struct CliArgs {
    /// Workload dimension; odd values are floored to the next even number down
    #[arg(value_name = "N", default_value_t = DEFAULT_N)]
    n: usize,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    trace::init();

    // Verification always runs against the fixed n=100 fixture, regardless
    // of the requested workload dimension.
    let timed = match harness::run(matmul::verify, || matmul::calc(args.n)) {
        Ok(timed) => timed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let d = &timed.value;
    let n = d.n();
    if n > 0 {
        println!(
            "matmul({n}): d[{c}][{c}] = {center}, sum = {sum}, in {secs:.6}s",
            c = n / 2,
            center = d.get(n / 2, n / 2),
            sum = d.sum(),
            secs = timed.secs()
        );
    } else {
        println!("matmul(0): empty result in {:.6}s", timed.secs());
    }
    Ok(())
}
