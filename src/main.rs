use std::time::{Duration, Instant};

use sortcheck::{Order, Value};
use tracing::info;

// Length of the synthetic benchmark input and the index of its single out-of-place value.
const BENCH_LEN: usize = 1_000_000;
const BENCH_VIOLATION: usize = 500_000;

const SCAN_RUNS: u32 = 3;
const SORT_RUNS: u32 = 1;

const TESTS: [&[i64]; 8] = [
    &[1, 2, 3, 4, 5],
    &[1, 3, 2, 4],
    &[5, 5, 5],
    &[1, 2, 2, 3],
    &[],
    &[7],
    &[10, 8, 8, 5, 2],
    &[10, 8, 5, 2],
];

const RECORDS: [(&str, u32, u32); 3] = [
    ("Alice", 28, 72000),
    ("Bob", 34, 85000),
    ("Priya", 31, 91000),
];

/// Render `t` the way a tuple literal reads, e.g. `(7,)`.
fn fmt_tuple<T: std::fmt::Display>(t: &[T]) -> String {
    let items: Vec<String> = t.iter().map(|x| x.to_string()).collect();
    match items.as_slice() {
        [one] => format!("({one},)"),
        _ => format!("({})", items.join(", ")),
    }
}

/// Run `f` `runs` times and return the total wall time.
fn time<R>(runs: u32, mut f: impl FnMut() -> R) -> Duration {
    let start = Instant::now();
    for _ in 0..runs {
        std::hint::black_box(f());
    }
    start.elapsed()
}

fn classify() {
    println!("Testing non-decreasing checks:");
    for t in TESTS {
        println!("{:<35} → {}", fmt_tuple(t), sortcheck::is_sorted(t));
    }

    println!("\nTesting strictly increasing:");
    for t in TESTS {
        println!(
            "{:<35} → {}",
            fmt_tuple(t),
            sortcheck::is_sorted_by_mode(t, Order::StrictlyIncreasing)
        );
    }

    println!("\nTesting non-increasing (descending with equals):");
    for t in [TESTS[6], TESTS[7]] {
        println!("{:<35} → {}", fmt_tuple(t), sortcheck::is_non_increasing(t));
    }
}

fn records() {
    let by_salary = sortcheck::is_sorted_by_key(&RECORDS, |r| r.2, false);
    println!("\nRecords sorted by salary: {by_salary}");
}

fn mixed() {
    let mixed = [Value::Int(1), Value::from("two"), Value::Int(3)];

    println!("\nMixed sequence {}:", fmt_tuple(&mixed));
    println!(
        "  safe   → {}",
        sortcheck::is_sorted_safe(&mixed, Order::NonDecreasing)
    );
    match sortcheck::try_is_sorted(&mixed, Order::NonDecreasing) {
        Ok(sorted) => println!("  strict → {sorted}"),
        Err(e) => println!("  strict → error: {e}"),
    }
}

fn benchmark() {
    info!(len = BENCH_LEN, "running quick benchmark");

    let mut v: Vec<u32> = (0..BENCH_LEN as u32).collect();
    v[BENCH_VIOLATION] = 0;

    let scan = time(SCAN_RUNS, || sortcheck::is_sorted(&v));
    let sort = time(SORT_RUNS, || sortcheck::compare_via_full_sort(&v, false));

    println!("scan method:  {:.6}s ({SCAN_RUNS} runs)", scan.as_secs_f64());
    println!("sorted method: {:.6}s ({SORT_RUNS} run)", sort.as_secs_f64());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    classify();
    records();
    mixed();

    println!("\nRunning quick benchmark (1 million elements)...");
    benchmark();

    Ok(())
}
