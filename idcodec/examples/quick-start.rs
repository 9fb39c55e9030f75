use idcodec::codec;
use idcodec::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = HarnessConfig::from_env()?;
    let pool = generate(config.pool_size)?;
    let id = pool.as_slice().first().copied().unwrap_or_default();

    println!("--- text forms of {id}:");
    for codec in codec::all() {
        println!("{:<28} {}", codec.name(), codec.encode(&id)?);
    }

    println!(
        "\n--- {} identifiers, {} iterations:",
        pool.len(),
        config.iterations
    );
    let mut failed = 0;
    for report in bench_all(&pool, &config) {
        println!("{report}");
        if !report.is_ok() {
            failed += 1;
        }
    }
    if failed > 0 {
        println!("\n{failed} codec(s) reported failures");
    }
    Ok(())
}
