//! # Main — Random Prime CLI
//!
//! Generates one random probable prime of the requested bit length and
//! writes it to stdout in the requested format. Formats: `0` emits the raw
//! big-endian magnitude bytes with no trailing newline; `2..=36` emit a
//! newline-terminated textual representation in that base; `64` standard
//! base-64; `85` Ascii85.
//!
//! Invalid bit lengths and unknown formats exit with status 2 and a single
//! line on stderr naming the offending value.

mod encode;

use anyhow::Result;
use clap::Parser;
use std::io::Write;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primality", about = "Generate a random prime of an exact bit length")]
struct Cli {
    /// Bit length of the generated prime (at least 2)
    #[arg(short = 'b', long = "bits", default_value_t = 256)]
    bits: u32,

    /// Output format: 0 = raw big-endian bytes, 2..=36 = text in that base,
    /// 64 = base-64, 85 = Ascii85
    #[arg(short = 'f', long = "format", default_value_t = 10)]
    format: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if cli.bits < 2 {
        eprintln!("bit length must be at least 2 (got {})", cli.bits);
        std::process::exit(2);
    }

    let p = primality::generate::rand_prime(cli.bits);
    match cli.format {
        0 => std::io::stdout().write_all(&encode::be_bytes(&p))?,
        radix @ 2..=36 => println!("{}", p.to_string_radix(radix as i32)),
        64 => println!("{}", encode::base64(&p)),
        85 => println!("{}", encode::ascii85(&p)),
        other => {
            eprintln!("unknown output format {}", other);
            std::process::exit(2);
        }
    }
    Ok(())
}
