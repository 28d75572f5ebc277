//! Delay generator binary.
//!
//! Prints a cycle-exact busy-wait sequence for a duration or raw cycle
//! budget, as an assembly listing and optionally as opcode words.

use clap::{Parser, ValueEnum};
use cyclewait::{
    delay_microseconds, delay_milliseconds, synthesize_dynamic_depth, synthesize_tiered,
    DelaySequence, Strategy, SynthResult,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Fixed 8/16/24/32-bit counter tiers.
    Tiered,
    /// Dynamically nested counters, fewest registers.
    Nested,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Tiered => Strategy::Tiered,
            StrategyArg::Nested => Strategy::DynamicDepth,
        }
    }
}

#[derive(Parser)]
#[command(name = "delaygen", about = "Generate cycle-exact AVR busy-wait loops")]
#[command(group = clap::ArgGroup::new("amount").required(true).args(["us", "ms", "cycles"]))]
struct Args {
    /// Delay in microseconds at the given clock.
    #[arg(long)]
    us: Option<u64>,

    /// Delay in milliseconds at the given clock.
    #[arg(long)]
    ms: Option<u64>,

    /// Raw cycle budget, no conversion.
    #[arg(long)]
    cycles: Option<u64>,

    /// CPU clock frequency in Hz.
    #[arg(long, default_value_t = 16_000_000)]
    hz: u64,

    /// Synthesis strategy.
    #[arg(long, value_enum, default_value = "tiered")]
    strategy: StrategyArg,

    /// Also print the encoded 16-bit opcode words.
    #[arg(long)]
    hex: bool,
}

fn generate(args: &Args) -> SynthResult<DelaySequence> {
    let strategy = Strategy::from(args.strategy);
    if let Some(us) = args.us {
        delay_microseconds(us, args.hz, strategy)
    } else if let Some(ms) = args.ms {
        delay_milliseconds(ms, args.hz, strategy)
    } else {
        // clap's ArgGroup guarantees exactly one amount flag.
        let cycles = args.cycles.unwrap();
        match strategy {
            Strategy::Tiered => synthesize_tiered(cycles),
            Strategy::DynamicDepth => synthesize_dynamic_depth(cycles),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match generate(&args) {
        Ok(seq) => {
            print!("{seq}");
            if args.hex {
                match seq.words() {
                    Ok(words) => {
                        for (inst, word) in seq.instructions().iter().zip(words) {
                            println!("0x{word:04X}  ; {inst}");
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
