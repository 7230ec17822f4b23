use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use fixfft::emit::{TwiddlePart, WordFormat, emit_twiddle_asm};
use fixfft::fixed::math::to_real;
use fixfft::fixed::signal::{complex_tone, join, split};
use fixfft::fixed::{ComplexQ16, TwiddleTable, transform_with};
use fixfft::float::ReferenceFft;
use fixfft::results::{parse_results, write_results};
use fixfft::trace::{
    HexSyntax, WordOrder, compare, decode_complex, decode_f32_complex, extract_hex_words, pair_words,
};

/// Q16.16 fixed-point FFT reference model for hardware trace validation.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a complex tone and compare it with the float reference
    Tone {
        /// FFT size (power of two)
        #[arg(long, default_value_t = 1024)]
        size: usize,
        /// Frequency bin of the tone
        #[arg(long, default_value_t = 100)]
        bin: usize,
        /// Number of leading bins to print
        #[arg(long, default_value_t = 8)]
        show: usize,
        /// Save all bins in the results text format
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write the twiddle tables as assembly data sections
    Twiddles {
        #[arg(long, default_value_t = 1024)]
        size: usize,
        /// Directory for twiddle_real.s and twiddle_imag.s
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Emit words as 0x-prefixed hex instead of decimal
        #[arg(long)]
        hex: bool,
    },
    /// Print the complex values held in binary register dumps
    Dump {
        /// Dump files
        #[arg(default_values = ["bitreversalout.hex", "finalout.hex"])]
        files: Vec<PathBuf>,
        #[command(flatten)]
        layout: Layout,
    },
    /// Compare a hardware trace with a results file
    Compare {
        /// Results file written by `tone --output`
        #[arg(long)]
        expected: PathBuf,
        /// Binary dump of interleaved (real, imaginary) words
        #[arg(long, conflicts_with = "log")]
        dump: Option<PathBuf>,
        /// Text log containing hex words
        #[arg(long, requires = "marker")]
        log: Option<PathBuf>,
        /// Only lines containing this marker are read from the log
        #[arg(long)]
        marker: Option<String>,
        /// Also read bare 8-digit hex tokens (without 0x) from the log
        #[arg(long, requires = "log")]
        bare_hex: bool,
        /// Largest accepted per-component difference, in LSBs
        #[arg(long, default_value_t = 0)]
        tolerance: u32,
        #[command(flatten)]
        layout: Layout,
    },
}

#[derive(Args)]
struct Layout {
    /// Word layout of binary dumps
    #[arg(long, value_enum, default_value_t = Order::Le)]
    order: Order,
    /// Words per vector register, for `--order lanes`
    #[arg(long, default_value_t = 4)]
    lanes: usize,
    /// Words are IEEE-754 float32 instead of Q16.16
    #[arg(long)]
    float: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum Order {
    /// Little-endian words
    Le,
    /// Big-endian words
    Be,
    /// Little-endian words, vector lanes reversed
    Lanes,
}

impl Layout {
    fn word_order(&self) -> WordOrder {
        match self.order {
            Order::Le => WordOrder::LittleEndian,
            Order::Be => WordOrder::ByteReversed,
            Order::Lanes => WordOrder::LaneReversed { lanes: self.lanes },
        }
    }

    /// Complex values of a binary dump as (re, im) reals.
    fn decode(&self, bytes: &[u8]) -> Vec<(f64, f64)> {
        if self.float {
            decode_f32_complex(bytes, self.word_order())
                .iter()
                .map(|c| (c.re as f64, c.im as f64))
                .collect()
        } else {
            decode_complex(bytes, self.word_order()).iter().map(|c| c.to_f64()).collect()
        }
    }

    /// Complex values of a binary dump in Q16.16; float words are truncated.
    fn decode_fixed(&self, bytes: &[u8]) -> Vec<ComplexQ16> {
        if self.float {
            decode_f32_complex(bytes, self.word_order())
                .iter()
                .map(|c| ComplexQ16::from_f64(c.re as f64, c.im as f64))
                .collect()
        } else {
            decode_complex(bytes, self.word_order())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    match cli.command {
        Commands::Tone { size, bin, show, output } => tone(size, bin, show, output.as_deref()),
        Commands::Twiddles { size, out_dir, hex } => twiddles(size, &out_dir, hex),
        Commands::Dump { files, layout } => dump(&files, &layout),
        Commands::Compare {
            expected,
            dump,
            log,
            marker,
            bare_hex,
            tolerance,
            layout,
        } => {
            let observed = match (dump, log) {
                (Some(path), None) => {
                    let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
                    layout.decode_fixed(&bytes)
                }
                (None, Some(path)) => {
                    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
                    let syntax = if bare_hex { HexSyntax::PrefixedOrBare } else { HexSyntax::Prefixed };
                    pair_words(&extract_hex_words(&text, marker.as_deref().unwrap_or_default(), syntax))
                }
                _ => bail!("one of --dump or --log is required"),
            };
            compare_trace(&expected, &observed, tolerance)
        }
    }
}

fn tone(size: usize, bin: usize, show: usize, output: Option<&Path>) -> Result<()> {
    let table = TwiddleTable::generate(size)?;
    let signal = complex_tone(size, bin);
    let (real, imag) = split(&signal);

    println!("\nComputing {}-point FFT with Q16.16 fixed-point arithmetic", size);
    let start = Instant::now();
    let (re, im) = transform_with(&real, &imag, size, &table)?;
    let fixed_time = start.elapsed();

    let start = Instant::now();
    let reference = ReferenceFft::new(size)?.process_fixed(&signal)?;
    let float_time = start.elapsed();

    if let Some(path) = output {
        let bins = join(&re, &im);
        fs::write(path, write_results(&bins)).with_context(|| format!("writing {}", path.display()))?;
        println!("Results saved to '{}' for comparison with assembly output", path.display());
    }

    println!("\nFixed-Point FFT Results (first {} bins):", show.min(size));
    println!(
        "{:<5} | {:<10} | {:<10} | {:<23} | {:<25} | {}",
        "Index", "Input Real", "Input Imag", "Fixed-Point FFT (Float)", "Fixed-Point FFT (Q16.16)", "Reference FFT"
    );
    println!("{}", "-".repeat(110));
    for i in 0..show.min(size) {
        let (in_re, in_im) = signal[i].to_f64();
        println!(
            "{:5} | {:10.4} | {:10.4} | {:9.4} + {:9.4}j | {:10} + {:10}j | {:9.4} + {:9.4}j",
            i,
            in_re,
            in_im,
            to_real(re[i]),
            to_real(im[i]),
            re[i],
            im[i],
            reference[i].re,
            reference[i].im
        );
    }

    let max_error = re
        .iter()
        .zip(&im)
        .zip(&reference)
        .map(|((&r, &i), c)| (to_real(r) - c.re).abs().max((to_real(i) - c.im).abs()))
        .fold(0.0f64, f64::max);

    println!("\nMax deviation from reference: {:.6} ({:.0} LSB)", max_error, max_error * 65536.0);
    println!("Fixed-point FFT time: {:.6}s", fixed_time.as_secs_f64());
    println!("Reference FFT time: {:.6}s", float_time.as_secs_f64());
    Ok(())
}

fn twiddles(size: usize, out_dir: &Path, hex: bool) -> Result<()> {
    let table = TwiddleTable::generate(size)?;
    let format = if hex { WordFormat::Hex } else { WordFormat::Decimal };

    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    for part in [TwiddlePart::Real, TwiddlePart::Imag] {
        let path = out_dir.join(part.file_name());
        fs::write(&path, emit_twiddle_asm(&table, part, format))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Generated {}", path.display());
    }
    Ok(())
}

fn dump(files: &[PathBuf], layout: &Layout) -> Result<()> {
    for path in files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("cannot read {}: {}", path.display(), err);
                continue;
            }
        };
        let values = layout.decode(&bytes);
        if values.is_empty() {
            println!("\nNo data found in {}", path.display());
            continue;
        }

        println!("\nContents of {}:", path.display());
        for (i, (re, im)) in values.iter().enumerate() {
            println!("  [{:2}] = {:.6} + {:.6}j", i, re, im);
        }
    }
    Ok(())
}

fn compare_trace(expected_path: &Path, observed: &[ComplexQ16], tolerance: u32) -> Result<()> {
    let text = fs::read_to_string(expected_path).with_context(|| format!("reading {}", expected_path.display()))?;
    let expected = parse_results(&text);
    if expected.is_empty() {
        bail!("no data found in {}", expected_path.display());
    }
    if observed.is_empty() {
        bail!("no data found in trace");
    }

    let cmp = compare(&expected, observed, tolerance);
    println!(
        "Compared {} bins (model {}, trace {}), max error {} LSB",
        cmp.compared, cmp.expected_len, cmp.observed_len, cmp.max_error
    );
    for m in cmp.mismatches.iter().take(16) {
        println!(
            "  bin {:4}: expected {:10} + {:10}j, trace {:10} + {:10}j ({} LSB)",
            m.bin,
            m.expected.re.to_bits(),
            m.expected.im.to_bits(),
            m.observed.re.to_bits(),
            m.observed.im.to_bits(),
            m.error
        );
    }
    if cmp.mismatches.len() > 16 {
        println!("  ... {} more", cmp.mismatches.len() - 16);
    }

    if cmp.matches() {
        println!("Trace matches model");
        Ok(())
    } else {
        bail!("trace does not match model ({} mismatching bins)", cmp.mismatches.len())
    }
}
