use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use huffman_rust::{encode, utils::timer::Timer, Alphabet, CodeTable, Compressed, FrequencyTable, HuffmanTree, Properties};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Huffman-encode a file, writing the bits, the code table and the stream properties")]
struct Args {
    /// The file to encode
    source_name: String,
    /// The destination basename of the output files
    dest_name: String,
    /// Number of symbols in the alphabet (bytes above it are rejected)
    #[arg(short, long)]
    alphabet_size: Option<usize>,
    /// A .properties file to read the alphabet size from
    #[arg(short, long)]
    config: Option<String>,
    /// Also write the code table as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Write the time spent in each phase to <dest_name>.stats
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn byte_label(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        (byte as char).to_string()
    } else {
        format!("0x{:02X}", byte)
    }
}

fn alphabet_from(args: &Args) -> Result<Alphabet> {
    let size = match (args.alphabet_size, &args.config) {
        (Some(size), _) => size,
        (None, Some(config)) => {
            Properties::load(config)
                .with_context(|| format!("Failed reading the configuration {}", config))?
                .alphabet_size
        }
        (None, None) => return Ok(Alphabet::bytes()),
    };

    Ok(Alphabet::new(size)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let alphabet = alphabet_from(&args)?;

    let input = fs::read(&args.source_name).with_context(|| format!("Could not read {}", args.source_name))?;
    info!(bytes = input.len(), alphabet = alphabet.size(), "read {}", args.source_name);

    let mut timer = Timer::new();

    let frequencies = FrequencyTable::from_symbols(&input, alphabet)?;
    timer.lap("frequencies");

    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    timer.lap("tree");
    debug!("Huffman tree:\n{}", tree.render());

    let codes = CodeTable::from_tree(&tree);
    drop(tree);
    timer.lap("codes");

    let encoded = encode(&input, &codes)?;
    timer.lap("encoding");

    let compressed = Compressed { frequencies, codes, encoded };
    compressed
        .store_with(&args.dest_name, byte_label)
        .with_context(|| format!("Failed storing {}", args.dest_name))?;
    if args.json {
        compressed
            .store_json(&args.dest_name)
            .with_context(|| format!("Failed storing {}.codes.json", args.dest_name))?;
    }
    timer.lap("store");

    if args.stats {
        fs::write(format!("{}.stats", args.dest_name), timer.report())
            .with_context(|| format!("Failed writing {}.stats", args.dest_name))?;
    }

    let props = compressed.properties();
    println!(
        "encoded {} symbols ({} distinct) into {} bits in {}ns",
        props.symbols, props.distinct_symbols, props.encoded_bits, timer.total_time
    );

    Ok(())
}
