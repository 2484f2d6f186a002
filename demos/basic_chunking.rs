//! Basic Recursive Chunking
//!
//! Chunk a short document for embedding and show the overlap between chunks.
//!
//! ```bash
//! RUST_LOG=strata=debug cargo run --example basic_chunking
//! ```

use strata::{Chunker, ChunkerConfig, RecursiveChunker};
use tracing_subscriber::EnvFilter;

fn main() -> strata::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions.\n\n\
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers.\n\n\
        Each layer learns increasingly abstract representations. \
        Averyveryverylongtokenwithnospacesthatcannotbesplitonwords.";

    let config = ChunkerConfig::builder(80, 20)
        .add_start_index(true)
        .build()?;
    let chunker = RecursiveChunker::new(config);
    let chunks = chunker.chunk(document);

    println!("Document: {} chars", document.chars().count());
    println!("Chunks: {}\n", chunks.len());

    for chunk in &chunks {
        println!(
            "[{}] start {:>3}, {} chars: {:?}",
            chunk.index,
            chunk.start.unwrap_or_default(),
            chunk.len,
            chunk.content
        );
    }

    // Without the "" tier, the long token can't be split and is reported
    let strict = ChunkerConfig::builder(40, 0)
        .separators(&["\n\n", "\n", " "])
        .build()?;
    let report = RecursiveChunker::new(strict).chunk_with_report(document);
    println!("\nWord-level only, size 40: {} oversized", report.oversized.len());
    for chunk in report.oversized_chunks() {
        println!("  {} chars: {:?}", chunk.len, chunk.content);
    }

    Ok(())
}
