//! Splitting Strategies Comparison
//!
//! Shows how the weighted splitter and the punctuation fallback carve
//! the same rant, and what the absorption pass does afterwards.
//!
//! ```bash
//! cargo run --example splitting_strategies
//! ```

use serifu::{absorb_short, PunctSplitter, ScoredSplitter, Splitter};
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    env_logger::init();

    let rant = "作画の話になると必ず荒れるけど、今回ばかりは本当に文句のつけようがない出来だったと思うし、\
                背景も動きも音響も全部噛み合っていてリアルタイムで見られたことに感謝しかないんだよね。";

    println!("Input: {} graphemes\n", rant.graphemes(true).count());

    // Strategy 1: weighted markers
    println!("1. Scored (weighted break markers)");
    println!("   -------------------------------");
    let scored = ScoredSplitter::new(30);
    let chunks = scored.split(rant);
    for (i, chunk) in chunks.iter().enumerate() {
        println!("   [{}] ({:2} graphemes) {}", i, chunk.graphemes(true).count(), chunk);
    }
    println!("   Cuts land on 、/。 and connectives, never mid-word.\n");

    // Strategy 2: punctuation-only fallback
    println!("2. Punctuation fallback");
    println!("   --------------------");
    let punct = PunctSplitter::new(30);
    let chunks = punct.split(rant);
    for (i, chunk) in chunks.iter().enumerate() {
        println!("   [{}] ({:2} graphemes) {}", i, chunk.graphemes(true).count(), chunk);
    }
    println!("   Fixed windows, snapped back to the nearest punctuation.\n");

    // Absorption
    println!("3. Absorption (floor = 20)");
    println!("   -----------------------");
    let merged = absorb_short(scored.split(rant), 20);
    for (i, chunk) in merged.iter().enumerate() {
        println!("   [{}] ({:2} graphemes) {}", i, chunk.graphemes(true).count(), chunk);
    }
    println!("   Short tails are folded into their neighbors; the text is unchanged.");
}
