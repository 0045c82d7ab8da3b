//! Basic Pipeline
//!
//! A small thread goes in, a narration script comes out.
//!
//! ```bash
//! cargo run --example 01_basic_pipeline
//! ```

use serifu::{render_thread, Comment, CommentTable, ScriptOptions};

fn main() {
    env_logger::init();

    let mut table = CommentTable::new();
    table.insert(1, Comment::new(1, "今期アニメで一番好きなシーン貼ってけ"));
    table.insert(2, Comment::new(2, "三話の回想シーンすき").with_anchors([1]));
    table.insert(3, Comment::new(3, "お前それ言いたいだけだろ"));
    table.insert(
        4,
        Comment::new(4, "わかる、あそこの作画は別格だと思う").with_anchors([2]),
    );
    table.insert(5, Comment::new(5, "[image]"));

    let script = render_thread(&table, &ScriptOptions::default());

    println!("{} comments in, {} blocks out:\n", table.len(), script.lines().count());
    println!("{script}");
}
