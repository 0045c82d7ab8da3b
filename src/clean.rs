//! Raw pasted-text cleanup.
//!
//! The operator often pastes a whole page copy instead of a URL: res
//! headers, anchor tokens, footer boilerplate and all. Narrating that
//! verbatim reads the site chrome aloud, so this pass strips everything
//! that is not a comment body:
//!
//! ```text
//! ">>12 それはそう"            -> "それはそう"
//! "0004 今北"                  -> "今北"
//! "RSS | All Rights Reserved"  -> (line dropped)
//! ```
//!
//! Cleanup is deletion-only — it never invents or reorders text, so a
//! surviving line is a substring of the line it came from.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// `>>123`-style anchor tokens, with any trailing whitespace.
static ANCHOR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">>\d+\s*").expect("valid pattern"));

/// Four-digit res numbers at the start of a line.
static RES_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d{4}(?:\s+|$)").expect("valid pattern"));

/// Bare leading digit tokens (anchor remnants like "1 " or "22 ").
static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+(?:\s+|$)").expect("valid pattern"));

/// The board's post header: "12: 名無しのあにまんch 2024/01/02(火) 12:34:56".
static THREAD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+: 名無しのあにまんch \d{4}/\d{2}/\d{2}\(.\) \d{2}:\d{2}:\d{2}")
        .expect("valid pattern")
});

/// Board thread URLs.
static BOARD_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://bbs\.animanch\.com/board/\d+/?").expect("valid pattern"));

/// A line containing any of these is site chrome, not a comment.
const BOILERPLATE: &[&str] = &[
    "RSS",
    "All Rights Reserved",
    "問い合わせ",
    "ジャンプ",
    "ワンピース",
    "ナルト",
    "深夜アニメ界隈",
    "まとめサイトです",
    "http://",
    "https://",
    ".com",
];

/// Strip anchor tokens, res numbers, post headers and boilerplate lines
/// from pasted page text.
///
/// ```rust
/// use serifu::clean_raw_text;
///
/// let pasted = ">>3 それはそう\n0004 今北\nまとめサイトです\n";
/// assert_eq!(clean_raw_text(pasted), "それはそう\n今北");
/// ```
#[must_use]
pub fn clean_raw_text(text: &str) -> String {
    let text = ANCHOR_TOKEN.replace_all(text, "");
    let text = RES_NUMBER.replace_all(&text, "");
    let text = LEADING_DIGITS.replace_all(&text, "");
    let text = THREAD_HEADER.replace_all(&text, "");

    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !BOILERPLATE.iter().any(|marker| line.contains(marker)))
        .collect();

    debug!("cleanup kept {} lines", lines.len());
    lines.join("\n")
}

/// Find board thread URLs in pasted text, deduplicated in first-seen
/// order.
///
/// ```rust
/// use serifu::find_board_urls;
///
/// let text = "これ https://bbs.animanch.com/board/4635009/ 面白い";
/// assert_eq!(
///     find_board_urls(text),
///     vec!["https://bbs.animanch.com/board/4635009/"]
/// );
/// ```
#[must_use]
pub fn find_board_urls(text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for hit in BOARD_URL.find_iter(text) {
        if !seen.iter().any(|url| url == hit.as_str()) {
            seen.push(hit.as_str().to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_tokens_removed() {
        assert_eq!(clean_raw_text(">>12 わかる"), "わかる");
        assert_eq!(clean_raw_text("わかる >>12"), "わかる ");
    }

    #[test]
    fn test_res_numbers_removed() {
        assert_eq!(clean_raw_text("0001 スレ立て"), "スレ立て");
    }

    #[test]
    fn test_thread_header_removed() {
        let text = "1: 名無しのあにまんch 2024/01/02(火) 12:34:56\n本文はこちら";
        assert_eq!(clean_raw_text(text), "本文はこちら");
    }

    #[test]
    fn test_boilerplate_lines_dropped() {
        let text = "本文\nまとめサイトです\nAll Rights Reserved\n続き";
        assert_eq!(clean_raw_text(text), "本文\n続き");
    }

    #[test]
    fn test_url_lines_dropped() {
        let text = "本文\nhttps://example.com/foo\n続き";
        assert_eq!(clean_raw_text(text), "本文\n続き");
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(clean_raw_text("一\n\n\n二"), "一\n二");
    }

    #[test]
    fn test_never_invents_text() {
        let text = ">>1 こんにちは\n0002 こんばんは";
        for line in clean_raw_text(text).lines() {
            assert!(text.contains(line));
        }
    }

    #[test]
    fn test_find_board_urls_dedup_in_order() {
        let text = "\
            https://bbs.animanch.com/board/111/ と \
            https://bbs.animanch.com/board/222/ と \
            https://bbs.animanch.com/board/111/";
        assert_eq!(
            find_board_urls(text),
            vec![
                "https://bbs.animanch.com/board/111/",
                "https://bbs.animanch.com/board/222/"
            ]
        );
    }

    #[test]
    fn test_no_urls() {
        assert!(find_board_urls("URLなし").is_empty());
    }
}
