/*!
 * Tests for caption row wrapping
 */

use subconv::formats::scc::wrap::{wrap_line, wrap_lines, MAX_LINE_LENGTH};

/// Test that a line of exactly the limit is left alone
#[test]
fn test_wrapLine_withExactLimit_shouldNotBreak() {
    let line = "a".repeat(MAX_LINE_LENGTH);
    assert_eq!(wrap_line(&line, MAX_LINE_LENGTH), vec![line.clone()]);
}

/// Test that every piece fits and no word is lost
#[test]
fn test_wrapLine_withProse_shouldKeepAllWords() {
    let line = "Captions are limited to thirty two columns so longer sentences must be split across rows";
    let wrapped = wrap_line(line, MAX_LINE_LENGTH);

    assert!(wrapped.len() > 1);
    for piece in &wrapped {
        assert!(piece.chars().count() <= MAX_LINE_LENGTH, "'{}' is too long", piece);
    }
    assert_eq!(wrapped.join(" "), line);
}

/// Test the hard break for a word longer than a row
#[test]
fn test_wrapLine_withUnbrokenWord_shouldCutAtLimit() {
    let line = "x".repeat(70);
    let wrapped = wrap_line(&line, MAX_LINE_LENGTH);

    assert_eq!(wrapped, vec!["x".repeat(32), "x".repeat(32), "x".repeat(6)]);
}

/// Test that width counts characters rather than bytes
#[test]
fn test_wrapLine_withAccentedText_shouldCountCharacters() {
    let line = "é".repeat(40);
    let wrapped = wrap_line(&line, MAX_LINE_LENGTH);

    assert_eq!(wrapped, vec!["é".repeat(32), "é".repeat(8)]);
}

/// Test that lines are wrapped independently and keep their order
#[test]
fn test_wrapLines_withSeveralLines_shouldFlattenInOrder() {
    let lines = ["short", "this second line is long enough to wrap once", "end"];
    let wrapped = wrap_lines(&lines, MAX_LINE_LENGTH);

    assert_eq!(
        wrapped,
        vec!["short", "this second line is long enough", "to wrap once", "end"]
    );
}

/// Test a narrower limit
#[test]
fn test_wrapLine_withNarrowLimit_shouldBreakEarlier() {
    assert_eq!(wrap_line("one two three", 9), vec!["one two", "three"]);
    assert_eq!(wrap_line("one two three", 7), vec!["one", "two", "three"]);
    assert_eq!(wrap_line("abcdefgh", 3), vec!["abc", "def", "gh"]);
}
