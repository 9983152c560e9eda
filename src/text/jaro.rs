//! Jaro and Jaro-Winkler similarity.

/// Winkler prefix scaling factor.
const PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix rewarded by the Winkler bonus.
const MAX_PREFIX: usize = 4;

/// Jaro score a pair must exceed before the Winkler bonus applies.
const BOOST_THRESHOLD: f64 = 0.7;

/// Compute the Jaro similarity of two strings (0.0 = nothing in common,
/// 1.0 = identical).
///
/// With `favor_same_start`, strings sharing up to four leading characters
/// get the Winkler bonus. `long_tolerance` adds a further bonus for long
/// strings with many matches; it has no effect without `favor_same_start`.
///
/// An empty string on either side scores 0.0.
pub fn jaro_distance(a: &str, b: &str, favor_same_start: bool, long_tolerance: bool) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len1 = a_chars.len();
    let len2 = b_chars.len();
    let max_len = len1.max(len2);

    // Signed: a one-character string gives a window of -1 and nothing matches.
    let window = (max_len / 2) as isize - 1;

    let mut a_matched = vec![false; len1];
    let mut b_matched = vec![false; len2];
    let mut matches = 0usize;

    for (i, &ch) in a_chars.iter().enumerate() {
        let i = i as isize;
        let start = (i - window).max(0);
        let end = (i + window + 1).min(len2 as isize);
        for j in start..end {
            let j = j as usize;
            if b_matched[j] || b_chars[j] != ch {
                continue;
            }
            a_matched[i as usize] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for (i, &ch) in a_chars.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if ch != b_chars[k] {
            half_transpositions += 1;
        }
        k += 1;
    }
    let transpositions = half_transpositions as f64 / 2.0;

    let m = matches as f64;
    let mut score = (m / len1 as f64 + m / len2 as f64 + (m - transpositions) / m) / 3.0;

    if favor_same_start && score > BOOST_THRESHOLD && len1 > 3 && len2 > 3 {
        let prefix = a_chars
            .iter()
            .zip(&b_chars)
            .take(MAX_PREFIX)
            .take_while(|(x, y)| x == y)
            .count();
        score += prefix as f64 * PREFIX_SCALE * (1.0 - score);

        if long_tolerance
            && max_len > 4
            && matches > prefix + 1
            && 2 * matches >= max_len + prefix
        {
            score += (1.0 - score)
                * ((matches - prefix - 1) as f64 / (len1 + len2 - 2 * prefix + 2) as f64);
        }
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_degenerate() {
        assert!((jaro_distance("abc", "abc", false, false) - 1.0).abs() < f64::EPSILON);
        assert!(jaro_distance("", "x", false, false).abs() < f64::EPSILON);
        assert!(jaro_distance("x", "", true, true).abs() < f64::EPSILON);
        assert!(jaro_distance("", "", false, false).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_strings() {
        assert!(jaro_distance("a", "b", false, false).abs() < f64::EPSILON);
        // Window 0: only same-position characters match.
        approx(jaro_distance("a", "ab", false, false), 0.833);
        assert!(jaro_distance("ab", "ba", false, false).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_values() {
        approx(jaro_distance("MARTHA", "MARHTA", false, false), 0.944);
        approx(jaro_distance("DIXON", "DICKSONX", false, false), 0.767);
        approx(jaro_distance("DWAYNE", "DUANE", false, false), 0.822);
    }

    #[test]
    fn test_winkler_bonus() {
        approx(jaro_distance("MARTHA", "MARHTA", true, false), 0.961);
        approx(jaro_distance("DWAYNE", "DUANE", true, false), 0.84);
        approx(jaro_distance("DIXON", "DICKSONX", true, false), 0.813);
    }

    #[test]
    fn test_winkler_needs_long_enough_strings() {
        let plain = jaro_distance("abc", "abd", false, false);
        let boosted = jaro_distance("abc", "abd", true, false);
        assert!((plain - boosted).abs() < f64::EPSILON);
    }

    #[test]
    fn test_long_tolerance_only_raises() {
        let winkler = jaro_distance("encyclopedia", "encyclopaedia", true, false);
        let long = jaro_distance("encyclopedia", "encyclopaedia", true, true);
        assert!(long >= winkler);
        assert!(long <= 1.0);
        let ignored = jaro_distance("encyclopedia", "encyclopaedia", false, true);
        let plain = jaro_distance("encyclopedia", "encyclopaedia", false, false);
        assert!((ignored - plain).abs() < f64::EPSILON);
    }

    #[test]
    fn test_long_tolerance_values() {
        approx(jaro_distance("MARTHA", "MARHTA", true, true), 0.971);
        approx(jaro_distance("DWAYNE", "DUANE", true, true), 0.869);
    }

    #[test]
    fn test_long_tolerance_needs_enough_matches() {
        // 4 matches with a 2-character prefix: 2 * 4 < 8 + 2, so no bonus.
        let winkler = jaro_distance("DIXON", "DICKSONX", true, false);
        let long = jaro_distance("DIXON", "DICKSONX", true, true);
        assert!((long - winkler).abs() < f64::EPSILON);
        approx(long, 0.813);
    }

    #[test]
    fn test_range() {
        for (a, b) in [("hello", "world"), ("abcdef", "fedcba"), ("crate", "trace")] {
            for (fav, long) in [(false, false), (true, false), (true, true)] {
                let s = jaro_distance(a, b, fav, long);
                assert!((0.0..=1.0).contains(&s), "{a}/{b}: {s}");
            }
        }
    }
}
