/*!
 * Orthographic syllabification.
 *
 * Splits a cleaned word into syllable substrings using vowel-group
 * segmentation with silent-`e` and short-word special-casing. This is a
 * heuristic, not a phonetic dictionary: words outside the exception set
 * and the dictionary get an approximate split, and that is accepted.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common short words the vowel-group scan would split incorrectly.
///
/// Mostly words whose trailing vowel cluster or final `e` reads as a second
/// nucleus to the naive scan. Kept as data so it can be tested and extended
/// without touching control flow.
static MONOSYLLABIC_EXCEPTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "are", "were", "there", "here", "where", "once", "time", "make", "take", "like",
        "life", "love", "home", "name", "house", "voice", "juice", "peace", "piece", "please",
        "through", "though", "rhythm",
    ]
    .into_iter()
    .collect()
});

/// Letters treated as syllable nuclei by the scan
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Lowercase a word and strip every non-letter character.
///
/// This is the normalized form all downstream components key on; syllable
/// texts concatenate back to exactly this string.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// CVCe check: a final silent `e` preceded by a consonant, with exactly one
/// vowel in front of it ("time", "make", "stone").
fn is_silent_e(chars: &[char]) -> bool {
    if chars.len() < 3 || *chars.last().unwrap() != 'e' {
        return false;
    }
    let body = &chars[..chars.len() - 1];
    let vowel_count = body.iter().filter(|&&c| is_vowel(c)).count();
    vowel_count == 1 && !is_vowel(body[body.len() - 1])
}

/// Maximal runs of vowel characters as `(start, end_exclusive)` char indices
fn vowel_groups(chars: &[char]) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut start = None;
    for (i, &c) in chars.iter().enumerate() {
        if is_vowel(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            groups.push((s, i));
        }
    }
    if let Some(s) = start {
        groups.push((s, chars.len()));
    }
    groups
}

/// Split a word into syllable substrings.
///
/// Concatenating the result reproduces `clean_word(word)`. An empty cleaned
/// word yields an empty sequence; the caller treats that as "no syllables",
/// not an error.
pub fn syllabify(word: &str) -> Vec<String> {
    let clean = clean_word(word);
    if clean.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = clean.chars().collect();
    if chars.len() <= 2 || MONOSYLLABIC_EXCEPTIONS.contains(clean.as_str()) {
        return vec![clean];
    }
    if is_silent_e(&chars) {
        return vec![clean];
    }

    let groups = vowel_groups(&chars);
    if groups.len() <= 1 {
        return vec![clean];
    }

    // One segment per vowel group, cut at the midpoint between the end of
    // one group and the start of the next.
    let mut cuts = Vec::with_capacity(groups.len() + 1);
    cuts.push(0);
    for pair in groups.windows(2) {
        let midpoint = (pair[0].1 + pair[1].0) / 2 + 1;
        cuts.push(midpoint.min(chars.len()));
    }
    cuts.push(chars.len());

    let mut syllables = Vec::with_capacity(groups.len());
    for pair in cuts.windows(2) {
        if pair[1] > pair[0] {
            syllables.push(chars[pair[0]..pair[1]].iter().collect());
        }
    }
    if syllables.is_empty() {
        return vec![clean];
    }
    syllables
}

/// Partition a cleaned word into exactly `count` non-empty segments,
/// aligning cut points to vowel boundaries where possible.
///
/// Used to project a dictionary or G2P syllable count (which is phonetic)
/// back onto the orthography, so that dictionary-resolved words still
/// satisfy the concatenation invariant. Returns `None` when the word is too
/// short to hold `count` non-empty segments.
pub fn approximate_syllables(word: &str, count: usize) -> Option<Vec<String>> {
    let chars: Vec<char> = word.chars().collect();
    if count == 0 || chars.len() < count {
        return None;
    }
    if count == 1 {
        return Some(vec![word.to_string()]);
    }

    let vowels: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect();

    let mut cuts: Vec<usize> = Vec::with_capacity(count + 1);
    cuts.push(0);
    for i in 1..count {
        // Leave at least one char per remaining segment.
        let upper = chars.len() - (count - i);
        let base = if vowels.len() >= count {
            ((vowels[i - 1] + vowels[i]) / 2 + 1).min(vowels[i])
        } else {
            i * chars.len() / count
        };
        let cut = base.max(cuts[i - 1] + 1).min(upper);
        cuts.push(cut);
    }
    cuts.push(chars.len());

    let mut segments = Vec::with_capacity(count);
    for pair in cuts.windows(2) {
        if pair[1] <= pair[0] {
            return None;
        }
        segments.push(chars[pair[0]..pair[1]].iter().collect());
    }
    Some(segments)
}
