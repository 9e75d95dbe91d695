// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rendering of numbered pinyin (`ni3 hao3`) into pinyin with tone marks.

use crate::error::Fallible;
use crate::error::fail;

/// Marker appended to a syllable when no rule tells us where the tone mark
/// goes.
pub const UNPLACED_TONE: char = '!';

/// The vowels that can carry a tone mark, in table order.
const VOWELS: [char; 6] = ['a', 'o', 'e', 'i', 'u', 'ü'];

/// Tone marks indexed by tone, then by vowel. Row zero is the neutral tone.
const TONE_MARKS: [[char; 6]; 5] = [
    ['a', 'o', 'e', 'i', 'u', 'ü'],
    [
        '\u{0101}', '\u{014d}', '\u{0113}', '\u{012b}', '\u{016b}', '\u{01d6}',
    ],
    [
        '\u{00e1}', '\u{00f3}', '\u{00e9}', '\u{00ed}', '\u{00fa}', '\u{01d8}',
    ],
    [
        '\u{01ce}', '\u{01d2}', '\u{011b}', '\u{01d0}', '\u{01d4}', '\u{01da}',
    ],
    [
        '\u{00e0}', '\u{00f2}', '\u{00e8}', '\u{00ec}', '\u{00f9}', '\u{01dc}',
    ],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    First,
    Second,
    Third,
    Fourth,
}

impl Tone {
    /// Read a tone number. Both `5` and `0` denote the neutral tone.
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        match digit % 5 {
            _ if digit > 5 => None,
            0 => Some(Tone::Neutral),
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            _ => Some(Tone::Fourth),
        }
    }

    fn index(self) -> usize {
        match self {
            Tone::Neutral => 0,
            Tone::First => 1,
            Tone::Second => 2,
            Tone::Third => 3,
            Tone::Fourth => 4,
        }
    }
}

/// `v` is the usual ASCII stand-in for `ü`.
fn vowel_index(c: char) -> Option<usize> {
    match c {
        'v' => Some(5),
        _ => VOWELS.iter().position(|&v| v == c),
    }
}

fn is_vowel(c: char) -> bool {
    vowel_index(c).is_some()
}

/// Return the toned form of a vowel. Non-vowels are returned unchanged.
pub fn tone_mark(vowel: char, tone: Tone) -> char {
    match vowel_index(vowel) {
        Some(idx) => TONE_MARKS[tone.index()][idx],
        None => vowel,
    }
}

/// Render a numbered pinyin string with tone marks.
///
/// Each syllable is a run of ASCII letters terminated by a tone digit. A `:`
/// after a `u` turns it into `ü`. Any other character also ends the syllable
/// and is dropped, so `"ni3 hao3"` renders as `"nǐhǎo"`. Letters after the
/// last terminator are kept as they are.
///
/// A syllable whose tone mark cannot be placed gets [`UNPLACED_TONE`]
/// appended, and callers should treat that as malformed input.
pub fn render_pinyin(pronunciation: &str) -> Fallible<String> {
    let mut result = String::new();
    let mut syllable: Vec<char> = Vec::new();
    for c in pronunciation.to_lowercase().chars() {
        if c.is_ascii_lowercase() {
            syllable.push(c);
        } else if c == ':' {
            match syllable.last_mut() {
                Some(last) if *last == 'u' => *last = 'ü',
                _ => {
                    return fail(format!(
                        "malformed pronunciation '{pronunciation}': ':' must follow 'u'."
                    ));
                }
            }
        } else {
            if let Some(tone) = Tone::from_digit(c) {
                place_tone(&mut syllable, tone, c);
            }
            result.extend(syllable.drain(..));
        }
    }
    result.extend(syllable);
    Ok(result)
}

fn place_tone(syllable: &mut Vec<char>, tone: Tone, digit: char) {
    if tone == Tone::Neutral {
        return;
    }
    let Some((start, end)) = first_vowel_run(syllable) else {
        syllable.push(digit);
        return;
    };
    let target = if end - start == 1 {
        Some(start)
    } else {
        choose_vowel(syllable, start, end)
    };
    match target {
        Some(idx) => syllable[idx] = tone_mark(syllable[idx], tone),
        None => syllable.push(UNPLACED_TONE),
    }
}

/// The bounds of the first maximal run of vowels, end-exclusive.
fn first_vowel_run(syllable: &[char]) -> Option<(usize, usize)> {
    let start = syllable.iter().position(|&c| is_vowel(c))?;
    let len = syllable[start..]
        .iter()
        .take_while(|&&c| is_vowel(c))
        .count();
    Some((start, start + len))
}

/// Pick which vowel of a multi-vowel run carries the tone: `a`, then `o`,
/// then `e`, then the last letter of a syllable ending in `ui` or `iu`.
fn choose_vowel(syllable: &[char], start: usize, end: usize) -> Option<usize> {
    let run = &syllable[start..end];
    for vowel in ['a', 'o', 'e'] {
        if let Some(pos) = run.iter().position(|&c| c == vowel) {
            return Some(start + pos);
        }
    }
    if syllable.ends_with(&['u', 'i']) || syllable.ends_with(&['i', 'u']) {
        return Some(syllable.len() - 1);
    }
    None
}

/// The tone class of a pronunciation: its final character, which for well
/// formed input is the tone digit of the last syllable.
pub fn tone_class(pronunciation: &str) -> String {
    pronunciation
        .chars()
        .next_back()
        .map(|c| c.to_string())
        .unwrap_or_default()
}
