//! Heuristic Russian morphology: POS guessing and lemmatization
//!
//! This is the fallback analog of a dictionary-backed morphological
//! analyzer. It is intentionally rule-based: closed-class words come from
//! lookup tables, open-class words are classified by inflectional suffix,
//! and lemmas are rebuilt by suffix substitution. Words the rules cannot
//! handle keep their normalized surface form as the lemma. For exact
//! morphology, plug a dictionary analyzer in through
//! [`crate::nlp::MorphAnalyzer`].

use crate::types::PosTag;

/// Adjective suffixes used for POS guessing, longest first.
///
/// Ambiguous short endings ("ой", "ом", "ем", "ым", "им") are deliberately
/// absent here: they collide with noun case endings too often, and a wrong
/// NOUN default is cheaper downstream than a wrong ADJ.
const ADJ_GUESS_SUFFIXES: &[&str] = &[
    "ыми", "ими", "ого", "его", "ому", "ему", "ая", "яя", "ое", "ее", "ые", "ие", "ую", "юю",
    "ых", "их", "ый", "ий",
];

/// Adjective suffixes the lemmatizer strips, longest first. A superset of
/// the guessing list: once a token is already tagged ADJ the ambiguous
/// endings are safe to strip.
const ADJ_LEMMA_SUFFIXES: &[&str] = &[
    "ыми", "ими", "ого", "его", "ому", "ему", "ая", "яя", "ое", "ее", "ые", "ие", "ую", "юю",
    "ых", "их", "ый", "ий", "ой", "ым", "им", "ом", "ем",
];

/// Noun suffixes that identify derived nouns before the verb/adjective
/// rules get a chance to misfire ("задание", "радость", "общество").
const NOUN_GUESS_SUFFIXES: &[&str] = &["ость", "ание", "ение", "ство"];

/// Oblique noun endings the lemmatizer strips (plural and instrumental
/// cases only — nominative endings are part of the lemma and stay).
const NOUN_LEMMA_SUFFIXES: &[&str] = &[
    "иями", "иях", "ами", "ями", "ах", "ях", "ам", "ям", "ов", "ев", "ом", "ем",
];

/// Present-tense verb endings paired with the infinitive suffix that
/// replaces them. Only the longer unambiguous endings participate.
const VERB_PRESENT_ENDINGS: &[(&str, &str)] = &[
    ("ует", "овать"),
    ("уют", "овать"),
    ("ает", "ать"),
    ("ают", "ать"),
    ("яет", "ять"),
    ("яют", "ять"),
    ("еет", "еть"),
    ("еют", "еть"),
];

/// Minimum stem length (in chars) left after stripping a suffix.
const MIN_STEM_CHARS: usize = 3;

/// Normalize a surface form: lowercase with ё folded to е.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}

/// Guess the POS tag of a single word.
///
/// `word` is the original surface form (capitalization feeds the
/// proper-noun rule); all suffix checks run on the normalized form.
pub fn guess_pos(word: &str) -> PosTag {
    let lower = normalize(word);

    if let Some(pos) = function_word_pos(&lower) {
        return pos;
    }

    if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return PosTag::Numeral;
    }

    if has_suffix_from(&lower, NOUN_GUESS_SUFFIXES) {
        return PosTag::Noun;
    }

    if has_suffix_from(&lower, ADJ_GUESS_SUFFIXES) {
        return PosTag::Adjective;
    }

    if looks_like_verb(&lower) {
        return PosTag::Verb;
    }

    // Capitalized word with a lowercase tail: likely a name. Sentence-initial
    // words only reach this point when no inflectional rule claimed them.
    if word.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
        && word.chars().skip(1).all(|c| c.is_lowercase())
    {
        return PosTag::ProperNoun;
    }

    // Default to noun (most remaining content words are nouns)
    PosTag::Noun
}

/// Produce the lemma for a word given its POS tag.
///
/// The lemma is always lowercase with ё folded; words the substitution
/// rules cannot handle keep their normalized surface form.
pub fn lemmatize(word: &str, pos: PosTag) -> String {
    let lower = normalize(word);

    match pos {
        PosTag::Adjective => lemmatize_adjective(&lower),
        PosTag::Noun | PosTag::ProperNoun => lemmatize_noun(&lower),
        PosTag::Verb => lemmatize_verb(&lower),
        _ => lower,
    }
}

/// Closed-class word lookup.
fn function_word_pos(lower: &str) -> Option<PosTag> {
    let pos = match lower {
        // Prepositions
        "в" | "во" | "на" | "с" | "со" | "по" | "за" | "у" | "о" | "об" | "обо" | "от" | "до"
        | "из" | "к" | "ко" | "над" | "под" | "при" | "про" | "без" | "для" | "через"
        | "между" | "перед" | "вдоль" | "возле" | "около" | "среди" => PosTag::Preposition,
        // Conjunctions (coordinating and subordinating)
        "и" | "а" | "но" | "или" | "либо" | "что" | "чтобы" | "если" | "когда" | "пока"
        | "хотя" | "потому" | "поэтому" | "зато" | "однако" | "тоже" | "также" => {
            PosTag::Conjunction
        }
        // Pronouns
        "я" | "ты" | "он" | "она" | "оно" | "мы" | "вы" | "они" | "себя" | "меня" | "тебя"
        | "его" | "ее" | "нее" | "нас" | "вас" | "их" | "них" | "мне" | "тебе" | "ему" | "ей"
        | "нам" | "вам" | "им" | "ним" | "кто" | "ничто" | "никто" | "нечто" => PosTag::Pronoun,
        // Determiners
        "этот" | "эта" | "это" | "эти" | "этой" | "этого" | "этому" | "этим" | "тот" | "та"
        | "те" | "той" | "того" | "тому" | "весь" | "вся" | "все" | "всю" | "мой" | "моя"
        | "мое" | "мои" | "твой" | "наш" | "ваш" | "свой" | "каждый" | "любой" => {
            PosTag::Determiner
        }
        // Particles
        "не" | "ни" | "же" | "ли" | "бы" | "ведь" | "вот" | "даже" | "лишь" | "только"
        | "разве" | "неужели" | "пусть" => PosTag::Particle,
        // Common adverbs (no productive suffix rule: "-о" collides with
        // neuter nouns)
        "очень" | "уже" | "еще" | "здесь" | "там" | "тут" | "сейчас" | "теперь" | "всегда"
        | "никогда" | "быстро" | "медленно" | "хорошо" | "плохо" | "тихо" | "громко" | "рано"
        | "поздно" | "далеко" | "близко" | "вчера" | "сегодня" | "завтра" | "вдруг" | "снова"
        | "опять" | "почти" | "совсем" | "слишком" | "потом" | "затем" | "иногда" | "часто"
        | "редко" => PosTag::Adverb,
        _ => return None,
    };
    Some(pos)
}

/// Check whether any suffix from `suffixes` matches with an adequate stem.
fn has_suffix_from(lower: &str, suffixes: &[&str]) -> bool {
    find_suffix(lower, suffixes).is_some()
}

/// Find the first (longest, given list order) matching suffix that leaves
/// at least [`MIN_STEM_CHARS`] characters of stem.
fn find_suffix<'a>(lower: &str, suffixes: &[&'a str]) -> Option<&'a str> {
    let word_chars = lower.chars().count();
    suffixes.iter().copied().find(|suffix| {
        let suffix_chars = suffix.chars().count();
        word_chars >= suffix_chars + MIN_STEM_CHARS && lower.ends_with(suffix)
    })
}

/// Detect verb forms: infinitives, past tense, and the safer present-tense
/// endings. Reflexive forms are checked with the particle stripped.
fn looks_like_verb(lower: &str) -> bool {
    let base = lower
        .strip_suffix("ся")
        .or_else(|| lower.strip_suffix("сь"))
        .unwrap_or(lower);

    if past_verb_stem(base).is_some() {
        return true;
    }

    if VERB_PRESENT_ENDINGS
        .iter()
        .any(|&(ending, _)| has_suffix_from(base, &[ending]))
    {
        return true;
    }

    infinitive_stem(base).is_some()
}

/// If `base` is an infinitive ("читать", "нести", "мочь"), return it
/// unchanged; otherwise `None`. The "ть" rule requires a vowel before the
/// suffix so consonant-stem nouns ("честь") fall through.
fn infinitive_stem(base: &str) -> Option<&str> {
    let chars: Vec<char> = base.chars().collect();
    if base.ends_with("ть") && chars.len() >= 4 {
        let before = chars[chars.len() - 3];
        if is_vowel(before) {
            return Some(base);
        }
    }
    if (base.ends_with("ти") || base.ends_with("чь")) && chars.len() >= 4 {
        return Some(base);
    }
    None
}

/// If `base` is a past-tense form ("стоял", "читала", "шумели"), return
/// the stem with the "л" (and any gender/number vowel) removed.
fn past_verb_stem(base: &str) -> Option<String> {
    let trimmed = match base
        .strip_suffix('а')
        .or_else(|| base.strip_suffix('о'))
        .or_else(|| base.strip_suffix('и'))
    {
        Some(s) if s.ends_with('л') => s,
        _ => base,
    };

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() >= 3 && chars[chars.len() - 1] == 'л' {
        // Require a vowel before "л" so nouns like "стол" stay nouns
        let before = chars[chars.len() - 2];
        if matches!(before, 'а' | 'я' | 'е' | 'и' | 'ы' | 'у') {
            return Some(chars[..chars.len() - 1].iter().collect());
        }
    }
    None
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'а' | 'е' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я')
}

/// Rebuild the masculine nominative singular for an adjective form.
fn lemmatize_adjective(lower: &str) -> String {
    let Some(suffix) = find_suffix(lower, ADJ_LEMMA_SUFFIXES) else {
        return lower.to_string();
    };
    let stem = &lower[..lower.len() - suffix.len()];

    // Soft-series endings keep the soft declension; hard-series endings
    // take "ий" only after velars and hushers (spelling rule).
    let soft = matches!(
        suffix,
        "ий" | "яя" | "ее" | "юю" | "ие" | "их" | "ими" | "им" | "его" | "ему" | "ем"
    );
    let velar_or_husher = stem
        .chars()
        .last()
        .map(|c| matches!(c, 'г' | 'к' | 'х' | 'ж' | 'ч' | 'ш' | 'щ'))
        .unwrap_or(false);

    if soft || velar_or_husher {
        format!("{stem}ий")
    } else {
        format!("{stem}ый")
    }
}

/// Strip oblique case endings from a noun form. Nominative endings are
/// part of the lemma and are not touched; forms we cannot resolve keep
/// their surface form.
fn lemmatize_noun(lower: &str) -> String {
    match find_suffix(lower, NOUN_LEMMA_SUFFIXES) {
        Some(suffix) => lower[..lower.len() - suffix.len()].to_string(),
        None => lower.to_string(),
    }
}

/// Rebuild the infinitive for a verb form where the rules allow.
fn lemmatize_verb(lower: &str) -> String {
    let (base, reflexive) = match lower
        .strip_suffix("ся")
        .or_else(|| lower.strip_suffix("сь"))
    {
        Some(b) => (b, true),
        None => (lower, false),
    };

    let lemma = if let Some(stem) = infinitive_stem(base) {
        stem.to_string()
    } else if let Some(stem) = past_verb_stem(base) {
        format!("{stem}ть")
    } else if let Some(&(ending, inf)) = VERB_PRESENT_ENDINGS
        .iter()
        .find(|&&(ending, _)| has_suffix_from(base, &[ending]))
    {
        format!("{}{inf}", &base[..base.len() - ending.len()])
    } else {
        return lower.to_string();
    };

    if reflexive {
        format!("{lemma}ся")
    } else {
        lemma
    }
}
