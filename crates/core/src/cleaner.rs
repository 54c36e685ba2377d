//! Client display-name normalization.
//!
//! Historical client records carry names polluted with service keywords,
//! payment-state labels, amounts, and salesperson names ("Netflix Juan
//! Perez Nequi 20000"). The cleaner strips that noise down to the bare
//! person name. It is pure string logic; the repair operation in the ops
//! layer applies it row by row.

/// Salesperson names removed anywhere in the string.
const SALESPERSON_FIRST: &str = "eduardo";
const SALESPERSON_LAST: [&str; 2] = ["diaz", "david"];

/// Service/product keywords stripped from the front of a name.
const PREFIX_KEYWORDS: &[&str] = &[
    "Netflix",
    "Amazon",
    "Disney",
    "Prime",
    "Video",
    "Hbomax",
    "Hbo",
    "Max",
    "Plex",
    "Iptv",
    "Win",
    "Youtube",
    "Spotify",
    "Combo",
    "Duo",
    "Trio",
    "Pantalla",
    "Pantallas",
    "Perfil",
    "Sin Garantia",
    "Cuenta",
    "Completa",
    "Magis",
    "Paramount",
    "Crunchyroll",
    "Vix",
    "Star",
    "Plus",
    "Venta",
    "Promo",
    "Promocion",
    "Meses",
    "Mes",
    "Trío",
    "Especial",
    "De",
];

/// Keywords that start the "garbage tail" of a name (service abbreviations
/// and payment labels); everything from the first word-start occurrence on
/// is cut.
const SUFFIX_KEYWORDS: &[&str] = &[
    "Nfx",
    "Amz",
    "Dny",
    "Hb",
    "Yt",
    "Win",
    "Iptv",
    "Plex",
    "Spy",
    "Pto",
    "Magis",
    "Pagada",
    "Paga",
    "Renovacion",
    "Mensualidad",
    "Transferencia",
    "Bancaria",
    "Nequi",
    "Daviplata",
    "Efectivo",
    "Bancolombia",
    "Ahorro",
    "Mano",
    "Davivienda",
    "Corresponsal",
    "Punta",
    "Pago",
    "Bcolombia",
    "Transf",
    "Vencido",
    "Debe",
    "Saldo",
];

fn chars_eq_ci(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive prefix strip; returns the remainder on match.
fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = s;
    for pc in prefix.chars() {
        let c = rest.chars().next()?;
        if !chars_eq_ci(c, pc) {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }
    Some(rest)
}

/// Removes salesperson name pairs anywhere in the string.
fn remove_salesperson(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if i + 1 < words.len()
            && words[i].eq_ignore_ascii_case(SALESPERSON_FIRST)
            && SALESPERSON_LAST
                .iter()
                .any(|last| words[i + 1].eq_ignore_ascii_case(last))
        {
            i += 2;
            continue;
        }
        kept.push(words[i]);
        i += 1;
    }
    kept.join(" ")
}

/// Finds the byte offset of the earliest word-start suffix keyword.
fn find_suffix_cut(name: &str) -> Option<usize> {
    for (idx, _) in name.char_indices() {
        let at_word_start = idx == 0 || name[..idx].ends_with(' ');
        if !at_word_start {
            continue;
        }
        for kw in SUFFIX_KEYWORDS {
            if strip_prefix_ci(&name[idx..], kw).is_some() {
                return Some(idx);
            }
        }
    }
    None
}

/// Normalizes a raw client name.
///
/// Strips salesperson names, iteratively removes leading digits,
/// punctuation, service keywords, joiners, and parenthesized lead text,
/// cuts the payment/status tail, and capitalizes each word.
#[must_use]
pub fn clean_name(raw: &str) -> String {
    let mut name = remove_salesperson(raw);

    // Iterative prefix stripping: keep peeling until stable.
    loop {
        let before = name.clone();

        name = name
            .trim_start_matches(|c: char| {
                c.is_ascii_digit() || c.is_whitespace() || ",.-+*|()".contains(c)
            })
            .to_string();

        for kw in PREFIX_KEYWORDS {
            if let Some(rest) = strip_prefix_ci(&name, kw) {
                name = rest.to_string();
                break;
            }
        }

        // Leading joiners left behind by a removed chunk.
        if let Some(rest) = name.strip_prefix('#') {
            name = rest.to_string();
        } else if let Some(rest) = strip_prefix_ci(&name, "y ") {
            name = rest.to_string();
        }

        if name.starts_with('(') {
            if let Some(end) = name.find(')') {
                name = name[end + 1..].to_string();
            }
        }

        name = name.trim().to_string();
        if name == before {
            break;
        }
    }

    if let Some(idx) = find_suffix_cut(&name) {
        name.truncate(idx);
    }
    name = name.trim().to_string();

    // One trailing punctuation character.
    if name.ends_with(['.', ',', '-']) {
        name.pop();
        name = name.trim_end().to_string();
    }

    capitalize_words(&name)
}

/// Uppercases the first character of each word, leaving the rest as-is.
fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |c| {
                c.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a cleaned name should be written back.
///
/// A write only happens when the name actually changed and the result is
/// long enough to plausibly be a name; empty or near-empty results leave
/// the stored value alone.
#[must_use]
pub fn should_update(original: &str, cleaned: &str) -> bool {
    cleaned != original && cleaned.chars().count() > 2
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Netflix Juan Perez", "Juan Perez")]
    #[case("123 Maria Lopez Nequi 20000", "Maria Lopez")]
    #[case("Eduardo Diaz Carlos Ruiz", "Carlos Ruiz")]
    #[case("(Promo) Ana Maria Pagada", "Ana Maria")]
    #[case("Combo Duo Pedro", "Pedro")]
    #[case("Perfil Netflix Laura", "Laura")]
    #[case("Luisa Daviplata 30000", "Luisa")]
    #[case("  - Jorge.", "Jorge")]
    #[case("juan camilo", "Juan Camilo")]
    fn cleans_noisy_names(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_name(raw), expected);
    }

    #[test]
    fn clean_name_is_stable_on_clean_input() {
        assert_eq!(clean_name("Juan Perez"), "Juan Perez");
        assert_eq!(clean_name("Ana"), "Ana");
    }

    #[test]
    fn suffix_at_start_empties_name() {
        // The whole value is garbage; the repair skips the write because
        // the cleaned result is too short.
        let cleaned = clean_name("Nfx Pagada");
        assert_eq!(cleaned, "");
        assert!(!should_update("Nfx Pagada", &cleaned));
    }

    #[test]
    fn should_update_rules() {
        assert!(should_update("netflix ana maria", "Ana Maria"));
        // Unchanged name: no write
        assert!(!should_update("Juan Perez", "Juan Perez"));
        // Too short after cleaning: no write
        assert!(!should_update("Nfx Al", "Al"));
    }

    #[test]
    fn capitalizes_first_letter_only() {
        // Rest of each word is preserved as-is
        assert_eq!(clean_name("ana maRia"), "Ana MaRia");
    }
}
