//! Description normalisation for step matching.
//!
//! Step descriptions are matched on a canonical key rather than on their raw
//! text, so that `"Minha  Descrição 1 "` written in a test and
//! `"minha descricao 1"` declared on a method resolve to the same binding.
//!
//! The key is built by:
//! - folding accented Latin letters (grave, acute, circumflex, diaeresis,
//!   tilde and cedilla forms) onto their base letter
//! - replacing every character outside `[A-Za-z0-9_]` with a space
//! - collapsing whitespace runs and trimming
//! - lowercasing

/// Normalise a step description into its matching key.
///
/// The same function runs when bindings are discovered and when steps are
/// called. It is idempotent: normalising a key returns the key unchanged.
///
/// # Examples
///
/// ```
/// use bdd_proxy::normalize::normalize_key;
///
/// assert_eq!(normalize_key(" Minha  Descrição 1 "), "minha descricao 1");
/// assert_eq!(normalize_key("my DESCRIPTION_1"), "my description_1");
/// assert_eq!(normalize_key("a user, logged-in!"), "a user logged in");
/// ```
#[must_use]
pub fn normalize_key(description: &str) -> String {
    let replaced: String = description
        .chars()
        .map(fold_diacritic)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map an accented Latin letter onto its unaccented base letter.
///
/// Characters outside the folding table are returned unchanged.
const fn fold_diacritic(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        'à' | 'á' | 'â' | 'ã' | 'ä' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests;
