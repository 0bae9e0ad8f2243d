//! Unit tests for description normalisation.

use rstest::rstest;

use super::normalize_key;

#[rstest]
#[case("my description 1", "my description 1")]
#[case("My Description 1", "my description 1")]
#[case("  my   description\t1\n", "my description 1")]
#[case("Minha  Descrição 1 ", "minha descricao 1")]
#[case("ÀÉÎÕÜ àéîõü Çç Ññ", "aeiou aeiou cc nn")]
#[case("my DESCRIPTION_1", "my description_1")]
#[case("the user's e-mail (primary)", "the user s e mail primary")]
#[case("", "")]
#[case("   ", "")]
fn normalises_description(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_key(raw), expected);
}

#[rstest]
#[case("Descrição", "descricao")]
#[case("my   desc", "my desc")]
#[case("MY DESC", "my desc")]
fn equivalent_descriptions_share_a_key(#[case] left: &str, #[case] right: &str) {
    assert_eq!(normalize_key(left), normalize_key(right));
}

#[rstest]
#[case("Minha  Descrição 1 ")]
#[case("given_a_user")]
#[case("ümlaut & ßharp — dash")]
fn normalisation_is_idempotent(#[case] raw: &str) {
    let once = normalize_key(raw);
    assert_eq!(normalize_key(&once), once);
}

#[rstest]
fn unmapped_letters_become_separators() {
    assert_eq!(normalize_key("straße"), "stra e");
    assert_eq!(normalize_key("øre"), "re");
}
