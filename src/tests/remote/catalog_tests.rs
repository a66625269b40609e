use super::*;

#[test]
fn item_path_encodes_id_as_one_segment() -> Result<()> {
    assert_eq!(item_path("reactions", "r1")?, "/reactions/r1");
    assert_eq!(item_path("tools", "bunsen burner")?, "/tools/bunsen%20burner");
    assert_eq!(item_path("experiments", "a/b?c#d")?, "/experiments/a%2Fb%3Fc%23d");
    Ok(())
}

#[test]
fn query_values_use_form_encoding() {
    assert_eq!(encode("Acid Base"), "Acid+Base");
    assert_eq!(encode("a&b=c"), "a%26b%3Dc");
}
