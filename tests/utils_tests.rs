use async_graphql::ID;
use bigdecimal::BigDecimal;
use fooz_server_lib::data::repos::traits::repository::PageQuery;
use fooz_server_lib::utils::mappers::{MappingError, decimal_from_f64, parse_id, parse_ids};
use fooz_server_lib::utils::order_number::{format_order_number, generate_order_number};
use fooz_server_lib::utils::slug::{resolve_slug, slugify};
use std::str::FromStr;

#[test]
fn test_slugify_lowercases_and_dashes_spaces() {
    assert_eq!(slugify("Gaming Desk Pro"), "gaming-desk-pro");
    assert_eq!(slugify("L-Shaped Desk_2"), "l-shaped-desk_2");
}

#[test]
fn test_slugify_drops_other_characters() {
    assert_eq!(slugify("Desk (XL) & Chair!"), "desk-xl--chair");
    assert_eq!(slugify("مكتب"), "");
}

#[test]
fn test_resolve_slug_prefers_explicit_value() {
    assert_eq!(resolve_slug("  custom-slug ", "Whatever"), "custom-slug");
    assert_eq!(resolve_slug("", "Office Chair"), "office-chair");
}

#[test]
fn test_resolve_slug_falls_back_to_random_id() {
    let slug = resolve_slug("", "كرسي");

    assert!(slug.starts_with("id-"), "unexpected slug {}", slug);
    assert_eq!(slug.len(), 11);
    assert!(slug[3..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_order_number_format() {
    assert_eq!(format_order_number(1_736_500_123_456, 42), "ORD-123456-42");
    assert_eq!(format_order_number(1_000_000_000_001, 0), "ORD-000001-0");
}

#[test]
fn test_generated_order_number_shape() {
    let number = generate_order_number();
    let parts: Vec<&str> = number.split('-').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "ORD");
    assert_eq!(parts[1].len(), 6);
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));

    let suffix: u32 = parts[2].parse().expect("suffix is not a number");
    assert!(suffix < 1000);
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id(&ID::from("42")), Ok(42));
    assert_eq!(
        parse_id(&ID::from("abc")),
        Err(MappingError::InvalidId("abc".to_string()))
    );
    assert_eq!(
        parse_ids(&[ID::from("1"), ID::from("2")]),
        Ok(vec![1, 2])
    );
    assert!(parse_ids(&[ID::from("1"), ID::from("x")]).is_err());
}

#[test]
fn test_invalid_id_message() {
    let err = parse_id(&ID::from("12a")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid id: 12a");
}

#[test]
fn test_decimal_from_f64_rounds_to_cents() {
    assert_eq!(
        decimal_from_f64(19.999).unwrap(),
        BigDecimal::from_str("20.00").unwrap()
    );
    assert_eq!(
        decimal_from_f64(0.1).unwrap(),
        BigDecimal::from_str("0.10").unwrap()
    );
    assert!(decimal_from_f64(f64::NAN).is_err());
}

#[test]
fn test_search_pattern_matches_wildcards_literally() {
    let pattern = |term: &str| PageQuery::new(Some(term.to_string()), None, None).like_pattern();

    assert_eq!(pattern("desk"), Some("%desk%".to_string()));
    assert_eq!(pattern("50%"), Some("%50\\%%".to_string()));
    assert_eq!(pattern("a_b"), Some("%a\\_b%".to_string()));
    assert_eq!(pattern("c:\\x"), Some("%c:\\\\x%".to_string()));
    assert_eq!(pattern("   "), None);
}
