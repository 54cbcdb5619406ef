use bulkmail_core::parse_recipients;

#[test]
fn empty_and_blank_input_yield_no_recipients() {
    assert_eq!(parse_recipients(""), Vec::<String>::new());
    assert_eq!(parse_recipients("  "), Vec::<String>::new());
}

#[test]
fn splits_on_commas_and_trims_whitespace() {
    assert_eq!(
        parse_recipients("a@x.com, b@y.com"),
        vec!["a@x.com".to_string(), "b@y.com".to_string()]
    );
    assert_eq!(
        parse_recipients("  a@x.com ,b@y.com  "),
        vec!["a@x.com".to_string(), "b@y.com".to_string()]
    );
}

#[test]
fn empty_segments_are_dropped() {
    assert_eq!(
        parse_recipients("a@x.com,,  ,b@y.com"),
        vec!["a@x.com".to_string(), "b@y.com".to_string()]
    );
}

#[test]
fn duplicates_are_kept_in_input_order() {
    assert_eq!(
        parse_recipients("b@y.com, a@x.com, b@y.com"),
        vec![
            "b@y.com".to_string(),
            "a@x.com".to_string(),
            "b@y.com".to_string()
        ]
    );
}

#[test]
fn reparse_of_rejoined_output_is_stable() {
    let once = parse_recipients(" a@x.com ,, b@y.com ,c@z.com,,");
    let again = parse_recipients(&once.join(", "));
    assert_eq!(once, again);
}

#[test]
fn no_address_format_validation_is_applied() {
    // Format legality is the server's concern; any non-empty segment passes.
    assert_eq!(
        parse_recipients("not an address, @, also not"),
        vec!["not an address".to_string(), "@".to_string(), "also not".to_string()]
    );
}
