use crate::split::{RowSplitter, split_row};

fn split(text: &str) -> Vec<String> {
    split_row(text, ',', '"')
}

#[test]
fn quoted_delimiter_is_data() {
    assert_eq!(split(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
}

#[test]
fn plain_text_is_a_single_field() {
    for text in ["hello", "hello world", "  spaced  ", "tab\there"] {
        assert_eq!(split(text), vec![text.to_string()]);
    }
}

#[test]
fn empty_row_yields_one_empty_field() {
    assert_eq!(split(""), vec![String::new()]);
}

#[test]
fn trailing_delimiter_yields_trailing_empty_field() {
    assert_eq!(split("a,b,"), vec!["a", "b", ""]);
    assert_eq!(split(","), vec!["", ""]);
}

#[test]
fn field_count_is_unescaped_delimiters_plus_one() {
    let cases = [
        ("a,b,c", 3),
        (r#""a,b",c"#, 2),
        (r#""x,y,z""#, 1),
        (r#"1,"2,3",4,"5""#, 4),
        (",,,", 4),
    ];
    for (text, expected) in cases {
        assert_eq!(split(text).len(), expected, "row {text:?}");
    }
}

#[test]
fn doubled_escape_inside_span_is_literal() {
    assert_eq!(
        split(r#"1,"say ""hi"", then go",2"#),
        vec!["1", r#"say "hi", then go"#, "2"]
    );
}

#[test]
fn doubled_escape_outside_span_is_literal() {
    assert_eq!(split(r#"a""b,c"#), vec![r#"a"b"#, "c"]);
}

#[test]
fn lone_doubled_escape_is_a_literal_not_an_empty_span() {
    assert_eq!(split(r#"1,"",3"#), vec!["1", "\"", "3"]);
}

#[test]
fn escape_span_can_cover_part_of_a_field() {
    assert_eq!(split(r#"pre"mid,dle"post,x"#), vec!["premid,dlepost", "x"]);
}

#[test]
fn unterminated_escape_swallows_rest_of_row() {
    assert_eq!(split(r#"a,"b,c"#), vec!["a", "b,c"]);
}

#[test]
fn custom_delimiter_and_escape() {
    let splitter = RowSplitter::new(';', '\'');
    assert_eq!(
        splitter.split("1;'two;2';'it''s'"),
        vec!["1", "two;2", "it's"]
    );
    // Default escape is ordinary data under this dialect.
    assert_eq!(splitter.split(r#"a,"b";c"#), vec![r#"a,"b""#, "c"]);
}

#[test]
fn non_ascii_delimiter_and_content() {
    let splitter = RowSplitter::new('¦', '«');
    assert_eq!(splitter.split("é¦«ü¦ß«¦ñ"), vec!["é", "ü¦ß", "ñ"]);
}

#[test]
fn split_into_reuses_buffer() {
    let splitter = RowSplitter::default();
    let mut fields = vec!["stale".to_string(); 5];
    splitter.split_into("x,y", &mut fields);
    assert_eq!(fields, vec!["x", "y"]);
}

#[test]
fn agrees_with_csv_crate_on_well_formed_rows() {
    let rows = [
        "a,b,c",
        r#""quoted, comma",plain"#,
        r#""with ""inner"" quotes",2"#,
        "",
    ];
    for row in rows {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(row.as_bytes());
        let expected: Vec<String> = match rdr.records().next() {
            Some(rec) => rec.expect("csv parses").iter().map(str::to_string).collect(),
            None => vec![String::new()],
        };
        assert_eq!(split(row), expected, "row {row:?}");
    }
}
