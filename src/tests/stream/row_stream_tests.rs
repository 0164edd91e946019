use crate::config::Dialect;
use crate::error::{CoercionPolicy, CsvError};
use crate::stream::{RowStream, StreamState};
use crate::TupleCsvBuilder;

type Row = (i32, String, f32, char);

fn collect<T: crate::Record>(input: &str) -> Vec<Result<T, CsvError>> {
    TupleCsvBuilder::new()
        .from_reader::<T, _>(input.as_bytes())
        .expect("stream opens")
        .collect()
}

#[test]
fn reads_typed_records_in_order() {
    let input = "1,abc,2.5,x\n2,\"d,e\",-1,y\n";
    let rows: Vec<Row> = collect::<Row>(input)
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("rows parse");

    assert_eq!(
        rows,
        vec![
            (1, "abc".to_string(), 2.5, 'x'),
            (2, "d,e".to_string(), -1.0, 'y'),
        ]
    );
}

#[test]
fn last_row_without_delimiter_is_read() {
    let with: Vec<(i32,)> = collect::<(i32,)>("1\n2\n").into_iter().map(Result::unwrap).collect();
    let without: Vec<(i32,)> = collect::<(i32,)>("1\n2").into_iter().map(Result::unwrap).collect();
    assert_eq!(with, vec![(1,), (2,)]);
    assert_eq!(without, with);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(collect::<Row>("").is_empty());
}

#[test]
fn blank_row_is_one_empty_field() {
    let rows: Vec<(Option<i32>,)> = collect::<(Option<i32>,)>("1\n\n2\n")
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(rows, vec![(Some(1),), (None,), (Some(2),)]);
}

#[test]
fn non_numeric_field_defaults_to_zero() {
    let rows = collect::<(i32, String)>("abc,ok\n7,fine\n");
    let rows: Vec<_> = rows.into_iter().map(Result::unwrap).collect();
    assert_eq!(rows, vec![(0, "ok".to_string()), (7, "fine".to_string())]);
}

#[test]
fn extra_fields_are_ignored() {
    let rows = collect::<(i32, i32)>("1,2,3,4\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(*rows[0].as_ref().unwrap(), (1, 2));
}

#[test]
fn carriage_return_is_kept_with_newline_rows() {
    let rows = collect::<(String, String)>("a,b\r\n");
    assert_eq!(
        *rows[0].as_ref().unwrap(),
        ("a".to_string(), "b\r".to_string())
    );
}

#[test]
fn custom_dialect() {
    let input = "1|'a|b'|'it''s';2|plain|x";
    let rows: Vec<(u8, String, String)> = TupleCsvBuilder::new()
        .with_row_delimiter(b';')
        .with_column_delimiter('|')
        .with_escape('\'')
        .from_reader(input.as_bytes())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        rows,
        vec![
            (1, "a|b".to_string(), "it's".to_string()),
            (2, "plain".to_string(), "x".to_string()),
        ]
    );
}

#[test]
fn row_delimiter_inside_escape_still_ends_the_row() {
    // Rows are cut before splitting, so a quoted newline does not join rows.
    let rows = collect::<(String,)>("\"a\nb\"\n");
    let rows: Vec<_> = rows.into_iter().map(Result::unwrap).collect();
    assert_eq!(rows, vec![("a".to_string(),), ("b".to_string(),)]);
}

#[test]
fn state_moves_from_not_started_to_exhausted() {
    let mut stream: RowStream<_, (i32,)> =
        RowStream::from_reader("1\n".as_bytes(), Dialect::default()).unwrap();
    assert_eq!(stream.state(), StreamState::NotStarted);

    assert_eq!(stream.next().unwrap().unwrap(), (1,));
    assert_eq!(stream.state(), StreamState::Active);
    assert!(!stream.cursor().exhausted);

    assert!(stream.next().is_none());
    assert_eq!(stream.state(), StreamState::Exhausted);
    assert!(stream.cursor().exhausted);
}

#[test]
fn exhaustion_is_idempotent() {
    let mut stream = TupleCsvBuilder::new()
        .from_reader::<(i32,), _>("1\n2\n".as_bytes())
        .unwrap();
    assert_eq!(stream.by_ref().count(), 2);
    for _ in 0..5 {
        assert!(stream.next().is_none());
    }
    assert_eq!(stream.state(), StreamState::Exhausted);
}

#[test]
fn cursor_tracks_rows_and_columns() {
    let mut stream = TupleCsvBuilder::new()
        .from_reader::<(i32,), _>("1,a,b\n2\n".as_bytes())
        .unwrap();

    stream.next().unwrap().unwrap();
    assert_eq!(stream.cursor().row, 1);
    assert_eq!(stream.cursor().columns, 3);
    assert_eq!(stream.raw_fields(), ["1", "a", "b"]);

    stream.next().unwrap().unwrap();
    assert_eq!(stream.cursor().row, 2);
    assert_eq!(stream.cursor().columns, 1);
    assert_eq!(stream.line(), 2);
}

#[test]
fn strict_policy_comes_from_dialect() {
    let dialect = Dialect {
        coercion: CoercionPolicy::Strict,
        ..Dialect::default()
    };
    let mut stream: RowStream<_, (i32,)> =
        RowStream::from_reader("x\n".as_bytes(), dialect).unwrap();
    assert!(matches!(
        stream.next(),
        Some(Err(CsvError::FieldTypeMismatch { row: 1, column: 0, .. }))
    ));
}

#[test]
fn invalid_dialect_is_rejected_at_construction() {
    let dialect = Dialect {
        escape: ',',
        ..Dialect::default()
    };
    let err = RowStream::<_, (i32,)>::from_reader("1\n".as_bytes(), dialect).unwrap_err();
    assert!(matches!(err, CsvError::Config(_)));
}
