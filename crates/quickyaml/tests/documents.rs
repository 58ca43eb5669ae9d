use quickyaml::{Options, Value, parse_documents};
use test_log::test;

#[test]
fn splits_on_markers() -> Result<(), Box<dyn std::error::Error>> {
    let docs = parse_documents(b"a: 1\n---\nb: 2\n...\n--- [3]\n", &Options::default())?;
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0]["a"], Value::Int(1));
    assert_eq!(docs[1]["b"], Value::Int(2));
    assert_eq!(docs[2], Value::Sequence(vec![Value::Int(3)]));
    Ok(())
}

#[test]
fn empty_documents_are_null() -> Result<(), Box<dyn std::error::Error>> {
    let docs = parse_documents(b"---\n---\n", &Options::default())?;
    assert_eq!(docs, vec![Value::Null, Value::Null]);
    Ok(())
}

#[test]
fn empty_stream_has_no_documents() -> Result<(), Box<dyn std::error::Error>> {
    assert!(parse_documents(b"", &Options::default())?.is_empty());
    assert!(parse_documents(b"# nothing\n\n", &Options::default())?.is_empty());
    Ok(())
}

#[test]
fn dashes_inside_content_are_not_markers() -> Result<(), Box<dyn std::error::Error>> {
    let docs = parse_documents(b"a: ---x\nb:\n  - ---\n", &Options::default())?;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["a"], Value::String("---x".into()));
    assert_eq!(docs[0]["b"][0], Value::String("---".into()));
    Ok(())
}

#[test]
fn stops_at_unparsed_content() -> Result<(), Box<dyn std::error::Error>> {
    let docs = parse_documents(b"a: 1\n  b: 2\n---\nc: 3\n", &Options::default())?;
    assert_eq!(docs.len(), 1);
    Ok(())
}

#[test]
fn error_in_later_document_fails_the_stream() {
    let res = parse_documents(b"ok: 1\n---\nbad: [1\n", &Options::default());
    assert!(res.is_err());
}
