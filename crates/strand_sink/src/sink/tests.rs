use super::*;
use pretty_assertions::assert_eq;
use std::io::{Read, Seek, SeekFrom};

#[test]
fn test_buffer_is_published_at_close() {
    let mut dest = b"stale".to_vec();
    let mut sink = Sink::open(SinkBinding::Buffer(&mut dest)).unwrap();
    sink.write_all(b"<a> <b> <c> .\n").unwrap();
    assert_eq!(sink.bytes_written(), 14);
    assert!(sink.is_owned());
    sink.close().unwrap();
    assert_eq!(dest, b"<a> <b> <c> .\n".to_vec());
}

#[test]
fn test_dropped_buffer_is_not_published() {
    let mut dest = b"untouched".to_vec();
    {
        let mut sink = Sink::open(SinkBinding::Buffer(&mut dest)).unwrap();
        sink.write_all(b"lost").unwrap();
    }
    assert_eq!(dest, b"untouched".to_vec());
}

#[test]
fn test_discarded_buffer_keeps_destination() {
    let mut dest = b"keep me".to_vec();
    let mut sink = Sink::open(SinkBinding::Buffer(&mut dest)).unwrap();
    sink.write_all(b"partial").unwrap();
    sink.discard().unwrap();
    assert_eq!(dest, b"keep me".to_vec());
}

#[test]
fn test_discarded_path_sink_still_flushes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.nt");
    let mut sink = Sink::open(SinkBinding::Path(path.clone())).unwrap();
    sink.write_all(b"header").unwrap();
    sink.discard().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"header".to_vec());
}

#[test]
fn test_stream_writes_through_and_stays_with_caller() {
    let mut out: Vec<u8> = Vec::new();
    let mut sink = Sink::open(SinkBinding::Stream(&mut out)).unwrap();
    assert_eq!(sink.kind(), SinkKind::Stream);
    assert!(!sink.is_owned());
    sink.write_all(b"abc").unwrap();
    sink.close().unwrap();
    out.extend_from_slice(b"def");
    assert_eq!(out, b"abcdef".to_vec());
}

#[test]
fn test_path_sink_creates_and_flushes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.nt");
    let mut sink = Sink::open(SinkBinding::Path(path.clone())).unwrap();
    assert_eq!(sink.kind(), SinkKind::Path);
    sink.write_all(b"hello").unwrap();
    sink.close().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"hello".to_vec());
}

#[test]
fn test_path_sink_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.nt");
    assert!(Sink::open(SinkBinding::Path(path)).is_err());
}

#[test]
fn test_handle_sink_leaves_file_open() {
    let mut file = tempfile::tempfile().unwrap();
    {
        let mut sink = Sink::open(SinkBinding::Handle(&file)).unwrap();
        assert!(sink.is_owned());
        sink.write_all(b"first ").unwrap();
        sink.close().unwrap();
    }
    file.write_all(b"second").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    assert_eq!(text, "first second");
}

#[test]
fn test_binding_describe() {
    let mut dest = Vec::new();
    assert_eq!(SinkBinding::Buffer(&mut dest).describe(), "<buffer>");
    let binding = SinkBinding::Path(PathBuf::from("out.nt"));
    assert_eq!(binding.describe(), "out.nt");
    assert_eq!(binding.path(), Some(std::path::Path::new("out.nt")));
    assert_eq!(binding.kind(), SinkKind::Path);
}
