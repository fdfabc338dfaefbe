//! Tests for the report session lifecycle

use std::cell::Cell;
use std::collections::HashSet;
use std::io::{self, Write};
use std::rc::Rc;

use trackport_core::{
    CoverityEncoder, PolarisEncoder, ReportConfig, ReportError, ReportSession, Violation,
};

fn make_violation(file: &str, rule: &str) -> Violation {
    Violation {
        filename: file.to_string(),
        rule_name: rule.to_string(),
        rule_group: "Design".to_string(),
        priority: 3,
        description: "desc".to_string(),
        begin_line: 1,
        ..Default::default()
    }
}

/// Writer that fails after accepting `limit` bytes
struct FailingWriter {
    written: usize,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write while its switch is on
struct SwitchedWriter {
    fail: Rc<Cell<bool>>,
    buf: Vec<u8>,
}

impl Write for SwitchedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_emit_before_begin_fails() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    let err = session.emit(Some(&make_violation("/a", "R"))).unwrap_err();
    assert!(matches!(err, ReportError::NotStarted));
    assert!(session.into_inner().is_empty());
}

#[test]
fn test_finish_before_begin_fails() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    assert!(matches!(session.finish(), Err(ReportError::NotStarted)));
}

#[test]
fn test_absent_violation_before_begin_still_fails() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    assert!(matches!(session.emit(None), Err(ReportError::NotStarted)));
}

#[test]
fn test_begin_twice_fails() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    session.begin(ReportConfig::default()).unwrap();
    assert!(matches!(
        session.begin(ReportConfig::default()),
        Err(ReportError::AlreadyStarted)
    ));
}

#[test]
fn test_finish_twice_fails_without_writing() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    session.begin(ReportConfig::default()).unwrap();
    session.finish().unwrap();

    assert!(matches!(session.finish(), Err(ReportError::AlreadyFinished)));
    assert!(matches!(
        session.emit(Some(&make_violation("/a", "R"))),
        Err(ReportError::AlreadyFinished)
    ));
    assert!(matches!(
        session.begin(ReportConfig::default()),
        Err(ReportError::AlreadyFinished)
    ));

    let out = String::from_utf8(session.into_inner()).unwrap();
    assert_eq!(out.matches("\"sources\"").count(), 1);
}

#[test]
fn test_absent_violation_is_not_rendered() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    session.begin(ReportConfig::default()).unwrap();
    assert!(!session.emit(None).unwrap());
    assert_eq!(session.emitted_count(), 0);
    assert!(session.seen_files().is_empty());

    assert!(session.emit(Some(&make_violation("/a/A.java", "R"))).unwrap());
    assert!(!session.emit(None).unwrap());
    let summary = session.finish().unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.files, 1);

    let out = String::from_utf8(session.into_inner()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["issues"].as_array().unwrap().len(), 1);
}

#[test]
fn test_n_records_have_n_minus_one_separators() {
    for n in 1..=6 {
        let mut session = ReportSession::new(PolarisEncoder::new(), Vec::new());
        session.begin(ReportConfig::default()).unwrap();
        for i in 0..n {
            session
                .emit(Some(&make_violation(&format!("/f{}.java", i), "R")))
                .unwrap();
        }
        session.finish().unwrap();

        let out = String::from_utf8(session.into_inner()).unwrap();
        assert_eq!(out.matches("<error>").count(), n);
        assert_eq!(out.matches("</error>\n<error>").count(), n - 1);
        assert!(!out.starts_with('\n'));
        assert!(!out.ends_with("\n\n"));
    }
}

#[test]
fn test_seen_files_are_distinct_and_first_seen_ordered() {
    let violations = vec![
        make_violation("/b/B.java", "R1"),
        make_violation("/a/A.java", "R2"),
        make_violation("/b/B.java", "R3"),
        make_violation("/c/C.java", "R4"),
        make_violation("/a/A.java", "R5"),
    ];

    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    session.begin(ReportConfig::default()).unwrap();
    let rendered = session.emit_all(&violations).unwrap();
    assert_eq!(rendered, 5);
    assert_eq!(session.emitted_count(), 5);

    assert_eq!(session.seen_files(), ["/b/B.java", "/a/A.java", "/c/C.java"]);

    let expected: HashSet<&str> = violations.iter().map(|v| v.filename.as_str()).collect();
    let seen: HashSet<&str> = session.seen_files().iter().map(String::as_str).collect();
    assert_eq!(seen, expected);

    let summary = session.finish().unwrap();
    assert_eq!(summary.files, 3);
}

#[test]
fn test_seen_files_record_raw_filename() {
    let mut session = ReportSession::new(CoverityEncoder::new(), Vec::new());
    session
        .begin(ReportConfig::default().with_strip_path_prefix("/repo/"))
        .unwrap();
    session
        .emit(Some(&make_violation("/repo/src/A.java", "R")))
        .unwrap();
    assert_eq!(session.seen_files(), ["/repo/src/A.java"]);
    assert_eq!(session.config().strip_path_prefix, "/repo/");
}

#[test]
fn test_io_failure_propagates() {
    let writer = FailingWriter {
        written: 0,
        limit: 120,
    };
    let mut session = ReportSession::new(CoverityEncoder::new(), writer);
    session.begin(ReportConfig::default()).unwrap();

    let err = session
        .emit(Some(&make_violation("/a/A.java", "R")))
        .unwrap_err();
    match err {
        ReportError::Io(e) => assert_eq!(e.to_string(), "disk full"),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_io_failure_in_header_propagates() {
    let writer = FailingWriter {
        written: 0,
        limit: 0,
    };
    let mut session = ReportSession::new(CoverityEncoder::new(), writer);
    assert!(matches!(
        session.begin(ReportConfig::default()),
        Err(ReportError::Io(_))
    ));
}

#[test]
fn test_failed_footer_is_not_retried() {
    let fail = Rc::new(Cell::new(false));
    let writer = SwitchedWriter {
        fail: Rc::clone(&fail),
        buf: Vec::new(),
    };
    let mut session = ReportSession::new(CoverityEncoder::new(), writer);
    session.begin(ReportConfig::default()).unwrap();
    session.emit(Some(&make_violation("/a/A.java", "R"))).unwrap();

    fail.set(true);
    assert!(matches!(session.finish(), Err(ReportError::Io(_))));

    fail.set(false);
    assert!(matches!(session.finish(), Err(ReportError::AlreadyFinished)));
    assert!(matches!(
        session.emit(Some(&make_violation("/a/A.java", "R"))),
        Err(ReportError::AlreadyFinished)
    ));

    let out = String::from_utf8(session.into_inner().buf).unwrap();
    assert!(!out.contains("\"sources\""));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = ReportSession::new(CoverityEncoder::new(), Vec::new());
    let mut second = ReportSession::new(CoverityEncoder::new(), Vec::new());
    first.begin(ReportConfig::default()).unwrap();
    second.begin(ReportConfig::default()).unwrap();

    first.emit(Some(&make_violation("/a/A.java", "R"))).unwrap();
    second.emit(Some(&make_violation("/b/B.java", "R"))).unwrap();
    first.emit(Some(&make_violation("/a/A.java", "R"))).unwrap();

    assert_eq!(first.emitted_count(), 2);
    assert_eq!(second.emitted_count(), 1);
    assert_eq!(first.seen_files(), ["/a/A.java"]);
    assert_eq!(second.seen_files(), ["/b/B.java"]);
}

#[test]
fn test_session_over_borrowed_writer() {
    let mut buf = Vec::new();
    {
        let mut session = ReportSession::new(CoverityEncoder::new(), &mut buf);
        session.begin(ReportConfig::default()).unwrap();
        session.emit(Some(&make_violation("/a/A.java", "R"))).unwrap();
        session.finish().unwrap();
    }
    let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(doc["sources"][0]["file"], "/a/A.java");
}
