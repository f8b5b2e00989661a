use reduce_core::errors::{ErrorInfo, ReduceError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn parse_error_surface() {
    let err = ReduceError::Parse(sample_info("P001", "unexpected token"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("id"));
}

#[test]
fn input_error_surface() {
    let err = ReduceError::Input(sample_info("I001", "variable set is not a union of orbits"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn io_error_surface() {
    let err = ReduceError::Io(sample_info("IO002", "could not open file"));
    assert_eq!(err.info().code, "IO002");
}

#[test]
fn error_info_formatting() {
    let info = ErrorInfo::new("E001", "problem").with_context("node", "1");
    let err = ReduceError::Parse(info.clone());
    assert_eq!(err.info(), &info);
}

#[test]
fn io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.graph");
    let err: ReduceError = io_err.into();
    assert!(matches!(err, ReduceError::Io(_)));
}
