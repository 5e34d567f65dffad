use std::io;

use stencil::error::{Error, FileError, FileErrorCause};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFound { template_name: "webapp".to_string() };
    assert_eq!(err.to_string(), "Template 'webapp' was not found.");

    let err = Error::TargetAlreadyExists { target_dir: "/tmp/out".to_string() };
    assert_eq!(err.to_string(), "Target directory '/tmp/out' already exists.");

    let err = Error::RepositoryUnavailable { templates_root: "/tmp/tpl".to_string() };
    assert_eq!(
        err.to_string(),
        "Templates root '/tmp/tpl' does not exist or is not readable."
    );

    let err = Error::ConfigError("invalid rules".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid rules.");
}

#[test]
fn test_file_error_display() {
    let err = FileError::new("missing.txt", FileErrorCause::SubstitutionTargetMissing);
    assert_eq!(err.to_string(), "'missing.txt': substitution target was not created");

    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = FileError::new("src/app.ts", FileErrorCause::CopyFailed(io_err));
    assert_eq!(err.to_string(), "'src/app.ts': copy failed: permission denied");

    let io_err = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
    let err = FileError::new("blob.bin", FileErrorCause::SubstitutionWriteFailed(io_err));
    assert_eq!(
        err.to_string(),
        "'blob.bin': substitution write failed: stream did not contain valid UTF-8"
    );
}
