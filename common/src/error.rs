/// Renders an error followed by its causes.
pub fn format_error(error: &anyhow::Error) -> String {
    let mut chain = error.chain();
    let mut formatted = chain.next().map(ToString::to_string).unwrap_or_default();
    for cause in chain {
        formatted.push_str("\nCaused by:\n    ");
        formatted.push_str(&cause.to_string());
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_utils::ensure_dir;

    #[test]
    fn test_format_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("file");
        std::fs::File::create(&file).unwrap();
        let error: anyhow::Error = ensure_dir(file.join("sub")).unwrap_err().into();
        let formatted = format_error(&error);
        assert!(formatted.starts_with("Unable to create directory"));
        assert_eq!(formatted.matches("\nCaused by:\n    ").count(), 1);
    }

    #[test]
    fn test_format_error_without_cause() {
        let error = anyhow::Error::from(crate::layout::UnknownLayout("deep".into()));
        assert_eq!(format_error(&error), "Unknown layout deep");
    }
}
