//! Helpers for preparing user-facing message text.

/// Compresses a message into a single line.
///
/// Leading and trailing whitespace is removed, and every run of whitespace (including line
/// breaks) is replaced by a single space. This lets messages be written as indented multi-line
/// literals, and keeps operating system errors on one line in reports.
///
/// # Example
///
/// ```
/// # use facsim::text::compress_message;
/// let message = "
///     Unable to open
///     the   file.
/// ";
/// assert_eq!(compress_message(message), "Unable to open the file.");
/// ```
pub fn compress_message(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compress_message() {
        assert_eq!(compress_message(""), "");
        assert_eq!(compress_message(" \t\n "), "");
        assert_eq!(compress_message("single"), "single");
        assert_eq!(compress_message("  a  b\n\tc "), "a b c");
        assert_eq!(
            compress_message("Permission denied\r\n(os error 13)"),
            "Permission denied (os error 13)"
        );
    }
}
