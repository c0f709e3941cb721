//! Messages for the one-shot commands (`set-api-url`, `clear-config`).

const INFO_TAG: &str = "\x1b[1;33m[INFO]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";

/// `tag title`, followed by a tab and `details` when there are any.
fn tagged(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged(INFO_TAG, title, details));
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged(SUCCESS_TAG, title, details));
}

/// Errors go to stderr, with details on their own line.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", ERROR_TAG, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", ERROR_TAG, details);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_without_details() {
        assert_eq!(tagged("[X]", "Done", ""), "[X] Done");
    }

    #[test]
    fn test_tagged_with_details() {
        assert_eq!(tagged("[X]", "Saved", "/tmp/a"), "[X] Saved\t /tmp/a");
    }
}
