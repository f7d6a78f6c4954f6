//! Error types for the Biblion catalog manager

use thiserror::Error;

/// Stable numeric error codes reported alongside error text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchItem = 2,
    NoSuchUser = 3,
    ItemNotAvailable = 4,
    Duplicate = 5,
    NotOnLoan = 6,
    BadValue = 7,
    BadRecord = 8,
    IoFailure = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item with ID {0} not found")]
    ItemNotFound(u32),

    #[error("User with ID {0} not found")]
    UserNotFound(u32),

    #[error("Item {item_id} is already borrowed by user {holder}")]
    AlreadyBorrowed { item_id: u32, holder: u32 },

    #[error("User {user_id} has already borrowed item {item_id}")]
    DuplicateBorrow { user_id: u32, item_id: u32 },

    #[error("Item {0} is not currently borrowed")]
    NotBorrowed(u32),

    #[error("Invalid input: {0}")]
    MalformedInput(String),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Numeric code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ItemNotFound(_) => ErrorCode::NoSuchItem,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::AlreadyBorrowed { .. } => ErrorCode::ItemNotAvailable,
            AppError::DuplicateBorrow { .. } => ErrorCode::Duplicate,
            AppError::NotBorrowed(_) => ErrorCode::NotOnLoan,
            AppError::MalformedInput(_) => ErrorCode::BadValue,
            AppError::MalformedRecord { .. } => ErrorCode::BadRecord,
            AppError::Io(_) => ErrorCode::IoFailure,
        }
    }

    /// Render this error as a user-facing display line
    pub fn display_line(&self) -> String {
        let code = self.code();
        format!("error[{:?}]: {} (code {})", code, self, code as u32)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AppError::ItemNotFound(1).code() as u32, 2);
        assert_eq!(
            AppError::AlreadyBorrowed { item_id: 1, holder: 2 }.code() as u32,
            4
        );
        assert_eq!(
            AppError::MalformedRecord { line: 3, reason: "x".into() }.code() as u32,
            8
        );
    }

    #[test]
    fn test_display_line_names_code() {
        let line = AppError::ItemNotFound(7).display_line();
        assert!(line.contains("NoSuchItem"));
        assert!(line.contains("Item with ID 7 not found"));
    }
}
