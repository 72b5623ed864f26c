//! Unified error codes for the candy store admin
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 7xxx: Content errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive
/// serialization into logs, cached sessions and CLI output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Password and confirmation differ
    PasswordMismatch = 1006,
    /// Registration was rejected by the identity provider
    SignUpFailed = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied (row-level security)
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Unknown order status
    OrderInvalidStatus = 4003,
    /// Order row created but its items were not
    OrderItemsFailed = 4004,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product has invalid inventory
    ProductInvalidInventory = 6003,
    /// Product name is missing
    ProductNameRequired = 6004,
    /// Product category is missing
    ProductCategoryRequired = 6005,

    // ==================== 7xxx: Content ====================
    /// Generated content not found
    ContentNotFound = 7001,
    /// Prompt is empty
    ContentPromptEmpty = 7002,
    /// Content must be rated useful before it becomes a template
    ContentNotRatedUseful = 7003,
    /// Nothing has been generated yet
    ContentNotGenerated = 7004,
    /// Template not found
    TemplateNotFound = 7101,
    /// Event not found
    EventNotFound = 7201,
    /// Campaign step is incomplete
    CampaignStepIncomplete = 7301,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Remote store error
    StoreError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Timeout error
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Clipboard could not be written
    ClipboardUnavailable = 9101,
    /// Response superseded by a newer request
    RequestSuperseded = 9102,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Please fill in all fields",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::PasswordMismatch => "Passwords do not match",
            ErrorCode::SignUpFailed => "Registration failed",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderInvalidStatus => "Invalid order status",
            ErrorCode::OrderItemsFailed => "Order items could not be saved",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Please enter a valid price",
            ErrorCode::ProductInvalidInventory => "Please enter a valid inventory amount",
            ErrorCode::ProductNameRequired => "Product name is required",
            ErrorCode::ProductCategoryRequired => "Category is required",

            // Content
            ErrorCode::ContentNotFound => "Content not found",
            ErrorCode::ContentPromptEmpty => "Prompt is empty",
            ErrorCode::ContentNotRatedUseful => "Only useful content can be saved as a template",
            ErrorCode::ContentNotGenerated => "No content has been generated",
            ErrorCode::TemplateNotFound => "Template not found",
            ErrorCode::EventNotFound => "Event not found",
            ErrorCode::CampaignStepIncomplete => "Campaign step is incomplete",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StoreError => "Remote store error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ClipboardUnavailable => "Clipboard is unavailable",
            ErrorCode::RequestSuperseded => "Request was superseded by a newer one",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::PasswordMismatch),
            1007 => Ok(ErrorCode::SignUpFailed),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::OrderInvalidStatus),
            4004 => Ok(ErrorCode::OrderItemsFailed),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductInvalidInventory),
            6004 => Ok(ErrorCode::ProductNameRequired),
            6005 => Ok(ErrorCode::ProductCategoryRequired),

            // Content
            7001 => Ok(ErrorCode::ContentNotFound),
            7002 => Ok(ErrorCode::ContentPromptEmpty),
            7003 => Ok(ErrorCode::ContentNotRatedUseful),
            7004 => Ok(ErrorCode::ContentNotGenerated),
            7101 => Ok(ErrorCode::TemplateNotFound),
            7201 => Ok(ErrorCode::EventNotFound),
            7301 => Ok(ErrorCode::CampaignStepIncomplete),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::ClipboardUnavailable),
            9102 => Ok(ErrorCode::RequestSuperseded),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::ProductInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::ContentNotFound.code(), 7001);
        assert_eq!(ErrorCode::StoreError.code(), 9002);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(1006), Ok(ErrorCode::PasswordMismatch));
        assert_eq!(ErrorCode::try_from(7301), Ok(ErrorCode::CampaignStepIncomplete));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
        let back: ErrorCode = serde_json::from_str("6001").unwrap();
        assert_eq!(back, ErrorCode::ProductNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Unknown.to_string(), "E0001");
        assert_eq!(ErrorCode::ProductInvalidPrice.to_string(), "E6002");
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ErrorCode::RequiredField.message(), "Please fill in all fields");
        assert_eq!(ErrorCode::InvalidCredentials.message(), "Invalid email or password");
        assert_eq!(ErrorCode::ProductInvalidPrice.message(), "Please enter a valid price");
    }
}
