use actix_web::http::StatusCode;
use petalshop::errors::{Result, ShopError};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ShopError::validation("数量必须为正数");

        assert!(matches!(error, ShopError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("数量必须为正数"));
    }

    #[test]
    fn test_not_found_error() {
        let error = ShopError::not_found("Order not found: 7");

        assert!(matches!(error, ShopError::NotFound(_)));
        assert_eq!(error.message(), "Order not found: 7");
    }

    #[test]
    fn test_error_is_std_error() {
        let error = ShopError::internal("boom");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }
}

#[cfg(test)]
mod error_mapping_tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let cases = [
            (ShopError::validation(""), "E001"),
            (ShopError::not_found(""), "E002"),
            (ShopError::config(""), "E003"),
            (ShopError::file_operation(""), "E004"),
            (ShopError::serialization(""), "E005"),
            (ShopError::internal(""), "E006"),
        ];

        for (error, code) in cases {
            assert_eq!(error.code(), code, "{:?}", error);
        }
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ShopError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShopError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::internal("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShopError::config("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple_and_colored() {
        let error = ShopError::config("server.port must be greater than 0");

        assert_eq!(
            error.format_simple(),
            "Configuration Error: server.port must be greater than 0"
        );
        assert!(error.format_colored().contains("E003"));
        assert!(
            error
                .format_colored()
                .contains("server.port must be greater than 0")
        );
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let error: ShopError = io_error.into();

        assert!(matches!(error, ShopError::FileOperation(_)));
        assert!(error.message().contains("missing.toml"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ShopError = json_error.into();

        assert!(matches!(error, ShopError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        assert!(parse("[1, 2]").is_ok());
        assert!(matches!(parse("]"), Err(ShopError::Serialization(_))));
    }
}
