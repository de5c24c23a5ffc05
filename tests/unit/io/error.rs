//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use wavetile::SynthesisError;
    use wavetile::io::error::invalid_parameter;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SynthesisError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests unknown exemplar messages list the alternatives
    // Verified by omitting the available names
    #[test]
    fn test_unknown_exemplar_message() {
        let error = SynthesisError::UnknownExemplar {
            selector: "tree".to_string(),
            available: vec!["flowers", "maze"],
        };

        let message = error.to_string();
        assert!(message.contains("'tree'"));
        assert!(message.contains("flowers, maze"));
        assert!(error.source().is_none());
    }

    // Tests size errors report the dimensions
    // Verified by swapping width and height in the message
    #[test]
    fn test_size_messages() {
        let too_small = SynthesisError::ExemplarTooSmall {
            width: 2,
            height: 5,
            pattern_size: 3,
        };
        assert!(too_small.to_string().contains("2x5"));
        assert!(too_small.to_string().contains("3x3"));

        let grid = SynthesisError::InvalidGridSize {
            width: 0,
            height: 7,
        };
        assert!(grid.to_string().contains("0x7"));
    }

    // Tests the invalid parameter helper fills every field
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("width", &0, &"must be positive");
        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests io errors convert through the question-mark operator
    // Verified by removing the From implementation
    #[test]
    fn test_from_io_error() {
        fn fail() -> wavetile::Result<()> {
            Err::<(), _>(std::io::Error::other("boom"))?;
            Ok(())
        }
        assert!(matches!(fail(), Err(SynthesisError::FileSystem { .. })));
    }
}
