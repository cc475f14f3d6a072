//! Declared-symbol bookkeeping for one generation run.

use crate::error::CodegenError;
use std::collections::HashMap;

/// Tracks every identifier the generated module declares.
///
/// Declaring the same identifier twice fails, whether the two origins are
/// distinct raw ids that synthesize alike (`us-east-1` and `us.east.1`) or
/// the same id declared twice.
#[derive(Debug, Default)]
pub struct SymbolTable {
    declared: HashMap<String, String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol`, remembering `origin` for error reporting.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidSymbol` if the symbol is empty or starts
    /// with a digit, and `CodegenError::SymbolCollision` if it was already
    /// declared.
    pub fn declare(&mut self, symbol: &str, origin: &str) -> Result<(), CodegenError> {
        if symbol.is_empty() || symbol.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(CodegenError::InvalidSymbol {
                symbol: symbol.to_string(),
                origin: origin.to_string(),
            });
        }

        if let Some(first) = self.declared.get(symbol) {
            return Err(CodegenError::SymbolCollision {
                symbol: symbol.to_string(),
                first: first.clone(),
                second: origin.to_string(),
            });
        }

        self.declared.insert(symbol.to_string(), origin.to_string());
        Ok(())
    }

    /// Returns the number of declared symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare() {
        let mut table = SymbolTable::new();
        table
            .declare("AwsPartitionID", "partition 'aws'")
            .expect("first declaration");
        table
            .declare("AwsCnPartitionID", "partition 'aws-cn'")
            .expect("distinct symbol");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_declare_collision() {
        let mut table = SymbolTable::new();
        table
            .declare("UsEast1ServiceID", "service 'us-east-1'")
            .expect("first declaration");
        let err = table
            .declare("UsEast1ServiceID", "service 'us.east.1'")
            .expect_err("should collide");
        match err {
            CodegenError::SymbolCollision {
                symbol,
                first,
                second,
            } => {
                assert_eq!(symbol, "UsEast1ServiceID");
                assert_eq!(first, "service 'us-east-1'");
                assert_eq!(second, "service 'us.east.1'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_declare_invalid() {
        let mut table = SymbolTable::new();
        assert!(matches!(
            table.declare("1passwordServiceID", "service '1password'"),
            Err(CodegenError::InvalidSymbol { .. })
        ));
        assert!(matches!(
            table.declare("", "nothing"),
            Err(CodegenError::InvalidSymbol { .. })
        ));
        assert!(table.is_empty());
    }
}
