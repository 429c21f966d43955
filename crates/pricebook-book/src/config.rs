//! Book configuration
//!
//! Provides a fluent builder for configuring an [`OrderBook`](crate::OrderBook)
//! with sensible defaults and validation.
//!
//! # Example
//!
//! ```
//! use pricebook_book::BookConfig;
//!
//! let config = BookConfig::builder()
//!     .with_price_precision(4)
//!     .with_notices(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.price_precision(), 4);
//! ```

use pricebook_types::{DEFAULT_PRICE_PRECISION, MAX_PRICE_PRECISION};

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Price scale larger than the book supports
    #[error("price precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooLarge { precision: u32, max: u32 },
}

/// Validated book configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    price_precision: u32,
    notices: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            price_precision: DEFAULT_PRICE_PRECISION,
            notices: true,
        }
    }
}

impl BookConfig {
    /// Start building a configuration
    pub fn builder() -> BookConfigBuilder {
        BookConfigBuilder::default()
    }

    /// Decimal places kept on prices
    pub fn price_precision(&self) -> u32 {
        self.price_precision
    }

    /// Whether lookups emit informational notices
    pub fn notices(&self) -> bool {
        self.notices
    }
}

/// Builder for [`BookConfig`]
#[derive(Debug, Clone)]
pub struct BookConfigBuilder {
    /// Decimal places kept on prices
    pub price_precision: u32,

    /// Emit "info"/"does not exist" notices on lookup
    pub notices: bool,
}

impl Default for BookConfigBuilder {
    fn default() -> Self {
        Self {
            price_precision: DEFAULT_PRICE_PRECISION,
            notices: true,
        }
    }
}

impl BookConfigBuilder {
    /// Set the number of decimal places prices are rounded to
    pub fn with_price_precision(mut self, precision: u32) -> Self {
        self.price_precision = precision;
        self
    }

    /// Enable or disable lookup notices
    pub fn with_notices(mut self, enabled: bool) -> Self {
        self.notices = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_precision > MAX_PRICE_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                precision: self.price_precision,
                max: MAX_PRICE_PRECISION,
            });
        }
        Ok(())
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<BookConfig, ConfigError> {
        self.validate()?;
        Ok(BookConfig {
            price_precision: self.price_precision,
            notices: self.notices,
        })
    }
}
