//! # Pricing Module
//!
//! Converts token counts into an estimated USD cost.
//!
//! ## Pricing Structure
//!
//! Prices are USD per 1,000,000 tokens, one per category:
//! - Input tokens
//! - Output tokens
//! - Cache reads (0.1x input)
//! - Cache creation (1.25x input)
//!
//! The default table is Claude Opus list pricing. A `Pricing` is a plain value
//! handed to the parser, so other tiers can be priced by constructing a
//! different table.

use crate::models::TokenCounts;

pub const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pricing {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
    pub cache_read_per_mtok: f64,
    pub cache_create_per_mtok: f64,
}

impl Pricing {
    pub const OPUS: Pricing = Pricing {
        input_per_mtok: 15.00,
        output_per_mtok: 75.00,
        cache_read_per_mtok: 1.50,
        cache_create_per_mtok: 18.75,
    };

    pub fn cost(&self, tokens: &TokenCounts) -> f64 {
        (tokens.input as f64 * self.input_per_mtok
            + tokens.output as f64 * self.output_per_mtok
            + tokens.cache_read as f64 * self.cache_read_per_mtok
            + tokens.cache_create as f64 * self.cache_create_per_mtok)
            / TOKENS_PER_PRICE_UNIT
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing::OPUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let p = Pricing::default();
        assert_eq!(p.input_per_mtok, 15.0);
        assert_eq!(p.output_per_mtok, 75.0);
        assert_eq!(p.cache_read_per_mtok, 1.5);
        assert_eq!(p.cache_create_per_mtok, 18.75);
        // cache pricing follows the usual input multipliers
        assert!((p.cache_read_per_mtok - p.input_per_mtok * 0.1).abs() < 1e-12);
        assert!((p.cache_create_per_mtok - p.input_per_mtok * 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_cost_per_category() {
        let p = Pricing::default();
        let one_m = |input, output, cache_read, cache_create| TokenCounts {
            input,
            output,
            cache_read,
            cache_create,
        };
        assert!((p.cost(&one_m(1_000_000, 0, 0, 0)) - 15.0).abs() < 1e-9);
        assert!((p.cost(&one_m(0, 1_000_000, 0, 0)) - 75.0).abs() < 1e-9);
        assert!((p.cost(&one_m(0, 0, 1_000_000, 0)) - 1.5).abs() < 1e-9);
        assert!((p.cost(&one_m(0, 0, 0, 1_000_000)) - 18.75).abs() < 1e-9);
        assert!((p.cost(&one_m(1000, 200, 0, 0)) - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        assert_eq!(Pricing::default().cost(&TokenCounts::default()), 0.0);
    }

    #[test]
    fn test_cost_is_additive() {
        let p = Pricing::default();
        let a = TokenCounts {
            input: 1234,
            output: 567,
            cache_read: 89_000,
            cache_create: 4_321,
        };
        let b = TokenCounts {
            input: 98,
            output: 7_654,
            cache_read: 3,
            cache_create: 210_000,
        };
        let merged = p.cost(&(a + b));
        assert!((p.cost(&a) + p.cost(&b) - merged).abs() < 1e-9);
    }

    #[test]
    fn test_custom_table() {
        let sonnet = Pricing {
            input_per_mtok: 3.0,
            output_per_mtok: 15.0,
            cache_read_per_mtok: 0.3,
            cache_create_per_mtok: 3.75,
        };
        let t = TokenCounts {
            input: 1_000_000,
            output: 1_000_000,
            ..Default::default()
        };
        assert!((sonnet.cost(&t) - 18.0).abs() < 1e-9);
    }
}
