use msgram_core::config::{KeyOrder, WeightSumMode};
use msgram_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse weight sum mode from string
pub fn parse_weight_sum_mode(s: &str) -> std::result::Result<WeightSumMode, String> {
    s.parse::<WeightSumMode>().map_err(|e| e.to_string())
}

/// Parse key order policy from string
pub fn parse_key_order(s: &str) -> std::result::Result<KeyOrder, String> {
    s.parse::<KeyOrder>().map_err(|e| e.to_string())
}
