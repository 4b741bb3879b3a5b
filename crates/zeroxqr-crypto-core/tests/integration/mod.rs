mod engine_roundtrip;
mod foreign_input;
mod tamper;
