//! Integration tests for preflight-gate

mod test_parse;
