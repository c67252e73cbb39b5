use super::parse;
use crate::cli::{parse_key_value, CliCommand};
use gravlink_core::HashAlgorithm;

#[test]
fn cli_parse_hash() {
    match parse(&["gravlink", "hash", "Test@Example.com"]) {
        CliCommand::Hash { email, algorithm } => {
            assert_eq!(email, "Test@Example.com");
            assert!(algorithm.is_none());
        }
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_hash_md5() {
    match parse(&["gravlink", "hash", "x@y.z", "--algorithm", "md5"]) {
        CliCommand::Hash { algorithm, .. } => assert_eq!(algorithm, Some(HashAlgorithm::Md5)),
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["gravlink", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn key_value_allows_empty_value() {
    assert_eq!(
        parse_key_value("d=").unwrap(),
        ("d".to_string(), String::new())
    );
    assert_eq!(
        parse_key_value("d=http://x/y?a=b").unwrap(),
        ("d".to_string(), "http://x/y?a=b".to_string())
    );
}
