//! Malformed, truncated, and empty input.

use flate2::Compression;
use flate2::write::{GzEncoder, ZlibEncoder};
use oxigz::{OxiGzError, decompress};
use std::io::Write;

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn assert_engine_error(result: oxigz::Result<Vec<u8>>) {
    match result {
        Err(OxiGzError::Engine { message }) => assert!(!message.is_empty()),
        other => panic!("expected engine error, got {:?}", other),
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(decompress(b"").unwrap_err(), OxiGzError::unexpected_eof());
}

#[test]
fn test_unknown_gzip_method() {
    let mut compressed = gzip(b"hello world");
    compressed[2] = 0x07;
    assert_engine_error(decompress(&compressed));
}

#[test]
fn test_reserved_gzip_flags() {
    let mut compressed = gzip(b"hello world");
    compressed[3] = 0xE0;
    assert_engine_error(decompress(&compressed));
}

#[test]
fn test_gzip_crc_mismatch() {
    let mut compressed = gzip(b"hello world");
    let crc_offset = compressed.len() - 8;
    compressed[crc_offset] ^= 0xFF;
    assert_engine_error(decompress(&compressed));
}

#[test]
fn test_gzip_length_mismatch() {
    let mut compressed = gzip(b"hello world");
    let isize_offset = compressed.len() - 4;
    compressed[isize_offset] ^= 0x01;
    assert_engine_error(decompress(&compressed));
}

#[test]
fn test_zlib_adler_mismatch() {
    let mut compressed = zlib(b"hello world, hello zlib");
    let last = compressed.len() - 1;
    compressed[last] ^= 0xFF;
    assert_engine_error(decompress(&compressed));
}

#[test]
fn test_truncated_stream_is_not_silent() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 251) as u8).collect();
    let compressed = gzip(&data);

    for cut in [compressed.len() - 1, compressed.len() - 8, compressed.len() / 2, 12] {
        let result = decompress(&compressed[..cut]);
        assert!(
            matches!(result, Err(OxiGzError::Engine { .. })),
            "cut at {} gave {:?}",
            cut,
            result.map(|v| v.len())
        );
    }
}

#[test]
fn test_not_compressed_at_all() {
    assert_engine_error(decompress(b"not compressed"));
}
