//! End-to-end init sequence tests
//!
//! Drives the full startup path (cache font, build palette, resolve sheet,
//! apply to a parameter table) against a temp directory and a fake fetcher.

use std::cell::RefCell;
use std::path::PathBuf;

use plotstyle::{
    AssetFetcher, ColorPalette, FetchError, FontCache, ParamTable, StyleSheet,
};

/// Fetcher that serves canned bytes and counts calls.
struct FakeFetcher {
    body: Result<Vec<u8>, u16>,
    calls: RefCell<u32>,
}

impl FakeFetcher {
    fn ok(body: &[u8]) -> Self {
        Self {
            body: Ok(body.to_vec()),
            calls: RefCell::new(0),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            body: Err(status),
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> u32 {
        *self.calls.borrow()
    }
}

impl AssetFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        *self.calls.borrow_mut() += 1;
        match &self.body {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
        }
    }
}

const FONT_URL: &str = "https://example.com/Roboto-Bold.ttf";

#[test]
fn full_init_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FontCache::new(dir.path().join("fonts"));
    let fetcher = FakeFetcher::ok(b"\x00\x01\x00\x00not-really-a-font");

    let font_path = cache
        .ensure_cached(FONT_URL, "Roboto-Bold", &fetcher)
        .unwrap();
    assert!(font_path.is_file());
    assert!(std::fs::metadata(&font_path).unwrap().len() > 0);

    let palette = ColorPalette::default();
    let sheet = StyleSheet::from_palette(&palette, "Roboto", font_path.clone()).unwrap();

    let mut table = ParamTable::new();
    sheet.apply(&mut table);

    assert_eq!(table.get("axes.labelcolor"), Some("#333333"));
    assert_eq!(table.get("axes.titlecolor"), Some("#3b3b3b"));
    assert_eq!(table.get("xtick.labelcolor"), Some("gray"));
    assert_eq!(table.get("font.family"), Some("Roboto"));
    assert_eq!(table.fonts(), &[font_path]);
    assert_eq!(table.default_palette(), &["gray".to_string()]);
}

#[test]
fn second_run_is_a_cache_hit() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FontCache::new(dir.path());
    let fetcher = FakeFetcher::ok(b"ttf bytes");

    let first = cache
        .ensure_cached(FONT_URL, "Roboto-Bold", &fetcher)
        .unwrap();
    let second = cache
        .ensure_cached(FONT_URL, "Roboto-Bold", &fetcher)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn failed_fetch_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FontCache::new(dir.path());
    let fetcher = FakeFetcher::failing(503);

    let err = cache
        .ensure_cached(FONT_URL, "Roboto-Bold", &fetcher)
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 503, .. }));
    assert!(!cache.is_cached("Roboto-Bold"));
    // The failure is surfaced before any file lands in the cache
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn overridden_palette_flows_into_the_sheet() {
    let mut palette = ColorPalette::default();
    palette.add("soft black", "#222222");

    let sheet = StyleSheet::from_palette(&palette, "Roboto", PathBuf::from("f.ttf")).unwrap();

    let mut table = ParamTable::new();
    sheet.apply(&mut table);
    assert_eq!(table.get("axes.labelcolor"), Some("#222222"));
    assert_eq!(table.get("ytick.labelcolor"), Some("#222222"));
}
