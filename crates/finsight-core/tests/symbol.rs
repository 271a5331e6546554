#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use finsight_core::error::FinsightError;
use finsight_core::symbol::company_symbol;

#[test]
fn third_piece_is_returned() {
    assert_eq!(company_symbol("screener.in/company/RELIANCE/").unwrap(), "RELIANCE");
    assert_eq!(company_symbol("a/b/c/d/e").unwrap(), "c");
    assert_eq!(company_symbol("https://www.screener.in/company/TCS").unwrap(), "www.screener.in");
}

#[test]
fn empty_pieces_count() {
    assert_eq!(company_symbol("a//").unwrap(), "");
    assert_eq!(company_symbol("//").unwrap(), "");
}

#[test]
fn too_few_pieces() {
    for url in ["short", "a/b", "/"] {
        match company_symbol(url) {
            Err(FinsightError::MissingSegment { index, found }) => {
                assert_eq!(index, 2);
                assert_eq!(found, url.split('/').count());
            }
            other => panic!("url={url}: unexpected {other:?}"),
        }
    }
}
