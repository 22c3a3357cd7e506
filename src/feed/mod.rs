//! Feed generation and persistence.
//!
//! One RSS 2.0 document per package, describing its latest known version
//! with a constructed direct-download link.

mod rss;

pub use self::rss::PackageFeed;
