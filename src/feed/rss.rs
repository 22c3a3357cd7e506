//! RSS 2.0 feed generation.
//!
//! Renders a single-item feed describing the latest known version of one
//! package, then persists it to `{feeds_dir}/{packageId}.xml`.

use crate::{config, log, registry::LatestVersion, utils::date::DateTimeUtc};
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, ItemBuilder};
use std::{fs, io, path::Path};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const APK_MIME_TYPE: &str = "application/vnd.android.package-archive";

/// A rendered-to-be feed for one package's latest version.
///
/// Rendering is a pure function of (package, version, timestamp); the same
/// inputs always produce byte-identical output.
#[derive(Debug)]
pub struct PackageFeed {
    package: String,
    version: LatestVersion,
    timestamp: DateTimeUtc,
}

impl PackageFeed {
    pub fn build(package: &str, version: LatestVersion, timestamp: DateTimeUtc) -> Self {
        Self {
            package: package.to_string(),
            version,
            timestamp,
        }
    }

    /// Constructed direct-download link for the package's APK.
    ///
    /// Inferred from the observed naming convention on the registry's static
    /// artifact host, not confirmed by the API. Best-effort: if the artifact
    /// path scheme changes, generated links silently break.
    pub fn download_url(&self) -> String {
        download_url(&self.package, self.version.version_code)
    }

    /// Render the feed document. No I/O.
    pub fn to_xml(&self) -> String {
        format!("{XML_DECLARATION}{}", self.channel())
    }

    fn channel(&self) -> Channel {
        ChannelBuilder::default()
            .title(format!("F-Droid Updates: {}", self.package))
            .link(page_url(&self.package))
            .description(format!("RSS feed for {} updates on F-Droid", self.package))
            .last_build_date(self.timestamp.to_rfc2822())
            .items(vec![self.item()])
            .build()
    }

    fn item(&self) -> rss::Item {
        let page = page_url(&self.package);
        let download = self.download_url();

        let enclosure = EnclosureBuilder::default()
            .url(download.clone())
            .length("1".to_string())
            .mime_type(APK_MIME_TYPE.to_string())
            .build();

        ItemBuilder::default()
            .title(format!(
                "Version {} (Code: {})",
                self.version.version_name, self.version.version_code
            ))
            .link(Some(page.clone()))
            .enclosure(enclosure)
            .guid(
                GuidBuilder::default()
                    .permalink(true)
                    .value(format!("{page}#{}", self.version.version_name))
                    .build(),
            )
            .pub_date(self.timestamp.to_rfc2822())
            .description(format!(
                "New version {} released for {}. Direct download: {download}",
                self.version.version_name, self.package
            ))
            .build()
    }

    /// Persist the feed to `{feeds_dir}/{packageId}.xml`.
    ///
    /// The output directory is created if absent; any existing file is
    /// overwritten wholesale. Prior content is never read back.
    pub fn write(&self, feeds_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(feeds_dir)?;

        let path = feeds_dir.join(format!("{}.xml", self.package));
        fs::write(&path, self.to_xml())?;

        log!("feed"; "updated {} (direct download: {})", self.package, self.download_url());
        Ok(())
    }
}

/// Registry page for a package.
fn page_url(package: &str) -> String {
    format!("{}/{package}/", config::PACKAGE_PAGE_BASE)
}

/// Constructed APK download link on the static artifact host.
fn download_url(package: &str, version_code: i64) -> String {
    format!("{}/{package}_{version_code}.apk", config::REPO_BASE)
}
