use serde::{Deserialize, Serialize};

/// URL prefix under which the backend serves uploaded documents.
pub const DOWNLOAD_PREFIX: &str = "/pdfs";

/// A study resource pointing to a downloadable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    /// Storage path of the uploaded file, or an external URL.
    pub link: String,
    pub category: String,
}

impl Resource {
    /// Address the browser should use to download the document.
    ///
    /// External `http(s)` links are returned untouched; storage paths are
    /// mapped onto the download route using their percent-encoded file name.
    pub fn download_href(&self) -> String {
        if self.link.starts_with("http://") || self.link.starts_with("https://") {
            return self.link.clone();
        }
        let file_name = self
            .link
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.link.as_str());
        format!("{}/{}", DOWNLOAD_PREFIX, urlencoding::encode(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(link: &str) -> Resource {
        Resource {
            id: 1,
            title: "Polity Notes".to_string(),
            link: link.to_string(),
            category: "Group 1".to_string(),
        }
    }

    #[test]
    fn storage_path_maps_to_download_route() {
        assert_eq!(resource("pdfs/polity.pdf").download_href(), "/pdfs/polity.pdf");
        assert_eq!(
            resource("/var/lib/prep/pdfs/polity.pdf").download_href(),
            "/pdfs/polity.pdf"
        );
        assert_eq!(resource("pdfs\\polity.pdf").download_href(), "/pdfs/polity.pdf");
    }

    #[test]
    fn reserved_characters_in_file_names_are_encoded() {
        assert_eq!(resource("pdfs/unit#1.pdf").download_href(), "/pdfs/unit%231.pdf");
        assert_eq!(
            resource("pdfs/Polity Notes?.pdf").download_href(),
            "/pdfs/Polity%20Notes%3F.pdf"
        );
        assert_eq!(resource("pdfs/100%.pdf").download_href(), "/pdfs/100%25.pdf");
    }

    #[test]
    fn external_links_are_kept() {
        let url = "https://example.org/notes/polity.pdf";
        assert_eq!(resource(url).download_href(), url);
    }
}
