//! Node discovery against the Graphouse search endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use graphouse_types::MetricData;

use crate::config::{GraphouseConfig, DEFAULT_TIMEOUT, DEFAULT_URL};
use crate::data;
use crate::error::FinderError;
use crate::reader::GraphouseReader;

/// Storage finder speaking the Graphouse HTTP API.
///
/// Holds nothing but the backend base URL and the shared HTTP client, both
/// fixed at construction, so a finder can be cloned and used from multiple
/// threads freely.
#[derive(Debug, Clone)]
pub struct GraphouseFinder {
    client: Client,
    url: String,
}

impl GraphouseFinder {
    /// Create a new builder for configuring the finder.
    pub fn builder() -> GraphouseFinderBuilder {
        GraphouseFinderBuilder::default()
    }

    /// Create a finder from a configuration section.
    pub fn from_config(config: &GraphouseConfig) -> Result<Self, FinderError> {
        Self::builder().url(&config.url).build()
    }

    /// Base URL of the backend this finder queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Resolve a wildcard metric pattern into branch and leaf nodes.
    ///
    /// Issues a single `GET {url}/search` call and classifies the returned
    /// newline-separated names: a trailing `.` marks a branch (the
    /// separator is stripped), anything else non-empty is a leaf wired to
    /// a [`GraphouseReader`] for that exact path. Nodes come back lazily
    /// in backend order; nothing is deduplicated, sorted or cached.
    pub fn find_nodes(&self, pattern: &str) -> Result<Nodes, FinderError> {
        let url = format!("{}/search", self.url);
        debug!(url = url.as_str(), pattern, "graphouse search query");

        let response = self
            .client
            .get(&url)
            .query(&[("query", pattern)])
            .send()?
            .error_for_status()?;
        let body = response.text()?;

        Ok(Nodes::from_body(body, self.url.clone(), self.client.clone()))
    }

    /// Fetch series for several metric paths with one backend round trip.
    ///
    /// The returned [`MetricData`] has an entry for every requested path,
    /// empty when the backend had no data for it, and the window of the
    /// first path the backend knew about.
    pub fn fetch_multi<S: AsRef<str>>(
        &self,
        paths: &[S],
        start: i64,
        end: i64,
    ) -> Result<MetricData, FinderError> {
        data::load_data(&self.client, &self.url, paths, start, end, data::DEFAULT_REQKEY)
    }

    /// Like [`fetch_multi`](Self::fetch_multi), tagging the backend request
    /// with a caller-chosen tracing key.
    pub fn fetch_multi_with_key<S: AsRef<str>>(
        &self,
        paths: &[S],
        start: i64,
        end: i64,
        reqkey: &str,
    ) -> Result<MetricData, FinderError> {
        data::load_data(&self.client, &self.url, paths, start, end, reqkey)
    }
}

/// Builder for [`GraphouseFinder`].
#[derive(Debug, Default)]
pub struct GraphouseFinderBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
}

impl GraphouseFinderBuilder {
    /// Set the backend base URL (default: `http://localhost:2005`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the request timeout of the underlying HTTP client (default: 10
    /// seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the finder, validating the configured URL.
    pub fn build(self) -> Result<GraphouseFinder, FinderError> {
        let url = self.url.unwrap_or_else(|| DEFAULT_URL.to_string());
        reqwest::Url::parse(&url)
            .map_err(|err| FinderError::InvalidUrl(format!("{url}: {err}")))?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .expect("Failed to build HTTP client");

        Ok(GraphouseFinder { client, url })
    }
}

/// A node resolved from a metric-name pattern.
#[derive(Debug, Clone)]
pub enum Node {
    /// A namespace prefix with children but no data of its own.
    Branch(String),

    /// A concrete metric path with an attached reader.
    Leaf(LeafNode),
}

impl Node {
    /// The metric path or namespace prefix of this node.
    pub fn path(&self) -> &str {
        match self {
            Node::Branch(path) => path,
            Node::Leaf(leaf) => leaf.path(),
        }
    }

    /// Whether this node is a queryable leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

/// A resolved, queryable metric path bundled with its reader.
#[derive(Debug, Clone)]
pub struct LeafNode {
    path: String,
    reader: GraphouseReader,
}

impl LeafNode {
    fn new(path: String, reader: GraphouseReader) -> Self {
        Self { path, reader }
    }

    /// The metric path of this leaf.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reader bound to this leaf's exact path.
    pub fn reader(&self) -> &GraphouseReader {
        &self.reader
    }

    /// Take the reader out of the node.
    pub fn into_reader(self) -> GraphouseReader {
        self.reader
    }
}

/// Lazy node sequence produced by [`GraphouseFinder::find_nodes`].
///
/// Yields nodes in the order the backend returned them, skipping empty
/// lines.
#[derive(Debug)]
pub struct Nodes {
    lines: std::vec::IntoIter<String>,
    url: String,
    client: Client,
}

impl Nodes {
    fn from_body(body: String, url: String, client: Client) -> Self {
        let lines: Vec<String> = body.split('\n').map(str::to_string).collect();
        Self {
            lines: lines.into_iter(),
            url,
            client,
        }
    }
}

impl Iterator for Nodes {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        loop {
            let line = self.lines.next()?;
            if line.is_empty() {
                continue;
            }
            let node = match line.strip_suffix('.') {
                Some(prefix) => Node::Branch(prefix.to_string()),
                None => {
                    let reader =
                        GraphouseReader::new(line.clone(), self.url.clone(), self.client.clone());
                    Node::Leaf(LeafNode::new(line, reader))
                }
            };
            return Some(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::serve_once;

    fn nodes_from(body: &str) -> Vec<Node> {
        Nodes::from_body(body.to_string(), DEFAULT_URL.to_string(), Client::new()).collect()
    }

    #[test]
    fn test_builder_defaults() {
        let finder = GraphouseFinder::builder().build().unwrap();
        assert_eq!(finder.url(), "http://localhost:2005");
    }

    #[test]
    fn test_builder_custom_url() {
        let finder = GraphouseFinder::builder()
            .url("http://graphouse.local:2005")
            .build()
            .unwrap();
        assert_eq!(finder.url(), "http://graphouse.local:2005");
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let err = GraphouseFinder::builder().url("not a url").build().unwrap_err();
        assert!(matches!(err, FinderError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config() {
        let config = GraphouseConfig::default();
        let finder = GraphouseFinder::from_config(&config).unwrap();
        assert_eq!(finder.url(), config.url);
    }

    #[test]
    fn test_nodes_classification() {
        let nodes = nodes_from("a.b.c\na.b.d.\n\n");

        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_leaf());
        assert_eq!(nodes[0].path(), "a.b.c");
        assert!(!nodes[1].is_leaf());
        assert_eq!(nodes[1].path(), "a.b.d");
    }

    #[test]
    fn test_nodes_skip_empty_lines() {
        assert!(nodes_from("").is_empty());
        assert!(nodes_from("\n\n\n").is_empty());
    }

    #[test]
    fn test_nodes_preserve_backend_order() {
        let nodes = nodes_from("z.\na.\nz.\n");
        let paths: Vec<&str> = nodes.iter().map(Node::path).collect();
        assert_eq!(paths, ["z", "a", "z"]);
    }

    #[test]
    fn test_leaf_reader_bound_to_path() {
        let nodes = nodes_from("servers.web1.cpu.user");
        match &nodes[0] {
            Node::Leaf(leaf) => assert_eq!(leaf.reader().path(), "servers.web1.cpu.user"),
            Node::Branch(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn test_find_nodes_round_trip() {
        let url = serve_once("200 OK", "a.b.c\na.b.d.\n\n");
        let finder = GraphouseFinder::builder().url(url).build().unwrap();

        let nodes: Vec<Node> = finder.find_nodes("a.b.*").unwrap().collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].path(), "a.b.c");
        assert!(nodes[0].is_leaf());
        assert_eq!(nodes[1].path(), "a.b.d");
        assert!(!nodes[1].is_leaf());
    }

    #[test]
    fn test_find_nodes_backend_error() {
        let url = serve_once("500 Internal Server Error", "");
        let finder = GraphouseFinder::builder().url(url).build().unwrap();

        let err = finder.find_nodes("a.b.*").unwrap_err();
        assert!(matches!(err, FinderError::BackendUnavailable(_)));
    }
}
