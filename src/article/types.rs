//! Article type definitions
//!
//! This module contains the core data structures for representing Usenet articles.

use std::collections::HashMap;
use std::fmt::Write;

use crate::{NntpError, Result};

/// Netnews article structure (RFC 5536)
///
/// An article consists of headers and a body, separated by a blank line.
/// Articles must conform to RFC 5536 and include all required headers.
///
/// # Required Headers (RFC 5536 Section 3.1)
///
/// - Date: When the article was created
/// - From: Author's identity
/// - Message-ID: Unique identifier
/// - Newsgroups: Target newsgroups (comma-separated)
/// - Path: Transit path (managed by servers)
/// - Subject: Article subject line
///
/// # Examples
///
/// ```
/// use nntp_rs::article::{Article, Headers};
/// use std::collections::HashMap;
///
/// let headers = Headers {
///     date: "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
///     from: "user@example.com".to_string(),
///     message_id: "<abc123@example.com>".to_string(),
///     newsgroups: vec!["comp.lang.rust".to_string()],
///     path: "news.example.com!not-for-mail".to_string(),
///     subject: "Test Article".to_string(),
///     organization: None,
///     keywords: None,
///     lines: None,
///     user_agent: None,
///     extra: HashMap::new(),
/// };
///
/// // In practice, use ArticleBuilder to create articles
/// use nntp_rs::article::ArticleBuilder;
///
/// let article = ArticleBuilder::new()
///     .subject("Test Article")
///     .newsgroups(vec!["comp.lang.rust"])
///     .from("user@example.com")
///     .body("This is the article body.")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Article {
    /// Article headers
    pub headers: Headers,
    /// Article body (after blank line separator)
    pub body: String,
    /// Original raw article text for round-trip preservation
    pub(crate) raw: Option<String>,
}

/// Netnews article headers (RFC 5536)
///
/// Covers the headers this harness emits on probe articles and reads back
/// from the subject server; everything else RFC 5536 defines is preserved
/// verbatim in `extra` rather than given a dedicated field.
#[derive(Debug, Clone)]
pub struct Headers {
    // Required headers (RFC 5536 Section 3.1)
    /// Date when article was created (RFC 5536 Section 3.1.1)
    /// Format: RFC 5322 date-time (e.g., "Mon, 20 Jan 2025 12:00:00 +0000")
    pub date: String,

    /// Author's identity (RFC 5536 Section 3.1.2)
    /// Format: RFC 5322 mailbox (e.g., "John Doe <user@example.com>")
    pub from: String,

    /// Unique article identifier (RFC 5536 Section 3.1.3)
    /// Format: "<local-part@domain>" (e.g., "<abc123@example.com>")
    pub message_id: String,

    /// Target newsgroups, comma-separated (RFC 5536 Section 3.1.4)
    /// Example: ["comp.lang.rust", "comp.lang.c"]
    pub newsgroups: Vec<String>,

    /// Transit path through servers (RFC 5536 Section 3.1.5)
    /// Format: "server1!server2!not-for-mail"
    /// Managed by news servers, typically not set by clients
    pub path: String,

    /// Article subject line (RFC 5536 Section 3.1.6)
    pub subject: String,

    // Optional headers (RFC 5536 Section 3.2)
    /// Poster's organization (RFC 5536 Section 3.2.10)
    pub organization: Option<String>,

    /// Article keywords (RFC 5536 Section 3.2.8)
    /// Format: Comma-separated list
    pub keywords: Option<String>,

    /// Number of lines in body (RFC 5536 Section 3.2.9)
    pub lines: Option<u32>,

    /// Client software identification (RFC 5536 Section 3.2.16)
    pub user_agent: Option<String>,

    /// Additional non-standard headers
    /// Includes X-* headers and other extensions
    pub extra: HashMap<String, String>,
}

impl Article {
    /// Create a new article with the given headers and body
    pub fn new(headers: Headers, body: String) -> Self {
        Self {
            headers,
            body,
            raw: None,
        }
    }

    /// Get the raw article text if available
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Check if this article has MIME content (RFC 5536 Section 4)
    ///
    /// Returns `true` if the article contains a Content-Type header in its
    /// extra headers, indicating that the body uses MIME formatting.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::{Article, Headers};
    /// use std::collections::HashMap;
    ///
    /// let mut headers = Headers::new(
    ///     "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     "user@example.com".to_string(),
    ///     "<msg123@example.com>".to_string(),
    ///     vec!["comp.lang.rust".to_string()],
    ///     "news.example.com!not-for-mail".to_string(),
    ///     "Test Article".to_string(),
    /// );
    /// headers.extra.insert("Content-Type".to_string(), "text/plain; charset=utf-8".to_string());
    ///
    /// let article = Article::new(headers, "Article body".to_string());
    /// assert!(article.is_mime());
    /// ```
    pub fn is_mime(&self) -> bool {
        self.headers.extra.contains_key("Content-Type")
    }

    /// Get the Content-Type header value (RFC 5536 Section 4)
    ///
    /// Returns the Content-Type header if present, or `None` if this is not
    /// a MIME article. The Content-Type header specifies the media type and
    /// optional parameters like charset.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::{Article, Headers};
    /// use std::collections::HashMap;
    ///
    /// let mut headers = Headers::new(
    ///     "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     "user@example.com".to_string(),
    ///     "<msg123@example.com>".to_string(),
    ///     vec!["comp.lang.rust".to_string()],
    ///     "news.example.com!not-for-mail".to_string(),
    ///     "Test Article".to_string(),
    /// );
    /// headers.extra.insert("Content-Type".to_string(), "text/plain; charset=utf-8".to_string());
    ///
    /// let article = Article::new(headers, "Article body".to_string());
    /// assert_eq!(article.content_type(), Some("text/plain; charset=utf-8"));
    /// ```
    pub fn content_type(&self) -> Option<&str> {
        self.headers.extra.get("Content-Type").map(|s| s.as_str())
    }

    /// Check if this article is a multipart MIME message (RFC 5536 Section 4)
    ///
    /// Returns `true` if the Content-Type header starts with "multipart/",
    /// indicating that the body contains multiple parts separated by a boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::{Article, Headers};
    /// use std::collections::HashMap;
    ///
    /// let mut headers = Headers::new(
    ///     "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     "user@example.com".to_string(),
    ///     "<msg123@example.com>".to_string(),
    ///     vec!["comp.lang.rust".to_string()],
    ///     "news.example.com!not-for-mail".to_string(),
    ///     "Test Article".to_string(),
    /// );
    /// headers.extra.insert(
    ///     "Content-Type".to_string(),
    ///     "multipart/mixed; boundary=\"boundary123\"".to_string()
    /// );
    ///
    /// let article = Article::new(headers, "Article body".to_string());
    /// assert!(article.is_multipart());
    /// ```
    pub fn is_multipart(&self) -> bool {
        self.content_type()
            .map(|ct| ct.trim().to_lowercase().starts_with("multipart/"))
            .unwrap_or(false)
    }

    /// Extract the charset parameter from the Content-Type header (RFC 5536 Section 4)
    ///
    /// Returns the charset parameter value if present in the Content-Type header.
    /// Common values include "utf-8", "iso-8859-1", "windows-1252", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::{Article, Headers};
    /// use std::collections::HashMap;
    ///
    /// let mut headers = Headers::new(
    ///     "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     "user@example.com".to_string(),
    ///     "<msg123@example.com>".to_string(),
    ///     vec!["comp.lang.rust".to_string()],
    ///     "news.example.com!not-for-mail".to_string(),
    ///     "Test Article".to_string(),
    /// );
    /// headers.extra.insert(
    ///     "Content-Type".to_string(),
    ///     "text/plain; charset=utf-8".to_string()
    /// );
    ///
    /// let article = Article::new(headers, "Article body".to_string());
    /// assert_eq!(article.charset(), Some("utf-8"));
    /// ```
    pub fn charset(&self) -> Option<&str> {
        let content_type = self.content_type()?;

        // Look for charset parameter in Content-Type
        // Format: "text/plain; charset=utf-8" or "text/plain; charset=\"utf-8\""
        for param in content_type.split(';') {
            let param = param.trim();

            // Handle "charset=value" or "charset = value" with optional whitespace
            if let Some(eq_pos) = param.find('=') {
                let key = param[..eq_pos].trim();
                if key.eq_ignore_ascii_case("charset") {
                    let value = param[eq_pos + 1..].trim();
                    // Remove quotes if present
                    return Some(value.trim_matches('"').trim_matches('\''));
                }
            }
        }

        None
    }

    /// Header lines in wire order, unterminated and unstuffed.
    ///
    /// Used by the client session to build the block handed to
    /// [`crate::codec::LineCodec::send_block`], which applies CRLF and
    /// dot-stuffing itself — unlike [`Article::serialize_for_posting`],
    /// which bakes both in for direct one-shot use.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(7 + self.headers.extra.len());
        lines.push(format!("Date: {}", self.headers.date));
        lines.push(format!("From: {}", self.headers.from));
        lines.push(format!("Message-ID: {}", self.headers.message_id));
        lines.push(format!("Newsgroups: {}", self.headers.newsgroups.join(",")));
        lines.push(format!("Path: {}", self.headers.path));
        lines.push(format!("Subject: {}", self.headers.subject));

        if let Some(ref organization) = self.headers.organization {
            lines.push(format!("Organization: {organization}"));
        }
        if let Some(ref keywords) = self.headers.keywords {
            lines.push(format!("Keywords: {keywords}"));
        }
        if let Some(ref user_agent) = self.headers.user_agent {
            lines.push(format!("User-Agent: {user_agent}"));
        }
        for (name, value) in &self.headers.extra {
            lines.push(format!("{name}: {value}"));
        }
        lines
    }

    /// Serialize the article for posting with CRLF line endings and dot-stuffing
    ///
    /// Converts the article to the wire format required by NNTP POST/IHAVE:
    /// - CRLF line endings (\r\n)
    /// - Dot-stuffing: lines starting with '.' are prefixed with '.'
    /// - Headers appear first, followed by blank line, then body
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::ArticleBuilder;
    ///
    /// let article = ArticleBuilder::new()
    ///     .from("user@example.com")
    ///     .subject("Test")
    ///     .newsgroups(vec!["test.group"])
    ///     .body("Hello world")
    ///     .build()
    ///     .unwrap();
    ///
    /// let wire_format = article.serialize_for_posting().unwrap();
    /// assert!(wire_format.contains("\r\n"));
    /// ```
    pub fn serialize_for_posting(&self) -> Result<String> {
        // Pre-allocate capacity: typical headers are ~1KB, body varies
        let mut result = String::with_capacity(1024 + self.body.len());

        // Write required headers
        // SAFETY: write! to String is infallible (OOM aside)
        #[expect(clippy::unwrap_used)]
        {
            write!(result, "Date: {}\r\n", self.headers.date).unwrap();
            write!(result, "From: {}\r\n", self.headers.from).unwrap();
            write!(result, "Message-ID: {}\r\n", self.headers.message_id).unwrap();
            write!(
                result,
                "Newsgroups: {}\r\n",
                self.headers.newsgroups.join(",")
            )
            .unwrap();
            write!(result, "Path: {}\r\n", self.headers.path).unwrap();
            write!(result, "Subject: {}\r\n", self.headers.subject).unwrap();

            // Write optional headers
            if let Some(ref organization) = self.headers.organization {
                write!(result, "Organization: {}\r\n", organization).unwrap();
            }
            if let Some(ref keywords) = self.headers.keywords {
                write!(result, "Keywords: {}\r\n", keywords).unwrap();
            }
            if let Some(ref user_agent) = self.headers.user_agent {
                write!(result, "User-Agent: {}\r\n", user_agent).unwrap();
            }

            // Write extra headers
            for (name, value) in &self.headers.extra {
                write!(result, "{}: {}\r\n", name, value).unwrap();
            }
        }

        // Blank line separates headers from body
        result.push_str("\r\n");

        // Write body with dot-stuffing
        for line in self.body.lines() {
            if line.starts_with('.') {
                result.push('.');
            }
            result.push_str(line);
            result.push_str("\r\n");
        }

        Ok(result)
    }
}

impl Headers {
    /// Create a new Headers struct with required fields
    ///
    /// # Arguments
    ///
    /// * `date` - RFC 5322 date-time string
    /// * `from` - Author mailbox
    /// * `message_id` - Unique message identifier
    /// * `newsgroups` - List of target newsgroups
    /// * `path` - Server transit path
    /// * `subject` - Article subject
    pub fn new(
        date: String,
        from: String,
        message_id: String,
        newsgroups: Vec<String>,
        path: String,
        subject: String,
    ) -> Self {
        Self {
            date,
            from,
            message_id,
            newsgroups,
            path,
            subject,
            organization: None,
            keywords: None,
            lines: None,
            user_agent: None,
            extra: HashMap::new(),
        }
    }

    /// Validates all header fields according to RFC 5536 specifications
    ///
    /// Performs comprehensive validation of all header fields:
    /// - Checks that required fields are non-empty
    /// - Validates Message-ID format
    /// - Validates newsgroup names
    /// - Parses and validates date format and constraints
    ///
    /// # Arguments
    ///
    /// * `config` - Validation configuration (controls date validation behavior)
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::Headers;
    /// use nntp_rs::validation::ValidationConfig;
    /// use std::collections::HashMap;
    ///
    /// let headers = Headers {
    ///     date: "Tue, 20 Jan 2026 12:00:00 +0000".to_string(),
    ///     from: "user@example.com".to_string(),
    ///     message_id: "<abc123@example.com>".to_string(),
    ///     newsgroups: vec!["comp.lang.rust".to_string()],
    ///     path: "news.example.com!not-for-mail".to_string(),
    ///     subject: "Test Article".to_string(),
    ///     organization: None,
    ///     keywords: None,
    ///     lines: None,
    ///     user_agent: None,
    ///     extra: HashMap::new(),
    /// };
    ///
    /// let config = ValidationConfig::default();
    /// headers.validate(&config).unwrap();
    /// ```
    pub fn validate(&self, config: &crate::validation::ValidationConfig) -> Result<()> {
        // Validate required fields are non-empty
        if self.date.trim().is_empty() {
            return Err(NntpError::InvalidResponse(
                "Date header cannot be empty".to_string(),
            ));
        }
        if self.from.trim().is_empty() {
            return Err(NntpError::InvalidResponse(
                "From header cannot be empty".to_string(),
            ));
        }
        if self.message_id.trim().is_empty() {
            return Err(NntpError::InvalidResponse(
                "Message-ID header cannot be empty".to_string(),
            ));
        }
        if self.newsgroups.is_empty() {
            return Err(NntpError::InvalidResponse(
                "Newsgroups header cannot be empty".to_string(),
            ));
        }
        if self.path.trim().is_empty() {
            return Err(NntpError::InvalidResponse(
                "Path header cannot be empty".to_string(),
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(NntpError::InvalidResponse(
                "Subject header cannot be empty".to_string(),
            ));
        }

        // Validate Message-ID format
        crate::validation::validate_message_id(&self.message_id)?;

        // Validate all newsgroup names
        for newsgroup in &self.newsgroups {
            crate::validation::validate_newsgroup_name(newsgroup)?;
        }

        // Parse and validate date
        let parsed_date = crate::validation::parse_date(&self.date)?;
        crate::validation::validate_date(&parsed_date, config)?;

        Ok(())
    }

    /// Parses the Path header into individual server components
    ///
    /// The Path header contains a "bang path" of servers that the article
    /// passed through, separated by '!' characters. Servers are listed in
    /// reverse chronological order (most recent first).
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::Headers;
    /// use std::collections::HashMap;
    ///
    /// let headers = Headers {
    ///     date: "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     from: "user@example.com".to_string(),
    ///     message_id: "<abc123@example.com>".to_string(),
    ///     newsgroups: vec!["comp.lang.rust".to_string()],
    ///     path: "news1.example.com!news2.example.net!not-for-mail".to_string(),
    ///     subject: "Test".to_string(),
    ///     organization: None,
    ///     keywords: None,
    ///     lines: None,
    ///     user_agent: None,
    ///     extra: HashMap::new(),
    /// };
    ///
    /// let path_components = headers.parse_path();
    /// assert_eq!(path_components, vec!["news1.example.com", "news2.example.net", "not-for-mail"]);
    /// ```
    pub fn parse_path(&self) -> Vec<String> {
        self.path
            .split('!')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    /// Returns the originating server from the Path header
    ///
    /// The originating server is the first component of the path,
    /// representing the most recent server to handle the article.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::Headers;
    /// use std::collections::HashMap;
    ///
    /// let headers = Headers {
    ///     date: "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     from: "user@example.com".to_string(),
    ///     message_id: "<abc123@example.com>".to_string(),
    ///     newsgroups: vec!["comp.lang.rust".to_string()],
    ///     path: "news1.example.com!news2.example.net!not-for-mail".to_string(),
    ///     subject: "Test".to_string(),
    ///     organization: None,
    ///     keywords: None,
    ///     lines: None,
    ///     user_agent: None,
    ///     extra: HashMap::new(),
    /// };
    ///
    /// assert_eq!(headers.originating_server(), Some("news1.example.com"));
    /// ```
    pub fn originating_server(&self) -> Option<&str> {
        self.path.split('!').next().filter(|s| !s.trim().is_empty())
    }

    /// Returns the number of servers in the Path header
    ///
    /// This represents the number of "hops" the article has made
    /// through the Usenet infrastructure.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_rs::article::Headers;
    /// use std::collections::HashMap;
    ///
    /// let headers = Headers {
    ///     date: "Mon, 20 Jan 2025 12:00:00 +0000".to_string(),
    ///     from: "user@example.com".to_string(),
    ///     message_id: "<abc123@example.com>".to_string(),
    ///     newsgroups: vec!["comp.lang.rust".to_string()],
    ///     path: "news1.example.com!news2.example.net!not-for-mail".to_string(),
    ///     subject: "Test".to_string(),
    ///     organization: None,
    ///     keywords: None,
    ///     lines: None,
    ///     user_agent: None,
    ///     extra: HashMap::new(),
    /// };
    ///
    /// assert_eq!(headers.path_length(), 3);
    /// ```
    pub fn path_length(&self) -> usize {
        self.parse_path().len()
    }
}
