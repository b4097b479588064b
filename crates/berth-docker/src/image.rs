use std::fmt;

const DEFAULT_TAG: &str = "latest";

/// Image reference split into the parts the pull API wants.
///
/// `nginx` → `nginx:latest`, `localhost:5000/app` → `localhost:5000/app:latest`,
/// `alpine@sha256:...` stays pinned to its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub repository: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl ImageReference {
    pub fn parse(reference: &str) -> Self {
        if let Some((repository, digest)) = reference.split_once('@') {
            return Self {
                repository: repository.to_string(),
                tag: None,
                digest: Some(digest.to_string()),
            };
        }

        let last_slash = reference.rfind('/');
        match reference.rfind(':') {
            Some(colon) if last_slash.is_none_or(|slash| colon > slash) => Self {
                repository: reference[..colon].to_string(),
                tag: Some(reference[colon + 1..].to_string()),
                digest: None,
            },
            _ => Self {
                repository: reference.to_string(),
                tag: None,
                digest: None,
            },
        }
    }

    /// Value for the pull API's `tag` parameter: the digest, the tag or `latest`.
    pub fn pull_tag(&self) -> &str {
        self.digest
            .as_deref()
            .or(self.tag.as_deref())
            .unwrap_or(DEFAULT_TAG)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.digest {
            Some(digest) => write!(f, "{}@{}", self.repository, digest),
            None => write!(f, "{}:{}", self.repository, self.pull_tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageReference;

    #[test]
    fn untagged_defaults_to_latest() {
        let r = ImageReference::parse("docker/dind");
        assert_eq!(r.repository, "docker/dind");
        assert_eq!(r.tag, None);
        assert_eq!(r.pull_tag(), "latest");
        assert_eq!(r.to_string(), "docker/dind:latest");
    }

    #[test]
    fn explicit_tag_is_kept() {
        let r = ImageReference::parse("nginx:1.27-alpine");
        assert_eq!(r.repository, "nginx");
        assert_eq!(r.pull_tag(), "1.27-alpine");
    }

    #[test]
    fn registry_port_is_not_a_tag() {
        let r = ImageReference::parse("localhost:5000/team/app");
        assert_eq!(r.repository, "localhost:5000/team/app");
        assert_eq!(r.pull_tag(), "latest");

        let r = ImageReference::parse("localhost:5000/team/app:v2");
        assert_eq!(r.repository, "localhost:5000/team/app");
        assert_eq!(r.pull_tag(), "v2");
    }

    #[test]
    fn digest_wins_over_tag() {
        let r = ImageReference::parse("alpine@sha256:abcd");
        assert_eq!(r.repository, "alpine");
        assert_eq!(r.pull_tag(), "sha256:abcd");
        assert_eq!(r.to_string(), "alpine@sha256:abcd");
    }
}
