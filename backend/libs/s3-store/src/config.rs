//! S3 configuration for the object storage wrapper
use std::fmt;

#[derive(Clone)]
pub struct S3Config {
    /// AWS access key id; storage is disabled when absent
    pub access_key_id: Option<String>,
    /// AWS secret access key; storage is disabled when absent
    pub secret_access_key: Option<String>,
    /// AWS region
    pub region: String,
    /// S3 bucket name
    pub bucket: String,
    /// Custom endpoint override (MinIO / LocalStack)
    pub endpoint: Option<String>,
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key_id", &self.access_key_id.as_deref().map(|_| "[REDACTED]"))
            .field("secret_access_key", &self.secret_access_key.as_deref().map(|_| "[REDACTED]"))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl S3Config {
    /// Load S3 configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok().filter(|v| !v.is_empty()),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "facture-uploads".to_string()),
            endpoint: std::env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Whether both credentials required to build a client are present
    pub fn has_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    /// Build the public URL of an object stored under `key`
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> S3Config {
        S3Config {
            access_key_id: Some("AKIATEST".to_string()),
            secret_access_key: Some("sekrit".to_string()),
            region: "eu-west-1".to_string(),
            bucket: "test-bucket".to_string(),
            endpoint: None,
        }
    }

    #[test]
    fn test_object_url_shape() {
        let config = test_config();
        assert_eq!(
            config.object_url("k1"),
            "https://test-bucket.s3.eu-west-1.amazonaws.com/k1"
        );
    }

    #[test]
    fn test_object_url_nested_key() {
        let config = test_config();
        assert_eq!(
            config.object_url("invoices/2024/inv-42.pdf"),
            "https://test-bucket.s3.eu-west-1.amazonaws.com/invoices/2024/inv-42.pdf"
        );
    }

    #[test]
    fn test_has_credentials_requires_both() {
        let mut config = test_config();
        assert!(config.has_credentials());

        config.secret_access_key = None;
        assert!(!config.has_credentials());

        config.secret_access_key = Some("sekrit".to_string());
        config.access_key_id = None;
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = test_config();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sekrit"));
        assert!(!rendered.contains("AKIATEST"));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_defaults() {
        std::env::remove_var("AWS_ACCESS_KEY_ID");
        std::env::remove_var("AWS_SECRET_ACCESS_KEY");
        std::env::remove_var("AWS_REGION");
        std::env::remove_var("S3_BUCKET");
        std::env::remove_var("S3_ENDPOINT");

        let config = S3Config::from_env();
        assert!(!config.has_credentials());
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.bucket, "facture-uploads");
        assert!(config.endpoint.is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_empty_credentials_are_absent() {
        std::env::set_var("AWS_ACCESS_KEY_ID", "");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "");

        let config = S3Config::from_env();
        assert!(!config.has_credentials());

        std::env::remove_var("AWS_ACCESS_KEY_ID");
        std::env::remove_var("AWS_SECRET_ACCESS_KEY");
    }
}
