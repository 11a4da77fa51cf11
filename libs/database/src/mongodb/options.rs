use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};

/// Client settings applied to every connection attempt.
///
/// Built once per lifecycle and never mutated afterwards, so repeated
/// connects always negotiate the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSettings {
    /// Logical database name sent to the server
    pub db_name: String,
    /// Application name reported in server logs
    pub app_name: String,
    /// Stable API version to negotiate
    pub server_api_version: ServerApiVersion,
    /// Reject commands outside the declared API version
    pub strict: bool,
    /// Surface deprecated-command usage as errors
    pub deprecation_errors: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            db_name: "App DB".to_string(),
            app_name: "App API".to_string(),
            server_api_version: ServerApiVersion::V1,
            strict: true,
            deprecation_errors: true,
        }
    }
}

impl ClientSettings {
    /// Map these settings onto driver-level client options.
    pub fn apply(&self, options: &mut ClientOptions) {
        options.default_database = Some(self.db_name.clone());
        options.app_name = Some(self.app_name.clone());
        options.server_api = Some(
            ServerApi::builder()
                .version(self.server_api_version.clone())
                .strict(self.strict)
                .deprecation_errors(self.deprecation_errors)
                .build(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_negotiated_contract() {
        let settings = ClientSettings::default();
        assert_eq!(settings.db_name, "App DB");
        assert_eq!(settings.app_name, "App API");
        assert_eq!(settings.server_api_version, ServerApiVersion::V1);
        assert!(settings.strict);
        assert!(settings.deprecation_errors);
    }

    #[test]
    fn test_defaults_are_stable_across_constructions() {
        assert_eq!(ClientSettings::default(), ClientSettings::default());
    }

    #[tokio::test]
    async fn test_apply_sets_driver_options() {
        let mut options = ClientOptions::parse("mongodb://localhost:27017")
            .await
            .unwrap();

        ClientSettings::default().apply(&mut options);

        assert_eq!(options.default_database.as_deref(), Some("App DB"));
        assert_eq!(options.app_name.as_deref(), Some("App API"));

        let server_api = options.server_api.expect("server api should be set");
        assert_eq!(server_api.version, ServerApiVersion::V1);
        assert_eq!(server_api.strict, Some(true));
        assert_eq!(server_api.deprecation_errors, Some(true));
    }
}
