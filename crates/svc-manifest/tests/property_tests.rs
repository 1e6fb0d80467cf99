use proptest::prelude::*;
use serde_json::json;
use svc_manifest::{ManifestLoader, RewriteContext};
use svc_test_utils::{TEST_CDN, TEST_NAME, TestProject};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_context_decides_url_prefix(
        port in 1024u16..65535,
        is_service in any::<bool>(),
        folder in "[a-z]{1,8}",
        page in "[a-z0-9_-]{1,12}\\.html",
    ) {
        let project = TestProject::empty();
        project.write_config(TEST_NAME, port, TEST_CDN, is_service);
        let config_path = format!("{folder}/app.json");
        project.write_manifest(
            &config_path,
            &json!({ "startup_app": { "url": format!("{TEST_CDN}/{page}") } }),
        );
        let loader = ManifestLoader::new(project.open());

        let debug = loader
            .load_manifest(&config_path, RewriteContext::Debug, "default", None)
            .unwrap();
        let deploy = loader
            .load_manifest(&config_path, RewriteContext::Deploy, "default", None)
            .unwrap();

        let prefix = if is_service {
            format!("http://localhost:{port}/{folder}")
        } else {
            format!("http://localhost:{port}")
        };
        let debug_url = format!("{prefix}/{page}");
        let deploy_url = format!("{TEST_CDN}/{page}");
        prop_assert_eq!(debug.startup_app.url(), Some(debug_url.as_str()));
        prop_assert_eq!(deploy.startup_app.url(), Some(deploy_url.as_str()));
    }
}
