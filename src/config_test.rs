use super::*;

#[test]
fn default_uses_local_api_and_crm_user_key() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.storage_key, "crm_user");
}

#[test]
fn from_base_url_trims_trailing_slashes() {
    let cfg = ClientConfig::from_base_url(Some("https://crm.example.test/api/"));
    assert_eq!(cfg.api_base_url, "https://crm.example.test/api");
}

#[test]
fn from_base_url_blank_falls_back_to_default() {
    let cfg = ClientConfig::from_base_url(Some("   "));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}
