//! Schedule redirect handler
//!
//! Sends visitors to a WhatsApp conversation pre-filled with the
//! configured greeting, in place of an in-app booking flow.

use crate::config::SiteConfig;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the WhatsApp deep link for scheduling.
///
/// Both inputs come from configuration, so construction cannot fail;
/// the greeting is percent-encoded into the `text` parameter.
pub fn whatsapp_url(site: &SiteConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        site.whatsapp_number,
        urlencoding::encode(&site.whatsapp_message)
    )
}

/// Handle GET /schedule
pub fn redirect(site: &SiteConfig) -> Response<Full<Bytes>> {
    http::build_redirect_response(&whatsapp_url(site))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn default_site() -> SiteConfig {
        Config::load_from("no-such-config-file").unwrap().site
    }

    #[test]
    fn test_default_whatsapp_url() {
        assert_eq!(
            whatsapp_url(&default_site()),
            "https://wa.me/5511999999999?text=Ol%C3%A1%21%20Gostaria%20de%20agendar%20uma%20sess%C3%A3o%20de%20terapia."
        );
    }

    #[test]
    fn test_url_is_stable_across_calls() {
        let site = default_site();
        assert_eq!(whatsapp_url(&site), whatsapp_url(&site));
    }

    #[test]
    fn test_redirect_location() {
        let site = default_site();
        let resp = redirect(&site);
        assert_eq!(resp.status(), 302);
        let location = resp.headers().get("Location").unwrap().to_str().unwrap();
        assert_eq!(location, whatsapp_url(&site));
        assert!(!location.contains(' '));
    }

    #[test]
    fn test_custom_number_and_message() {
        let mut site = default_site();
        site.whatsapp_number = "5521888887777".to_string();
        site.whatsapp_message = "Oi, tudo bem?".to_string();
        assert_eq!(
            whatsapp_url(&site),
            "https://wa.me/5521888887777?text=Oi%2C%20tudo%20bem%3F"
        );
    }
}
