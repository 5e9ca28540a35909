use super::Fields;
use crate::config::{MESSAGING_DOMAIN, PRIMARY_PHONE};

/// A validated form, rendered for the messaging app.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transmission {
    pub text: String,
    pub url: String,
}

impl Transmission {
    /// Field values are embedded verbatim; only the finished text is
    /// URL-encoded.
    pub fn compose(fields: &Fields) -> Self {
        let text = format!(
            "🚨 *INCOMING TRANSMISSION* 🚨\n\
             \n\
             *Identity:* {}\n\
             *Frequency (Email):* {}\n\
             *Objective:* {}\n\
             \n\
             *Intel:*\n\
             {}",
            fields.name, fields.email, fields.subject, fields.message
        );
        let url = handoff_url(PRIMARY_PHONE, &text);
        Self { text, url }
    }
}

pub fn handoff_url(phone: &str, text: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        MESSAGING_DOMAIN,
        phone,
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peter() -> Fields {
        Fields {
            name: "Peter".into(),
            email: "peter@example.com".into(),
            subject: "Web & Reels".into(),
            message: "Line one\nLine two".into(),
        }
    }

    #[test]
    fn template_embeds_fields_verbatim() {
        let t = Transmission::compose(&peter());
        assert_eq!(
            t.text,
            "🚨 *INCOMING TRANSMISSION* 🚨\n\n*Identity:* Peter\n*Frequency (Email):* peter@example.com\n*Objective:* Web & Reels\n\n*Intel:*\nLine one\nLine two"
        );
    }

    #[test]
    fn url_targets_primary_number_with_encoded_text() {
        let t = Transmission::compose(&peter());
        assert!(t.url.starts_with("https://wa.me/919346577461?text="));
        let query = t.url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert_eq!(urlencoding::decode(query).unwrap(), t.text);
    }

    #[test]
    fn handoff_url_encodes_reserved_characters() {
        assert_eq!(
            handoff_url("123", "a b&c=d?"),
            "https://wa.me/123?text=a%20b%26c%3Dd%3F"
        );
    }
}
