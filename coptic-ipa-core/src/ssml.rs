//! SSML rendering for speech synthesizers

use crate::phonetic::PhoneticWord;

/// Render analyzed text as an SSML `<speak>` document.
///
/// Each word becomes a `<phoneme>` element whose `ph` attribute holds the
/// IPA with syllables separated by `.`; separators are emitted as text.
pub fn render_ssml(words: &[PhoneticWord], lang: Option<&str>) -> String {
    let mut out = String::from("<speak version=\"1.1\"");
    if let Some(lang) = lang {
        out.push_str(&format!(" xml:lang=\"{}\"", escape(lang)));
    }
    out.push('>');

    for word in words {
        if word.is_lexical() {
            out.push_str(&format!(
                "<phoneme alphabet=\"ipa\" ph=\"{}\">{}</phoneme>",
                escape(&word.ipa_syllabified(".")),
                escape(&word.source_text())
            ));
        } else {
            out.push_str(&escape(&word.source_text()));
        }
    }

    out.push_str("</speak>");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
