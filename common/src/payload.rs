//! QRペイロードの組み立て
//!
//! URLのスキーム補完とvCardテキストの生成。どちらも結果を
//! そのままテキストエンコードに渡す。

/// URLにスキームがなければ `https://` を補完する
pub fn ensure_url_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// 連絡先をvCard 3.0形式のテキストに変換する
pub fn build_vcard(name: &str, phone: &str, email: &str) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL:{}\nEMAIL:{}\nEND:VCARD",
        name, phone, email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_scheme_gets_https() {
        assert_eq!(ensure_url_scheme("example.com"), "https://example.com");
    }

    #[test]
    fn test_url_with_scheme_is_unchanged() {
        assert_eq!(ensure_url_scheme("http://example.com"), "http://example.com");
        assert_eq!(
            ensure_url_scheme("https://example.com/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_vcard_has_fixed_shape() {
        let vcard = build_vcard("Taro Yamada", "090-0000-0000", "taro@example.com");
        let lines: Vec<&str> = vcard.lines().collect();

        assert_eq!(lines[0], "BEGIN:VCARD");
        assert_eq!(lines[1], "VERSION:3.0");
        assert_eq!(lines[2], "FN:Taro Yamada");
        assert_eq!(lines[3], "TEL:090-0000-0000");
        assert_eq!(lines[4], "EMAIL:taro@example.com");
        assert_eq!(lines[5], "END:VCARD");
    }
}
