//! Locale handling and translation string tables.
//!
//! The active locale is fixed per page load (it comes from the `lang`
//! query parameter), so components receive a `Locale` value instead of
//! consulting mutable global state.

/// A recognized UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ja,
}

/// Translation rows: key, English, Japanese.
const STRINGS: &[(&str, &str, &str)] = &[
    ("pageTitle", "Zome Scaffold", "Zomeスキャフォールド"),
    ("langName", "English", "日本語"),
    ("chooseLanguage", "Choose your language", "言語を選択してください"),
    ("appNameLabel", "App Name", "アプリ名"),
    ("appDescLabel", "App Description", "アプリの説明"),
    ("addZome", "Add Zome", "Zomeを追加"),
    ("deleteZome", "Delete Zome", "Zomeを削除"),
    ("zomeNameLabel", "Zome Name", "Zome名"),
    ("zomeDescLabel", "Zome Description", "Zomeの説明"),
    ("entriesHeader", "Entries", "エントリ"),
    ("addEntry", "Add Entry", "エントリを追加"),
    ("functionsHeader", "Functions", "関数"),
    ("addFunction", "Add Function", "関数を追加"),
    ("delete", "Delete", "削除"),
    ("nameCol", "Name", "名前"),
    ("dataFormatCol", "Data Format", "データ形式"),
    ("sharingCol", "Sharing", "共有"),
    ("createCol", "Create", "作成"),
    ("readCol", "Read", "読取"),
    ("updateCol", "Update", "更新"),
    ("deleteCol", "Delete", "削除"),
    ("callingTypeCol", "Calling Type", "呼び出し形式"),
    ("exposureCol", "Exposure", "公開範囲"),
    ("yamlHeader", "Generated YAML", "生成されたYAML"),
    ("toggleYaml", "Toggle YAML", "YAML表示切替"),
    ("downloadYaml", "Download YAML", "YAMLをダウンロード"),
    ("upload", "Upload", "アップロード"),
    ("newDocument", "Start Over", "最初からやり直す"),
    ("languages", "Languages", "言語"),
    ("about", "About", "このツールについて"),
    (
        "aboutText",
        "Interactive scaffold generator for zome configurations. \
         Your work is saved in this browser as you type.",
        "Zome構成のための対話型スキャフォールドジェネレーターです。\
         入力内容はこのブラウザに自動保存されます。",
    ),
];

impl Locale {
    /// Every recognized locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// The locale's query-parameter code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Parse a query-parameter code. `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    /// Translated string for a key. Unknown keys echo the key itself so
    /// a missing row shows up in the UI instead of panicking.
    pub fn text(self, key: &'static str) -> &'static str {
        match STRINGS.iter().find(|(k, _, _)| *k == key) {
            Some((_, en, ja)) => match self {
                Locale::En => en,
                Locale::Ja => ja,
            },
            None => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_has_both_translations() {
        for (key, en, ja) in STRINGS {
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!ja.is_empty(), "missing ja for {key}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, (key, _, _)) in STRINGS.iter().enumerate() {
            assert!(
                !STRINGS[i + 1..].iter().any(|(k, _, _)| k == key),
                "duplicate key {key}"
            );
        }
    }

    #[test]
    fn test_from_code_gates_recognized_locales() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ja"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("xx"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_page_title_is_translated() {
        let en = Locale::En.text("pageTitle");
        let ja = Locale::Ja.text("pageTitle");
        assert_eq!(en, "Zome Scaffold");
        assert_ne!(en, ja);
    }

    #[test]
    fn test_unknown_key_echoes() {
        assert_eq!(Locale::En.text("noSuchKey"), "noSuchKey");
    }
}
