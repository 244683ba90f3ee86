// crates/domain/src/options.rs
use std::path::Path;

/// Column separator of the pair manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    const TAB_EXTENSIONS: &'static [&'static str] = &["tsv", "tab"];

    /// Tab for `.tsv`/`.tab` outputs, comma for everything else.
    pub fn from_path(path: &Path) -> Self {
        let is_tab = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| Self::TAB_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)));
        if is_tab { Self::Tab } else { Self::Comma }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}
