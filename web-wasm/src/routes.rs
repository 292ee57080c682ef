//! パスベースのページ振り分け

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Match,
    Generate,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/index.html" => Page::Landing,
            "/match" => Page::Match,
            "/generate" => Page::Generate,
            _ => Page::NotFound,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Landing | Page::NotFound => "/",
            Page::Match => "/match",
            Page::Generate => "/generate",
        }
    }
}

/// 現在のURLのパスとクエリ
pub fn current_location() -> (String, String) {
    web_sys::window()
        .map(|w| w.location())
        .map(|loc| {
            (
                loc.pathname().unwrap_or_default(),
                loc.search().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}
