use serde::{Deserialize, Serialize};

/// Sites the assistant can open by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Site {
    YouTube,
    Google,
}

impl Site {
    pub fn url(&self) -> &'static str {
        match self {
            Site::YouTube => "https://www.youtube.com/",
            Site::Google => "https://www.google.com/",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Site::YouTube => "youtube",
            Site::Google => "google",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "youtube" => Some(Site::YouTube),
            "google" => Some(Site::Google),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for site in [Site::YouTube, Site::Google] {
            assert_eq!(Site::from_name(site.name()), Some(site));
        }
    }

    #[test]
    fn unknown_site_is_none() {
        assert_eq!(Site::from_name("myspace"), None);
    }
}
