use std::fmt;
use std::str::FromStr;

/// Reader group a simplification is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Audience {
    #[default]
    GeneralPublic,
    Students,
    Researchers,
    Professionals,
    Media,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::GeneralPublic,
        Audience::Students,
        Audience::Researchers,
        Audience::Professionals,
        Audience::Media,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::GeneralPublic => "general_public",
            Audience::Students => "students",
            Audience::Researchers => "researchers",
            Audience::Professionals => "professionals",
            Audience::Media => "media",
        }
    }

    /// Phrase embedded in the prompt after "for".
    pub fn prompt_phrase(&self) -> &'static str {
        match self {
            Audience::GeneralPublic => "the general public with no specialist background",
            Audience::Students => "students who are new to the topic",
            Audience::Researchers => "researchers from other fields who need the key findings",
            Audience::Professionals => "working professionals interested in practical impact",
            Audience::Media => "journalists who need an accurate, quotable summary",
        }
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "general_public" | "general" | "public" => Ok(Audience::GeneralPublic),
            "students" | "student" => Ok(Audience::Students),
            "researchers" | "researcher" => Ok(Audience::Researchers),
            "professionals" | "professional" => Ok(Audience::Professionals),
            "media" => Ok(Audience::Media),
            _ => Err(format!("Invalid audience: {}", s.trim())),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
