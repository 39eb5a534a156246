use serde::{Deserialize, Serialize};

/// The five institutions the gallery groups charts by.
///
/// The affiliation strings in `author_info.json` are a closed set; anything
/// else is a load error rather than a silently dropped chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum University {
    Cambridge,
    Edinburgh,
    Oxford,
    #[serde(rename = "UCL")]
    Ucl,
    Warwick,
}

impl University {
    /// All universities, in gallery band order.
    pub const ALL: [University; 5] = [
        University::Cambridge,
        University::Edinburgh,
        University::Oxford,
        University::Ucl,
        University::Warwick,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Cambridge" => Some(Self::Cambridge),
            "Edinburgh" => Some(Self::Edinburgh),
            "Oxford" => Some(Self::Oxford),
            "UCL" => Some(Self::Ucl),
            "Warwick" => Some(Self::Warwick),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cambridge => "Cambridge",
            Self::Edinburgh => "Edinburgh",
            Self::Oxford => "Oxford",
            Self::Ucl => "UCL",
            Self::Warwick => "Warwick",
        }
    }

    /// Initial letter used to form placement slot ids (`C1`, `U3`, ...).
    pub fn initial(self) -> char {
        match self {
            Self::Cambridge => 'C',
            Self::Edinburgh => 'E',
            Self::Oxford => 'O',
            Self::Ucl => 'U',
            Self::Warwick => 'W',
        }
    }
}

impl std::fmt::Display for University {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
