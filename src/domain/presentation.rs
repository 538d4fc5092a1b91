//! Presentation parameters steering the generated journal entry.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Voice of the journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    Fun,
    Serious,
    #[default]
    Neutral,
    Poetic,
    Technical,
    Cringe,
}

impl Tone {
    pub const ALL: [Tone; 6] =
        [Tone::Fun, Tone::Serious, Tone::Neutral, Tone::Poetic, Tone::Technical, Tone::Cringe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Fun => "fun",
            Tone::Serious => "serious",
            Tone::Neutral => "neutral",
            Tone::Poetic => "poetic",
            Tone::Technical => "technical",
            Tone::Cringe => "cringe",
        }
    }
}

/// Subject the journal entry should dwell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Landmarks,
    Parks,
    BodiesOfWater,
    Distance,
    Time,
    Weather,
    Playgrounds,
    Restaurants,
    Colors,
}

impl Focus {
    pub const ALL: [Focus; 9] = [
        Focus::Landmarks,
        Focus::Parks,
        Focus::BodiesOfWater,
        Focus::Distance,
        Focus::Time,
        Focus::Weather,
        Focus::Playgrounds,
        Focus::Restaurants,
        Focus::Colors,
    ];

    /// Identifier accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Landmarks => "landmarks",
            Focus::Parks => "parks",
            Focus::BodiesOfWater => "bodies_of_water",
            Focus::Distance => "distance",
            Focus::Time => "time",
            Focus::Weather => "weather",
            Focus::Playgrounds => "playgrounds",
            Focus::Restaurants => "restaurants",
            Focus::Colors => "colors",
        }
    }

    /// Wording used inside prompts.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Focus::BodiesOfWater => "bodies of water",
            other => other.as_str(),
        }
    }
}

/// Target size of the journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Detailed => "detailed",
        }
    }
}

/// Tone, focus and length chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationParams {
    pub tone: Tone,
    pub focus: Focus,
    pub length: Length,
}

impl PresentationParams {
    pub fn new(tone: Tone, focus: Focus, length: Length) -> Self {
        Self { tone, focus, length }
    }
}

macro_rules! closed_set {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Every accepted identifier, in declaration order.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|value| value.as_str()).collect()
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.into_iter().find(|value| value.as_str() == s).ok_or_else(|| {
                    AppError::InvalidParameter {
                        kind: $kind,
                        value: s.to_string(),
                        allowed: Self::names().join(", "),
                    }
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set!(Tone, "tone");
closed_set!(Focus, "focus");
closed_set!(Length, "length");
