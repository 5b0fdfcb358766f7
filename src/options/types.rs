//! Enumerated option values for the QNN execution provider.
//!
//! Each enum is a closed set of variants bound to exactly one wire token.
//! Tokens are emitted verbatim into the configuration document; no variant
//! carries numeric meaning, even where the token happens to be made of digits.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A closed set of option values, each bound to one immutable token.
pub trait Choice: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Human-readable name of the option family, used in error messages.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Every token, in the same order as [`Choice::ALL`].
    const TOKENS: &'static [&'static str];

    /// The wire token for this variant.
    fn token(self) -> &'static str;

    /// Reverse lookup from a wire token.
    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.token() == token)
    }
}

/// HTP performance mode (`htp_performance_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PerformanceMode {
    Burst,
    Balanced,
    /// Backend default.
    #[default]
    Default,
    HighPerformance,
    HighPowerSaver,
    LowBalanced,
    ExtremePowerSaver,
    LowPowerSaver,
    PowerSaver,
    SustainedHighPerformance,
}

impl Choice for PerformanceMode {
    const NAME: &'static str = "performance mode";

    const ALL: &'static [Self] = &[
        Self::Burst,
        Self::Balanced,
        Self::Default,
        Self::HighPerformance,
        Self::HighPowerSaver,
        Self::LowBalanced,
        Self::ExtremePowerSaver,
        Self::LowPowerSaver,
        Self::PowerSaver,
        Self::SustainedHighPerformance,
    ];

    const TOKENS: &'static [&'static str] = &[
        "burst",
        "balanced",
        "default",
        "high_performance",
        "high_power_saver",
        "low_balanced",
        "extreme_power_saver",
        "low_power_saver",
        "power_saver",
        "sustained_high_performance",
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Burst => "burst",
            Self::Balanced => "balanced",
            Self::Default => "default",
            Self::HighPerformance => "high_performance",
            Self::HighPowerSaver => "high_power_saver",
            Self::LowBalanced => "low_balanced",
            Self::ExtremePowerSaver => "extreme_power_saver",
            Self::LowPowerSaver => "low_power_saver",
            Self::PowerSaver => "power_saver",
            Self::SustainedHighPerformance => "sustained_high_performance",
        }
    }
}

/// Profiling level (`profiling_level`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfilingLevel {
    /// Profiling disabled (default).
    #[default]
    Off,
    Basic,
    Detailed,
}

impl Choice for ProfilingLevel {
    const NAME: &'static str = "profiling level";
    const ALL: &'static [Self] = &[Self::Off, Self::Basic, Self::Detailed];
    const TOKENS: &'static [&'static str] = &["off", "basic", "detailed"];

    fn token(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Basic => "basic",
            Self::Detailed => "detailed",
        }
    }
}

/// QNN context priority (`qnn_context_priority`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContextPriority {
    Low,
    #[default]
    Normal,
    NormalHigh,
    High,
}

impl Choice for ContextPriority {
    const NAME: &'static str = "context priority";
    const ALL: &'static [Self] = &[Self::Low, Self::Normal, Self::NormalHigh, Self::High];
    const TOKENS: &'static [&'static str] = &["low", "normal", "normal_high", "high"];

    fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::NormalHigh => "normal_high",
            Self::High => "high",
        }
    }
}

/// HTP graph finalization optimization mode
/// (`htp_graph_finalization_optimization_mode`).
///
/// Higher modes trade longer graph preparation for a better optimized graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphFinalizationMode {
    /// `0`: backend default.
    #[default]
    Default,
    /// `1`: faster preparation, less optimal graph.
    FasterPrep,
    /// `2`: longer preparation, more optimal graph.
    OptimalGraph,
    /// `3`: longest preparation, most optimal graph.
    MostOptimal,
}

impl Choice for GraphFinalizationMode {
    const NAME: &'static str = "graph finalization mode";

    const ALL: &'static [Self] = &[
        Self::Default,
        Self::FasterPrep,
        Self::OptimalGraph,
        Self::MostOptimal,
    ];

    const TOKENS: &'static [&'static str] = &["0", "1", "2", "3"];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::FasterPrep => "1",
            Self::OptimalGraph => "2",
            Self::MostOptimal => "3",
        }
    }
}

/// Hexagon tensor processor architecture (`htp_arch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HtpArch {
    /// `0`: let the backend detect the architecture.
    #[default]
    Default,
    V68,
    V69,
    V73,
    V75,
    V79,
}

impl Choice for HtpArch {
    const NAME: &'static str = "HTP architecture";

    const ALL: &'static [Self] = &[
        Self::Default,
        Self::V68,
        Self::V69,
        Self::V73,
        Self::V75,
        Self::V79,
    ];

    const TOKENS: &'static [&'static str] = &["0", "68", "69", "73", "75", "79"];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::V68 => "68",
            Self::V69 => "69",
            Self::V73 => "73",
            Self::V75 => "75",
            Self::V79 => "79",
        }
    }
}

// Display, Serialize and Deserialize all go through the wire token.
macro_rules! token_impls {
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.token())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(TokenVisitor::<$ty>(PhantomData))
            }
        }
    )+};
}

token_impls!(
    PerformanceMode,
    ProfilingLevel,
    ContextPriority,
    GraphFinalizationMode,
    HtpArch,
);

/// Accepts a token as a string, or as a bare integer for the digit-like
/// vocabularies (YAML reads `htp_arch: 73` as a number).
struct TokenVisitor<T>(PhantomData<T>);

impl<T: Choice> Visitor<'_> for TokenVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} (one of: {})", T::NAME, T::TOKENS.join(", "))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::from_token(value).ok_or_else(|| de::Error::unknown_variant(value, T::TOKENS))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        self.visit_str(&value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        self.visit_str(&value.to_string())
    }
}

/// Parse a choice from its token, for use as a clap `value_parser`.
pub fn parse_choice<T: Choice>(token: &str) -> std::result::Result<T, String> {
    T::from_token(token).ok_or_else(|| {
        format!(
            "invalid {} '{}' (expected one of: {})",
            T::NAME,
            token,
            T::TOKENS.join(", ")
        )
    })
}
