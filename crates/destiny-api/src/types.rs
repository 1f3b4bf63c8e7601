//! Shared parameter types: locales, content kinds and API enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Manifest locale published by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "es-mx")]
    SpanishMexico,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "pt-br")]
    PortugueseBrazil,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh-cht")]
    ChineseTraditional,
    #[serde(rename = "zh-chs")]
    ChineseSimplified,
}

impl Locale {
    pub const ALL: [Self; 13] = [
        Self::English,
        Self::French,
        Self::Spanish,
        Self::SpanishMexico,
        Self::German,
        Self::Italian,
        Self::Japanese,
        Self::PortugueseBrazil,
        Self::Russian,
        Self::Polish,
        Self::Korean,
        Self::ChineseTraditional,
        Self::ChineseSimplified,
    ];

    /// Locale code as used in manifest metadata keys
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::SpanishMexico => "es-mx",
            Self::German => "de",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::PortugueseBrazil => "pt-br",
            Self::Russian => "ru",
            Self::Polish => "pl",
            Self::Korean => "ko",
            Self::ChineseTraditional => "zh-cht",
            Self::ChineseSimplified => "zh-chs",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.code() == lower)
            .ok_or_else(|| Error::invalid_request(format!("unsupported locale: {s}")))
    }
}

/// Which manifest content file to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    /// Zip container holding one SQLite database
    #[default]
    MobileWorldContent,
    /// Uncompressed JSON content
    JsonWorldContent,
}

impl ContentKind {
    /// Whether the downloaded file needs unpacking
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::MobileWorldContent)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MobileWorldContent => write!(f, "mobileWorldContent"),
            Self::JsonWorldContent => write!(f, "jsonWorldContent"),
        }
    }
}

/// Membership platform. Serialized as its integer value in paths and bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BungieMembershipType {
    None = 0,
    TigerXbox = 1,
    TigerPsn = 2,
    TigerSteam = 3,
    TigerBlizzard = 4,
    TigerStadia = 5,
    TigerEgs = 6,
    TigerDemon = 10,
    BungieNext = 254,
    All = -1,
}

impl BungieMembershipType {
    pub const fn value(self) -> i32 {
        self as i32
    }

    pub const fn from_value(value: i32) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::TigerXbox,
            2 => Self::TigerPsn,
            3 => Self::TigerSteam,
            4 => Self::TigerBlizzard,
            5 => Self::TigerStadia,
            6 => Self::TigerEgs,
            10 => Self::TigerDemon,
            254 => Self::BungieNext,
            -1 => Self::All,
            _ => return None,
        })
    }
}

impl fmt::Display for BungieMembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for BungieMembershipType {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_i32(self.value())
    }
}

/// Profile/character component selector for `components=` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DestinyComponentType {
    None = 0,
    Profiles = 100,
    VendorReceipts = 101,
    ProfileInventories = 102,
    ProfileCurrencies = 103,
    ProfileProgression = 104,
    PlatformSilver = 105,
    Characters = 200,
    CharacterInventories = 201,
    CharacterProgressions = 202,
    CharacterRenderData = 203,
    CharacterActivities = 204,
    CharacterEquipment = 205,
    CharacterLoadouts = 206,
    ItemInstances = 300,
    ItemObjectives = 301,
    ItemPerks = 302,
    ItemRenderData = 303,
    ItemStats = 304,
    ItemSockets = 305,
    ItemTalentGrids = 306,
    ItemCommonData = 307,
    ItemPlugStates = 308,
    ItemPlugObjectives = 309,
    ItemReusablePlugs = 310,
    Vendors = 400,
    VendorCategories = 401,
    VendorSales = 402,
    Kiosks = 500,
    CurrencyLookups = 600,
    PresentationNodes = 700,
    Collectibles = 800,
    Records = 900,
    Transitory = 1000,
    Metrics = 1100,
    StringVariables = 1200,
    Craftables = 1300,
    SocialCommendations = 1400,
}

impl DestinyComponentType {
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for DestinyComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
