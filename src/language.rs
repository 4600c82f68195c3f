use serde::{Deserialize, Serialize};

use crate::languages::{LanguageRules, english::English};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn rules(&self) -> &'static dyn LanguageRules {
        match self {
            Language::English => &English,
        }
    }
}
