use super::{LanguageRules, Rule, RuleContext};

/// English transformation rules over Penn Treebank tags.
pub struct English;

impl LanguageRules for English {
    fn rules(&self) -> &[Rule] {
        &RULES
    }
}

pub static RULES: [Rule; 8] = [
    Rule {
        name: "determiner-verb-to-noun",
        apply: determiner_verb_to_noun,
    },
    Rule {
        name: "noun-to-number",
        apply: noun_to_number,
    },
    Rule {
        name: "noun-to-past-participle",
        apply: noun_to_past_participle,
    },
    Rule {
        name: "ly-to-adverb",
        apply: ly_to_adverb,
    },
    Rule {
        name: "al-to-adjective",
        apply: al_to_adjective,
    },
    Rule {
        name: "would-noun-to-verb",
        apply: would_noun_to_verb,
    },
    Rule {
        name: "noun-to-plural",
        apply: noun_to_plural,
    },
    Rule {
        name: "noun-to-gerund",
        apply: noun_to_gerund,
    },
];

/// DT followed by VBD, VBP or VB: the verb reading is wrong, make it NN.
pub fn determiner_verb_to_noun(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (ctx.prev_tag == Some("DT") && matches!(tag, "VBD" | "VBP" | "VB")).then_some("NN")
}

/// Nouns containing a '.' or reading as a number are cardinals.
pub fn noun_to_number(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (tag.starts_with('N') && (ctx.word.contains('.') || is_numeric(ctx.word))).then_some("CD")
}

pub fn noun_to_past_participle(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (tag.starts_with('N') && ctx.word.ends_with("ed")).then_some("VBN")
}

/// Applies whatever the current tag is.
pub fn ly_to_adverb(ctx: &RuleContext<'_>, _tag: &str) -> Option<&'static str> {
    ctx.word.ends_with("ly").then_some("RB")
}

pub fn al_to_adjective(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (tag.starts_with("NN") && ctx.word.ends_with("al")).then_some("JJ")
}

pub fn would_noun_to_verb(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (ctx.prev_word == Some("would") && tag.starts_with("NN")).then_some("VB")
}

/// Only a bare NN is pluralized; NNP and friends are left alone.
pub fn noun_to_plural(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (tag == "NN" && ctx.word.ends_with('s')).then_some("NNS")
}

pub fn noun_to_gerund(ctx: &RuleContext<'_>, tag: &str) -> Option<&'static str> {
    (tag.starts_with("NN") && ctx.word.ends_with("ing")).then_some("VBG")
}

/// Float check for the number rule. Commas are read as digit grouping;
/// "NaN" and "Infinity" parse like any other float.
fn is_numeric(word: &str) -> bool {
    word.replace(',', "").parse::<f32>().is_ok()
}
