/// What a transformation rule may look at for the current token.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The token as supplied by the caller, unstripped.
    pub word: &'a str,
    /// The previous token as supplied, if any.
    pub prev_word: Option<&'a str>,
    /// The previous token's final tag, after all rules ran on it.
    pub prev_tag: Option<&'a str>,
}

/// A named contextual rule. `apply` returns the replacement tag when the rule
/// fires and `None` when the current tag should stand.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&RuleContext<'_>, &str) -> Option<&'static str>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

pub trait LanguageRules: Send + Sync {
    /// Rules in the order they are evaluated for each token.
    fn rules(&self) -> &[Rule];

    /// Runs every rule over one token, each seeing the previous rule's result.
    fn apply_rules(&self, ctx: &RuleContext<'_>, tag: &str) -> String {
        let mut current = tag.to_string();
        for rule in self.rules() {
            if let Some(next) = (rule.apply)(ctx, &current) {
                if next != current {
                    tracing::trace!(
                        rule = rule.name,
                        word = ctx.word,
                        from = %current,
                        to = next,
                        "rule fired"
                    );
                }
                current = next.to_string();
            }
        }
        current
    }
}

pub mod english;
