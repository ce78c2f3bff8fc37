//! Content policy shown before the first upload

use anyhow::Result;

use crate::error::PolicyError;
use crate::prefs::{POLICY_SEEN, Preferences};

/// One upload rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyRule {
    /// Leading icon
    pub emoji: &'static str,
    /// The rule
    pub title: &'static str,
    /// Short explanation
    pub desc: &'static str,
}

/// Rules every upload must follow
pub const RULES: [PolicyRule; 6] = [
    PolicyRule {
        emoji: "⚠️",
        title: "No nudity or sexually explicit content.",
        desc: "Keep uploads appropriate for a wide audience.",
    },
    PolicyRule {
        emoji: "🚫",
        title: "No hate speech, harassment, or threats.",
        desc: "Respect other people and communities.",
    },
    PolicyRule {
        emoji: "📛",
        title: "Protect privacy: don't upload others' personal info or photos without consent.",
        desc: "If someone can be identified, ensure you have their permission.",
    },
    PolicyRule {
        emoji: "©️",
        title: "No copyrighted material unless you own the rights.",
        desc: "Only upload content you created or have permission to share.",
    },
    PolicyRule {
        emoji: "🔞",
        title: "No illegal content or instructions for wrongdoing.",
        desc: "We remove content that promotes or facilitates illegal activity.",
    },
    PolicyRule {
        emoji: "👍",
        title: "Be authentic and respectful.",
        desc: "No spams, scams, or misleading content.",
    },
];

/// Decides whether the policy must be shown and records acceptance
pub struct PolicyGate<'a> {
    prefs: &'a Preferences<'a>,
    auto_skip: bool,
}

impl<'a> PolicyGate<'a> {
    /// Create a gate; with `auto_skip` off the policy is always shown
    pub const fn new(prefs: &'a Preferences<'a>, auto_skip: bool) -> Self {
        Self { prefs, auto_skip }
    }

    /// Whether the user has to go through the policy before uploading
    pub fn should_show(&self) -> bool {
        if !self.auto_skip {
            return true;
        }
        match self.prefs.flag(POLICY_SEEN) {
            Ok(seen) => !seen,
            Err(e) => {
                tracing::warn!("Could not read policy flag: {e:#}");
                true
            }
        }
    }

    /// Accept the policy, remembering it when asked to
    pub fn accept(&self, agreed: bool, dont_show_again: bool) -> Result<(), PolicyError> {
        if !agreed {
            return Err(PolicyError::AgreementRequired);
        }
        if dont_show_again {
            self.prefs.set_flag(POLICY_SEEN)?;
        }
        Ok(())
    }

    /// Forget an earlier "don't show again"
    pub fn reset(&self) -> Result<()> {
        self.prefs.clear_flag(POLICY_SEEN)
    }
}

/// Rules formatted for the terminal, wrapped at `width`
pub fn render(width: usize) -> String {
    let mut out = String::from("Upload rules\n\n");
    for rule in &RULES {
        out.push_str(&format!("{} {}\n", rule.emoji, rule.title));
        for line in textwrap::wrap(rule.desc, width.saturating_sub(3).max(20)) {
            out.push_str(&format!("   {line}\n"));
        }
    }
    out
}
