use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

pub const TOKEN_PREFIX: &str = "tok_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub subject: String,
    pub value: String,
}

/// The single call callers see. Normalising, salting and digesting stay
/// behind it.
pub fn issue_token(subject: &str) -> Token {
    let subject = normalize(subject);
    let salt = Uuid::new_v4();
    Token {
        value: encode(digest(&subject, &salt), &salt),
        subject,
    }
}

fn normalize(subject: &str) -> String {
    subject.trim().to_lowercase()
}

fn digest(subject: &str, salt: &Uuid) -> u64 {
    let mut hasher = DefaultHasher::new();
    subject.hash(&mut hasher);
    salt.hash(&mut hasher);
    hasher.finish()
}

fn encode(digest: u64, salt: &Uuid) -> String {
    format!("{}{:016x}{}", TOKEN_PREFIX, digest, salt.simple())
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Facade);
    let token = issue_token("  Reader@Example.com ");
    result.add_message(CmdMessage::info(format!(
        "issued token for {}: {}",
        token.subject, token.value
    )));
    result.exhibit("token", &token)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_prefix_digest_and_salt() {
        let token = issue_token("ada");
        assert!(token.value.starts_with(TOKEN_PREFIX));
        assert_eq!(token.value.len(), TOKEN_PREFIX.len() + 16 + 32);
    }

    #[test]
    fn subject_is_normalized() {
        assert_eq!(issue_token("  Ada ").subject, "ada");
    }

    #[test]
    fn tokens_are_salted() {
        assert_ne!(issue_token("ada").value, issue_token("ada").value);
    }
}
