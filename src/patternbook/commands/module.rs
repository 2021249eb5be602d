use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;

/// The module's private half. Nothing here is reachable from outside
/// except through `calc`.
mod calc {
    const BASE: i64 = 40;

    fn offset() -> i64 {
        2
    }

    pub fn calc() -> i64 {
        BASE + offset()
    }
}

pub use calc::calc;

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Module);
    let a_number = calc();
    result.add_message(CmdMessage::info(format!("calc() = {}", a_number)));
    result.exhibit("a_number", &a_number)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_function_is_the_whole_surface() {
        assert_eq!(calc(), 42);
    }
}
